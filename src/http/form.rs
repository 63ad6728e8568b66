use std::collections::HashMap;

/// Decodes a URL-encoded form body into a flat key/value mapping.
///
/// Pairs are separated by `&` and split on `=`, with both key and value
/// percent-decoded. When a key repeats, the last occurrence wins. No
/// `Content-Type` check is performed; handlers that expect form data call
/// this on the raw body themselves, it is never invoked during routing.
///
/// # Examples
///
/// ```
/// use httpsrv::parse_body;
///
/// let params = parse_body("name=FirstName%20LastName&email=bsmth%40example.com");
/// assert_eq!(params["name"], "FirstName LastName");
/// assert_eq!(params["email"], "bsmth@example.com");
/// ```
pub fn parse_body(body: &str) -> HashMap<String, String> {
    form_urlencoded::parse(body.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
