//! URL-style parameter store abstraction.

/// A string-keyed parameter store, like a URL query string.
///
/// Only full replacement is supported for writes, mirroring how a browser
/// router replaces the whole search string. Callers that want a partial
/// update must read, merge and write within one synchronous call.
pub trait ParamStore: Send {
    /// Value of `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// All parameters in store order.
    fn entries(&self) -> Vec<(String, String)>;

    /// Replace every parameter with `params`.
    fn replace_all(&mut self, params: Vec<(String, String)>);
}
