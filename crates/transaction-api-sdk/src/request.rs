//! Diagnostic view of an incoming invocation request

use std::collections::BTreeMap;

/// Header the function host uses to correlate an invocation
pub const INVOCATION_ID_HEADER: &str = "X-Azure-Functions-InvocationId";

/// Request metadata logged for every `/transaction` call.
///
/// Nothing here is validated; missing headers are recorded as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    /// HTTP method (GET, POST, ...)
    pub method: String,

    /// Request target as received, path plus query
    pub url: String,

    /// Host header, or the URI authority when the header is absent
    pub host: String,

    /// Peer address when the server exposes it
    pub remote_addr: Option<String>,

    /// Value of [`INVOCATION_ID_HEADER`]
    pub invocation_id: String,

    /// Value of the User-Agent header
    pub user_agent: String,

    /// Query parameters; repeated keys keep every value in order
    pub query: BTreeMap<String, Vec<String>>,
}

impl RequestInfo {
    /// Decode a raw query string into a multimap.
    ///
    /// # Example
    /// ```
    /// use transaction_api_sdk::RequestInfo;
    ///
    /// let query = RequestInfo::parse_query(Some("tag=a&tag=b&q=x%20y"));
    /// assert_eq!(query["tag"], vec!["a", "b"]);
    /// assert_eq!(query["q"], vec!["x y"]);
    /// ```
    pub fn parse_query(raw: Option<&str>) -> BTreeMap<String, Vec<String>> {
        let mut query: BTreeMap<String, Vec<String>> = BTreeMap::new();
        if let Some(raw) = raw {
            for (k, v) in url::form_urlencoded::parse(raw.as_bytes()) {
                query.entry(k.into_owned()).or_default().push(v.into_owned());
            }
        }
        query
    }

    /// Remote address for logging, `-` when unknown
    pub fn remote_addr_or_dash(&self) -> &str {
        self.remote_addr.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_empty() {
        assert!(RequestInfo::parse_query(None).is_empty());
        assert!(RequestInfo::parse_query(Some("")).is_empty());
    }

    #[test]
    fn test_parse_query_flag_without_value() {
        let query = RequestInfo::parse_query(Some("debug&foo=bar"));
        assert_eq!(query["debug"], vec![String::new()]);
        assert_eq!(query["foo"], vec!["bar".to_string()]);
    }

    #[test]
    fn test_remote_addr_placeholder() {
        let mut info = RequestInfo::default();
        assert_eq!(info.remote_addr_or_dash(), "-");
        info.remote_addr = Some("10.0.0.4:51234".to_string());
        assert_eq!(info.remote_addr_or_dash(), "10.0.0.4:51234");
    }
}
