use anyhow::{Result, anyhow};
use http::Uri;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl FromStr for Scheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(anyhow!("unsupported scheme: {}", other)),
        }
    }
}

/// One incoming request as the engine sees it.
///
/// The serving layer owns HTTP parsing; this is the already-extracted
/// host/scheme/path/query tuple. Query keys are unique, first occurrence
/// wins.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInfo {
    pub host: String,
    pub scheme: Scheme,
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl RequestInfo {
    pub fn new(host: &str, scheme: Scheme, path: &str) -> Self {
        Self {
            host: host.to_string(),
            scheme,
            path: path.to_string(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.entry(key.to_string()).or_insert(value.to_string());
        self
    }

    /// Parse a full URL of the form "http://host/path?k=v".
    ///
    /// A missing scheme parses as plain http, so bare inputs are treated as
    /// insecure rather than rejected.
    pub fn from_url(raw: &str) -> Result<Self> {
        let uri: Uri = raw.parse().map_err(|_| anyhow!("invalid URL: {}", raw))?;

        let scheme = match uri.scheme_str() {
            Some("https") => Scheme::Https,
            _ => Scheme::Http,
        };

        let host = uri
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| anyhow!("URL missing host: {}", raw))?;

        let path = uri.path().to_string();
        let query = parse_query(uri.query().unwrap_or(""));

        Ok(Self {
            host,
            scheme,
            path,
            query,
        })
    }

    /// Request host with an optional ":port" suffix stripped, for
    /// comparison against the canonical host.
    pub fn host_without_port(&self) -> &str {
        match self.host.rsplit_once(':') {
            Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
            _ => &self.host,
        }
    }
}

fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();

    if query.is_empty() {
        return out;
    }

    for part in query.split('&') {
        let (key, value) = match part.split_once('=') {
            Some((k, v)) => (k, v),
            None => (part, ""),
        };

        out.entry(key.to_string()).or_insert(value.to_string());
    }

    out
}
