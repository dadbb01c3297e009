//! HTTP method enumeration recognized by rest patterns.

use std::fmt;
use std::str::FromStr;

use axum::http::Method;
use thiserror::Error;

/// One of the eight HTTP methods a [`RestPattern`](super::RestPattern) can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Trace,
    Options,
    Head,
}

impl HttpMethod {
    /// Every recognized method, in declaration order.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Trace,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method token outside the recognized enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid HTTP method `{token}`: expected one of GET, POST, PUT, DELETE, PATCH, TRACE, OPTIONS, HEAD")]
pub struct InvalidMethodError {
    pub token: String,
}

impl FromStr for HttpMethod {
    type Err = InvalidMethodError;

    /// Tokens are matched case-insensitively, so `"get"` and `"GET"` are equivalent.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(token.trim()))
            .ok_or_else(|| InvalidMethodError {
                token: token.to_string(),
            })
    }
}

impl TryFrom<&Method> for HttpMethod {
    type Error = InvalidMethodError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(HttpMethod::Get),
            Method::POST => Ok(HttpMethod::Post),
            Method::PUT => Ok(HttpMethod::Put),
            Method::DELETE => Ok(HttpMethod::Delete),
            Method::PATCH => Ok(HttpMethod::Patch),
            Method::TRACE => Ok(HttpMethod::Trace),
            Method::OPTIONS => Ok(HttpMethod::Options),
            Method::HEAD => Ok(HttpMethod::Head),
            _ => Err(InvalidMethodError {
                token: method.as_str().to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Trace => Method::TRACE,
            HttpMethod::Options => Method::OPTIONS,
            HttpMethod::Head => Method::HEAD,
        }
    }
}
