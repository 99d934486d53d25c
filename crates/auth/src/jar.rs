//! Cookie storage
//!
//! `CookieStore` is the read-only view of whatever holds the client's
//! cookies: a parsed `Cookie` header, request headers, or a plain map.
//! Header values are percent-decoded, since issuers store tokens
//! query-escaped.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::http::{header::COOKIE, HeaderMap};
use cookie::Cookie;

/// Read-only lookup of cookies by name
pub trait CookieStore {
    /// Value of the cookie called `name`, if present
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: CookieStore + ?Sized> CookieStore for &T {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).cookie(name)
    }
}

impl CookieStore for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// Every `Cookie` header on the request is searched, first match wins.
impl CookieStore for HeaderMap {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .flat_map(parse_header)
            .find(|cookie| cookie.name() == name)
            .map(|cookie| Cow::Owned(cookie.value_trimmed().to_string()))
    }
}

/// Cookies parsed from one or more `Cookie` header values
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `name=value; name2=value2` header value
    pub fn parse(header: &str) -> Self {
        let mut jar = Self::new();
        jar.extend_from_header(header);
        jar
    }

    /// Add the pairs of another header value. Names already in the jar keep
    /// their earlier value.
    pub fn extend_from_header(&mut self, header: &str) {
        for cookie in parse_header(header) {
            self.cookies
                .entry(cookie.name().to_string())
                .or_insert_with(|| cookie.value_trimmed().to_string());
        }
    }

    /// Store an already decoded value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl From<&HeaderMap> for CookieJar {
    fn from(headers: &HeaderMap) -> Self {
        let mut jar = Self::new();
        for header in headers.get_all(COOKIE).iter() {
            if let Ok(header) = header.to_str() {
                jar.extend_from_header(header);
            }
        }
        jar
    }
}

impl CookieStore for CookieJar {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>> {
        self.cookies.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// Percent-decoded cookies of one header value; unparseable pairs are skipped
fn parse_header(header: &str) -> impl Iterator<Item = Cookie<'_>> + '_ {
    Cookie::split_parse_encoded(header).filter_map(Result::ok)
}
