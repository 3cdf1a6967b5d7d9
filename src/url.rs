//! Minimal URL handling for the page address and anchor hrefs
//!
//! Only what link propagation needs: scheme/host/path split, ordered query
//! pairs, fragment, and resolution of relative hrefs against the page
//! origin. Query components are percent-decoded on parse and re-encoded on
//! serialization.

use std::fmt;

use anyhow::{bail, Context, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside query keys and values.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    scheme: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Url {
    /// Parse an absolute URL.
    pub fn parse(input: &str) -> Result<Url> {
        let (scheme, rest) = input
            .split_once("://")
            .with_context(|| format!("not an absolute URL: {input}"))?;
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.') {
            bail!("invalid URL scheme: {input}");
        }

        let (authority, remainder) = match rest.find(['/', '?', '#']) {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        if authority.is_empty() {
            bail!("URL has no host: {input}");
        }
        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => {
                let port: u16 = port
                    .parse()
                    .with_context(|| format!("invalid port in URL: {input}"))?;
                (host, Some(port))
            }
            None => (authority, None),
        };
        if host.is_empty() {
            bail!("URL has no host: {input}");
        }

        let (remainder, fragment) = match remainder.split_once('#') {
            Some((r, f)) => (r, Some(f.to_string())),
            None => (remainder, None),
        };
        let (path, query_str) = match remainder.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (remainder, None),
        };
        let path = if path.is_empty() { "/" } else { path };

        let query = match query_str {
            Some(q) => parse_query(q)?,
            None => Vec::new(),
        };

        Ok(Url {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
            port,
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// Resolve an href against a base URL's origin, the way a page resolves
    /// its anchors. Absolute hrefs are parsed as-is; everything else is
    /// taken as same-site and resolved from the origin root.
    pub fn join(href: &str, base: &Url) -> Result<Url> {
        if let Some(rest) = href.strip_prefix("//") {
            // protocol-relative
            return Url::parse(&format!("{}://{}", base.scheme, rest));
        }
        if href.contains("://") {
            return Url::parse(href);
        }
        let sep = if href.starts_with('/') || href.starts_with('?') {
            ""
        } else {
            "/"
        };
        Url::parse(&format!("{}{}{}", base.origin(), sep, href))
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Hostname without the port.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `scheme://host[:port]`
    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// First value for a query key, decoded.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a query key, replacing an existing pair in place and dropping
    /// duplicates; appends when absent. Every other pair keeps its position.
    pub fn set_query(&mut self, key: &str, value: &str) {
        match self.query.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.query[idx].1 = value.to_string();
                let mut i = idx + 1;
                while i < self.query.len() {
                    if self.query[i].0 == key {
                        self.query.remove(i);
                    } else {
                        i += 1;
                    }
                }
            }
            None => self.query.push((key.to_string(), value.to_string())),
        }
    }

    /// Drop a query key entirely.
    pub fn remove_query(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }
}

fn parse_query(raw: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for part in raw.split('&') {
        if part.is_empty() {
            continue;
        }
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        pairs.push((decode(key)?, decode(value)?));
    }
    Ok(pairs)
}

fn decode(component: &str) -> Result<String> {
    let spaced = component.replace('+', " ");
    let decoded = percent_decode_str(&spaced)
        .decode_utf8()
        .with_context(|| format!("invalid percent-encoding: {component}"))?;
    Ok(decoded.into_owned())
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, QUERY).to_string()
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, encode(key), encode(value))?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
