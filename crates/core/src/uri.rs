use crate::error::{LaunchError, LaunchResult};
use crate::types::ApplicationType;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// RFC 3986 reserved characters; `%` is checked separately as part of an escape.
const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// Build a full link from a raw identifier. No validation happens here.
pub fn build_link(identifier: &str, application_type: ApplicationType) -> String {
    format!("{}{}", application_type.prefix(), identifier)
}

/// A structurally valid absolute URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUri(Url);

impl ParsedUri {
    pub fn parse(link: &str) -> LaunchResult<Self> {
        if link.is_empty() {
            return Err(LaunchError::MalformedTarget("link is empty".to_string()));
        }
        // Url::parse percent-encodes these silently; treat them as malformed instead.
        if let Some(ch) = link.chars().find(|ch| ch.is_whitespace() || ch.is_control()) {
            return Err(LaunchError::MalformedTarget(format!(
                "illegal character {:?} in {}",
                ch, link
            )));
        }

        if let Some(ch) = link.chars().find(|&ch| !is_uri_char(ch)) {
            return Err(LaunchError::MalformedTarget(format!(
                "illegal character {:?} in {}",
                ch, link
            )));
        }
        check_percent_escapes(link)?;

        let url = Url::parse(link)
            .map_err(|e| LaunchError::MalformedTarget(format!("{}: {}", link, e)))?;

        if url.cannot_be_a_base() && url.path().is_empty() {
            return Err(LaunchError::MalformedTarget(format!(
                "missing scheme-specific part in {}",
                link
            )));
        }

        Ok(Self(url))
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    pub fn is_mail(&self) -> bool {
        self.scheme() == "mailto"
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

fn is_uri_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~' | '%') || RESERVED.contains(ch)
}

fn check_percent_escapes(link: &str) -> LaunchResult<()> {
    let bytes = link.as_bytes();
    for (idx, _) in link.match_indices('%') {
        let escape = bytes.get(idx + 1..idx + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(LaunchError::MalformedTarget(format!(
                "malformed percent-escape at byte {} in {}",
                idx, link
            )));
        }
    }
    Ok(())
}

impl fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParsedUri {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
