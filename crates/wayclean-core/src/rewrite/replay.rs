//! Archive replay prefix stripping for links the mapping cannot resolve.

use anyhow::Result;
use regex::{Captures, Regex};

/// Patterns that strip `https://<archive>/web/<timestamp>[im_]/` from URLs
/// pointing elsewhere, leaving the bare original URL. Nested prefixes are
/// stripped in one pass.
#[derive(Debug, Clone)]
pub struct ReplayPrefixes {
    attribute_re: Regex,
    asset_re: Regex,
}

impl ReplayPrefixes {
    pub fn new(archive_host: &str) -> Result<Self> {
        let host = regex::escape(archive_host);
        let attribute_re = Regex::new(&format!(
            r#"(?i)(href|src)=(?:"(?:https?://{host}/web/\d+(?:im_)?/)*https?://{host}/web/\d+/(https?://[^"'>]+)"|'(?:https?://{host}/web/\d+(?:im_)?/)*https?://{host}/web/\d+/(https?://[^"'>]+)')"#
        ))?;
        let asset_re = Regex::new(&format!(
            r#"(?i)(?:https?://{host}/web/\d+(?:im_)?/)*https?://{host}/web/\d+im_/(https?://[^"')\s>]+)"#
        ))?;
        Ok(Self {
            attribute_re,
            asset_re,
        })
    }

    /// `href`/`src` values `https://<archive>/web/<digits>/https://x` become `https://x`.
    pub fn strip_replay_prefix(&self, html: &str) -> String {
        self.attribute_re
            .replace_all(html, |caps: &Captures<'_>| {
                let (quote, original) = match caps.get(2) {
                    Some(m) => ('"', m.as_str()),
                    None => ('\'', caps.get(3).map_or("", |m| m.as_str())),
                };
                format!("{}={quote}{original}{quote}", &caps[1])
            })
            .into_owned()
    }

    /// `https://<archive>/web/<digits>im_/https://x` becomes `https://x` anywhere
    /// in the text (attributes, inline styles, scripts).
    pub fn strip_asset_replay_prefix(&self, html: &str) -> String {
        self.asset_re.replace_all(html, "${1}").into_owned()
    }
}
