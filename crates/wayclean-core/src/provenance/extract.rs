//! Provenance comment detection.

use anyhow::Result;
use regex::Regex;
use url::Url;

/// The original URL a page was saved from, as recorded by the archiving tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceRecord {
    pub url: Url,
}

impl ProvenanceRecord {
    /// Normalized mapping key for this page.
    pub fn key(&self) -> String {
        super::key_for_url(&self.url)
    }
}

/// Finds `<!-- saved from url=(NNNN)https://<site>/... -->` comments for one
/// archived site host.
#[derive(Debug, Clone)]
pub struct ProvenanceMatcher {
    comment_re: Regex,
}

impl ProvenanceMatcher {
    pub fn new(site_host: &str) -> Result<Self> {
        let pattern = format!(
            r"(?i)<!--\s*saved from url=\(\d+\).*?(https?://{}/[^\^\s>]*?)\s*-->",
            regex::escape(site_host)
        );
        Ok(Self {
            comment_re: Regex::new(&pattern)?,
        })
    }

    /// Raw URL text of the first provenance comment, if any.
    pub fn find_url<'a>(&self, page: &'a str) -> Option<&'a str> {
        self.comment_re
            .captures(page)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Parsed provenance for a page. `None` when the comment is absent or its
    /// URL does not parse.
    pub fn find_record(&self, page: &str) -> Option<ProvenanceRecord> {
        let raw = self.find_url(page)?;
        Url::parse(raw).ok().map(|url| ProvenanceRecord { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> ProvenanceMatcher {
        ProvenanceMatcher::new("help.example.app").unwrap()
    }

    #[test]
    fn finds_saved_from_comment() {
        let page = "<!DOCTYPE html>\n<!-- saved from url=(0042)https://help.example.app/Docs/Guide/ -->\n<html>";
        assert_eq!(
            matcher().find_url(page),
            Some("https://help.example.app/Docs/Guide/")
        );
        let record = matcher().find_record(page).unwrap();
        assert_eq!(record.key(), "/docs/guide");
    }

    #[test]
    fn tolerates_whitespace_and_scheme_case() {
        let page = "<!--saved from url=(0031)HTTP://help.example.app/faq-->";
        let record = matcher().find_record(page).unwrap();
        assert_eq!(record.key(), "/faq");
    }

    #[test]
    fn ignores_other_hosts() {
        let page = "<!-- saved from url=(0027)https://other.example.com/x -->";
        assert!(matcher().find_url(page).is_none());
    }

    #[test]
    fn missing_comment_yields_none() {
        assert!(matcher().find_record("<html><body>plain</body></html>").is_none());
    }

    #[test]
    fn host_is_matched_literally() {
        let page = "<!-- saved from url=(0026)https://helpXexampleXapp/x -->";
        assert!(matcher().find_url(page).is_none());
    }
}
