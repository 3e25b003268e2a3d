//! Link rewriting: archived absolute links → relative links between mirrored files.
//!
//! Every `href=`/`src=` value that names the archived site (directly, through
//! an archive replay prefix, or as a root-relative path) is normalized the same
//! way provenance URLs are and looked up in the [`PathMapping`]. Hits become a
//! path relative to the current page; misses are left byte-identical. Replay
//! prefixes are then stripped from whatever still points off-site.

mod href;
mod replay;

pub use href::{encode_path_for_href, relative_href};
pub use replay::ReplayPrefixes;

use anyhow::Result;
use regex::{Captures, Regex};

use crate::config::MirrorConfig;
use crate::provenance::{key_for_site_path, PathMapping};

/// Compiled rewriting patterns for one site/archive host pair.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    site_host: String,
    site_link_re: Regex,
    replay: ReplayPrefixes,
}

impl LinkRewriter {
    pub fn new(site_host: &str, archive_host: &str) -> Result<Self> {
        let site = regex::escape(site_host);
        let archive = regex::escape(archive_host);
        let prefix = format!(r"(?:(?:https?://{archive}/web/\d+(?:im_)?/)*https?://{site})?");
        let site_link_re = Regex::new(&format!(
            r#"(?i)(href|src)=(?:"{prefix}(/[^"'>]*)"|'{prefix}(/[^"'>]*)')"#
        ))?;
        Ok(Self {
            site_host: site_host.to_string(),
            site_link_re,
            replay: ReplayPrefixes::new(archive_host)?,
        })
    }

    pub fn from_config(cfg: &MirrorConfig) -> Result<Self> {
        Self::new(&cfg.site_host, &cfg.archive_host)
    }

    /// Rewrites one page. `from_document` is the page's path relative to the
    /// mirror root, forward-slash separated.
    pub fn rewrite(&self, html: &str, from_document: &str, mapping: &PathMapping) -> String {
        let html = self.rewrite_site_links(html, from_document, mapping);
        let html = self.replay.strip_replay_prefix(&html);
        self.replay.strip_asset_replay_prefix(&html)
    }

    /// Attribute-level pass only (no replay prefix cleanup).
    pub fn rewrite_site_links(&self, html: &str, from_document: &str, mapping: &PathMapping) -> String {
        self.site_link_re
            .replace_all(html, |caps: &Captures<'_>| {
                let (quote, path) = match caps.get(2) {
                    Some(m) => ('"', m.as_str()),
                    None => ('\'', caps.get(3).map_or("", |m| m.as_str())),
                };
                match self.lookup(path, mapping) {
                    Some(target) => match relative_href(from_document, target) {
                        Some(rel) => format!("{}={quote}{rel}{quote}", &caps[1]),
                        None => caps[0].to_string(),
                    },
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Mapped local file for a site path: first the normalized key, then its
    /// percent-decoded form.
    pub fn lookup<'m>(&self, site_path: &str, mapping: &'m PathMapping) -> Option<&'m str> {
        if site_path.starts_with('#') {
            return None;
        }
        let key = key_for_site_path(&self.site_host, site_path);
        if let Some(target) = mapping.get(&key) {
            return Some(target);
        }
        let decoded = urlencoding::decode(&key).ok()?.to_lowercase();
        mapping.get(&decoded)
    }
}
