//! Heuristic outbound labeling for rule files.
//!
//! The label is an operator hint derived from where a rule file sits in
//! the source tree. It is logged during conversion but never written
//! into the rule-set document itself.

use std::fmt;

const BLOCK_KEYWORDS: &[&str] = &[
    "ad",
    "ads",
    "advert",
    "advertising",
    "ban",
    "reject",
    "privacy",
];

const DIRECT_KEYWORDS: &[&str] = &["china", "cn", "direct", "mainland", "domestic"];

/// Intended traffic action for a rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutboundHint {
    Block,
    Direct,
    #[default]
    Proxy,
}

impl OutboundHint {
    pub fn as_str(self) -> &'static str {
        match self {
            OutboundHint::Block => "block",
            OutboundHint::Direct => "direct",
            OutboundHint::Proxy => "proxy",
        }
    }
}

impl fmt::Display for OutboundHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label a rule file from its category path and file stem.
///
/// Case-insensitive substring matching; block keywords take precedence
/// over direct keywords, anything unmatched goes through the proxy.
pub fn classify_outbound(category: &str, stem: &str) -> OutboundHint {
    let haystack = format!("{}/{}", category, stem).to_ascii_lowercase();
    if BLOCK_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        OutboundHint::Block
    } else if DIRECT_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        OutboundHint::Direct
    } else {
        OutboundHint::Proxy
    }
}
