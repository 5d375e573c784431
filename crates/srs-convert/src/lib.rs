//! Clash rule-provider to sing-box rule-set conversion.
//!
//! This crate translates Clash rule-provider YAML documents (a
//! `payload:` list of `TYPE,VALUE` lines) into sing-box rule-set JSON
//! source documents:
//! - Rule classification into sing-box categories (domain, keyword,
//!   suffix, CIDR, process name)
//! - Per-file translation with per-category deduplication
//! - Recursive directory conversion with mirrored output layout
//! - Heuristic block/direct/proxy labeling for operator logs
//!
//! Conversion is lossy on purpose: rule types sing-box rule-sets cannot
//! express are dropped rather than rejected.

pub mod classify;
pub mod error;
pub mod model;
pub mod outbound;
pub mod translate;
pub mod walk;

pub use classify::{classify, RuleCategory};
pub use error::{ConvertError, Result};
pub use model::{ClashRuleDoc, RuleGroups, RuleSetDoc, SchemaVariant};
pub use outbound::{classify_outbound, OutboundHint};
pub use translate::convert_file;
pub use walk::{convert_dir, ConvertReport};
