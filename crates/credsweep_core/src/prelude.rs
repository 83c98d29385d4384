//! Convenience re-exports of the most commonly used types.

pub use crate::config::{Config, ConfigError};
pub use crate::engine::Engine;
pub use crate::error::{CredsweepError, RuleError, ScanError};
pub use crate::finding::Finding;
pub use crate::report::Report;
pub use crate::rule::{Rule, RuleSet, SuppressionRule};
pub use crate::scanner::LineScanner;
pub use crate::severity::Severity;
pub use crate::walker::Exclusions;
