use thiserror::Error;

/// Errors that can occur when compiling a rule's matcher.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The matcher parameters produced an invalid regular expression.
    #[error("invalid matcher in rule '{id}': {source}")]
    InvalidMatcher {
        /// Identifier of the rule that failed (e.g. `"password/hardcoded-assignment"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The rule's literal set could not be compiled into an automaton.
    #[error("invalid literal set in rule '{id}': {source}")]
    InvalidLiteralSet {
        /// Identifier of the rule that failed.
        id: String,
        /// The underlying automaton build error.
        #[source]
        source: aho_corasick::BuildError,
    },
}

/// Fatal errors raised while scanning a tree.
///
/// A failure to list a directory aborts the entire scan: no partial
/// report is produced, so an excluded-from-listing subtree can never be
/// mistaken for a clean one.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory in the tree could not be listed.
    #[error("failed to list directory tree: {source}")]
    Walk {
        /// The underlying walker error, including the path that failed.
        #[from]
        source: ignore::Error,
    },
}

/// Top-level error type for the credsweep scanning pipeline.
///
/// Unifies errors from rule compilation, configuration loading, and tree
/// scanning into a single type for callers that orchestrate the full
/// workflow.
#[derive(Debug, Error)]
pub enum CredsweepError {
    /// A rule failed to compile.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Configuration could not be read or parsed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The tree walk aborted.
    #[error(transparent)]
    Scan(#[from] ScanError),
}
