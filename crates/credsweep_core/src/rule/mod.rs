//! Detection and suppression rule definitions and their compiled matchers.
//!
//! Rule semantics are expressed as structured parameters (keywords,
//! minimum literal lengths, literal sets, hash-shape fields) and compiled
//! into matchers at construction time. Both lists are fixed and ordered:
//! the position of a rule determines its severity, and suppression rules
//! are always evaluated before detection rules on a given line.

mod builtin;

use aho_corasick::AhoCorasick;
use regex::Regex;

pub use builtin::{KNOWN_DEFAULT_CREDENTIALS, ROTATION_PLACEHOLDER};

use crate::error::RuleError;
use crate::severity::Severity;

/// How a detection rule matches a line, expressed as structured
/// parameters rather than a raw pattern string.
#[derive(Debug, Clone, Copy)]
pub enum MatcherDef {
    /// An assignment- or declaration-shaped binding of an identifier
    /// containing `keyword` to a quoted literal of at least
    /// `min_literal_len` characters.
    SecretAssignment {
        /// Word that marks an identifier as secret-bearing.
        keyword: &'static str,
        /// Minimum length of the quoted literal for the rule to fire.
        min_literal_len: usize,
    },
    /// A verbatim occurrence of any literal from a fixed set, anywhere on
    /// the line, independent of surrounding syntax.
    KnownLiterals {
        /// The exact strings that must never appear.
        literals: &'static [&'static str],
    },
    /// The encoded output of an adaptive password-hashing scheme: a
    /// version tag, a numeric cost, then a fixed-length body over a fixed
    /// alphabet.
    EncodedHash {
        /// Accepted version tags (without the surrounding `$` separators).
        tags: &'static [&'static str],
        /// Number of digits in the cost parameter.
        cost_digits: usize,
        /// Exact length of the encoded body.
        body_len: usize,
        /// Body alphabet, as a regex character-class body.
        alphabet: &'static str,
    },
}

/// A single detection rule definition prior to compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// Unique identifier in `"group/name"` format.
    pub id: &'static str,
    /// Short human-readable name shown in reports.
    pub name: &'static str,
    /// Longer description of what the rule detects.
    pub description: &'static str,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// Whether matching ignores ASCII case.
    pub case_insensitive: bool,
    /// The structured matcher parameters.
    pub matcher: MatcherDef,
    /// Static remediation guidance shown when the rule fires.
    pub remediation: &'static str,
}

#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    Literals(AhoCorasick),
}

/// A compiled detection rule ready for scanning.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier in `"group/name"` format.
    pub id: &'static str,
    /// Short human-readable name shown in reports.
    pub name: &'static str,
    /// Longer description of what the rule detects.
    pub description: &'static str,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// Static remediation guidance shown when the rule fires.
    pub remediation: &'static str,
    matcher: Matcher,
}

impl Rule {
    fn compile(def: &RuleDef) -> Result<Self, RuleError> {
        let matcher = match def.matcher {
            MatcherDef::SecretAssignment {
                keyword,
                min_literal_len,
            } => Matcher::Regex(build_assignment_regex(
                def.id,
                keyword,
                min_literal_len,
                def.case_insensitive,
            )?),
            MatcherDef::KnownLiterals { literals } => {
                Matcher::Literals(build_literal_automaton(def.id, literals, def.case_insensitive)?)
            }
            MatcherDef::EncodedHash {
                tags,
                cost_digits,
                body_len,
                alphabet,
            } => Matcher::Regex(build_hash_regex(def.id, tags, cost_digits, body_len, alphabet)?),
        };

        Ok(Self {
            id: def.id,
            name: def.name,
            description: def.description,
            severity: def.severity,
            remediation: def.remediation,
            matcher,
        })
    }

    /// Returns the first substring of `line` matched by this rule, if any.
    ///
    /// A rule contributes at most one finding per line, anchored to its
    /// first match; later occurrences on the same line are not reported.
    #[must_use]
    pub fn find_first<'l>(&self, line: &'l str) -> Option<&'l str> {
        match &self.matcher {
            Matcher::Regex(regex) => regex.find(line).map(|m| m.as_str()),
            Matcher::Literals(automaton) => automaton.find(line).map(|m| &line[m.start()..m.end()]),
        }
    }
}

/// How an allow-list heuristic matches a line.
///
/// These are deliberately coarse, line-scoped textual heuristics that
/// favour a low false-positive rate: a secret literal sharing a physical
/// line with an unrelated configuration read is suppressed, and a secret
/// split across lines is missed.
#[derive(Debug, Clone, Copy)]
pub enum SuppressionMatcherDef {
    /// A secret-named field assigned or declared an explicit empty quoted
    /// literal.
    EmptyLiteral {
        /// Word that marks an identifier as secret-bearing.
        keyword: &'static str,
    },
    /// The secret keyword alongside a run of UI mask characters.
    MaskedValue {
        /// Word that marks an identifier as secret-bearing.
        keyword: &'static str,
        /// Characters that count towards a mask run.
        mask_chars: &'static [char],
        /// Minimum consecutive mask characters for the heuristic to fire.
        min_run: usize,
    },
    /// A sentinel token marking a temporary placeholder value.
    PlaceholderToken {
        /// The exact token, matched case-sensitively.
        token: &'static str,
    },
    /// The secret keyword alongside a runtime-configuration-read idiom.
    ConfigRead {
        /// Word that marks an identifier as secret-bearing.
        keyword: &'static str,
        /// Idioms treated as evidence the value is externally sourced.
        idioms: &'static [&'static str],
    },
    /// The secret keyword alongside string-interpolation syntax.
    Interpolation {
        /// Word that marks an identifier as secret-bearing.
        keyword: &'static str,
        /// Interpolation openers treated as evidence of dynamic construction.
        tokens: &'static [&'static str],
    },
}

/// A single suppression rule definition prior to compilation.
#[derive(Debug, Clone, Copy)]
pub struct SuppressionDef {
    /// Unique identifier in `"allow/name"` format.
    pub id: &'static str,
    /// Short human-readable name.
    pub name: &'static str,
    /// Longer description of the benign shape this rule recognises.
    pub description: &'static str,
    /// The structured matcher parameters.
    pub matcher: SuppressionMatcherDef,
}

#[derive(Debug, Clone)]
enum SuppressionMatcher {
    Regex(Regex),
    KeywordWithMaskRun {
        keyword: &'static str,
        mask_chars: &'static [char],
        min_run: usize,
    },
    Token(&'static str),
    KeywordWithNeedle {
        keyword: &'static str,
        needles: &'static [&'static str],
    },
}

/// A compiled allow-list heuristic.
///
/// A matching suppression rule vetoes every detection rule for that line.
#[derive(Debug, Clone)]
pub struct SuppressionRule {
    /// Unique identifier in `"allow/name"` format.
    pub id: &'static str,
    /// Short human-readable name.
    pub name: &'static str,
    /// Longer description of the benign shape this rule recognises.
    pub description: &'static str,
    matcher: SuppressionMatcher,
}

impl SuppressionRule {
    fn compile(def: &SuppressionDef) -> Result<Self, RuleError> {
        let matcher = match def.matcher {
            SuppressionMatcherDef::EmptyLiteral { keyword } => {
                SuppressionMatcher::Regex(build_empty_literal_regex(def.id, keyword)?)
            }
            SuppressionMatcherDef::MaskedValue {
                keyword,
                mask_chars,
                min_run,
            } => SuppressionMatcher::KeywordWithMaskRun {
                keyword,
                mask_chars,
                min_run,
            },
            SuppressionMatcherDef::PlaceholderToken { token } => SuppressionMatcher::Token(token),
            SuppressionMatcherDef::ConfigRead { keyword, idioms } => SuppressionMatcher::KeywordWithNeedle {
                keyword,
                needles: idioms,
            },
            SuppressionMatcherDef::Interpolation { keyword, tokens } => SuppressionMatcher::KeywordWithNeedle {
                keyword,
                needles: tokens,
            },
        };

        Ok(Self {
            id: def.id,
            name: def.name,
            description: def.description,
            matcher,
        })
    }

    /// Returns `true` if this heuristic recognises `line` as benign.
    ///
    /// Evaluated against the raw, untrimmed line.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        match &self.matcher {
            SuppressionMatcher::Regex(regex) => regex.is_match(line),
            SuppressionMatcher::KeywordWithMaskRun {
                keyword,
                mask_chars,
                min_run,
            } => contains_ascii_ci(line, keyword) && has_mask_run(line, mask_chars, *min_run),
            SuppressionMatcher::Token(token) => line.contains(token),
            SuppressionMatcher::KeywordWithNeedle { keyword, needles } => {
                contains_ascii_ci(line, keyword) && needles.iter().any(|needle| line.contains(needle))
            }
        }
    }
}

/// The fixed, ordered rule set used for a scan.
///
/// Constructed once at engine initialisation and immutable for the
/// lifetime of the scan. Rule evaluation order and severity-per-position
/// are identical across runs.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    suppressions: Vec<SuppressionRule>,
}

impl RuleSet {
    /// Compiles the built-in detection and suppression rules.
    pub fn builtin() -> Result<Self, RuleError> {
        let rules = builtin::DETECTION_RULES
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        let suppressions = builtin::SUPPRESSION_RULES
            .iter()
            .map(SuppressionRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules, suppressions))
    }

    /// Creates a rule set from already-compiled rules, preserving order.
    #[must_use]
    pub const fn new(rules: Vec<Rule>, suppressions: Vec<SuppressionRule>) -> Self {
        Self { rules, suppressions }
    }

    /// Returns the detection rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the suppression rules in evaluation order.
    #[must_use]
    pub fn suppressions(&self) -> &[SuppressionRule] {
        &self.suppressions
    }

    /// Returns `true` if any suppression rule recognises `line` as benign.
    ///
    /// Rules are evaluated in fixed order and short-circuit on the first
    /// match.
    #[must_use]
    pub fn is_suppressed(&self, line: &str) -> bool {
        self.suppressions.iter().any(|rule| rule.matches(line))
    }

    /// Returns the number of detection rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set contains no detection rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn build_assignment_regex(
    id: &str,
    keyword: &str,
    min_literal_len: usize,
    case_insensitive: bool,
) -> Result<Regex, RuleError> {
    let flag = if case_insensitive { "(?i)" } else { "" };
    let pattern = format!(
        r#"{flag}[\w.$-]*{keyword}[\w.$-]*["']?\s*(?:=|:|=>|:=)\s*["'][^"']{{{min_literal_len},}}["']"#,
        keyword = regex::escape(keyword),
    );
    compile_regex(id, &pattern)
}

fn build_empty_literal_regex(id: &str, keyword: &str) -> Result<Regex, RuleError> {
    let pattern = format!(
        r#"(?i)[\w.$-]*{keyword}[\w.$-]*["']?\s*(?:=|:|=>|:=)\s*(?:""|'')"#,
        keyword = regex::escape(keyword),
    );
    compile_regex(id, &pattern)
}

fn build_hash_regex(
    id: &str,
    tags: &[&str],
    cost_digits: usize,
    body_len: usize,
    alphabet: &str,
) -> Result<Regex, RuleError> {
    let tag_alternation = tags.iter().map(|tag| regex::escape(tag)).collect::<Vec<_>>().join("|");
    let pattern = format!(r"\$(?:{tag_alternation})\$[0-9]{{{cost_digits}}}\$[{alphabet}]{{{body_len}}}");
    compile_regex(id, &pattern)
}

fn compile_regex(id: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidMatcher {
        id: id.to_string(),
        source,
    })
}

fn build_literal_automaton(id: &str, literals: &[&str], case_insensitive: bool) -> Result<AhoCorasick, RuleError> {
    AhoCorasick::builder()
        .ascii_case_insensitive(case_insensitive)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(literals)
        .map_err(|source| RuleError::InvalidLiteralSet {
            id: id.to_string(),
            source,
        })
}

fn contains_ascii_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

fn has_mask_run(line: &str, mask_chars: &[char], min_run: usize) -> bool {
    let mut run = 0;
    for c in line.chars() {
        if mask_chars.contains(&c) {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
