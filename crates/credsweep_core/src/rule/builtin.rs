//! The built-in rule set.
//!
//! Both lists are order-sensitive: severity is fixed per position and
//! suppression rules short-circuit in declaration order. Changing the
//! order changes scan semantics.

use super::{MatcherDef, RuleDef, SuppressionDef, SuppressionMatcherDef};
use crate::severity::Severity;

/// Identifier word treated as naming a secret-bearing field.
const SECRET_KEYWORD: &str = "password";

/// Default credentials that shipped in earlier releases and must never
/// appear in the tree again, in any casing or syntactic position.
pub const KNOWN_DEFAULT_CREDENTIALS: &[&str] = &["admin@123", "P@ssw0rd", "changeme123", "root@1234", "admin123!"];

/// Marker token appended to values that are pending rotation after a
/// migration. Lines carrying it are never reported.
pub const ROTATION_PLACEHOLDER: &str = "ROTATE_ME";

/// Runtime-configuration-read idioms treated as evidence that a value is
/// sourced externally rather than embedded.
const CONFIG_READ_IDIOMS: &[&str] = &["process.env", "os.environ", "getenv", "env::var", "ENV["];

/// String-interpolation openers treated as evidence of dynamic
/// construction rather than a hardcoded value.
const INTERPOLATION_TOKENS: &[&str] = &["${", "#{", "{{"];

/// Characters UIs use to mask a displayed secret.
const MASK_CHARS: &[char] = &['•', '*'];

/// Minimum consecutive mask characters for the masking heuristic.
/// Four, not three, so `/**` comment openers never suppress a line.
const MASK_MIN_RUN: usize = 4;

pub(super) const DETECTION_RULES: &[RuleDef] = &[
    RuleDef {
        id: "password/hardcoded-assignment",
        name: "Hardcoded Password Assignment",
        description: "A password-named field is bound to a quoted literal in source.",
        severity: Severity::High,
        case_insensitive: true,
        matcher: MatcherDef::SecretAssignment {
            keyword: SECRET_KEYWORD,
            min_literal_len: 3,
        },
        remediation: "Move the value into an environment variable or secret manager, then rotate it.",
    },
    RuleDef {
        id: "password/known-default-credential",
        name: "Known Default Credential",
        description: "A default credential from an earlier release appears verbatim.",
        severity: Severity::Critical,
        case_insensitive: true,
        matcher: MatcherDef::KnownLiterals {
            literals: KNOWN_DEFAULT_CREDENTIALS,
        },
        remediation: "This credential is publicly known. Remove it and rotate every account that ever used it.",
    },
    RuleDef {
        id: "password/embedded-bcrypt-hash",
        name: "Embedded Bcrypt Hash",
        description: "Text shaped like bcrypt encoded output is embedded in source.",
        severity: Severity::Medium,
        case_insensitive: false,
        matcher: MatcherDef::EncodedHash {
            tags: &["2a", "2b", "2y"],
            cost_digits: 2,
            body_len: 53,
            alphabet: "./A-Za-z0-9",
        },
        remediation: "Move the hash into the credential store and treat the underlying password as exposed.",
    },
];

pub(super) const SUPPRESSION_RULES: &[SuppressionDef] = &[
    SuppressionDef {
        id: "allow/empty-literal",
        name: "Empty Literal",
        description: "The field is explicitly set to an empty string.",
        matcher: SuppressionMatcherDef::EmptyLiteral { keyword: SECRET_KEYWORD },
    },
    SuppressionDef {
        id: "allow/masked-value",
        name: "Masked Display Value",
        description: "A UI masking sequence appears near the field, not a real value.",
        matcher: SuppressionMatcherDef::MaskedValue {
            keyword: SECRET_KEYWORD,
            mask_chars: MASK_CHARS,
            min_run: MASK_MIN_RUN,
        },
    },
    SuppressionDef {
        id: "allow/rotation-placeholder",
        name: "Rotation Placeholder",
        description: "A temporary value explicitly marked for rotation during a migration.",
        matcher: SuppressionMatcherDef::PlaceholderToken {
            token: ROTATION_PLACEHOLDER,
        },
    },
    SuppressionDef {
        id: "allow/environment-read",
        name: "Environment Read",
        description: "The value is read from runtime configuration on the same line.",
        matcher: SuppressionMatcherDef::ConfigRead {
            keyword: SECRET_KEYWORD,
            idioms: CONFIG_READ_IDIOMS,
        },
    },
    SuppressionDef {
        id: "allow/interpolated-value",
        name: "Interpolated Value",
        description: "The value is constructed with string interpolation on the same line.",
        matcher: SuppressionMatcherDef::Interpolation {
            keyword: SECRET_KEYWORD,
            tokens: INTERPOLATION_TOKENS,
        },
    },
];
