use thiserror::Error;

use super::operator::Operator;
use super::value::ValueKind;

/// Construction-time failures. The rule description is invalid and must be
/// reported to whoever wrote it.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("malformed rule set: {reason}")]
    MalformedRuleSet { reason: String },

    #[error("invalid logic type '{logic}' (must be 'and' or 'or')")]
    InvalidLogicOperator { logic: String },

    #[error(
        "unknown operator '{op}'; must be one of: eq, gt, gte, lt, lte, in, contains, regex"
    )]
    InvalidOperator { op: String },

    #[error("unsupported value type: {kind}")]
    UnsupportedValueType { kind: ValueKind },

    #[error("operator '{op}' cannot be used with a {kind} value")]
    IncompatibleOperator { op: Operator, kind: ValueKind },

    #[error("malformed condition: {reason}")]
    MalformedPredicate { reason: String },

    #[error("attribute path must not be empty")]
    EmptyAttribute,

    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Evaluation-time failures. Path resolution never fails; only operators
/// applied to a resolved value of the wrong type do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("'{op}' on attribute '{attribute}' expects {expected}, found {found}")]
    TypeMismatch {
        attribute: String,
        op: Operator,
        expected: &'static str,
        found: ValueKind,
    },
}
