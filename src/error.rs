use thiserror::Error;

use crate::{BuildError, EvalError};

/// Unified error type covering JSON decoding, construction, evaluation and I/O.
///
/// Returned by convenience methods like
/// [`PredicateSet::from_json()`](crate::PredicateSet::from_json) and
/// [`PredicateSet::from_file()`](crate::PredicateSet::from_file).
#[derive(Debug, Error)]
pub enum ConditionError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
