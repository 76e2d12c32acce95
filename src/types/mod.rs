mod document;
mod error;
mod evaluation_report;
mod operator;
mod path;
mod predicate;
mod predicate_set;
mod value;

pub use document::Document;
pub use error::{BuildError, EvalError};
pub use evaluation_report::{EvaluationReport, Outcome};
pub use operator::{Logic, Operator, UnknownName};
pub use path::AttributePath;
pub(crate) use predicate::Check;
pub use predicate::{attr, AttrExpr, Predicate};
pub use predicate_set::{validate, PredicateSet, Rule};
pub use value::{Value, ValueKind};
