//! Condition sets: AND / OR trees of typed predicates, built from JSON rule
//! descriptions and evaluated against nested documents.
//!
//! ```
//! use condset::{Document, PredicateSet};
//!
//! let set = PredicateSet::from_json(
//!     r#"{"and": [
//!         {"attr": "status", "value": "enabled"},
//!         {"attr": "name", "op": "regex", "value": "^AS"}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! let doc = Document::new().set("status", "enabled").set("name", "AS-EXAMPLE");
//! assert!(set.evaluate(&doc).unwrap());
//! ```

mod build;
mod error;
mod evaluate;
mod types;

pub use error::ConditionError;
pub use evaluate::resolve;
pub use types::{
    attr, validate, AttrExpr, AttributePath, BuildError, Document, EvalError, EvaluationReport,
    Logic, Operator, Outcome, Predicate, PredicateSet, Rule, UnknownName, Value, ValueKind,
};
