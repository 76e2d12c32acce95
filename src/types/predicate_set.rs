use std::fmt;

use super::error::{BuildError, EvalError};
use super::evaluation_report::EvaluationReport;
use super::operator::Logic;
use super::predicate::Predicate;
use super::value::Value;

/// A child of a [`PredicateSet`]: a single test or a nested set.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Leaf(Predicate),
    Node(PredicateSet),
}

/// An AND / OR combination of predicates and nested sets.
///
/// Immutable once built, `Send + Sync`, and designed to live behind `Arc`
/// when shared between threads.
///
/// # Example
///
/// ```
/// use condset::{Document, PredicateSet};
/// use serde_json::json;
///
/// let rule = json!({"and": [
///     {"attr": "status", "op": "eq", "value": "enabled"},
///     {"or": [
///         {"attr": "asn", "op": "gte", "value": 64512},
///         {"attr": "asn", "op": "lt", "value": 200}
///     ]}
/// ]});
/// let set = PredicateSet::from_rule(&rule).unwrap();
///
/// let doc = Document::new().set("status", "enabled").set("asn", 65000_i64);
/// assert!(set.evaluate(&doc).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "serde_json::Value", into = "serde_json::Value")
)]
pub struct PredicateSet {
    pub(crate) logic: Logic,
    pub(crate) children: Vec<Rule>,
}

impl PredicateSet {
    #[must_use]
    pub fn new(logic: Logic, children: Vec<Rule>) -> Self {
        Self { logic, children }
    }

    /// AND over `children`. Empty is vacuously true.
    #[must_use]
    pub fn all(children: impl IntoIterator<Item = impl Into<Rule>>) -> Self {
        Self::new(Logic::And, children.into_iter().map(Into::into).collect())
    }

    /// OR over `children`. Empty is false.
    #[must_use]
    pub fn any(children: impl IntoIterator<Item = impl Into<Rule>>) -> Self {
        Self::new(Logic::Or, children.into_iter().map(Into::into).collect())
    }

    /// Build a set from a parsed rule description such as
    /// `{"and": [{"attr": "a", "op": "eq", "value": 1}]}`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] describing the first invalid part of the
    /// description.
    pub fn from_rule(rule: &serde_json::Value) -> Result<Self, BuildError> {
        crate::build::build(rule)
    }

    /// Parse a JSON rule description and build a set from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError`](crate::ConditionError) on JSON or build failure.
    pub fn from_json(input: &str) -> Result<Self, crate::ConditionError> {
        let rule: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::from_rule(&rule)?)
    }

    /// Read a JSON rule description from a file and build a set from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError`](crate::ConditionError) on I/O, JSON or build failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::ConditionError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// Evaluate this set against a document.
    ///
    /// AND stops at the first false child and OR at the first true child;
    /// later children are not evaluated.
    ///
    /// # Errors
    ///
    /// Propagates [`EvalError`] from the first evaluated predicate that fails.
    pub fn evaluate<D: AsRef<Value> + ?Sized>(&self, document: &D) -> Result<bool, EvalError> {
        crate::evaluate::set(self, document.as_ref())
    }

    /// Evaluate with diagnostics: the verdict, the outcome of every predicate
    /// that was actually evaluated, and the wall-clock duration.
    ///
    /// # Errors
    ///
    /// Propagates [`EvalError`] like [`evaluate()`](Self::evaluate).
    pub fn evaluate_detailed<D: AsRef<Value> + ?Sized>(
        &self,
        document: &D,
    ) -> Result<EvaluationReport, EvalError> {
        crate::evaluate::set_detailed(self, document.as_ref())
    }

    /// The canonical rule description of this set. Building from it yields
    /// an equal set.
    #[must_use]
    pub fn to_rule(&self) -> serde_json::Value {
        crate::build::describe(self)
    }

    #[must_use]
    pub fn logic(&self) -> Logic {
        self.logic
    }

    #[must_use]
    pub fn children(&self) -> &[Rule] {
        &self.children
    }

    /// Number of predicates in the whole tree.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Rule::Leaf(_) => 1,
                Rule::Node(set) => set.predicate_count(),
            })
            .sum()
    }
}

/// Check a rule description without keeping the built set, the way a host
/// application validates a stored `conditions` field before saving it.
///
/// # Errors
///
/// Returns the same [`BuildError`] [`PredicateSet::from_rule()`] would.
pub fn validate(rule: &serde_json::Value) -> Result<(), BuildError> {
    PredicateSet::from_rule(rule).map(|_| ())
}

impl Rule {
    /// Evaluate this child against a document.
    ///
    /// # Errors
    ///
    /// See [`PredicateSet::evaluate()`].
    pub fn evaluate<D: AsRef<Value> + ?Sized>(&self, document: &D) -> Result<bool, EvalError> {
        match self {
            Rule::Leaf(predicate) => predicate.evaluate(document),
            Rule::Node(set) => set.evaluate(document),
        }
    }
}

impl From<Predicate> for Rule {
    fn from(p: Predicate) -> Self {
        Rule::Leaf(p)
    }
}

impl From<PredicateSet> for Rule {
    fn from(s: PredicateSet) -> Self {
        Rule::Node(s)
    }
}

impl TryFrom<serde_json::Value> for PredicateSet {
    type Error = BuildError;

    fn try_from(rule: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_rule(&rule)
    }
}

impl From<PredicateSet> for serde_json::Value {
    fn from(set: PredicateSet) -> Self {
        set.to_rule()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Leaf(p) => write!(f, "{p}"),
            Rule::Node(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for PredicateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.logic)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}
