use std::cmp::Ordering;
use std::fmt;
use std::ops::Not;

use regex::Regex;

use super::error::{BuildError, EvalError};
use super::operator::Operator;
use super::path::AttributePath;
use super::value::{Value, ValueKind};

/// A single test: the value found at `attribute` in a document, compared to a
/// reference value with one operator, optionally negated.
///
/// # Example
///
/// ```
/// use condset::{attr, Document};
///
/// let transit = attr("tags").contains("transit").unwrap();
/// let doc = Document::new().set("tags", vec!["transit", "ix"]);
/// assert!(transit.evaluate(&doc).unwrap());
/// assert!(!(!transit).evaluate(&doc).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Predicate {
    pub(crate) attribute: AttributePath,
    pub(crate) op: Operator,
    pub(crate) value: Value,
    pub(crate) negate: bool,
    pub(crate) check: Check,
}

/// The operator compiled against its reference value. Selected once at
/// construction so evaluation never dispatches on names.
#[derive(Debug, Clone)]
pub(crate) enum Check {
    Equal,
    Order(fn(Ordering) -> bool),
    Member,
    Contains,
    Matches(Regex),
}

impl Predicate {
    /// Build a predicate, validating the reference value against the operator.
    ///
    /// # Errors
    ///
    /// - [`BuildError::UnsupportedValueType`] if `value` is a mapping, or a
    ///   list holding anything but primitives.
    /// - [`BuildError::IncompatibleOperator`] if `op` is not allowed for the
    ///   type of `value`.
    /// - [`BuildError::EmptyAttribute`] if `attribute` is empty.
    /// - [`BuildError::InvalidPattern`] if `op` is [`Operator::Regex`] and the
    ///   pattern does not compile.
    pub fn new(
        attribute: &str,
        value: impl Into<Value>,
        op: Operator,
        negate: bool,
    ) -> Result<Self, BuildError> {
        let value = value.into();
        check_reference(&value)?;
        let kind = value.kind();
        if !op.accepts(kind) {
            return Err(BuildError::IncompatibleOperator { op, kind });
        }
        let attribute = AttributePath::parse(attribute)?;
        let check = compile_check(op, &value)?;
        Ok(Self {
            attribute,
            op,
            value,
            negate,
            check,
        })
    }

    /// Evaluate this predicate against a document.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::TypeMismatch`] when the operator cannot be applied
    /// to the resolved value (for example `gt` on a missing attribute).
    pub fn evaluate<D: AsRef<Value> + ?Sized>(&self, document: &D) -> Result<bool, EvalError> {
        crate::evaluate::predicate(self, document.as_ref())
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        self.attribute.as_str()
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.op
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negate
    }
}

fn check_reference(value: &Value) -> Result<(), BuildError> {
    match value {
        Value::Map(_) => Err(BuildError::UnsupportedValueType {
            kind: ValueKind::Map,
        }),
        Value::List(items) => match items.iter().find(|item| !item.is_primitive()) {
            Some(item) => Err(BuildError::UnsupportedValueType { kind: item.kind() }),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

fn compile_check(op: Operator, value: &Value) -> Result<Check, BuildError> {
    Ok(match op {
        Operator::Eq => Check::Equal,
        Operator::Gt => Check::Order(Ordering::is_gt),
        Operator::Gte => Check::Order(Ordering::is_ge),
        Operator::Lt => Check::Order(Ordering::is_lt),
        Operator::Lte => Check::Order(Ordering::is_le),
        Operator::In => Check::Member,
        Operator::Contains => Check::Contains,
        Operator::Regex => {
            let Value::String(pattern) = value else {
                return Err(BuildError::IncompatibleOperator {
                    op,
                    kind: value.kind(),
                });
            };
            // Anchored at the start only: a match must begin at position 0
            // but may end anywhere.
            let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
                BuildError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            Check::Matches(regex)
        }
    })
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.attribute == other.attribute
            && self.op == other.op
            && self.value == other.value
            && self.negate == other.negate
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(mut self) -> Predicate {
        self.negate = !self.negate;
        self
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negate {
            write!(f, "(NOT {} {} {})", self.attribute, self.op, self.value)
        } else {
            write!(f, "({} {} {})", self.attribute, self.op, self.value)
        }
    }
}

/// Intermediate builder for predicates. Created by [`attr()`]; each
/// comparison method validates and produces a [`Predicate`].
#[derive(Debug, Clone)]
pub struct AttrExpr {
    path: String,
}

impl AttrExpr {
    fn build(self, op: Operator, value: impl Into<Value>) -> Result<Predicate, BuildError> {
        Predicate::new(&self.path, value, op, false)
    }

    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn eq(self, value: impl Into<Value>) -> Result<Predicate, BuildError> {
        self.build(Operator::Eq, value)
    }

    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn gt(self, value: impl Into<Value>) -> Result<Predicate, BuildError> {
        self.build(Operator::Gt, value)
    }

    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn gte(self, value: impl Into<Value>) -> Result<Predicate, BuildError> {
        self.build(Operator::Gte, value)
    }

    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn lt(self, value: impl Into<Value>) -> Result<Predicate, BuildError> {
        self.build(Operator::Lt, value)
    }

    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn lte(self, value: impl Into<Value>) -> Result<Predicate, BuildError> {
        self.build(Operator::Lte, value)
    }

    /// The resolved value is one of the listed values.
    ///
    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn is_in(self, values: impl Into<Value>) -> Result<Predicate, BuildError> {
        self.build(Operator::In, values)
    }

    /// The resolved value (list, string or mapping) contains `value`.
    ///
    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn contains(self, value: impl Into<Value>) -> Result<Predicate, BuildError> {
        self.build(Operator::Contains, value)
    }

    /// The resolved string matches `pattern` starting at its first character.
    ///
    /// # Errors
    ///
    /// See [`Predicate::new()`].
    pub fn regex(self, pattern: &str) -> Result<Predicate, BuildError> {
        self.build(Operator::Regex, pattern)
    }
}

#[must_use]
pub fn attr(path: &str) -> AttrExpr {
    AttrExpr {
        path: path.to_owned(),
    }
}
