use std::fmt;
use std::str::FromStr;

use super::value::ValueKind;

/// Comparison operators a [`Predicate`](super::Predicate) may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Contains,
    Regex,
}

/// Boolean combinator of a [`PredicateSet`](super::PredicateSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    And,
    Or,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Eq,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::In,
        Operator::Contains,
        Operator::Regex,
    ];

    /// The name used in rule descriptions.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::In => "in",
            Operator::Contains => "contains",
            Operator::Regex => "regex",
        }
    }

    /// Operators permitted for a reference value of the given kind.
    /// Mappings are not valid reference values and permit nothing.
    #[must_use]
    pub fn allowed_for(kind: ValueKind) -> &'static [Operator] {
        use Operator::{Contains, Eq, Gt, Gte, In, Lt, Lte, Regex};
        match kind {
            ValueKind::String => &[Eq, Contains, Regex],
            ValueKind::Bool => &[Eq, Contains],
            ValueKind::Int | ValueKind::Float => &[Eq, Gt, Gte, Lt, Lte, Contains],
            ValueKind::List => &[Eq, In, Contains],
            ValueKind::Null => &[Eq],
            ValueKind::Map => &[],
        }
    }

    #[must_use]
    pub fn accepts(self, kind: ValueKind) -> bool {
        Self::allowed_for(kind).contains(&self)
    }
}

/// Returned when parsing an unknown operator or logic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl FromStr for Operator {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_owned()))
    }
}

impl Logic {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Logic::And => "and",
            Logic::Or => "or",
        }
    }
}

impl FromStr for Logic {
    type Err = UnknownName;

    /// Case-insensitive: `"AND"`, `"And"` and `"and"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("and") {
            Ok(Logic::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(Logic::Or)
        } else {
            Err(UnknownName(s.to_owned()))
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
