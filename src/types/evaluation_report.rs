use std::fmt;
use std::time::Duration;

use super::operator::Operator;

/// Detailed evaluation report returned by
/// [`PredicateSet::evaluate_detailed()`](super::PredicateSet::evaluate_detailed).
///
/// Contains the verdict, the outcome of each predicate in the order it was
/// evaluated, and the wall-clock duration. Predicates skipped by
/// short-circuiting do not appear.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    matched: bool,
    outcomes: Vec<Outcome>,
    duration: Duration,
}

/// The result of one evaluated predicate, negation already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub attribute: String,
    pub op: Operator,
    pub negated: bool,
    pub result: bool,
}

impl EvaluationReport {
    pub(crate) fn new(matched: bool, outcomes: Vec<Outcome>, duration: Duration) -> Self {
        Self {
            matched,
            outcomes,
            duration,
        }
    }

    /// The verdict, same as [`PredicateSet::evaluate()`](super::PredicateSet::evaluate).
    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Attributes of the predicates that evaluated to `true`, in evaluation order.
    #[must_use]
    pub fn passed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.result)
            .map(|o| o.attribute.as_str())
            .collect()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = if self.negated { "NOT " } else { "" };
        write!(f, "{not}{} {} = {}", self.attribute, self.op, self.result)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matched: {}", self.matched)?;
        write!(f, ", evaluated: [")?;
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{outcome}")?;
        }
        write!(f, "], duration: {:?}", self.duration)
    }
}
