use std::borrow::Cow;
use std::cmp::Ordering;
use std::time::Instant;

use crate::types::Check;
use crate::{
    AttributePath, EvalError, EvaluationReport, Logic, Outcome, Predicate, PredicateSet, Rule,
    Value,
};

/// Resolve a dotted path against a document.
///
/// A mapping yields the value under the segment, or null when absent. A list
/// broadcasts the lookup over its elements, producing a list of per-element
/// results; every element must then be a mapping. Any other node makes the
/// whole path resolve to null. Resolution never fails.
///
/// ```
/// use condset::{resolve, AttributePath, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"items": [{"x": 1}, {"x": 2}]}));
/// let path = AttributePath::parse("items.x").unwrap();
/// assert_eq!(*resolve(&doc, &path), Value::from(vec![1_i64, 2]));
/// ```
#[must_use]
pub fn resolve<'a>(document: &'a Value, path: &AttributePath) -> Cow<'a, Value> {
    let mut node = Cow::Borrowed(document);
    for segment in path.segments() {
        match step(node, segment) {
            Some(next) => node = next,
            None => return Cow::Owned(Value::Null),
        }
    }
    node
}

fn step<'a>(node: Cow<'a, Value>, key: &str) -> Option<Cow<'a, Value>> {
    match node {
        Cow::Borrowed(Value::Map(map)) => {
            Some(map.get(key).map_or(Cow::Owned(Value::Null), Cow::Borrowed))
        }
        Cow::Owned(Value::Map(mut map)) => {
            Some(Cow::Owned(map.remove(key).unwrap_or(Value::Null)))
        }
        Cow::Borrowed(Value::List(items)) => broadcast(items, key).map(Cow::Owned),
        Cow::Owned(Value::List(items)) => broadcast(&items, key).map(Cow::Owned),
        _ => None,
    }
}

fn broadcast(items: &[Value], key: &str) -> Option<Value> {
    items
        .iter()
        .map(|item| match item {
            Value::Map(map) => Some(map.get(key).cloned().unwrap_or(Value::Null)),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(Value::List)
}

pub(crate) fn predicate(p: &Predicate, document: &Value) -> Result<bool, EvalError> {
    let resolved = resolve(document, &p.attribute);
    let result = apply(p, &resolved).map_err(|expected| {
        let err = EvalError::TypeMismatch {
            attribute: p.attribute().to_owned(),
            op: p.op,
            expected,
            found: resolved.kind(),
        };
        log::debug!("condition evaluation failed: {err}");
        err
    })?;
    let result = result != p.negate;
    log::trace!("{p} => {result}");
    Ok(result)
}

/// Apply the compiled check. `Err` carries what the operator expected to find.
fn apply(p: &Predicate, resolved: &Value) -> Result<bool, &'static str> {
    match &p.check {
        Check::Equal => Ok(*resolved == p.value),
        Check::Order(accept) => order(resolved, &p.value).map(|ord| ord.is_some_and(*accept)),
        Check::Member => Ok(match &p.value {
            Value::List(items) => items.contains(resolved),
            _ => false,
        }),
        Check::Contains => contains(resolved, &p.value),
        Check::Matches(regex) => match resolved {
            Value::String(s) => Ok(regex.is_match(s)),
            _ => Err("a string"),
        },
    }
}

/// `Ok(None)` when both sides are numbers but unordered (NaN). A resolved
/// boolean orders as 0 or 1.
fn order(resolved: &Value, reference: &Value) -> Result<Option<Ordering>, &'static str> {
    match (resolved.as_numeric(), reference.as_numeric()) {
        (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
        _ => Err("a number"),
    }
}

fn contains(resolved: &Value, reference: &Value) -> Result<bool, &'static str> {
    match (resolved, reference) {
        (Value::List(items), _) => Ok(items.contains(reference)),
        (Value::String(haystack), Value::String(needle)) => Ok(haystack.contains(needle.as_str())),
        (Value::String(_), _) => Err("a list or mapping for a non-string reference"),
        (Value::Map(map), Value::String(key)) => Ok(map.contains_key(key)),
        (Value::Map(_), Value::List(_)) => Err("a list or string for a list reference"),
        (Value::Map(_), _) => Ok(false),
        _ => Err("a list, string or mapping"),
    }
}

pub(crate) fn set(s: &PredicateSet, document: &Value) -> Result<bool, EvalError> {
    walk(s, document, &mut |_, _| {})
}

pub(crate) fn set_detailed(
    s: &PredicateSet,
    document: &Value,
) -> Result<EvaluationReport, EvalError> {
    let start = Instant::now();
    let mut outcomes = Vec::new();
    let matched = walk(s, document, &mut |p: &Predicate, result| {
        outcomes.push(Outcome {
            attribute: p.attribute().to_owned(),
            op: p.op,
            negated: p.negate,
            result,
        });
    })?;
    Ok(EvaluationReport::new(matched, outcomes, start.elapsed()))
}

fn walk(
    s: &PredicateSet,
    document: &Value,
    observe: &mut dyn FnMut(&Predicate, bool),
) -> Result<bool, EvalError> {
    match s.logic {
        Logic::And => {
            for child in &s.children {
                if !walk_rule(child, document, observe)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Logic::Or => {
            for child in &s.children {
                if walk_rule(child, document, observe)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

fn walk_rule(
    rule: &Rule,
    document: &Value,
    observe: &mut dyn FnMut(&Predicate, bool),
) -> Result<bool, EvalError> {
    match rule {
        Rule::Leaf(p) => {
            let result = predicate(p, document)?;
            observe(p, result);
            Ok(result)
        }
        Rule::Node(s) => walk(s, document, observe),
    }
}
