use serde_json::{Map, Value as Json};

use crate::{BuildError, Logic, Operator, Predicate, PredicateSet, Rule, Value};

const PREDICATE_FIELDS: [&str; 4] = ["attr", "op", "value", "negate"];

pub(crate) fn build(rule: &Json) -> Result<PredicateSet, BuildError> {
    let set = build_set(rule)?;
    log::debug!(
        "built '{}' rule set with {} predicates",
        set.logic,
        set.predicate_count()
    );
    Ok(set)
}

fn build_set(rule: &Json) -> Result<PredicateSet, BuildError> {
    let Json::Object(map) = rule else {
        return Err(BuildError::MalformedRuleSet {
            reason: format!("rule set must be a mapping, not {}", json_kind(rule)),
        });
    };

    let mut entries = map.iter();
    let (Some((key, operands)), None) = (entries.next(), entries.next()) else {
        return Err(BuildError::MalformedRuleSet {
            reason: format!(
                "rule set must have exactly one logical operator (found {})",
                map.len()
            ),
        });
    };

    let logic: Logic = key
        .parse()
        .map_err(|_| BuildError::InvalidLogicOperator { logic: key.clone() })?;

    let Json::Array(items) = operands else {
        return Err(BuildError::MalformedRuleSet {
            reason: format!(
                "operands of '{logic}' must be a list, not {}",
                json_kind(operands)
            ),
        });
    };

    let children = items
        .iter()
        .map(build_rule)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PredicateSet::new(logic, children))
}

/// A mapping whose only key names a logic operator is a nested set;
/// anything else is treated as a predicate.
fn is_rule_set(rule: &Json) -> bool {
    match rule {
        Json::Object(map) if map.len() == 1 => map.keys().all(|k| k.parse::<Logic>().is_ok()),
        _ => false,
    }
}

fn build_rule(rule: &Json) -> Result<Rule, BuildError> {
    if is_rule_set(rule) {
        Ok(Rule::Node(build_set(rule)?))
    } else {
        Ok(Rule::Leaf(build_predicate(rule)?))
    }
}

fn build_predicate(rule: &Json) -> Result<Predicate, BuildError> {
    let Json::Object(map) = rule else {
        return Err(malformed(format!(
            "condition must be a mapping, not {}",
            json_kind(rule)
        )));
    };

    if let Some(key) = map.keys().find(|k| !PREDICATE_FIELDS.contains(&k.as_str())) {
        return Err(malformed(format!("unexpected key '{key}'")));
    }

    let attribute = match map.get("attr") {
        Some(Json::String(s)) => s,
        Some(other) => {
            return Err(malformed(format!(
                "'attr' must be a string, not {}",
                json_kind(other)
            )))
        }
        None => return Err(malformed("missing 'attr'".to_owned())),
    };

    let value = map
        .get("value")
        .ok_or_else(|| malformed("missing 'value'".to_owned()))?;

    let op = match map.get("op") {
        None => Operator::Eq,
        Some(Json::String(s)) => s
            .parse()
            .map_err(|_| BuildError::InvalidOperator { op: s.clone() })?,
        Some(other) => {
            return Err(BuildError::InvalidOperator {
                op: other.to_string(),
            })
        }
    };

    let negate = match map.get("negate") {
        None => false,
        Some(Json::Bool(b)) => *b,
        Some(other) => {
            return Err(malformed(format!(
                "'negate' must be a boolean, not {}",
                json_kind(other)
            )))
        }
    };

    Predicate::new(attribute, Value::from(value), op, negate)
}

fn malformed(reason: String) -> BuildError {
    BuildError::MalformedPredicate { reason }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "list",
        Json::Object(_) => "mapping",
    }
}

pub(crate) fn describe(set: &PredicateSet) -> Json {
    let children = set
        .children
        .iter()
        .map(|child| match child {
            Rule::Leaf(p) => describe_predicate(p),
            Rule::Node(s) => describe(s),
        })
        .collect();

    let mut map = Map::new();
    map.insert(set.logic.as_str().to_owned(), Json::Array(children));
    Json::Object(map)
}

fn describe_predicate(p: &Predicate) -> Json {
    let mut map = Map::new();
    map.insert("attr".to_owned(), Json::String(p.attribute().to_owned()));
    map.insert("op".to_owned(), Json::String(p.op.as_str().to_owned()));
    map.insert("value".to_owned(), p.value.clone().into());
    if p.negate {
        map.insert("negate".to_owned(), Json::Bool(true));
    }
    Json::Object(map)
}
