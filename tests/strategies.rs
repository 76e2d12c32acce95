#![allow(dead_code)]

use condset::{attr, Document, Predicate, PredicateSet, Rule, Value};
use proptest::prelude::*;

// --- Fixed document schema ---
// status       : string, one of {"enabled", "disabled", "maintenance"}
// asn          : i64 (0..=70_000)
// tags         : list of strings drawn from TAGS
// router.name  : string, one of ROUTERS
// sessions     : list of {"state": one of STATES}

const STATUSES: &[&str] = &["enabled", "disabled", "maintenance"];
const TAGS: &[&str] = &["transit", "ix", "private", "cdn"];
const ROUTERS: &[&str] = &["AS-EDGE-1", "AS-EDGE-2", "core-1", "lab"];
const STATES: &[&str] = &["established", "idle", "active"];

/// Generate a document that aligns with the fixed schema.
pub fn arb_document() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(STATUSES),
        0_i64..=70_000,
        prop::sample::subsequence(TAGS, 0..=TAGS.len()),
        prop::sample::select(ROUTERS),
        prop::collection::vec(prop::sample::select(STATES), 0..4),
    )
        .prop_map(|(status, asn, tags, router, states)| {
            let sessions: Vec<Value> = states
                .into_iter()
                .map(|state| Document::new().set("state", state).into_value())
                .collect();
            Document::new()
                .set("status", status)
                .set("asn", asn)
                .set("tags", tags)
                .set("router.name", router)
                .set("sessions", sessions)
                .into_value()
        })
}

/// Generate a predicate that is well-typed against the schema, so evaluating
/// it never raises a type mismatch.
pub fn arb_predicate() -> impl Strategy<Value = Predicate> {
    let leaf = prop_oneof![
        // asn comparisons
        (0_i64..=70_000, 0u8..6).prop_map(|(val, op)| {
            let a = attr("asn");
            match op {
                0 => a.eq(val),
                1 => a.gt(val),
                2 => a.gte(val),
                3 => a.lt(val),
                4 => a.lte(val),
                _ => a.is_in(vec![val, val + 1]),
            }
        }),
        // status equality / membership / prefix
        (prop::sample::select(STATUSES), 0u8..3).prop_map(|(val, op)| match op {
            0 => attr("status").eq(val),
            1 => attr("status").is_in(vec![val, "enabled"]),
            _ => attr("status").regex(&val[..3]),
        }),
        // tag membership
        prop::sample::select(TAGS).prop_map(|tag| attr("tags").contains(tag)),
        // router name prefix
        prop::sample::select(&["AS", "core", "lab", "x"][..])
            .prop_map(|prefix| attr("router.name").regex(prefix)),
        // broadcast over sessions
        prop::sample::select(STATES).prop_map(|state| attr("sessions.state").contains(state)),
        // absent attribute
        Just(()).prop_map(|()| attr("sla.tier").eq(Value::Null)),
    ];
    (leaf, any::<bool>()).prop_map(|(built, negate)| {
        let p = built.expect("generated predicate should build");
        if negate {
            !p
        } else {
            p
        }
    })
}

/// Generate a rule tree (AND / OR of predicates), bounded depth.
pub fn arb_set(max_depth: u32) -> impl Strategy<Value = PredicateSet> {
    let leaf = arb_predicate().prop_map(Rule::Leaf);
    let tree = leaf.prop_recursive(max_depth, 24, 4, |inner| {
        (any::<bool>(), prop::collection::vec(inner, 0..4)).prop_map(|(is_and, children)| {
            Rule::Node(if is_and {
                PredicateSet::all(children)
            } else {
                PredicateSet::any(children)
            })
        })
    });
    (any::<bool>(), prop::collection::vec(tree, 0..4)).prop_map(|(is_and, children)| {
        if is_and {
            PredicateSet::all(children)
        } else {
            PredicateSet::any(children)
        }
    })
}

/// Generate an arbitrary JSON value, used for documents of unknown shape and
/// for fuzzing rule descriptions.
pub fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        (-1.0e6_f64..1.0e6).prop_map(serde_json::Value::from),
        "[a-z]{0,6}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map(
                prop::sample::select(&["a", "b", "attr", "op", "value", "and", "or"][..]),
                inner,
                0..4,
            )
            .prop_map(|map| {
                serde_json::Value::Object(
                    map.into_iter().map(|(k, v)| (k.to_owned(), v)).collect(),
                )
            }),
        ]
    })
}

/// Generate a dotted attribute path over a small alphabet, so paths often hit
/// keys produced by [`arb_json()`].
pub fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(&["a", "b", "value"][..]), 1..4)
        .prop_map(|segments| segments.join("."))
}
