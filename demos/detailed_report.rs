use condset::{PredicateSet, Value};
use serde_json::json;

fn main() {
    let set = PredicateSet::from_rule(&json!({"or": [
        {"attr": "router.name", "op": "regex", "value": "^edge-"},
        {"and": [
            {"attr": "sessions.state", "op": "contains", "value": "established"},
            {"attr": "status", "op": "in", "value": ["enabled", "draining"]},
            {"attr": "maintenance", "value": true, "negate": true}
        ]}
    ]}))
    .expect("failed to build condition set");

    let doc = Value::from(json!({
        "router": {"name": "core-ams-2"},
        "status": "draining",
        "maintenance": false,
        "sessions": [{"state": "idle"}, {"state": "established"}]
    }));

    let report = set.evaluate_detailed(&doc).expect("well-typed document");

    println!("{report}");
    println!();
    println!("Predicates that held: {:?}", report.passed());
    println!("Duration: {:?}", report.duration());
}
