//! Filters a stream of change events through a webhook's conditions before
//! delivery. Run with `RUST_LOG=condset=trace` to see each predicate.

use condset::{validate, ConditionError, PredicateSet, Value};
use serde_json::json;

fn main() -> Result<(), ConditionError> {
    env_logger::init();

    let conditions = json!({"and": [
        {"attr": "object_type", "op": "in", "value": ["dcim.device", "dcim.interface"]},
        {"attr": "data.status", "value": "active"},
        {"OR": [
            {"attr": "data.tags.slug", "op": "contains", "value": "monitored"},
            {"attr": "data.name", "op": "regex", "value": "^(edge|core)-"}
        ]}
    ]});

    // Reject bad conditions when the webhook is saved, not when it fires.
    validate(&conditions)?;
    let set = PredicateSet::from_rule(&conditions)?;
    println!("conditions: {set}");

    let events = [
        json!({
            "object_type": "dcim.device",
            "data": {"name": "edge-fra-1", "status": "active", "tags": []}
        }),
        json!({
            "object_type": "dcim.device",
            "data": {"name": "lab-1", "status": "active", "tags": [{"slug": "monitored"}]}
        }),
        json!({
            "object_type": "dcim.site",
            "data": {"name": "core-fra", "status": "active"}
        }),
        json!({
            "object_type": "dcim.interface",
            "data": {"name": "eth0", "status": "planned"}
        }),
    ];

    for event in events {
        let object_type = event["object_type"].clone();
        let doc = Value::from(event);
        match set.evaluate(&doc) {
            Ok(true) => println!("deliver {object_type}"),
            Ok(false) => println!("skip    {object_type}"),
            Err(err) => println!("error   {object_type}: {err}"),
        }
    }

    // A rule that fails construction never reaches evaluation.
    let broken = json!({"and": [{"attr": "data.name", "op": "gt", "value": "m"}]});
    if let Err(err) = validate(&broken) {
        println!("rejected: {err}");
    }

    Ok(())
}
