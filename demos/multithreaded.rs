use std::sync::Arc;
use std::thread;

use condset::{Document, PredicateSet};

fn main() {
    let set = Arc::new(
        PredicateSet::from_json(
            r#"{"and": [
                {"attr": "user.age", "op": "gte", "value": 18},
                {"attr": "user.status", "value": "active"}
            ]}"#,
        )
        .expect("failed to build condition set"),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                let doc = Document::new()
                    .set("user.age", 16_i64 + i64::from(i))
                    .set("user.status", "active");

                let result = set.evaluate(&doc);
                println!("Thread {i}: {result:?}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
