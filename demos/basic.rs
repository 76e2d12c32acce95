use condset::{attr, Document, PredicateSet, Rule};

fn main() {
    // Built in code: status must be enabled and the ASN private or very low.
    let set = PredicateSet::all(vec![
        Rule::from(attr("status").eq("enabled").expect("valid predicate")),
        Rule::from(PredicateSet::any(vec![
            attr("asn").gte(64512_i64).expect("valid predicate"),
            attr("asn").lt(200_i64).expect("valid predicate"),
        ])),
    ]);

    println!("{set}");

    let doc = Document::new()
        .set("status", "enabled")
        .set("asn", 65001_i64);

    match set.evaluate(&doc) {
        Ok(matched) => println!("Result: {matched}"),
        Err(err) => println!("Evaluation failed: {err}"),
    }

    // Missing attributes resolve to null, which cannot be ordered.
    match set.evaluate(&Document::new().set("status", "enabled")) {
        Ok(matched) => println!("Result: {matched}"),
        Err(err) => println!("Evaluation failed: {err}"),
    }
}
