use condset::{attr, Document, PredicateSet, Rule};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value as Json};

/// Build a flat AND over `n` predicates (each comparing a unique attribute)
/// and a document that satisfies all of them.
fn build_flat(n: usize) -> (PredicateSet, Document) {
    let mut doc = Document::new();
    let mut children = Vec::with_capacity(n);
    for i in 0..n {
        let name = format!("f{i}");
        children.push(attr(&name).gte(1_i64).unwrap());
        doc = doc.set(&name, 10_i64);
    }
    (PredicateSet::all(children), doc)
}

/// Rule description of `depth` alternating AND/OR sets, each holding a
/// dotted-path predicate and the next level.
fn nested_rule(depth: usize) -> Json {
    let mut rule = json!({"attr": "router.name", "op": "regex", "value": "^edge-"});
    for level in 0..depth {
        let key = if level % 2 == 0 { "and" } else { "or" };
        rule = json!({ key: [
            {"attr": format!("router.l{level}"), "op": "lte", "value": 100},
            rule
        ]});
    }
    rule
}

fn nested_document(depth: usize) -> Document {
    let mut doc = Document::new().set("router.name", "edge-fra-1");
    for level in 0..depth {
        doc = doc.set(&format!("router.l{level}"), level as i64);
    }
    doc
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_eval");

    for &n in &[5, 20, 50] {
        let (set, doc) = build_flat(n);
        group.bench_function(&format!("{n}_predicates_flat"), |b| {
            b.iter(|| set.evaluate(black_box(&doc)));
        });
        group.bench_function(&format!("{n}_predicates_detailed"), |b| {
            b.iter(|| set.evaluate_detailed(black_box(&doc)));
        });
    }

    for &depth in &[4, 16] {
        let set = PredicateSet::from_rule(&nested_rule(depth)).unwrap();
        let doc = nested_document(depth);
        group.bench_function(&format!("{depth}_levels_nested"), |b| {
            b.iter(|| set.evaluate(black_box(&doc)));
        });
    }

    group.finish();
}

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");

    let set = PredicateSet::from_rule(&json!({"and": [
        {"attr": "sessions.state", "op": "contains", "value": "established"}
    ]}))
    .unwrap();

    for &n in &[10, 100, 1000] {
        let sessions: Vec<Json> = (0..n)
            .map(|i| json!({"state": if i == n - 1 { "established" } else { "idle" }}))
            .collect();
        let doc = condset::Value::from(json!({ "sessions": sessions }));
        group.bench_function(&format!("{n}_elements"), |b| {
            b.iter(|| set.evaluate(black_box(&doc)));
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &n in &[5, 20, 50] {
        let rule = json!({"or": (0..n)
            .map(|i| json!({"attr": format!("f{i}"), "op": "regex", "value": format!("^v{i}-")}))
            .collect::<Vec<_>>()});

        group.bench_function(&format!("{n}_predicates_from_rule"), |b| {
            b.iter(|| black_box(PredicateSet::from_rule(&rule).unwrap()));
        });

        group.bench_function(&format!("{n}_predicates_builder"), |b| {
            b.iter(|| {
                let children: Vec<Rule> = (0..n)
                    .map(|i| Rule::from(attr(&format!("f{i}")).regex(&format!("^v{i}-")).unwrap()))
                    .collect();
                black_box(PredicateSet::any(children))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_broadcast, bench_construction);
criterion_main!(benches);
