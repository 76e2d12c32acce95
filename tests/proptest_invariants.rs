mod strategies;

use condset::{validate, PredicateSet, Rule, Value};
use proptest::prelude::*;
use strategies::{arb_document, arb_predicate, arb_set};

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// The same set + document always produces the same verdict.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn determinism(set in arb_set(3), doc in arb_document()) {
        let first = set.evaluate(&doc).unwrap();
        for _ in 0..5 {
            prop_assert_eq!(first, set.evaluate(&doc).unwrap());
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Negation
//
// A negated predicate always returns the inverse of the plain predicate.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn negation_inverts(p in arb_predicate(), doc in arb_document()) {
        let plain = p.evaluate(&doc).unwrap();
        let negated = (!p).evaluate(&doc).unwrap();
        prop_assert_eq!(negated, !plain);
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Combinator semantics
//
// AND equals "every child is true", OR equals "some child is true",
// evaluating each child on its own.
// ---------------------------------------------------------------------------

fn child_results(set: &PredicateSet, doc: &Value) -> Vec<bool> {
    set.children()
        .iter()
        .map(|child: &Rule| child.evaluate(doc).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn and_is_all_children(set in arb_set(2), doc in arb_document()) {
        let all = PredicateSet::all(set.children().to_vec());
        let expected = child_results(&all, &doc).into_iter().all(|r| r);
        prop_assert_eq!(all.evaluate(&doc).unwrap(), expected);
    }

    #[test]
    fn or_is_any_child(set in arb_set(2), doc in arb_document()) {
        let any = PredicateSet::any(set.children().to_vec());
        let expected = child_results(&any, &doc).into_iter().any(|r| r);
        prop_assert_eq!(any.evaluate(&doc).unwrap(), expected);
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Rule description round trip
//
// Rebuilding from `to_rule()` yields an equal set with identical verdicts,
// and `validate` accepts every description `to_rule()` produces.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn to_rule_rebuilds_equal_set(set in arb_set(3), doc in arb_document()) {
        let rule = set.to_rule();
        prop_assert!(validate(&rule).is_ok());
        let rebuilt = PredicateSet::from_rule(&rule).unwrap();
        prop_assert_eq!(&rebuilt, &set);
        prop_assert_eq!(rebuilt.evaluate(&doc).unwrap(), set.evaluate(&doc).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Invariant 5: Detailed report consistency
//
// The detailed verdict matches `evaluate`, no more predicates are reported
// than the tree holds, and the verdict of a non-empty AND that matched has
// every reported outcome true.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn detailed_matches_evaluate(set in arb_set(3), doc in arb_document()) {
        let report = set.evaluate_detailed(&doc).unwrap();
        prop_assert_eq!(report.matched(), set.evaluate(&doc).unwrap());
        prop_assert!(report.outcomes().len() <= set.predicate_count());
    }

    #[test]
    fn flat_and_match_reports_only_passes(
        preds in prop::collection::vec(arb_predicate(), 1..6),
        doc in arb_document(),
    ) {
        let set = PredicateSet::all(preds);
        let report = set.evaluate_detailed(&doc).unwrap();
        if report.matched() {
            prop_assert_eq!(report.outcomes().len(), set.predicate_count());
            prop_assert!(report.outcomes().iter().all(|o| o.result));
        } else {
            // Stops at the first failing predicate.
            let last = report.outcomes().last().unwrap();
            prop_assert!(!last.result);
            prop_assert!(report.outcomes()[..report.outcomes().len() - 1]
                .iter()
                .all(|o| o.result));
        }
    }
}
