//! Property-based tests for the dispatch protocol.
//!
//! These tests use proptest to verify the protocol invariants over generated
//! reports:
//! - empty short-circuit (one line, zero sink calls)
//! - category ordering and within-category sequence order
//! - count accuracy of `on_category_begin`
//! - cache identity within a dispatch and isolation across dispatches
//! - the skip invariant

use crate::dispatch::dispatch;
use crate::test_support::{Call, ProbeSink, VecLog};
use issuecast_types::{Category, ClassifiedReport, Issue};
use proptest::prelude::*;

/// Strategy for issue messages (printable, no newlines).
fn arb_message() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.,-]{1,40}"
}

/// Strategy for relative source paths.
fn arb_file_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,8}(/[a-z][a-z0-9_]{0,8}){0,3}\\.[a-z]{1,4}")
        .unwrap()
}

fn arb_issue() -> impl Strategy<Value = Issue> {
    (arb_message(), arb_file_path(), 0u32..100_000)
        .prop_map(|(message, path, line)| Issue::new(message, path.as_str(), line))
}

fn arb_issues(max: usize) -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(arb_issue(), 0..max)
}

fn arb_report() -> impl Strategy<Value = ClassifiedReport> {
    (arb_issues(12), arb_issues(12), arb_issues(12)).prop_map(|(new, outstanding, fixed)| {
        ClassifiedReport {
            new,
            outstanding,
            fixed,
        }
    })
}

/// Category rank in the fixed dispatch order.
fn rank(category: Category) -> u8 {
    match category {
        Category::New => 0,
        Category::Outstanding => 1,
        Category::Fixed => 2,
    }
}

proptest! {
    /// An empty report yields exactly one log line and zero sink calls.
    #[test]
    fn empty_report_short_circuits(_seed in any::<u64>()) {
        let sink = ProbeSink::new();
        let mut out = VecLog::default();

        dispatch(&ClassifiedReport::default(), &sink, &mut out).unwrap();

        prop_assert_eq!(out.lines.len(), 1);
        prop_assert!(sink.calls().is_empty());
    }

    /// Categories arrive in new -> outstanding -> fixed order, and issues
    /// within a category in the report's original sequence order.
    #[test]
    fn category_and_sequence_order_are_preserved(report in arb_report()) {
        prop_assume!(!report.is_empty());

        let sink = ProbeSink::new();
        let mut out = VecLog::default();
        dispatch(&report, &sink, &mut out).unwrap();

        let calls = sink.calls();

        // Category order across CategoryBegin calls is strictly increasing.
        let begins: Vec<Category> = calls
            .iter()
            .filter_map(|c| match c {
                Call::CategoryBegin { category, .. } => Some(*category),
                _ => None,
            })
            .collect();
        for pair in begins.windows(2) {
            prop_assert!(rank(pair[0]) < rank(pair[1]),
                "category order violated: {:?} before {:?}", pair[0], pair[1]);
        }

        // Within each category, delivered messages match the report order.
        for category in Category::ALL {
            let delivered: Vec<String> = calls
                .iter()
                .filter_map(|c| match c {
                    Call::Issue { category: cat, message, .. } if *cat == category => {
                        Some(message.clone())
                    }
                    _ => None,
                })
                .collect();
            let expected: Vec<String> = report
                .issues(category)
                .iter()
                .map(|i| i.message.clone())
                .collect();
            prop_assert_eq!(delivered, expected);
        }
    }

    /// The count passed to on_category_begin equals the number of issues
    /// subsequently delivered for that category; empty categories never
    /// trigger a begin call.
    #[test]
    fn begin_counts_match_deliveries(report in arb_report()) {
        prop_assume!(!report.is_empty());

        let sink = ProbeSink::new();
        let mut out = VecLog::default();
        dispatch(&report, &sink, &mut out).unwrap();

        let calls = sink.calls();
        for category in Category::ALL {
            let begin_count: Option<usize> = calls.iter().find_map(|c| match c {
                Call::CategoryBegin { category: cat, count, .. } if *cat == category => {
                    Some(*count)
                }
                _ => None,
            });
            let delivered = calls
                .iter()
                .filter(|c| matches!(c, Call::Issue { category: cat, .. } if *cat == category))
                .count();

            if report.issues(category).is_empty() {
                prop_assert_eq!(begin_count, None);
                prop_assert_eq!(delivered, 0);
            } else {
                prop_assert_eq!(begin_count, Some(delivered));
                prop_assert_eq!(delivered, report.issues(category).len());
            }
        }
    }

    /// Every call within one dispatch observes the same cache; back-to-back
    /// dispatches observe distinct caches.
    #[test]
    fn cache_identity_holds_per_dispatch(report in arb_report()) {
        prop_assume!(!report.is_empty());

        let sink = ProbeSink::new();
        let mut out = VecLog::default();
        dispatch(&report, &sink, &mut out).unwrap();
        dispatch(&report, &sink, &mut out).unwrap();

        let mut tokens_by_run: Vec<Vec<u64>> = Vec::new();
        let mut current: Vec<u64> = Vec::new();
        for call in sink.calls() {
            match call {
                Call::Prepare => current = Vec::new(),
                Call::CategoryBegin { token, .. } | Call::Issue { token, .. } => {
                    current.push(token);
                }
                Call::Complete { token } => {
                    current.push(token);
                    tokens_by_run.push(std::mem::take(&mut current));
                }
            }
        }

        prop_assert_eq!(tokens_by_run.len(), 2);
        for run in &tokens_by_run {
            prop_assert!(run.windows(2).all(|w| w[0] == w[1]),
                "cache token changed mid-dispatch: {:?}", run);
        }
        prop_assert_ne!(tokens_by_run[0][0], tokens_by_run[1][0]);
    }

    /// A skipping prepare suppresses every later stage, whatever the report.
    #[test]
    fn skip_suppresses_all_stages(report in arb_report()) {
        prop_assume!(!report.is_empty());

        let sink = ProbeSink::skipping();
        let mut out = VecLog::default();
        dispatch(&report, &sink, &mut out).unwrap();

        prop_assert_eq!(sink.calls(), vec![Call::Prepare]);
    }

    /// Total calls follow directly from the report shape:
    /// 1 prepare + one begin per non-empty category + one call per issue + 1 complete.
    #[test]
    fn call_volume_matches_report_shape(report in arb_report()) {
        prop_assume!(!report.is_empty());

        let sink = ProbeSink::new();
        let mut out = VecLog::default();
        dispatch(&report, &sink, &mut out).unwrap();

        let non_empty = Category::ALL
            .iter()
            .filter(|c| !report.issues(**c).is_empty())
            .count();
        prop_assert_eq!(sink.calls().len(), 1 + non_empty + report.total() + 1);
    }
}
