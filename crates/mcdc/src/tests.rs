//! Hypothesis tests for the MC/DC engine
//!
//! Each test states a falsifiable claim about allocation, matching, or
//! evaluation behaviour.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::needless_range_loop)]

use super::*;

/// Allocate a table and register `rows` into it
fn table_of(ctx: &mut CoverageContext, name: &str, rows: &[Vec<bool>]) -> TableId {
    let cols = rows[0].len();
    let id = ctx.allocate_table(rows.len(), cols, name).unwrap();
    for row in rows {
        ctx.register_row(row).unwrap();
    }
    id
}

// ============================================================================
// Matching
// ============================================================================

mod matching_tests {
    use super::*;

    /// H₀-MATCH-01: the three-condition table only marks the rows observed
    #[test]
    fn test_partial_three_condition_table() {
        let mut ctx = CoverageContext::new();
        let id = table_of(
            &mut ctx,
            "a && b && c",
            &[
                vec![false, true, true],
                vec![true, false, true],
                vec![true, true, false],
                vec![true, true, true],
            ],
        );

        ctx.check_row(id, &[false, true, true]).unwrap();
        ctx.check_row(id, &[true, true, true]).unwrap();

        let report = ctx.evaluate();
        let table = report.table(id).unwrap();
        assert_eq!(table.checks_passed, 2);
        let checked: Vec<bool> = table.entries.iter().map(|e| e.checked).collect();
        assert_eq!(checked, vec![true, false, false, true]);
        assert_eq!(table.status, CoverageStatus::Fail);

        let text = TextFormatter::new(&report).generate();
        assert!(text.contains(" Test No. 1 | F T T | Checked"));
        assert!(text.contains(" Test No. 2 | T F T | Unchecked"));
        assert!(text.contains(" Test No. 3 | T T F | Unchecked"));
        assert!(text.contains(" Test No. 4 | T T T | Checked"));
    }

    /// H₀-MATCH-02: a single-condition decision passes once both outcomes are seen
    #[test]
    fn test_single_condition_table_passes() {
        let mut ctx = CoverageContext::new();
        let id = table_of(&mut ctx, "i == n", &[vec![false], vec![true]]);
        ctx.check_row(id, &[false]).unwrap();
        ctx.check_row(id, &[true]).unwrap();

        let report = ctx.evaluate();
        let table = report.table(id).unwrap();
        assert_eq!(table.checks_passed, 2);
        assert_eq!(table.rows, 2);
        assert_eq!(table.status, CoverageStatus::Pass);
        assert!(TextFormatter::new(&report).generate().contains("PASS"));
    }

    /// H₀-MATCH-03: repeated observations keep a row checked and count hits
    #[test]
    fn test_repeated_observations_accumulate() {
        let mut ctx = CoverageContext::new();
        let id = table_of(&mut ctx, "flag", &[vec![true], vec![false]]);
        for _ in 0..5 {
            ctx.check_row(id, &[true]).unwrap();
        }
        let table = ctx.table(id).unwrap();
        assert_eq!(table.hits(0), 5);
        assert_eq!(table.checks_passed(), 1);
    }

    /// H₀-MATCH-04: observing an unregistered vector never flips a flag
    #[test]
    fn test_unexpected_vector_is_discarded() {
        let mut ctx = CoverageContext::with_config(McdcConfig::builder().log_unmatched(true).build());
        let id = table_of(&mut ctx, "a || b", &[vec![true, false], vec![false, true]]);
        let outcome = ctx.check_row(id, &[false, false]).unwrap();
        assert_eq!(outcome, CheckOutcome::NoMatch);
        assert_eq!(ctx.table(id).unwrap().observed(), vec![false, false]);
    }
}

// ============================================================================
// Isolation and lifecycle
// ============================================================================

mod lifecycle_tests {
    use super::*;

    /// H₀-LIFE-01: filling the second table leaves the first untouched
    #[test]
    fn test_tables_are_isolated() {
        let mut ctx = CoverageContext::new();
        let first = table_of(&mut ctx, "first", &[vec![true, false], vec![false, true]]);
        let before = ctx.table(first).unwrap().expected().clone();

        let second = ctx.allocate_table(3, 2, "second").unwrap();
        for _ in 0..3 {
            ctx.register_row(&[true, true]).unwrap();
        }
        assert!(ctx.register_row(&[true, true]).is_err());
        ctx.check_row(second, &[true, true]).unwrap();

        assert_eq!(ctx.table(first).unwrap().expected(), &before);
        assert_eq!(ctx.table(first).unwrap().checks_passed(), 0);
    }

    /// H₀-LIFE-02: evaluating before registration completes flags the table
    #[test]
    fn test_early_evaluation_is_incomplete() {
        let mut ctx = CoverageContext::new();
        ctx.allocate_table(4, 3, "pending").unwrap();
        ctx.register_row(&[true, true, true]).unwrap();

        let report = ctx.evaluate();
        assert_eq!(report.tables()[0].status, CoverageStatus::Incomplete);
        assert_eq!(report.summary().incomplete_tables, 1);
    }

    /// H₀-LIFE-03: a failed allocation does not disturb the table under construction
    #[test]
    fn test_failed_allocation_keeps_registration_target() {
        let mut ctx = CoverageContext::with_config(McdcConfig::builder().max_cells_per_table(4).build());
        ctx.allocate_table(2, 2, "a && b").unwrap();
        ctx.register_row(&[true, true]).unwrap();

        assert!(ctx.allocate_table(5, 5, "too big").is_err());
        assert_eq!(ctx.register_row(&[true, false]).unwrap(), 1);
        assert_eq!(ctx.len(), 1);
    }

    /// H₀-LIFE-04: clearing observations allows the suite to run again
    #[test]
    fn test_rerun_after_clear() {
        let mut ctx = CoverageContext::new();
        let id = table_of(&mut ctx, "x", &[vec![true]]);
        ctx.check_row(id, &[true]).unwrap();
        assert!(ctx.evaluate().all_passed());

        ctx.clear_observations();
        assert!(!ctx.evaluate().all_passed());
        ctx.check_row(id, &[true]).unwrap();
        assert!(ctx.evaluate().all_passed());
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

mod logging_tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Shared in-memory sink for formatted events
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a TRACE-level subscriber and return what it logged
    fn capture(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn unmatched_check(log_unmatched: bool) -> String {
        capture(|| {
            let config = McdcConfig::builder().log_unmatched(log_unmatched).build();
            let mut ctx = CoverageContext::with_config(config);
            let id = table_of(&mut ctx, "a || b", &[vec![true, false], vec![false, true]]);
            ctx.check_row(id, &[false, false]).unwrap();
        })
    }

    /// H₀-LOG-01: a rejected allocation is reported at error level
    #[test]
    fn test_allocation_failure_logs_error() {
        let logs = capture(|| {
            let config = McdcConfig::builder().max_cells_per_table(4).build();
            let mut ctx = CoverageContext::with_config(config);
            assert!(ctx.allocate_table(3, 3, "too big").is_err());
        });
        let line = logs
            .lines()
            .find(|l| l.contains("MC/DC table allocation"))
            .unwrap();
        assert!(line.contains("ERROR"));
        assert!(line.contains("too big"));
    }

    /// H₀-LOG-02: unmatched observations are silent unless enabled
    #[test]
    fn test_no_match_logged_only_when_enabled() {
        let quiet = unmatched_check(false);
        assert!(!quiet.contains("observation matched no expected row"));

        let loud = unmatched_check(true);
        let line = loud
            .lines()
            .find(|l| l.contains("observation matched no expected row"))
            .unwrap();
        assert!(line.contains("DEBUG"));
        assert!(line.contains("FF"));
    }

    /// H₀-LOG-03: allocation, matches, and evaluation each leave an event
    #[test]
    fn test_lifecycle_events() {
        let logs = capture(|| {
            let mut ctx = CoverageContext::new();
            let id = table_of(&mut ctx, "i == n", &[vec![false], vec![true]]);
            ctx.check_row(id, &[true]).unwrap();
            let _ = ctx.evaluate();
        });
        assert!(logs.contains("allocated MC/DC table"));
        assert!(logs.contains("MC/DC table complete"));
        assert!(logs.contains("observation matched expected row"));
        assert!(logs.contains("MC/DC evaluation"));
    }
}

// ============================================================================
// Properties
// ============================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// A table design: `rows x cols` boolean rows
    fn design_strategy() -> impl Strategy<Value = Vec<Vec<bool>>> {
        (1usize..6, 1usize..9).prop_flat_map(|(cols, rows)| {
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), cols), rows)
        })
    }

    fn build(rows: &[Vec<bool>]) -> (CoverageContext, TableId) {
        let mut ctx = CoverageContext::new();
        let id = table_of(&mut ctx, "prop", rows);
        (ctx, id)
    }

    proptest! {
        /// PROP-MATCH-01: checking a registered row marks exactly its first occurrence
        #[test]
        fn prop_first_match_is_unique(rows in design_strategy(), pick in any::<prop::sample::Index>()) {
            let (mut ctx, id) = build(&rows);
            let i = pick.index(rows.len());
            let first = rows.iter().position(|r| *r == rows[i]).unwrap();

            let outcome = ctx.check_row(id, &rows[i]).unwrap();
            prop_assert_eq!(outcome, CheckOutcome::Matched { row: first });

            let observed = ctx.table(id).unwrap().observed();
            for (k, flag) in observed.iter().enumerate() {
                prop_assert_eq!(*flag, k == first);
            }
        }

        /// PROP-MATCH-02: a vector equal to no registered row changes nothing
        #[test]
        fn prop_no_match_is_neutral(rows in design_strategy(), probe in proptest::collection::vec(any::<bool>(), 5)) {
            let (mut ctx, id) = build(&rows);
            let cols = rows[0].len();
            let probe: Vec<bool> = probe.into_iter().cycle().take(cols).collect();
            prop_assume!(!rows.contains(&probe));

            let before = ctx.table(id).unwrap().observed();
            prop_assert_eq!(ctx.check_row(id, &probe).unwrap(), CheckOutcome::NoMatch);
            prop_assert_eq!(ctx.table(id).unwrap().observed(), before);
        }

        /// PROP-EVAL-01: evaluation is idempotent
        #[test]
        fn prop_evaluate_idempotent(rows in design_strategy(), hits in proptest::collection::vec(any::<prop::sample::Index>(), 0..10)) {
            let (mut ctx, id) = build(&rows);
            for h in &hits {
                ctx.check_row(id, &rows[h.index(rows.len())]).unwrap();
            }
            prop_assert_eq!(ctx.evaluate(), ctx.evaluate());
        }

        /// PROP-EVAL-02: a table passes iff every distinct row was observed
        #[test]
        fn prop_pass_iff_all_rows_hit(rows in design_strategy(), hits in proptest::collection::vec(any::<prop::sample::Index>(), 0..16)) {
            let (mut ctx, id) = build(&rows);
            let mut hit = vec![false; rows.len()];
            for h in &hits {
                let i = h.index(rows.len());
                ctx.check_row(id, &rows[i]).unwrap();
                hit[rows.iter().position(|r| *r == rows[i]).unwrap()] = true;
            }

            let table = ctx.table(id).unwrap();
            let all_hit = hit.iter().all(|&h| h);
            prop_assert_eq!(table.checks_passed() == table.rows(), all_hit);
            prop_assert_eq!(table.status() == CoverageStatus::Pass, all_hit);
        }

        /// PROP-LIFE-01: registering into a later table never alters an earlier one
        #[test]
        fn prop_tables_isolated(first in design_strategy(), second in design_strategy()) {
            let mut ctx = CoverageContext::new();
            let a = table_of(&mut ctx, "a", &first);
            let snapshot = ctx.table(a).unwrap().expected().clone();
            let b = table_of(&mut ctx, "b", &second);
            ctx.check_row(b, &second[0]).unwrap();

            prop_assert_eq!(ctx.table(a).unwrap().expected(), &snapshot);
            prop_assert_eq!(ctx.table(a).unwrap().checks_passed(), 0);
        }
    }
}
