// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the packer.
//!
//! Widths are whole numbers so that sums compare exactly.

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{MaxLines, OverflowStrategy, PackOptions, PackedRow, pack};

#[derive(Clone, Debug)]
struct Case {
    widths: Vec<f64>,
    available: f64,
    options: PackOptions<f64>,
}

fn strategy_strategy() -> impl Strategy<Value = OverflowStrategy> {
    prop_oneof![Just(OverflowStrategy::Menu), Just(OverflowStrategy::Wrap)]
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (
        prop::collection::vec(0_u32..200, 0..24),
        0_u32..600,
        0_u32..24,
        0_u32..64,
        strategy_strategy(),
        prop::option::of(0_usize..5),
    )
        .prop_map(|(widths, available, gap, overflow, strategy, max_lines)| Case {
            widths: widths.into_iter().map(f64::from).collect(),
            available: f64::from(available),
            options: PackOptions::new(strategy)
                .with_gap(f64::from(gap))
                .with_overflow_width(f64::from(overflow))
                .with_max_lines(max_lines),
        })
}

fn run(case: &Case) -> Vec<PackedRow<f64>> {
    pack(&case.widths, case.available, &case.options)
}

proptest! {
    #[test]
    fn every_item_lands_exactly_once_in_order(case in case_strategy()) {
        let rows = run(&case);
        let mut next = 0;
        for row in &rows {
            prop_assert_eq!(row.items().start, next);
            prop_assert_eq!(row.visible().end, row.overflow().start);
            next = row.items().end;
        }
        prop_assert_eq!(next, case.widths.len());
        prop_assert_eq!(rows.is_empty(), case.widths.is_empty());
    }

    #[test]
    fn every_row_shows_at_least_one_item(case in case_strategy()) {
        for row in run(&case) {
            prop_assert!(!row.visible().is_empty());
            let slots = row.visible().len() + usize::from(row.has_overflow());
            prop_assert_eq!(row.slot_count(), slots);
        }
    }

    #[test]
    fn shared_rows_stay_within_the_available_width(case in case_strategy()) {
        for row in run(&case) {
            if row.slot_count() > 1 && row.visible().len() > 1 {
                prop_assert!(row.extent() <= case.available, "{row:?} exceeds {}", case.available);
            }
        }
    }

    #[test]
    fn only_the_last_row_overflows(case in case_strategy()) {
        let rows = run(&case);
        for row in rows.iter().rev().skip(1) {
            prop_assert!(!row.has_overflow());
        }
    }

    #[test]
    fn wrap_respects_max_lines(case in case_strategy()) {
        let options = PackOptions { strategy: OverflowStrategy::Wrap, ..case.options };
        let rows = pack(&case.widths, case.available, &options);
        match options.max_lines {
            MaxLines::Unlimited => prop_assert!(rows.iter().all(|r| !r.has_overflow())),
            MaxLines::Limited(n) => prop_assert!(rows.len() <= n.get()),
        }
    }

    #[test]
    fn menu_keeps_a_single_row_when_everything_fits(case in case_strategy()) {
        let options = PackOptions { strategy: OverflowStrategy::Menu, ..case.options };
        let total: f64 = case.widths.iter().sum::<f64>()
            + options.gap * case.widths.len().saturating_sub(1) as f64;
        let rows = pack(&case.widths, case.available, &options);
        if !case.widths.is_empty() && total <= case.available {
            prop_assert_eq!(rows.len(), 1);
            prop_assert!(!rows[0].has_overflow());
        }
        if rows.len() > 1 {
            // Multiple rows only come from the wrap fallback.
            prop_assert!(case.widths[0] + options.gap + options.overflow_width > case.available);
        }
    }

    #[test]
    fn packing_is_idempotent(case in case_strategy()) {
        prop_assert_eq!(run(&case), run(&case));
    }
}
