//! Property-based tests for the booking wizard

use super::*;
use crate::profile::BusinessProfile;
use chrono::NaiveDate;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Op {
    Next,
    Back,
    StartOver,
    FillDetails,
    PickDate(usize),
    PickTime(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Back),
        Just(Op::StartOver),
        Just(Op::FillDetails),
        (0usize..20).prop_map(Op::PickDate),
        (0usize..10).prop_map(Op::PickTime),
    ]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
}

fn wizard() -> BookingWizard {
    BookingWizard::new(Arc::new(BusinessProfile::crown_and_blade()), today())
}

fn apply(w: &mut BookingWizard, op: &Op) {
    match op {
        Op::Next => {
            let _ = w.next();
        }
        Op::Back => {
            let _ = w.back();
        }
        Op::StartOver => {
            let _ = w.start_over();
        }
        Op::FillDetails => {
            let d = w.details_mut();
            d.name = "Jordan".to_string();
            d.email = "jordan@example.com".to_string();
            d.phone = "555-0199".to_string();
            let _ = w.preselect_course("1");
        }
        Op::PickDate(i) => {
            if let Some(&date) = w.available_dates().get(*i) {
                let _ = w.select_date(date);
            }
        }
        Op::PickTime(i) => {
            if let Some(&slot) = w.time_slots().get(*i) {
                let _ = w.select_time(slot);
            }
        }
    }
}

proptest! {
    #[test]
    fn step_changes_follow_table(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut w = wizard();
        for op in &ops {
            let before = w.step();
            apply(&mut w, op);
            let after = w.step();
            if before != after {
                let action = match op {
                    Op::Next => WizardAction::Next,
                    Op::Back => WizardAction::Back,
                    Op::StartOver => WizardAction::StartOver,
                    _ => panic!("{op:?} changed the step"),
                };
                prop_assert_eq!(next_step(before, action), Some(after));
            }
        }
    }

    #[test]
    fn review_always_has_complete_schedule(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut w = wizard();
        for op in &ops {
            apply(&mut w, op);
            if w.step() == BookingStep::Review {
                prop_assert!(w.selected_date().is_some());
                prop_assert!(w.selected_time().is_some());
                prop_assert!(w.details().is_complete(&BusinessProfile::crown_and_blade()));
            }
        }
    }

    #[test]
    fn back_preserves_entries(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut w = wizard();
        for op in &ops {
            apply(&mut w, op);
        }
        let details = w.details().clone();
        let date = w.selected_date();
        let time = w.selected_time();

        if w.back().is_ok() {
            prop_assert_eq!(w.details(), &details);
            prop_assert_eq!(w.selected_date(), date);
            prop_assert_eq!(w.selected_time(), time);
        }
    }

    #[test]
    fn selected_date_stays_in_window(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut w = wizard();
        for op in &ops {
            apply(&mut w, op);
            if let Some(date) = w.selected_date() {
                prop_assert!(date > today());
                prop_assert!(w.available_dates().contains(&date));
            }
        }
    }
}
