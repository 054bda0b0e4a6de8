//! Property-based tests for the selection rules and the reducer.

use prophecy::core::selection::{Selection, Toggle};
use prophecy::core::{Action, App, Phase, update};
use proptest::prelude::*;

prop_compose! {
    fn card_id()(id in 1..=8u32) -> u32 {
        id
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Enter),
        card_id().prop_map(Action::Toggle),
        (0..4u64).prop_map(|generation| Action::AdvanceElapsed { generation }),
        Just(Action::Reset),
    ]
}

proptest! {
    #[test]
    fn selection_never_exceeds_two(ids in prop::collection::vec(card_id(), 0..50)) {
        let mut selection = Selection::new();
        for id in ids {
            selection.toggle(id);
            prop_assert!(selection.len() <= 2);
            prop_assert_eq!(selection.is_complete(), selection.len() == 2);
        }
    }

    #[test]
    fn selection_has_no_duplicates(ids in prop::collection::vec(card_id(), 0..50)) {
        let mut selection = Selection::new();
        for id in ids {
            selection.toggle(id);
            let selected = selection.ids();
            if selected.len() == 2 {
                prop_assert_ne!(selected[0], selected[1]);
            }
        }
    }

    #[test]
    fn full_selection_toggle_rules(a in card_id(), b in card_id(), c in card_id()) {
        prop_assume!(a != b);
        let mut selection = Selection::new();
        selection.toggle(a);
        selection.toggle(b);

        let outcome = selection.toggle(c);
        if c == a || c == b {
            prop_assert_eq!(outcome, Toggle::Removed);
            prop_assert_eq!(selection.len(), 1);
        } else {
            prop_assert_eq!(outcome, Toggle::Rejected);
            prop_assert_eq!(selection.ids(), &[a, b]);
        }
    }

    #[test]
    fn reset_always_returns_to_intro(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut app = App::default();
        for action in actions {
            update(&mut app, action);
            prop_assert!(app.selection.len() <= 2);
        }
        update(&mut app, Action::Reset);
        prop_assert_eq!(app.phase, Phase::Intro);
        prop_assert!(app.selection.is_empty());
        prop_assert!(app.reading.is_none());
    }
}
