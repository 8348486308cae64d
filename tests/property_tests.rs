//! Property-based tests for navigation, the load gate and the transition
//! slot.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use folio::gate::LoadGate;
use folio::navigation::NavigationState;
use folio::transition::{SlotEvent, TransitionController};
use folio::view::ViewId;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_view()(variant in 0..4u8) -> ViewId {
        ViewId::ALL[variant as usize]
    }
}

prop_compose! {
    /// A navigation target and how long after the previous step it lands.
    fn arbitrary_step()(view in arbitrary_view(), gap_ms in 0..600u64) -> (ViewId, u64) {
        (view, gap_ms)
    }
}

proptest! {
    #[test]
    fn last_navigate_wins(views in prop::collection::vec(arbitrary_view(), 1..40)) {
        let mut nav = NavigationState::default();
        for &view in &views {
            nav.navigate(view);
        }
        prop_assert_eq!(nav.current_view(), *views.last().unwrap());
        prop_assert!(!nav.contact_open());
    }

    #[test]
    fn contact_toggle_is_independent_of_navigation(
        views in prop::collection::vec(arbitrary_view(), 0..20),
        toggles in 0..10usize,
    ) {
        let mut nav = NavigationState::default();
        for _ in 0..toggles {
            nav.toggle_contact();
        }
        for &view in &views {
            nav.navigate(view);
        }
        prop_assert_eq!(nav.contact_open(), toggles % 2 == 1);
    }

    #[test]
    fn each_view_is_requested_at_most_once(views in prop::collection::vec(arbitrary_view(), 0..40)) {
        let mut gate = LoadGate::new();
        for &view in &views {
            gate.request(view);
        }
        for view in ViewId::ALL {
            prop_assert!(gate.requests(view) <= 1);
            let visited = views.contains(&view);
            prop_assert_eq!(gate.requests(view) == 1, visited && !view.is_eager());
        }
    }

    #[test]
    fn slot_holds_at_most_one_view(
        steps in prop::collection::vec(arbitrary_step(), 1..30),
        ready_mask in 0..16u8,
    ) {
        let ready = |view: ViewId| {
            view == ViewId::Home || ready_mask & (1 << (view as u8)) != 0
        };
        let t0 = Instant::now();
        let mut now = t0;
        let mut controller = TransitionController::new(ViewId::Home, Duration::from_millis(400));
        let mut mounted: HashSet<ViewId> = HashSet::new();

        let apply = |events: Vec<SlotEvent>, mounted: &mut HashSet<ViewId>| -> Result<(), TestCaseError> {
            for event in events {
                match event {
                    SlotEvent::Mounted(v) => {
                        prop_assert!(mounted.is_empty(), "mounted {v} over {mounted:?}");
                        mounted.insert(v);
                    }
                    SlotEvent::Unmounted(v) => {
                        prop_assert!(mounted.remove(&v), "unmounted {v} twice");
                    }
                    SlotEvent::Settled(v) => prop_assert!(mounted.contains(&v)),
                }
            }
            Ok(())
        };

        apply(controller.advance(ViewId::Home, ready, now), &mut mounted)?;
        let mut last = ViewId::Home;
        for (view, gap_ms) in steps {
            now += Duration::from_millis(gap_ms);
            apply(controller.advance(view, ready, now), &mut mounted)?;
            prop_assert_eq!(controller.mounted(), mounted.iter().next().copied());
            last = view;
        }

        // Let everything run out
        now += Duration::from_secs(2);
        apply(controller.advance(last, ready, now), &mut mounted)?;
        now += Duration::from_secs(2);
        apply(controller.advance(last, ready, now), &mut mounted)?;

        prop_assert_eq!(controller.target(), last);
        if ready(last) {
            prop_assert!(controller.is_settled());
            prop_assert_eq!(controller.mounted(), Some(last));
        } else {
            prop_assert!(controller.is_waiting());
            prop_assert_eq!(controller.mounted(), None);
        }
    }
}
