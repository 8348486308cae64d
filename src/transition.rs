//! Single-slot transition state machine for the content area.
//!
//! At most one view's content occupies the slot. A view leaving the slot
//! plays its exit before the next one enters; the next one only enters once
//! its content is ready, showing a placeholder in the meantime.

use std::time::{Duration, Instant};

use crate::motion::Easing;
use crate::view::ViewId;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    pub entering_view: ViewId,
    pub exiting_view: Option<ViewId>,
    pub phase: Phase,
}

/// Lifecycle notifications for whoever renders the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEvent {
    Mounted(ViewId),
    Unmounted(ViewId),
    Settled(ViewId),
}

/// What the content area should draw right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presentation {
    Blank,
    /// The target view is not loaded yet.
    Placeholder(ViewId),
    /// `visibility` runs 0.0 (hidden) to 1.0 (at rest), already eased.
    View { view: ViewId, visibility: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Empty,
    Waiting { view: ViewId },
    Entering { view: ViewId, since: Instant, from: f32 },
    Settled { view: ViewId },
    Exiting { view: ViewId, since: Instant, from: f32 },
}

pub struct TransitionController {
    duration: Duration,
    target: ViewId,
    slot: Slot,
    record: TransitionRecord,
}

impl TransitionController {
    /// Starts with `initial` as the target and nothing mounted; the first
    /// [`advance`](Self::advance) mounts it.
    pub fn new(initial: ViewId, duration: Duration) -> Self {
        Self {
            duration,
            target: initial,
            slot: Slot::Empty,
            record: TransitionRecord {
                entering_view: initial,
                exiting_view: None,
                phase: Phase::Entering,
            },
        }
    }

    pub fn target(&self) -> ViewId {
        self.target
    }

    pub fn record(&self) -> TransitionRecord {
        self.record
    }

    /// The view whose content is in the slot, entering, exiting, or at rest.
    pub fn mounted(&self) -> Option<ViewId> {
        match self.slot {
            Slot::Entering { view, .. } | Slot::Settled { view } | Slot::Exiting { view, .. } => {
                Some(view)
            }
            Slot::Empty | Slot::Waiting { .. } => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.slot, Slot::Settled { .. })
    }

    /// True while an enter or exit is playing and frames are needed.
    pub fn is_animating(&self) -> bool {
        matches!(self.slot, Slot::Entering { .. } | Slot::Exiting { .. })
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.slot, Slot::Waiting { .. })
    }

    /// Linear visibility of the slot's content at `now`.
    fn visibility(&self, now: Instant) -> f32 {
        match self.slot {
            Slot::Empty | Slot::Waiting { .. } => 0.0,
            Slot::Settled { .. } => 1.0,
            Slot::Entering { since, from, .. } => {
                let span = self.span(1.0 - from);
                from + (1.0 - from) * fraction(now.saturating_duration_since(since), span)
            }
            Slot::Exiting { since, from, .. } => {
                let span = self.span(from);
                from * (1.0 - fraction(now.saturating_duration_since(since), span))
            }
        }
    }

    /// Time to cover `distance` of the full 0..1 visibility range.
    fn span(&self, distance: f32) -> Duration {
        if distance >= 1.0 {
            self.duration
        } else if distance <= 0.0 {
            Duration::ZERO
        } else {
            self.duration.mul_f32(distance)
        }
    }

    pub fn presentation(&self, now: Instant) -> Presentation {
        match self.slot {
            Slot::Empty => Presentation::Blank,
            Slot::Waiting { view } => Presentation::Placeholder(view),
            Slot::Entering { view, .. } | Slot::Settled { view } | Slot::Exiting { view, .. } => {
                Presentation::View {
                    view,
                    visibility: Easing::EaseOut.apply(self.visibility(now)),
                }
            }
        }
    }

    /// Bring the slot up to date with `target` at `now`.
    ///
    /// `ready` reports whether a view's content can be mounted. Calling this
    /// with the same target again is a no-op apart from letting time-based
    /// phases complete.
    pub fn advance(
        &mut self,
        target: ViewId,
        ready: impl Fn(ViewId) -> bool,
        now: Instant,
    ) -> Vec<SlotEvent> {
        let mut events = Vec::new();
        if target != self.target {
            self.retarget(target, now, &mut events);
        }
        self.settle(&ready, now, &mut events);
        events
    }

    fn retarget(&mut self, target: ViewId, now: Instant, events: &mut Vec<SlotEvent>) {
        tracing::debug!("transition: target {} -> {target}", self.target);
        self.target = target;
        match self.slot {
            Slot::Empty | Slot::Waiting { .. } => {
                self.slot = Slot::Empty;
                self.record = TransitionRecord {
                    entering_view: target,
                    exiting_view: None,
                    phase: Phase::Entering,
                };
            }
            Slot::Entering { view, .. } | Slot::Settled { view } => {
                let from = self.visibility(now);
                self.slot = Slot::Exiting {
                    view,
                    since: now,
                    from,
                };
                self.record = TransitionRecord {
                    entering_view: target,
                    exiting_view: Some(view),
                    phase: Phase::Entering,
                };
            }
            Slot::Exiting { view, .. } if view == target => {
                // Back to the view still on its way out: turn the exit around
                let from = self.visibility(now);
                self.slot = Slot::Entering {
                    view,
                    since: now,
                    from,
                };
                self.record = TransitionRecord {
                    entering_view: view,
                    exiting_view: None,
                    phase: Phase::Entering,
                };
            }
            Slot::Exiting { view, .. } => {
                // Superseded: the exit is abandoned, not queued
                events.push(SlotEvent::Unmounted(view));
                self.slot = Slot::Empty;
                self.record = TransitionRecord {
                    entering_view: target,
                    exiting_view: None,
                    phase: Phase::Entering,
                };
            }
        }
    }

    fn settle(&mut self, ready: &impl Fn(ViewId) -> bool, now: Instant, events: &mut Vec<SlotEvent>) {
        loop {
            match self.slot {
                Slot::Empty | Slot::Waiting { .. } => {
                    if ready(self.target) {
                        self.slot = Slot::Entering {
                            view: self.target,
                            since: now,
                            from: 0.0,
                        };
                        events.push(SlotEvent::Mounted(self.target));
                    } else {
                        self.slot = Slot::Waiting { view: self.target };
                        return;
                    }
                }
                Slot::Exiting { view, since, from } => {
                    if now.saturating_duration_since(since) < self.span(from) {
                        return;
                    }
                    events.push(SlotEvent::Unmounted(view));
                    self.record.exiting_view = None;
                    self.slot = Slot::Empty;
                }
                Slot::Entering { view, since, from } => {
                    if now.saturating_duration_since(since) < self.span(1.0 - from) {
                        return;
                    }
                    self.slot = Slot::Settled { view };
                    self.record.phase = Phase::Settled;
                    events.push(SlotEvent::Settled(view));
                    return;
                }
                Slot::Settled { .. } => return,
            }
        }
    }
}

fn fraction(elapsed: Duration, span: Duration) -> f32 {
    if span.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn all_ready(_: ViewId) -> bool {
        true
    }

    fn booted(t0: Instant) -> TransitionController {
        let mut tc = TransitionController::new(ViewId::Home, DEFAULT_DURATION);
        tc.advance(ViewId::Home, all_ready, t0);
        tc.advance(ViewId::Home, all_ready, t0 + ms(400));
        tc
    }

    #[test]
    fn boot_mounts_and_enters_initial_view() {
        let t0 = Instant::now();
        let mut tc = TransitionController::new(ViewId::Home, DEFAULT_DURATION);
        assert_eq!(tc.mounted(), None);
        let events = tc.advance(ViewId::Home, all_ready, t0);
        assert_eq!(events, vec![SlotEvent::Mounted(ViewId::Home)]);
        assert!(tc.is_animating());
        let events = tc.advance(ViewId::Home, all_ready, t0 + ms(400));
        assert_eq!(events, vec![SlotEvent::Settled(ViewId::Home)]);
        assert_eq!(tc.record().phase, Phase::Settled);
    }

    #[test]
    fn exit_runs_before_enter() {
        let t0 = Instant::now();
        let mut tc = booted(t0);
        let t1 = t0 + ms(1000);
        assert!(tc.advance(ViewId::Skills, all_ready, t1).is_empty());
        assert_eq!(tc.mounted(), Some(ViewId::Home));
        assert_eq!(
            tc.record(),
            TransitionRecord {
                entering_view: ViewId::Skills,
                exiting_view: Some(ViewId::Home),
                phase: Phase::Entering,
            }
        );
        let events = tc.advance(ViewId::Skills, all_ready, t1 + ms(400));
        assert_eq!(
            events,
            vec![SlotEvent::Unmounted(ViewId::Home), SlotEvent::Mounted(ViewId::Skills)]
        );
        assert_eq!(tc.record().exiting_view, None);
        let events = tc.advance(ViewId::Skills, all_ready, t1 + ms(800));
        assert_eq!(events, vec![SlotEvent::Settled(ViewId::Skills)]);
    }

    #[test]
    fn same_target_is_a_no_op() {
        let t0 = Instant::now();
        let mut tc = booted(t0);
        let before = tc.record();
        assert!(tc.advance(ViewId::Home, all_ready, t0 + ms(900)).is_empty());
        assert_eq!(tc.record(), before);
        assert!(tc.is_settled());
    }

    #[test]
    fn superseding_navigation_abandons_exit() {
        let t0 = Instant::now();
        let mut tc = booted(t0);
        let t1 = t0 + ms(1000);
        tc.advance(ViewId::Skills, all_ready, t1);
        let events = tc.advance(ViewId::About, all_ready, t1 + ms(100));
        assert_eq!(
            events,
            vec![SlotEvent::Unmounted(ViewId::Home), SlotEvent::Mounted(ViewId::About)]
        );
        assert_eq!(tc.mounted(), Some(ViewId::About));
    }

    #[test]
    fn returning_to_exiting_view_reverses_without_remount() {
        let t0 = Instant::now();
        let mut tc = booted(t0);
        let t1 = t0 + ms(1000);
        tc.advance(ViewId::Skills, all_ready, t1);
        let events = tc.advance(ViewId::Home, all_ready, t1 + ms(100));
        assert!(events.is_empty());
        assert_eq!(tc.mounted(), Some(ViewId::Home));
        // Reversal from 75% visible takes about a quarter of the duration
        let events = tc.advance(ViewId::Home, all_ready, t1 + ms(250));
        assert_eq!(events, vec![SlotEvent::Settled(ViewId::Home)]);
    }

    #[test]
    fn unready_target_waits_behind_placeholder() {
        let t0 = Instant::now();
        let mut tc = booted(t0);
        let t1 = t0 + ms(1000);
        let not_projects = |v: ViewId| v != ViewId::Projects;
        tc.advance(ViewId::Projects, not_projects, t1);
        let events = tc.advance(ViewId::Projects, not_projects, t1 + ms(400));
        assert_eq!(events, vec![SlotEvent::Unmounted(ViewId::Home)]);
        assert!(tc.is_waiting());
        assert_eq!(tc.presentation(t1 + ms(500)), Presentation::Placeholder(ViewId::Projects));
        // Enter starts only once content is ready
        let t2 = t1 + ms(900);
        let events = tc.advance(ViewId::Projects, all_ready, t2);
        assert_eq!(events, vec![SlotEvent::Mounted(ViewId::Projects)]);
        assert_eq!(
            tc.presentation(t2),
            Presentation::View {
                view: ViewId::Projects,
                visibility: 0.0
            }
        );
    }

    #[test]
    fn navigating_away_from_placeholder_mounts_nothing_stale() {
        let t0 = Instant::now();
        let mut tc = booted(t0);
        let none_deferred = |v: ViewId| v == ViewId::Home;
        tc.advance(ViewId::Skills, none_deferred, t0 + ms(1000));
        tc.advance(ViewId::Skills, none_deferred, t0 + ms(1400));
        assert!(tc.is_waiting());
        let events = tc.advance(ViewId::Home, none_deferred, t0 + ms(1500));
        assert_eq!(events, vec![SlotEvent::Mounted(ViewId::Home)]);
        // Skills resolving later changes nothing
        assert!(tc.advance(ViewId::Home, all_ready, t0 + ms(1600)).is_empty());
        assert_eq!(tc.mounted(), Some(ViewId::Home));
    }

    #[test]
    fn zero_duration_switches_immediately() {
        let t0 = Instant::now();
        let mut tc = TransitionController::new(ViewId::Home, Duration::ZERO);
        let events = tc.advance(ViewId::Home, all_ready, t0);
        assert_eq!(
            events,
            vec![SlotEvent::Mounted(ViewId::Home), SlotEvent::Settled(ViewId::Home)]
        );
        let events = tc.advance(ViewId::About, all_ready, t0);
        assert_eq!(
            events,
            vec![
                SlotEvent::Unmounted(ViewId::Home),
                SlotEvent::Mounted(ViewId::About),
                SlotEvent::Settled(ViewId::About)
            ]
        );
    }

    #[test]
    fn exit_fades_visibility() {
        let t0 = Instant::now();
        let mut tc = booted(t0);
        let t1 = t0 + ms(1000);
        tc.advance(ViewId::Projects, all_ready, t1);
        let Presentation::View { view, visibility } = tc.presentation(t1 + ms(200)) else {
            panic!("expected the exiting view");
        };
        assert_eq!(view, ViewId::Home);
        assert!(visibility > 0.0 && visibility < 1.0);
    }
}
