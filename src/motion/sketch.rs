//! Hand-drawn underline under the Home highlight word.
//!
//! Once Home is mounted the binder measures the underline path, then after a
//! fixed delay reveals a pen marker, draws the stroke while the pen rides
//! along it, and finally nudges the pen off the line. One handle exists per
//! Home mount; releasing it on unmount stops the sequence outright and a
//! later mount starts over.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use super::easing::Easing;
use super::path::{MeasuredPath, Point};
use super::timeline::{Timeline, Track};
use crate::error::BindError;

/// Underline path data, in [`SKETCH_BOX`] units.
pub const SKETCH_PATH: &str = "M15,25 C40,18 75,32 110,22 C130,16 140,25 140,25";
pub const SKETCH_BOX: (f32, f32) = (150.0, 50.0);
pub const STROKE_WIDTH: f32 = 20.0;
/// Edge of the marker's square box, in [`SKETCH_BOX`] units.
pub const MARKER_SIZE: f32 = 24.0;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);
const REVEAL: Duration = Duration::from_millis(300);
const DRAW: Duration = Duration::from_millis(1200);
const NUDGE: Duration = Duration::from_millis(500);

const HIDDEN_SCALE: f32 = 0.8;
const REST_ANCHOR: (f32, f32) = (-0.15, -0.95);
const TRAVEL_OFFSET: Point = Point::new(-5.0, 5.0);
const NUDGE_BY: Point = Point::new(5.0, -5.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPose {
    /// Pen tip, in [`SKETCH_BOX`] units.
    pub position: Point,
    pub opacity: f32,
    pub scale: f32,
    /// Heading along the path, radians.
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SketchFrame {
    /// Visible stroke length, from 0 to the path length.
    pub drawn: f32,
    pub marker: MarkerPose,
}

fn sketch_timeline(delay: Duration) -> Timeline {
    Timeline::new(delay)
        .then(Track::MarkerReveal, REVEAL, Easing::BackOut(1.7))
        .with_previous(Track::StrokeDraw, DRAW, Easing::Power2InOut)
        .with_previous(Track::MarkerTravel, DRAW, Easing::Power2InOut)
        .then(Track::MarkerNudge, NUDGE, Easing::Power2Out)
}

/// The measured path and running timeline for one Home mount.
pub struct PathAnimationHandle {
    path: MeasuredPath,
    timeline: Timeline,
    started_at: Instant,
}

impl PathAnimationHandle {
    pub fn length(&self) -> f32 {
        self.path.length()
    }

    pub fn path(&self) -> &MeasuredPath {
        &self.path
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn frame(&self, now: Instant) -> SketchFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        let tl = &self.timeline;
        let reveal = tl.progress(Track::MarkerReveal, elapsed);
        let draw = tl.progress(Track::StrokeDraw, elapsed);
        let travel = tl.progress(Track::MarkerTravel, elapsed);
        let nudge = tl.progress(Track::MarkerNudge, elapsed);

        let start = self.path.start();
        let (base, angle) = if tl.has_started(Track::MarkerTravel, elapsed) {
            let distance = travel * self.path.length();
            let on_path = self.path.point_at(distance);
            (
                Point::new(on_path.x + TRAVEL_OFFSET.x, on_path.y + TRAVEL_OFFSET.y),
                self.path.angle_at(distance),
            )
        } else {
            (
                Point::new(
                    start.x + REST_ANCHOR.0 * MARKER_SIZE,
                    start.y + REST_ANCHOR.1 * MARKER_SIZE,
                ),
                0.0,
            )
        };

        SketchFrame {
            drawn: draw * self.path.length(),
            marker: MarkerPose {
                position: Point::new(base.x + NUDGE_BY.x * nudge, base.y + NUDGE_BY.y * nudge),
                opacity: reveal.clamp(0.0, 1.0),
                scale: HIDDEN_SCALE + (1.0 - HIDDEN_SCALE) * reveal,
                angle,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Started,
    /// A sequence is already live for this mount; nothing was restarted.
    AlreadyRunning,
}

static RESTING_UNDERLINE: LazyLock<Vec<Vec<Point>>> = LazyLock::new(|| {
    MeasuredPath::parse(SKETCH_PATH)
        .map(|p| p.partial(p.length()))
        .unwrap_or_default()
});

/// The fully drawn underline, measured once. Shown when no sequence is
/// bound.
pub fn resting_underline() -> &'static [Vec<Point>] {
    &RESTING_UNDERLINE
}

/// Owns at most one [`PathAnimationHandle`] at a time.
pub struct SketchBinder {
    delay: Duration,
    available: bool,
    handle: Option<PathAnimationHandle>,
    started: u32,
}

impl SketchBinder {
    /// `available == false` models a host without frame scheduling: every
    /// bind fails with [`BindError::Unavailable`] and Home renders statically.
    pub fn new(delay: Duration, available: bool) -> Self {
        Self {
            delay,
            available,
            handle: None,
            started: 0,
        }
    }

    /// Measure `path_data` and start the sequence from `now`.
    pub fn bind(&mut self, path_data: &str, now: Instant) -> Result<BindOutcome, BindError> {
        if self.handle.is_some() {
            return Ok(BindOutcome::AlreadyRunning);
        }
        if !self.available {
            return Err(BindError::Unavailable);
        }
        let path = MeasuredPath::parse(path_data)?;
        tracing::debug!("sketch: measured {:.1} units", path.length());
        self.handle = Some(PathAnimationHandle {
            path,
            timeline: sketch_timeline(self.delay),
            started_at: now,
        });
        self.started += 1;
        Ok(BindOutcome::Started)
    }

    /// Drop the live handle, if any. Returns whether one was dropped.
    pub fn release(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn handle(&self) -> Option<&PathAnimationHandle> {
        self.handle.as_ref()
    }

    /// Sequences started over the binder's lifetime.
    pub fn started(&self) -> u32 {
        self.started
    }

    /// Whether the bound sequence still wants frame pulses. A finished
    /// sequence keeps its handle (the final frame stays on screen) but
    /// stops asking for frames.
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.handle.as_ref().is_some_and(|h| {
            !h.timeline
                .is_complete(now.saturating_duration_since(h.started_at))
        })
    }

    pub fn sample(&self, now: Instant) -> Option<SketchFrame> {
        self.handle.as_ref().map(|h| h.frame(now))
    }
}
