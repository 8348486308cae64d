use std::time::Duration;

use super::easing::Easing;

/// What a tween drives. Each track is sampled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    MarkerReveal,
    StrokeDraw,
    MarkerTravel,
    MarkerNudge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub track: Track,
    /// Offset from the end of the timeline delay.
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    fn end(&self) -> Duration {
        self.start + self.duration
    }
}

/// An ordered set of tweens that share one clock.
///
/// `then` appends at the current end of the timeline; `with_previous`
/// starts alongside the tween added last.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    delay: Duration,
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            tweens: Vec::new(),
        }
    }

    pub fn then(mut self, track: Track, duration: Duration, easing: Easing) -> Self {
        let start = self.body();
        self.tweens.push(Tween {
            track,
            start,
            duration,
            easing,
        });
        self
    }

    pub fn with_previous(mut self, track: Track, duration: Duration, easing: Easing) -> Self {
        let start = self.tweens.last().map_or(Duration::ZERO, |t| t.start);
        self.tweens.push(Tween {
            track,
            start,
            duration,
            easing,
        });
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    fn body(&self) -> Duration {
        self.tweens
            .iter()
            .map(Tween::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Delay plus the end of the last tween.
    pub fn total(&self) -> Duration {
        self.delay + self.body()
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    pub fn has_started(&self, track: Track, elapsed: Duration) -> bool {
        self.tweens
            .iter()
            .find(|t| t.track == track)
            .is_some_and(|t| elapsed >= self.delay + t.start)
    }

    /// Eased progress of `track` at `elapsed` since the timeline started:
    /// 0.0 before its tween begins, 1.0 once it ends. A track with no tween
    /// reads 0.0.
    pub fn progress(&self, track: Track, elapsed: Duration) -> f32 {
        let Some(tween) = self.tweens.iter().find(|t| t.track == track) else {
            return 0.0;
        };
        let Some(local) = elapsed.checked_sub(self.delay + tween.start) else {
            return 0.0;
        };
        if tween.duration.is_zero() || local >= tween.duration {
            return tween.easing.apply(1.0);
        }
        tween
            .easing
            .apply(local.as_secs_f32() / tween.duration.as_secs_f32())
    }
}
