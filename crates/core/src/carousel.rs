//! Featured-project carousel navigation.
//!
//! The carousel cycles through a fixed display list. Each transition takes
//! the navigation lock, which is held for the visual blend plus a cooldown;
//! triggers arriving while the lock is held are dropped. Time is supplied by
//! the caller so the machine is deterministic and testable.

use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Duration of the visual blend between two slides.
pub const BLEND_DURATION: Duration = Duration::from_millis(1200);

/// Quiet period after a blend before the lock is released.
pub const COOLDOWN: Duration = Duration::from_millis(400);

/// Minimum absolute wheel delta that counts as a navigation gesture.
pub const SCROLL_THRESHOLD: f32 = 30.0;

/// Minimum absolute swipe distance (pixels) that counts as a gesture.
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An input that may start a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Wheel movement; positive is downwards (forward).
    Scroll { delta_y: f32 },
    /// Touch swipe, measured as start minus end; positive is an upward
    /// swipe (forward).
    Swipe { delta_y: f32 },
    /// Explicit click on a slide indicator.
    Select(usize),
    /// The current slide's video played to the end.
    VideoEnded,
}

/// Playback readiness of a single slide's video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Pending,
    Ready,
    Failed,
}

/// A transition that was started by [`Carousel::trigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// The target slide failed to play earlier; the caller should restart
    /// its playback.
    pub retry_playback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Blending { until: Instant },
    CoolingDown { until: Instant },
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    phase: Phase,
    playback: Vec<Playback>,
}

impl Carousel {
    /// Create a carousel over `len` slides, starting at slide 0.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            phase: Phase::Idle,
            playback: vec![Playback::Pending; len],
        }
    }

    pub fn len(&self) -> usize {
        self.playback.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playback.is_empty()
    }

    /// Index of the slide currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the navigation lock is held as of `now`.
    pub fn is_locked(&mut self, now: Instant) -> bool {
        self.advance(now);
        self.phase != Phase::Idle
    }

    /// Whether a blend is still running as of `now`.
    pub fn is_blending(&mut self, now: Instant) -> bool {
        self.advance(now);
        matches!(self.phase, Phase::Blending { .. })
    }

    /// Instant at which the lock will be released, if it is held.
    pub fn releases_at(&self) -> Option<Instant> {
        match self.phase {
            Phase::Idle => None,
            Phase::Blending { until } => Some(until + COOLDOWN),
            Phase::CoolingDown { until } => Some(until),
        }
    }

    pub fn playback(&self, index: usize) -> Option<Playback> {
        self.playback.get(index).copied()
    }

    /// Handle an input. Returns the started transition, or `None` if the
    /// input was ignored (lock held, gesture too small, no-op target).
    pub fn trigger(&mut self, trigger: Trigger, now: Instant) -> Option<Transition> {
        self.advance(now);

        if self.is_empty() {
            return None;
        }
        if self.phase != Phase::Idle {
            tracing::trace!(?trigger, "Carousel locked, ignoring trigger");
            return None;
        }

        let (to, direction) = self.target(trigger)?;
        if to == self.index {
            return None;
        }

        let from = self.index;
        let retry_playback = self.playback[to] == Playback::Failed;
        if retry_playback {
            self.playback[to] = Playback::Pending;
        }

        self.index = to;
        self.phase = Phase::Blending {
            until: now + BLEND_DURATION,
        };

        tracing::debug!(from, to, ?direction, "Carousel transition started");
        Some(Transition {
            from,
            to,
            direction,
            retry_playback,
        })
    }

    /// Record that a slide's video started playing.
    pub fn mark_ready(&mut self, index: usize) {
        if let Some(state) = self.playback.get_mut(index) {
            *state = Playback::Ready;
        }
    }

    /// Record that a slide's video failed to start.
    ///
    /// Navigation is unaffected; the next transition onto this slide asks
    /// the caller to retry playback.
    pub fn playback_failed(&mut self, index: usize, reason: &str) {
        if let Some(state) = self.playback.get_mut(index) {
            tracing::warn!(index, reason, "Carousel video failed to start");
            *state = Playback::Failed;
        }
    }

    /// Move the lock through its phases up to `now`.
    pub fn advance(&mut self, now: Instant) {
        loop {
            self.phase = match self.phase {
                Phase::Blending { until } if until <= now => Phase::CoolingDown {
                    until: until + COOLDOWN,
                },
                Phase::CoolingDown { until } if until <= now => Phase::Idle,
                _ => return,
            };
        }
    }

    fn target(&self, trigger: Trigger) -> Option<(usize, Direction)> {
        let direction = match trigger {
            Trigger::Scroll { delta_y } => gesture_direction(delta_y, SCROLL_THRESHOLD)?,
            Trigger::Swipe { delta_y } => gesture_direction(delta_y, SWIPE_THRESHOLD)?,
            Trigger::VideoEnded => Direction::Forward,
            Trigger::Select(to) => {
                if to >= self.len() {
                    return None;
                }
                let direction = if to > self.index {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                return Some((to, direction));
            }
        };
        Some((self.step(direction), direction))
    }

    fn step(&self, direction: Direction) -> usize {
        let len = self.len();
        match direction {
            Direction::Forward => (self.index + 1) % len,
            Direction::Backward => (self.index + len - 1) % len,
        }
    }
}

fn gesture_direction(delta: f32, threshold: f32) -> Option<Direction> {
    if delta.is_nan() || delta.abs() < threshold {
        None
    } else if delta > 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}
