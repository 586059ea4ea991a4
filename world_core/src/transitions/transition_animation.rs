// world_core/src/transitions/transition_animation.rs
use crate::events::Signal;

/// Which half of a transition a run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationDirection {
    In,
    Out,
}

/// Capability of a visual transition effect.
///
/// Effects expose values only (alpha, offsets, bar heights); drawing them is
/// the host's business. Starting a half that is already running is a no-op.
pub trait TransitionAnimation {
    /// Name the orchestrator looks the effect up by.
    fn name(&self) -> &str;

    /// Begin the animate-in half. Returns false if it was already running.
    fn animate_in(&mut self, real_time: bool) -> bool;

    /// Begin the animate-out half. Returns false if it was already running.
    fn animate_out(&mut self, real_time: bool) -> bool;

    /// Advance the effect by one frame.
    fn tick(&mut self, dt: f32);

    fn animating_in(&self) -> bool;

    fn animating_out(&self) -> bool;

    fn animating(&self) -> bool {
        self.animating_in() || self.animating_out()
    }
}

/// Shared timing core for the bundled effects: run flags, elapsed time and
/// completion events.
pub struct TransitionClock {
    pub duration: f32,
    elapsed: f32,
    animating_in: bool,
    animating_out: bool,
    real_time: bool,
    pub on_in_complete: Signal,
    pub on_out_complete: Signal,
}

impl TransitionClock {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
            animating_in: false,
            animating_out: false,
            real_time: false,
            on_in_complete: Signal::new(),
            on_out_complete: Signal::new(),
        }
    }

    /// Start the in half. A run already in flight is left untouched.
    pub fn start_in(&mut self, real_time: bool) -> bool {
        if self.animating_in {
            return false;
        }
        self.animating_in = true;
        self.elapsed = 0.0;
        self.real_time = real_time;
        true
    }

    /// Start the out half. A run already in flight is left untouched.
    pub fn start_out(&mut self, real_time: bool) -> bool {
        if self.animating_out {
            return false;
        }
        self.animating_out = true;
        self.elapsed = 0.0;
        self.real_time = real_time;
        true
    }

    /// Advance the active run. Returns the direction that completed this
    /// frame, if any, after firing its completion signal.
    pub fn tick(&mut self, dt: f32) -> Option<AnimationDirection> {
        if self.animating_in {
            self.elapsed += dt;
            if self.elapsed >= self.duration {
                self.animating_in = false;
                self.on_in_complete.emit(&());
                return Some(AnimationDirection::In);
            }
        } else if self.animating_out {
            self.elapsed += dt;
            if self.elapsed >= self.duration {
                self.animating_out = false;
                self.on_out_complete.emit(&());
                return Some(AnimationDirection::Out);
            }
        }
        None
    }

    /// Eased progress of the current run in [0, 1].
    pub fn progress(&self) -> f32 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        // Smoothstep
        t * t * (3.0 - 2.0 * t)
    }

    pub fn animating_in(&self) -> bool {
        self.animating_in
    }

    pub fn animating_out(&self) -> bool {
        self.animating_out
    }

    /// Whether the current run asked for the unscaled clock.
    pub fn real_time(&self) -> bool {
        self.real_time
    }
}
