// world_core/src/transitions/letterbox.rs
use crate::constants::DEFAULT_TRANSITION_DURATION;
use crate::transitions::transition_animation::*;

/// Two bars closing in from the top and bottom screen edges.
///
/// Bar positions are anchored offsets: `initial_height` parks them off
/// screen, the in half brings them to `target_ratio` coverage.
pub struct Letterbox {
    pub initial_height: f32,
    /// Fraction of the screen each bar covers when closed, in [0, 0.5].
    pub target_ratio: f32,
    /// Current offset of the top bar; the bottom bar mirrors it negated.
    pub top: f32,
    pub bottom: f32,
    pub clock: TransitionClock,
}

impl Letterbox {
    pub fn new(initial_height: f32, target_ratio: f32, duration: f32) -> Self {
        Self {
            initial_height,
            target_ratio: target_ratio.clamp(0.0, 0.5),
            top: initial_height,
            bottom: -initial_height,
            clock: TransitionClock::new(duration),
        }
    }

    /// Bar offset when fully closed.
    pub fn target_height(&self) -> f32 {
        self.initial_height * (1.0 - self.target_ratio)
    }
}

impl Default for Letterbox {
    fn default() -> Self {
        Self::new(1080.0, 0.25, DEFAULT_TRANSITION_DURATION)
    }
}

impl TransitionAnimation for Letterbox {
    fn name(&self) -> &str {
        "Letterbox"
    }

    fn animate_in(&mut self, real_time: bool) -> bool {
        if self.clock.start_in(real_time) {
            self.top = self.initial_height;
            self.bottom = -self.initial_height;
            true
        } else {
            false
        }
    }

    fn animate_out(&mut self, real_time: bool) -> bool {
        if self.clock.start_out(real_time) {
            self.top = self.target_height();
            self.bottom = -self.target_height();
            true
        } else {
            false
        }
    }

    fn tick(&mut self, dt: f32) {
        let finished = self.clock.tick(dt);
        let t = self.clock.progress();

        if self.clock.animating_in() {
            self.top = lerp(self.initial_height, self.target_height(), t);
        } else if self.clock.animating_out() {
            self.top = lerp(self.target_height(), self.initial_height, t);
        }

        match finished {
            Some(AnimationDirection::In) => self.top = self.target_height(),
            Some(AnimationDirection::Out) => self.top = self.initial_height,
            None => {}
        }
        self.bottom = -self.top;
    }

    fn animating_in(&self) -> bool {
        self.clock.animating_in()
    }

    fn animating_out(&self) -> bool {
        self.clock.animating_out()
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
