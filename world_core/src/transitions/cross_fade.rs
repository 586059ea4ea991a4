// world_core/src/transitions/cross_fade.rs
use crate::constants::DEFAULT_TRANSITION_DURATION;
use crate::transitions::transition_animation::*;

/// Full-screen fade. `alpha` runs 0 -> 1 on the way in and 1 -> 0 on the
/// way out.
pub struct CrossFade {
    pub alpha: f32,
    pub clock: TransitionClock,
}

impl CrossFade {
    pub fn new(duration: f32) -> Self {
        Self {
            alpha: 0.0,
            clock: TransitionClock::new(duration),
        }
    }
}

impl Default for CrossFade {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_DURATION)
    }
}

impl TransitionAnimation for CrossFade {
    fn name(&self) -> &str {
        "CrossFade"
    }

    fn animate_in(&mut self, real_time: bool) -> bool {
        if self.clock.start_in(real_time) {
            self.alpha = 0.0;
            true
        } else {
            false
        }
    }

    fn animate_out(&mut self, real_time: bool) -> bool {
        if self.clock.start_out(real_time) {
            self.alpha = 1.0;
            true
        } else {
            false
        }
    }

    fn tick(&mut self, dt: f32) {
        let finished = self.clock.tick(dt);

        if self.clock.animating_in() {
            self.alpha = self.clock.progress();
        } else if self.clock.animating_out() {
            self.alpha = 1.0 - self.clock.progress();
        }

        match finished {
            Some(AnimationDirection::In) => self.alpha = 1.0,
            Some(AnimationDirection::Out) => self.alpha = 0.0,
            None => {}
        }
    }

    fn animating_in(&self) -> bool {
        self.clock.animating_in()
    }

    fn animating_out(&self) -> bool {
        self.clock.animating_out()
    }
}
