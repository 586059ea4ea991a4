// world_core/src/transitions/screen_wipe.rs
use crate::constants::DEFAULT_TRANSITION_DURATION;
use crate::transitions::transition_animation::*;

/// A fill wipe across the screen. `cutoff` is the covered fraction: 0 -> 1
/// on the way in, 1 -> 0 on the way out.
pub struct ScreenWipe {
    pub cutoff: f32,
    pub clock: TransitionClock,
}

impl ScreenWipe {
    pub fn new(duration: f32) -> Self {
        Self {
            cutoff: 0.0,
            clock: TransitionClock::new(duration),
        }
    }
}

impl Default for ScreenWipe {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_DURATION)
    }
}

impl TransitionAnimation for ScreenWipe {
    fn name(&self) -> &str {
        "ScreenWipe"
    }

    fn animate_in(&mut self, real_time: bool) -> bool {
        if self.clock.start_in(real_time) {
            self.cutoff = 0.0;
            true
        } else {
            false
        }
    }

    fn animate_out(&mut self, real_time: bool) -> bool {
        if self.clock.start_out(real_time) {
            self.cutoff = 1.0;
            true
        } else {
            false
        }
    }

    fn tick(&mut self, dt: f32) {
        let finished = self.clock.tick(dt);

        if self.clock.animating_in() {
            self.cutoff = self.clock.progress();
        } else if self.clock.animating_out() {
            self.cutoff = 1.0 - self.clock.progress();
        }

        match finished {
            Some(AnimationDirection::In) => self.cutoff = 1.0,
            Some(AnimationDirection::Out) => self.cutoff = 0.0,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_covers_then_clears() {
        let mut wipe = ScreenWipe::new(0.5);

        wipe.animate_in(false);
        wipe.tick(0.6);
        assert_eq!(wipe.cutoff, 1.0);

        wipe.animate_out(false);
        wipe.tick(0.6);
        assert_eq!(wipe.cutoff, 0.0);
    }
}
