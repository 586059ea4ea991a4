// world_core/src/transitions/directional_slide.rs
use glam::Vec2;
use crate::constants::DEFAULT_TRANSITION_DURATION;
use crate::transitions::transition_animation::*;

/// A cover panel sliding between two anchored positions. In moves it from
/// `start_position` to `end_position`; out reverses the path.
pub struct DirectionalSlide {
    pub start_position: Vec2,
    pub end_position: Vec2,
    /// Current anchored position of the panel.
    pub position: Vec2,
    pub clock: TransitionClock,
}

impl DirectionalSlide {
    pub fn new(start_position: Vec2, end_position: Vec2, duration: f32) -> Self {
        Self {
            start_position,
            end_position,
            position: start_position,
            clock: TransitionClock::new(duration),
        }
    }
}

impl Default for DirectionalSlide {
    fn default() -> Self {
        // Slides in from one screen-width to the left.
        Self::new(Vec2::new(-1.0, 0.0), Vec2::ZERO, DEFAULT_TRANSITION_DURATION)
    }
}

impl TransitionAnimation for DirectionalSlide {
    fn name(&self) -> &str {
        "DirectionalSlide"
    }

    fn animate_in(&mut self, real_time: bool) -> bool {
        if self.clock.start_in(real_time) {
            self.position = self.start_position;
            true
        } else {
            false
        }
    }

    fn animate_out(&mut self, real_time: bool) -> bool {
        if self.clock.start_out(real_time) {
            self.position = self.end_position;
            true
        } else {
            false
        }
    }

    fn tick(&mut self, dt: f32) {
        let finished = self.clock.tick(dt);
        let t = self.clock.progress();

        if self.clock.animating_in() {
            self.position = self.start_position.lerp(self.end_position, t);
        } else if self.clock.animating_out() {
            self.position = self.end_position.lerp(self.start_position, t);
        }

        match finished {
            Some(AnimationDirection::In) => self.position = self.end_position,
            Some(AnimationDirection::Out) => self.position = self.start_position,
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
    fn slide_covers_and_uncovers() {
        let mut slide = DirectionalSlide::default();

        slide.animate_in(false);
        slide.tick(2.0);
        assert_eq!(slide.position, Vec2::ZERO);

        slide.animate_out(false);
        slide.tick(2.0);
        assert_eq!(slide.position, Vec2::new(-1.0, 0.0));
    }
}
