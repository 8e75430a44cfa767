use crate::consts;

/// Cosmetic state that changes every rendered frame, independently of the
/// snake's steps
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Animation {
    /// Current scale of the food, bouncing between
    /// [`FOOD_SCALE_MIN`][consts::FOOD_SCALE_MIN] and
    /// [`FOOD_SCALE_MAX`][consts::FOOD_SCALE_MAX]
    food_scale: f64,

    pulse: Pulse,

    /// Current scale of the snake's head; jumps up after a meal and eases
    /// back to 1
    head_pop: f64,

    /// Rendered frames left in the death flash
    death_flash_frames: u32,
}

impl Animation {
    pub(super) fn new() -> Animation {
        Animation {
            food_scale: 1.0,
            pulse: Pulse::Growing,
            head_pop: 1.0,
            death_flash_frames: 0,
        }
    }

    /// Advance the food pulse and head pop by one frame.  The death flash is
    /// left to [`fade_flash()`][Animation::fade_flash], which runs once per
    /// frame drawn after the snake dies.
    pub(super) fn tick(&mut self) {
        self.food_scale += consts::FOOD_PULSE_RATE * self.pulse.sign();
        if self.food_scale > consts::FOOD_SCALE_MAX {
            self.pulse = Pulse::Shrinking;
        } else if self.food_scale < consts::FOOD_SCALE_MIN {
            self.pulse = Pulse::Growing;
        }
        self.head_pop += (1.0 - self.head_pop) * consts::HEAD_POP_DECAY;
    }

    /// Count the death flash down by one frame
    pub(super) fn fade_flash(&mut self) {
        self.death_flash_frames = self.death_flash_frames.saturating_sub(1);
    }

    pub(super) fn on_eat(&mut self) {
        self.head_pop = consts::HEAD_POP_PEAK;
    }

    pub(super) fn on_death(&mut self) {
        self.death_flash_frames = consts::DEATH_FLASH_FRAMES;
    }

    pub(super) fn food_scale(&self) -> f64 {
        self.food_scale
    }

    pub(super) fn head_pop(&self) -> f64 {
        self.head_pop
    }

    #[cfg(test)]
    pub(super) fn death_flash_frames(&self) -> u32 {
        self.death_flash_frames
    }

    pub(super) fn flashing(&self) -> bool {
        self.death_flash_frames > 0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Pulse {
    Growing,
    Shrinking,
}

impl Pulse {
    fn sign(self) -> f64 {
        match self {
            Pulse::Growing => 1.0,
            Pulse::Shrinking => -1.0,
        }
    }
}
