use crate::consts;
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;

/// Parameters of the speed curve
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Tuning {
    start_speed: Duration,
    speed_step: Duration,
    min_speed: Duration,
    points_per_speed: NonZeroU32,
}

impl Tuning {
    /// # Errors
    ///
    /// Returns `Err` if `start_speed` is zero or less than `min_speed`, or if
    /// `points_per_speed` is zero.
    pub(crate) fn new(
        start_speed: Duration,
        speed_step: Duration,
        min_speed: Duration,
        points_per_speed: u32,
    ) -> Result<Tuning, TuningError> {
        if start_speed.is_zero() {
            return Err(TuningError::ZeroStart);
        }
        if min_speed > start_speed {
            return Err(TuningError::MinAboveStart {
                min_speed,
                start_speed,
            });
        }
        let points_per_speed = NonZeroU32::new(points_per_speed).ok_or(TuningError::ZeroPoints)?;
        Ok(Tuning {
            start_speed,
            speed_step,
            min_speed,
            points_per_speed,
        })
    }

    pub(crate) fn start_speed(&self) -> Duration {
        self.start_speed
    }

    pub(crate) fn speed_step(&self) -> Duration {
        self.speed_step
    }

    pub(crate) fn min_speed(&self) -> Duration {
        self.min_speed
    }

    pub(crate) fn points_per_speed(&self) -> u32 {
        self.points_per_speed.get()
    }

    /// The interval between steps after reaching `score` from `current`.
    /// Every [`points_per_speed`][Tuning::points_per_speed] points the
    /// interval shrinks by one step, never going below the minimum.
    pub(crate) fn speed_after(&self, score: u32, current: Duration) -> Duration {
        if score > 0 && score % self.points_per_speed == 0 {
            current.saturating_sub(self.speed_step).max(self.min_speed)
        } else {
            current
        }
    }
}

impl Default for Tuning {
    fn default() -> Tuning {
        Tuning {
            start_speed: consts::START_SPEED,
            speed_step: consts::SPEED_STEP,
            min_speed: consts::MIN_SPEED,
            points_per_speed: NonZeroU32::MIN.saturating_add(consts::POINTS_PER_SPEED - 1),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum TuningError {
    #[error("start speed must be greater than zero")]
    ZeroStart,
    #[error("minimum speed ({min_speed:?}) is slower than start speed ({start_speed:?})")]
    MinAboveStart {
        min_speed: Duration,
        start_speed: Duration,
    },
    #[error("points per speed increase must be at least 1")]
    ZeroPoints,
}
