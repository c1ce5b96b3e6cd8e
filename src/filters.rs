use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid half-life {0}; must be a positive number of samples")]
    InvalidHalfLife(f32),
}

/// Low-pass filter, AKA exponential smoothing. A single-pole IIR filter over an integer sample
/// stream, parameterized by the number of samples after which a past sample's weight decays to
/// 50%.
pub struct ExponentialSmoothing {
    alpha: f32,
    smoothed_value: f32,
    empty: bool,
}

impl ExponentialSmoothing {
    pub fn new(half_life: f32) -> Result<Self, FilterError> {
        // Also rejects NaN.
        if !(half_life > 0.0) {
            return Err(FilterError::InvalidHalfLife(half_life));
        }

        Ok(ExponentialSmoothing {
            alpha: (0.5f32.ln() / half_life).exp(),
            smoothed_value: 0.0,
            empty: true,
        })
    }

    /// Forget the running estimate. The next sample is taken verbatim, so a new stroke starts
    /// with zero smoothing lag.
    pub fn clear(&mut self) {
        self.empty = true;
    }

    pub fn add(&mut self, sample: u32) {
        if self.empty {
            self.smoothed_value = sample as f32;
        } else {
            self.smoothed_value =
                self.alpha * self.smoothed_value + (1.0 - self.alpha) * sample as f32;
        }
        self.empty = false;
    }

    /// The current estimate, truncated to the coordinate type. Meaningless until the first `add`
    /// after construction or `clear`.
    pub fn value(&self) -> u32 {
        self.smoothed_value as u32
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }
}
