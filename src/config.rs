use super::error::SpiroError;
use std::time::Duration;

pub const DEFAULT_CURVES: usize = 4;
pub const DEFAULT_INTERVAL_MS: u64 = 10;
pub const DEFAULT_STEP_DEG: u32 = 5;
pub const DEFAULT_WIDTH: usize = 960;
pub const DEFAULT_HEIGHT: usize = 720;
pub const MIN_OUTER_RADIUS: u32 = 50;
pub const MIN_INNER_RADIUS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub width: usize,
    pub height: usize,
}

impl ViewportConfig {
    /*
     * The outer radius is drawn in [50, min(w, h) / 2], so the smaller side
     * cannot go below 100 pixels.
     */
    pub fn validate(&self) -> Result<(), SpiroError> {
        if self.width.min(self.height) / 2 < MIN_OUTER_RADIUS as usize {
            return Err(SpiroError::ViewportTooSmall(self.width, self.height));
        }

        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    pub count: usize,
    pub interval: Duration,
    pub step_deg: u32,
    pub viewport: ViewportConfig,
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<(), SpiroError> {
        if self.count == 0 {
            return Err(SpiroError::NoCurves);
        }
        if self.step_deg == 0 {
            return Err(SpiroError::ZeroStep);
        }
        self.viewport.validate()
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        AnimatorConfig {
            count: DEFAULT_CURVES,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            step_deg: DEFAULT_STEP_DEG,
            viewport: ViewportConfig::default(),
        }
    }
}
