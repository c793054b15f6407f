use std::error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpiroError {
    ZeroRadius(&'static str),           // radius name
    InnerRadiusTooLarge(u32, u32),      // inner radius, outer radius
    InvalidValue(&'static str, f64),    // parameter name, value
    ZeroStep,
    NoCurves,
    ViewportTooSmall(usize, usize),     // width, height
    SinkFailure(&'static str),          // error message
    TimerRearm(&'static str),           // error message
}

impl SpiroError {
    /*
     * Parameter errors come from the caller, everything else means the
     * rendering host is gone.
     */
    pub fn is_precondition(&self) -> bool {
        !matches!(
            self,
            SpiroError::SinkFailure(_) | SpiroError::TimerRearm(_)
        )
    }
}

impl fmt::Display for SpiroError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SpiroError::ZeroRadius(name) => write!(f, "The {} radius must be strictly positive.", name),
            SpiroError::InnerRadiusTooLarge(inner, outer) => write!(
                f,
                "The inner radius ({}) must be smaller than the outer radius ({}).",
                inner, outer
            ),
            SpiroError::InvalidValue(name, value) => {
                write!(f, "Invalid value {} for parameter '{}'.", value, name)
            }
            SpiroError::ZeroStep => write!(f, "The angular step must be at least one degree."),
            SpiroError::NoCurves => write!(f, "At least one curve is needed to animate."),
            SpiroError::ViewportTooSmall(width, height) => write!(
                f,
                "Viewport {}×{} is too small, both sides must be at least 100 pixels.",
                width, height
            ),
            SpiroError::SinkFailure(msg) => write!(f, "Drawing failed: {}", msg),
            SpiroError::TimerRearm(msg) => write!(f, "Could not re-arm the timer: {}", msg),
        }
    }
}

impl error::Error for SpiroError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
