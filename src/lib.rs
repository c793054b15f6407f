extern crate minifb;

pub mod animator;
pub mod canvas;
pub mod config;
pub mod curve;
mod error;
pub mod input;
mod instance;
pub mod timer;

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

pub use animator::{random_params, Animator};
pub use canvas::{Canvas, DrawingSink, Pen, SharedCanvas};
pub use config::{AnimatorConfig, ViewportConfig};
pub use curve::{Color, CurveParams, Point};
pub use error::SpiroError;
pub use input::KeyBindings;
pub use instance::CurveInstance;
pub use timer::{Deadline, Timer};
