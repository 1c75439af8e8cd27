//! HTTP handlers for the AETHER monitor

mod dashboard;
mod forecast;
mod health;
mod reasoning;
mod signals;

pub use dashboard::*;
pub use forecast::*;
pub use health::*;
pub use reasoning::*;
pub use signals::*;
