//! Domain models for the AETHER risk core

mod advisory;
mod alert;
mod crop;
mod dashboard;
mod health;
mod weather;

pub use advisory::*;
pub use alert::*;
pub use crop::*;
pub use dashboard::*;
pub use health::*;
pub use weather::*;
