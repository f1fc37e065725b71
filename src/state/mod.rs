//! Application state module

mod feedback;
mod forms;
mod surface;

pub use feedback::*;
pub use forms::*;
pub use surface::*;
