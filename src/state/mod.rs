//! Application state module

mod app_state;
mod feedback;
mod forms;

pub use app_state::*;
pub use feedback::*;
pub use forms::*;
