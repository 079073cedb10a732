//! Application state module

mod answers;
mod app_state;
mod forms;
mod input_buffer;
mod submission;

pub use answers::*;
pub use app_state::*;
pub use forms::*;
pub use input_buffer::*;
pub use submission::*;
