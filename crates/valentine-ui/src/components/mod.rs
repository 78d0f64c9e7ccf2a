//! Reusable UI components

mod button;
mod hint_line;
mod placeholder;

pub use button::*;
pub use hint_line::*;
pub use placeholder::*;
