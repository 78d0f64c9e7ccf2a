//! Valentine UI Components
//!
//! Small Dioxus components shared by the five screens. They know nothing
//! about the show controller: they take plain props and emit events.
//!
//! ## Palette
//!
//! - **Rose (#ff4d6d)**: buttons, active states, the progress bar
//! - **Blush (#ffccd5)**: placeholders and soft backgrounds
//! - **Wine (#590d22)**: body text

pub mod components;

pub use components::*;
