//! Show-aware components.
//!
//! These read the show from context and forward events into it. Plain
//! presentational pieces live in the `valentine-ui` crate.

mod audio_player;
mod gif_strip;
mod memory_heart;
mod scattered_photos;
mod screen_frame;

pub use audio_player::AudioPlayerCard;
pub use gif_strip::GifStrip;
pub use memory_heart::MemoryHeart;
pub use scattered_photos::ScatteredPhotos;
pub use screen_frame::ScreenFrame;
