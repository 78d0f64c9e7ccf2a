//! Asset registry and loader plans.
//!
//! The registry is the hand-edited list of photo, music and GIF paths. The
//! loaders turn it into per-screen presentation state, each one tolerant
//! per item: a missing or broken file degrades only its own slot.

mod collage;
mod gifs;
mod heart;
mod probe;
mod registry;

pub use collage::{Collage, CollagePhoto, CollageSlot, COLLAGE_SLOTS};
pub use gifs::{distribute_gifs, GifBuckets};
pub use heart::{HeartLayout, MemorySlot, SlotContent, HEART_SLOTS, PLACEHOLDER_GLYPH};
pub use probe::{AssetProbe, AssumeAvailable, FsProbe};
pub use registry::AssetRegistry;
