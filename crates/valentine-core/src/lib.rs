//! Valentine Core Library
//!
//! State and choreography for a five-screen greeting: an unlock question,
//! a celebration screen, a heart of photos, a song, and a photo collage.
//!
//! ## Overview
//!
//! Nothing here touches a DOM or a clock. [`Show`] holds every piece of
//! state the page renders and a virtual-time scheduler; the UI shell
//! forwards input and load failures into it and calls
//! [`Show::advance_to`] as real time passes.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use valentine_core::{AssumeAvailable, ScreenId, Show, ShowConfig};
//!
//! let mut rng = rand::rng();
//! let mut show = Show::boot(ShowConfig::default(), &AssumeAvailable, &mut rng);
//!
//! show.advance_to(Duration::from_millis(500));
//! assert_eq!(show.deck().active(), Some(ScreenId::UNLOCK));
//!
//! show.submit_answer(" 3 ");
//! show.advance_to(Duration::from_millis(1_800));
//! show.advance_to(Duration::from_millis(2_200));
//! assert_eq!(show.deck().active(), Some(ScreenId::REVEAL));
//! ```

pub mod animator;
pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod screen;
pub mod show;
pub mod unlock;

// Re-exports
pub use animator::{GifAnimator, GifItem, GifSession, GifVisibility};
pub use assets::{
    AssetProbe, AssetRegistry, AssumeAvailable, Collage, CollagePhoto, FsProbe, HeartLayout,
    MemorySlot, SlotContent, PLACEHOLDER_GLYPH,
};
pub use audio::{AudioPlayer, PlaybackState};
pub use config::{AutoAdvance, Link, Navigation, ShowConfig, Timings};
pub use error::{ShowError, ShowResult};
pub use screen::{ScreenDeck, ScreenId, ScreenPhase, SCREEN_COUNT};
pub use show::Show;
pub use unlock::{Hint, HintKind, UnlockGate, Verdict};
