//! The five screens of the greeting.

mod finale;
mod memories;
mod reveal;
mod song;
mod unlock;

pub use finale::Finale;
pub use memories::Memories;
pub use reveal::Reveal;
pub use song::Song;
pub use unlock::Unlock;
