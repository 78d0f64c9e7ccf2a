//! Song player state for the fourth screen.

/// Title used when the music path yields no usable name.
pub const DEFAULT_TITLE: &str = "Our Special Song";
/// Title shown after the song failed to load.
pub const MISSING_SONG_TITLE: &str = "🎵 Add your song to assets/music/";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Derive a display title from a music path: last segment, final
/// extension removed.
pub fn title_from_path(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    let stem = match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    };
    if stem.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        stem.to_string()
    }
}

/// Play/pause, progress and fallback messaging for the song.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioPlayer {
    source: Option<String>,
    title: String,
    state: PlaybackState,
    /// Percent, 0..=100
    progress: f64,
    notice: Option<String>,
}

impl AudioPlayer {
    /// Player for an optional music path.
    pub fn new(source: Option<&str>) -> Self {
        let title = source
            .map(title_from_path)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self {
            source: source.map(str::to_string),
            title,
            state: PlaybackState::Paused,
            progress: 0.0,
            notice: None,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Fallback message shown under the player after a load error.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Flip between playing and paused; returns the new state.
    pub fn toggle(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        };
        self.state
    }

    /// Sync progress from the element's current time and duration.
    pub fn time_update(&mut self, current: f64, duration: f64) {
        self.progress = if duration.is_finite() && duration > 0.0 && current.is_finite() {
            (current / duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
    }

    /// End of track: back to the play icon and an empty bar.
    pub fn ended(&mut self) {
        self.state = PlaybackState::Paused;
        self.progress = 0.0;
    }

    /// The song could not be loaded.
    pub fn failed(&mut self) {
        let path = self.source.as_deref().unwrap_or("assets/music/");
        tracing::warn!(path, "Audio file not found");
        self.title = MISSING_SONG_TITLE.to_string();
        self.notice = Some(format!("🎵 Add your special song to {path}"));
        self.state = PlaybackState::Paused;
        self.progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(title_from_path("assets/music/love.mp3"), "love");
        assert_eq!(title_from_path("our.song.ogg"), "our.song");
        assert_eq!(title_from_path("assets/music/noext"), "noext");
        assert_eq!(title_from_path("assets/music/"), DEFAULT_TITLE);
        assert_eq!(title_from_path(".mp3"), DEFAULT_TITLE);
    }

    #[test]
    fn toggle_and_end() {
        let mut player = AudioPlayer::new(Some("assets/music/love.mp3"));
        assert_eq!(player.title(), "love");
        assert_eq!(player.toggle(), PlaybackState::Playing);
        player.time_update(30.0, 120.0);
        assert_eq!(player.progress(), 25.0);
        player.ended();
        assert!(!player.is_playing());
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn progress_ignores_unknown_duration() {
        let mut player = AudioPlayer::new(None);
        player.time_update(3.0, f64::NAN);
        assert_eq!(player.progress(), 0.0);
        player.time_update(3.0, 0.0);
        assert_eq!(player.progress(), 0.0);
        player.time_update(500.0, 100.0);
        assert_eq!(player.progress(), 100.0);
    }

    #[test]
    fn no_source_keeps_default_title() {
        let player = AudioPlayer::new(None);
        assert_eq!(player.title(), DEFAULT_TITLE);
        assert_eq!(player.source(), None);
    }

    #[test]
    fn failure_posts_fallback() {
        let mut player = AudioPlayer::new(Some("assets/music/love.mp3"));
        player.toggle();
        player.failed();
        assert_eq!(player.title(), MISSING_SONG_TITLE);
        assert_eq!(
            player.notice(),
            Some("🎵 Add your special song to assets/music/love.mp3")
        );
        assert!(!player.is_playing());
    }
}
