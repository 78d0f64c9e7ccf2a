//! Show configuration.
//!
//! Everything an integrator edits lives here: the asset registry, the
//! accepted answer, timing constants and the navigation table. Every field
//! has a default, so `{}` is a complete config file.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assets::AssetRegistry;
use crate::error::{ShowError, ShowResult};
use crate::screen::ScreenId;

/// Accepted unlock answer unless configured otherwise.
pub const DEFAULT_ANSWER: &str = "3";

/// Question shown above the answer input.
pub const DEFAULT_QUESTION: &str = "How many words are in \"I love you\"?";

/// Timing constants, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Cross-fade between deactivation and activation
    pub fade_ms: u64,
    /// GIF session start after a transition begins
    pub gif_start_ms: u64,
    /// GIF session start after GIFs are inserted into an active screen
    pub gif_load_start_ms: u64,
    /// How long each GIF stays up
    pub gif_display_ms: u64,
    /// Full GIF fade; the next GIF is revealed after half of it
    pub gif_fade_ms: u64,
    /// Accepted answer to screen 2
    pub unlock_ms: u64,
    /// Success hint lifetime
    pub success_hint_ms: u64,
    /// Entrance stagger per memory slot
    pub memory_stagger_ms: u64,
    /// Entrance stagger per collage photo
    pub collage_stagger_ms: u64,
}

impl Timings {
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    pub fn gif_start(&self) -> Duration {
        Duration::from_millis(self.gif_start_ms)
    }

    pub fn gif_load_start(&self) -> Duration {
        Duration::from_millis(self.gif_load_start_ms)
    }

    pub fn gif_display(&self) -> Duration {
        Duration::from_millis(self.gif_display_ms)
    }

    pub fn gif_half_fade(&self) -> Duration {
        Duration::from_millis(self.gif_fade_ms / 2)
    }

    pub fn unlock(&self) -> Duration {
        Duration::from_millis(self.unlock_ms)
    }

    pub fn success_hint(&self) -> Duration {
        Duration::from_millis(self.success_hint_ms)
    }

    pub fn memory_stagger(&self) -> Duration {
        Duration::from_millis(self.memory_stagger_ms)
    }

    pub fn collage_stagger(&self) -> Duration {
        Duration::from_millis(self.collage_stagger_ms)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fade_ms: 400,
            gif_start_ms: 500,
            gif_load_start_ms: 100,
            gif_display_ms: 2000,
            gif_fade_ms: 800,
            unlock_ms: 800,
            success_hint_ms: 2000,
            memory_stagger_ms: 100,
            collage_stagger_ms: 150,
        }
    }
}

/// Automatic transition once `from` has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAdvance {
    pub from: ScreenId,
    pub to: ScreenId,
    pub after_ms: u64,
}

impl AutoAdvance {
    pub fn after(&self) -> Duration {
        Duration::from_millis(self.after_ms)
    }
}

/// User-triggered "continue" control from one screen to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub from: ScreenId,
    pub to: ScreenId,
}

impl FromStr for Link {
    type Err = ShowError;

    /// Parse `FROM:TO`, e.g. `3:4`.
    fn from_str(s: &str) -> ShowResult<Self> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| ShowError::InvalidLink(s.to_string()))?;
        let parse = |part: &str| -> ShowResult<ScreenId> {
            let n: u8 = part
                .trim()
                .parse()
                .map_err(|_| ShowError::InvalidLink(s.to_string()))?;
            ScreenId::new(n)
        };
        Ok(Link {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}

/// Navigation table. Screen 1 is left only through the unlock gate, so
/// `validate` rejects rules and links starting there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Navigation {
    pub auto: Vec<AutoAdvance>,
    pub links: Vec<Link>,
}

impl Navigation {
    /// Auto-advance rule leaving `from`. Never matches screen 1.
    pub fn auto_from(&self, from: ScreenId) -> Option<&AutoAdvance> {
        if from == ScreenId::UNLOCK {
            return None;
        }
        self.auto.iter().find(|rule| rule.from == from)
    }

    /// Link leaving `from`. Never matches screen 1.
    pub fn link_from(&self, from: ScreenId) -> Option<&Link> {
        if from == ScreenId::UNLOCK {
            return None;
        }
        self.links.iter().find(|link| link.from == from)
    }

    /// Add a link, replacing any existing link from the same screen.
    pub fn add_link(&mut self, link: Link) {
        self.links.retain(|existing| existing.from != link.from);
        self.links.push(link);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            auto: vec![AutoAdvance {
                from: ScreenId::REVEAL,
                to: ScreenId::MEMORIES,
                after_ms: 1500,
            }],
            links: Vec::new(),
        }
    }
}

/// Full show configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    pub registry: AssetRegistry,
    pub question: String,
    pub answer: String,
    pub timings: Timings,
    pub navigation: Navigation,
    /// Maximum photos sampled into the finale collage
    pub collage_size: usize,
}

impl ShowConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ShowResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: ShowConfig = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded show config");
        Ok(config)
    }

    pub fn validate(&self) -> ShowResult<()> {
        if self.answer.trim().is_empty() {
            return Err(ShowError::InvalidConfig(
                "answer must not be empty".to_string(),
            ));
        }
        if self.answer.trim() != self.answer {
            return Err(ShowError::InvalidConfig(
                "answer must not carry surrounding whitespace".to_string(),
            ));
        }
        if self.timings.gif_display_ms == 0 {
            return Err(ShowError::InvalidConfig(
                "gif_display_ms must be greater than zero".to_string(),
            ));
        }
        if self.timings.gif_fade_ms / 2 >= self.timings.gif_display_ms {
            return Err(ShowError::InvalidConfig(
                "half of gif_fade_ms must be shorter than gif_display_ms".to_string(),
            ));
        }
        let from_unlock = self
            .navigation
            .auto
            .iter()
            .map(|rule| rule.from)
            .chain(self.navigation.links.iter().map(|link| link.from))
            .any(|from| from == ScreenId::UNLOCK);
        if from_unlock {
            return Err(ShowError::InvalidConfig(
                "screen 1 is left only by answering the question".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            registry: AssetRegistry::default(),
            question: DEFAULT_QUESTION.to_string(),
            answer: DEFAULT_ANSWER.to_string(),
            timings: Timings::default(),
            navigation: Navigation::default(),
            collage_size: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default_config() {
        let config: ShowConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ShowConfig::default());
        assert_eq!(config.answer, "3");
        assert_eq!(config.timings.fade(), Duration::from_millis(400));
        assert_eq!(config.timings.gif_half_fade(), Duration::from_millis(400));
    }

    #[test]
    fn default_navigation_is_reveal_to_memories() {
        let nav = Navigation::default();
        let rule = nav.auto_from(ScreenId::REVEAL).unwrap();
        assert_eq!(rule.to, ScreenId::MEMORIES);
        assert_eq!(rule.after(), Duration::from_millis(1500));
        assert!(nav.links.is_empty());
    }

    #[test]
    fn parse_link() {
        let link: Link = "3:4".parse().unwrap();
        assert_eq!(link.from, ScreenId::MEMORIES);
        assert_eq!(link.to, ScreenId::SONG);

        assert!(matches!("34".parse::<Link>(), Err(ShowError::InvalidLink(_))));
        assert!(matches!("x:4".parse::<Link>(), Err(ShowError::InvalidLink(_))));
        assert!(matches!("3:9".parse::<Link>(), Err(ShowError::InvalidScreen(9))));
    }

    #[test]
    fn add_link_replaces_same_source() {
        let mut nav = Navigation::default();
        nav.add_link("3:4".parse().unwrap());
        nav.add_link("3:5".parse().unwrap());
        assert_eq!(nav.links.len(), 1);
        assert_eq!(nav.link_from(ScreenId::MEMORIES).unwrap().to, ScreenId::FINALE);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = ShowConfig::default();
        config.answer = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ShowConfig::default();
        config.timings.gif_display_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_fade_longer_than_display() {
        let mut config = ShowConfig::default();
        config.timings.gif_fade_ms = 5000;
        assert!(matches!(config.validate(), Err(ShowError::InvalidConfig(_))));

        config.timings.gif_fade_ms = 3998;
        assert!(config.validate().is_ok());
        config.timings.gif_fade_ms = 4000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_navigation_out_of_unlock() {
        let mut config = ShowConfig::default();
        config.navigation.add_link("1:5".parse().unwrap());
        assert!(matches!(config.validate(), Err(ShowError::InvalidConfig(_))));

        let mut config = ShowConfig::default();
        config.navigation.auto.push(AutoAdvance {
            from: ScreenId::UNLOCK,
            to: ScreenId::REVEAL,
            after_ms: 10,
        });
        assert!(config.validate().is_err());

        let mut config = ShowConfig::default();
        config.navigation.add_link("5:1".parse().unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn navigation_rejects_out_of_range_screen() {
        let json = r#"{ "navigation": { "links": [ { "from": 3, "to": 6 } ] } }"#;
        assert!(serde_json::from_str::<ShowConfig>(json).is_err());
    }
}
