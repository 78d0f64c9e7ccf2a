//! Static asset registry.

use serde::{Deserialize, Serialize};

/// Ordered asset paths, relative to the asset root.
///
/// Order matters: the first eight photos fill the heart layout, and GIF
/// positions decide which screen each GIF lands on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRegistry {
    pub photos: Vec<String>,
    pub music: Option<String>,
    pub gifs: Vec<String>,
}

impl AssetRegistry {
    /// Empty registry: every slot shows a placeholder, no song, no GIFs.
    pub fn empty() -> Self {
        Self {
            photos: Vec::new(),
            music: None,
            gifs: Vec::new(),
        }
    }

    /// Configured music path, treating an empty string as absent.
    pub fn music_path(&self) -> Option<&str> {
        self.music
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        let photos = [
            "pic1.jpeg",
            "pic2.jpeg",
            "pic3.jpeg",
            "pic4.jpeg",
            "pic5.jpeg",
            "pic6.jpeg",
            "pic7.jpeg",
            "pic11.jpeg",
            "pic8.jpeg",
            "pic9.jpeg",
            "pic10.jpeg",
        ];
        let gifs = [
            "love.gif",
            "good-morning-beautiful.gif",
            "bubu-dudu-bubu-dudu-love.gif",
            "cat-love.gif",
            "love-poke.gif",
            "milk-and-mocha.gif",
            "amoureux.gif",
            "cute-cartoon.gif",
            "peach-goma-peach-and-goma.gif",
            "kiss-me.gif",
            "tkthao219-bubududu.gif",
        ];
        Self {
            photos: photos
                .iter()
                .map(|name| format!("assets/photos/{name}"))
                .collect(),
            music: Some("assets/music/love.mp3".to_string()),
            gifs: gifs.iter().map(|name| format!("assets/gifs/{name}")).collect(),
        }
    }
}
