//! Scattered photo collage on the finale screen.

use std::time::Duration;

use rand::Rng;

use super::probe::AssetProbe;
use super::registry::AssetRegistry;

/// An absolute position plus rotation, kept clear of the centered text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollageSlot {
    pub top: Option<&'static str>,
    pub bottom: Option<&'static str>,
    pub left: Option<&'static str>,
    pub right: Option<&'static str>,
    /// Degrees
    pub rotation: f32,
}

impl CollageSlot {
    const fn top_left(top: &'static str, left: &'static str, rotation: f32) -> Self {
        Self {
            top: Some(top),
            bottom: None,
            left: Some(left),
            right: None,
            rotation,
        }
    }

    const fn top_right(top: &'static str, right: &'static str, rotation: f32) -> Self {
        Self {
            top: Some(top),
            bottom: None,
            left: None,
            right: Some(right),
            rotation,
        }
    }

    const fn bottom_left(bottom: &'static str, left: &'static str, rotation: f32) -> Self {
        Self {
            top: None,
            bottom: Some(bottom),
            left: Some(left),
            right: None,
            rotation,
        }
    }

    const fn bottom_right(bottom: &'static str, right: &'static str, rotation: f32) -> Self {
        Self {
            top: None,
            bottom: Some(bottom),
            left: None,
            right: Some(right),
            rotation,
        }
    }

    /// Inline CSS for the positioned container.
    pub fn style(&self) -> String {
        let mut style = String::new();
        for (property, value) in [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ] {
            if let Some(value) = value {
                style.push_str(&format!("{property}: {value}; "));
            }
        }
        style.push_str(&format!(
            "--photo-rotation: {r}deg; transform: rotate({r}deg);",
            r = self.rotation
        ));
        style
    }
}

/// Canonical collage positions.
pub const COLLAGE_SLOTS: [CollageSlot; 8] = [
    CollageSlot::top_left("5%", "3%", -20.0),
    CollageSlot::top_right("8%", "5%", 18.0),
    CollageSlot::top_left("75%", "2%", -12.0),
    CollageSlot::top_right("78%", "4%", 22.0),
    CollageSlot::bottom_left("10%", "12%", -25.0),
    CollageSlot::bottom_right("15%", "15%", 15.0),
    CollageSlot::top_left("50%", "2%", -16.0),
    CollageSlot::top_right("55%", "3%", 19.0),
];

/// One placed photo
#[derive(Clone, Debug, PartialEq)]
pub struct CollagePhoto {
    pub path: String,
    pub slot: CollageSlot,
    /// Entrance animation delay
    pub delay: Duration,
    /// Set when the photo failed to load; the whole container is hidden.
    pub hidden: bool,
}

/// The sampled collage
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collage {
    photos: Vec<CollagePhoto>,
}

impl Collage {
    /// Sample up to `max` distinct registry photos uniformly at random.
    ///
    /// Photos the probe reports missing are sampled like any other and
    /// start hidden, matching what a load failure would do.
    pub fn sample<R: Rng + ?Sized>(
        registry: &AssetRegistry,
        probe: &dyn AssetProbe,
        max: usize,
        stagger: Duration,
        rng: &mut R,
    ) -> Self {
        let amount = max.min(registry.photos.len());
        let photos = rand::seq::index::sample(rng, registry.photos.len(), amount)
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let path = registry.photos[index].clone();
                let hidden = !probe.is_available(&path);
                CollagePhoto {
                    path,
                    slot: COLLAGE_SLOTS[position % COLLAGE_SLOTS.len()],
                    delay: stagger * position as u32,
                    hidden,
                }
            })
            .collect();
        Self { photos }
    }

    pub fn photos(&self) -> &[CollagePhoto] {
        &self.photos
    }

    /// Hide a collage entry after its image failed to load.
    pub fn mark_failed(&mut self, position: usize) {
        if let Some(photo) = self.photos.get_mut(position) {
            if !photo.hidden {
                tracing::warn!(path = %photo.path, "Collage photo failed to load");
                photo.hidden = true;
            }
        }
    }

    pub fn visible_count(&self) -> usize {
        self.photos.iter().filter(|photo| !photo.hidden).count()
    }
}
