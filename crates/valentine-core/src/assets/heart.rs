//! Heart-shaped photo layout on the memories screen.

use std::time::Duration;

use super::probe::AssetProbe;
use super::registry::AssetRegistry;

/// Fixed number of slots in the heart layout.
pub const HEART_SLOTS: usize = 8;

/// Glyph shown in place of a missing photo.
pub const PLACEHOLDER_GLYPH: &str = "📸";

/// What one slot displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotContent {
    Photo(String),
    Placeholder,
}

/// One memory slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorySlot {
    pub content: SlotContent,
    /// Entrance animation delay
    pub delay: Duration,
}

impl MemorySlot {
    pub fn photo(&self) -> Option<&str> {
        match &self.content {
            SlotContent::Photo(path) => Some(path),
            SlotContent::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.content == SlotContent::Placeholder
    }
}

/// The eight memory slots.
///
/// A slot shows a placeholder exactly when no photo is configured for its
/// index or the configured photo failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeartLayout {
    slots: Vec<MemorySlot>,
}

impl HeartLayout {
    /// Fill the slots from the first eight registry photos.
    pub fn load(registry: &AssetRegistry, probe: &dyn AssetProbe, stagger: Duration) -> Self {
        let slots = (0..HEART_SLOTS)
            .map(|index| {
                let content = match registry.photos.get(index) {
                    Some(path) if probe.is_available(path) => SlotContent::Photo(path.clone()),
                    _ => SlotContent::Placeholder,
                };
                MemorySlot {
                    content,
                    delay: stagger * index as u32,
                }
            })
            .collect();
        let layout = Self { slots };
        tracing::debug!(
            placeholders = layout.placeholder_count(),
            "Heart layout loaded"
        );
        layout
    }

    pub fn slots(&self) -> &[MemorySlot] {
        &self.slots
    }

    /// Swap a slot's photo for the placeholder after a load failure.
    pub fn mark_failed(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            if let SlotContent::Photo(path) = &slot.content {
                tracing::warn!(slot = index, path = %path, "Memory photo failed to load");
                slot.content = SlotContent::Placeholder;
            }
        }
    }

    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_placeholder()).count()
    }
}
