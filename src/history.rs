//! Previously picked colors
//!
//! The picker keeps every sampled color in a list, newest first, and shows
//! details for one selected entry. Entries carry a monotonic id so list
//! views can key on something stable across insertions and removals.
//!
//! Only the stored value format lives here: a JSON array of hex strings.
//! Where that string is kept is up to the host application.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::conversion::{hex_to_rgb, rgb_to_hex};
use crate::{ColorDetails, PickerConfig, PickerError, Result, Rgb};

/// One remembered color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable identifier, unique within one history
    pub id: u64,
    /// Canonical `#rrggbb` hex
    pub hex: String,
    pub rgb: Rgb,
}

/// Ordered list of picked colors with a current selection
#[derive(Debug, Clone)]
pub struct ColorHistory {
    entries: VecDeque<HistoryEntry>,
    selected: usize,
    next_id: u64,
    config: PickerConfig,
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl ColorHistory {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            entries: VecDeque::new(),
            selected: 0,
            next_id: 0,
            config,
        }
    }

    /// Rebuild a history from its stored JSON array of hex strings
    ///
    /// The first stored color is selected.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the JSON is not an array of strings and
    /// `InvalidColorFormat` if any entry is not a hex color
    pub fn from_json(json: &str, config: PickerConfig) -> Result<Self> {
        let stored: Vec<String> = serde_json::from_str(json)
            .map_err(|e| PickerError::config("stored colors are not a JSON array of strings", e))?;

        let mut history = Self::new(config);
        for hex in stored.iter().rev() {
            history.insert_front(hex)?;
        }
        history.apply_limit();
        debug!(count = history.len(), "restored color history");
        Ok(history)
    }

    /// Serialize to the stored format, newest first
    pub fn to_json(&self) -> Result<String> {
        let hexes: Vec<&str> = self.entries.iter().map(|e| e.hex.as_str()).collect();
        serde_json::to_string(&hexes).map_err(|e| PickerError::config("cannot serialize colors", e))
    }

    /// Add a freshly picked color at the front and select it
    ///
    /// Returns the new entry's id.
    ///
    /// With a `history_limit` of 0 the color is validated and immediately
    /// dropped, leaving the history empty.
    pub fn push(&mut self, hex: &str) -> Result<u64> {
        let id = self.insert_front(hex)?;
        let rgb = self.entries[0].rgb;
        self.selected = 0;
        self.apply_limit();
        debug!(id, hex = %rgb_to_hex(rgb), "added color to history");
        Ok(id)
    }

    fn insert_front(&mut self, hex: &str) -> Result<u64> {
        let rgb = hex_to_rgb(hex)?;
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(HistoryEntry {
            id,
            hex: rgb_to_hex(rgb),
            rgb,
        });
        Ok(id)
    }

    fn apply_limit(&mut self) {
        if let Some(limit) = self.config.history_limit {
            if self.entries.len() > limit {
                debug!(dropped = self.entries.len() - limit, limit, "trimmed color history");
                self.entries.truncate(limit);
                if self.selected >= self.entries.len() {
                    self.selected = 0;
                }
            }
        }
    }

    /// Select the entry at `index`
    pub fn select(&mut self, index: usize) -> Result<&HistoryEntry> {
        let entry = self.entries.get(index).ok_or(PickerError::HistoryIndex {
            index,
            len: self.entries.len(),
        })?;
        self.selected = index;
        Ok(entry)
    }

    /// Index of the selected entry, `None` when the history is empty
    pub fn selected_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.selected)
    }

    /// Display details of the selected entry
    pub fn selected(&self) -> Option<ColorDetails> {
        self.entries
            .get(self.selected)
            .map(|entry| ColorDetails::from_rgb(entry.rgb, self.config.uppercase_hex))
    }

    /// Remove the entry at `index`
    ///
    /// Removing the selected entry moves the selection to the newest color.
    /// Removing an entry before the selection keeps the same color selected.
    pub fn remove(&mut self, index: usize) -> Result<HistoryEntry> {
        let len = self.entries.len();
        let removed = self
            .entries
            .remove(index)
            .ok_or(PickerError::HistoryIndex { index, len })?;

        if index == self.selected {
            self.selected = 0;
        } else if index < self.selected {
            self.selected -= 1;
        }
        debug!(id = removed.id, hex = %removed.hex, "removed color from history");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "cleared color history");
        self.entries.clear();
        self.selected = 0;
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }
}
