//! Owns the fixed set of panels and the current selection

use pdeck_core::prelude::*;

use crate::config::MAX_PANELS;
use crate::panel::{Panel, PanelId};

/// The fixed, owned collection of panels.
///
/// Panels are created once and never removed; a new start re-arms one in place.
#[derive(Debug, Clone)]
pub struct PanelManager {
    panels: Vec<Panel>,
    selected_index: usize,
}

impl PanelManager {
    /// Create `count` panels (clamped to `1..=MAX_PANELS`)
    pub fn new(count: usize, max_log_lines: usize) -> Self {
        let count = count.clamp(1, MAX_PANELS);
        Self {
            panels: (0..count).map(|id| Panel::new(id, max_log_lines)).collect(),
            selected_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(id)
    }

    /// Like [`get_mut`](Self::get_mut) but reports an out-of-range index
    pub fn require_mut(&mut self, id: PanelId) -> Result<&mut Panel> {
        let count = self.panels.len();
        self.panels
            .get_mut(id)
            .ok_or_else(|| Error::panel_out_of_range(id + 1, count))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Panel> {
        self.panels.iter_mut()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&Panel> {
        self.panels.get(self.selected_index)
    }

    /// Select by index; out-of-range indices are ignored
    pub fn select_by_index(&mut self, index: usize) -> bool {
        if index < self.panels.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        if !self.panels.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.panels.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.panels.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.panels.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Panels with a profile
    pub fn armed_count(&self) -> usize {
        self.panels.iter().filter(|p| p.is_armed()).count()
    }
}
