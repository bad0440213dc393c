use egui::Pos2;
use serde::{Deserialize, Serialize};

/// A laid-out node of the currently loaded graph.
///
/// The id is positional: node `i` addresses row `i` of the owning
/// [`crate::AdjacencyMatrix`]. Ids are assigned once when a matrix is loaded
/// and never reassigned; the whole collection is replaced on the next load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    location: Pos2,
    highlighted: bool,
    label: String,
}

impl Node {
    pub(crate) fn new(id: usize, location: Pos2) -> Self {
        Self {
            id,
            location,
            highlighted: false,
            label: letter_label(id),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn location(&self) -> Pos2 {
        self.location
    }

    pub fn set_location(&mut self, location: Pos2) {
        self.location = location;
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Letter label for a positional id: `A` for 0, `B` for 1, wrapping after `Z`.
fn letter_label(id: usize) -> String {
    char::from(b'A' + (id % 26) as u8).to_string()
}
