use std::time::Duration;

use egui::{Id, Pos2, Rect, Ui};
use instant::Instant;
use serde::{Deserialize, Serialize};

const KEY_PREFIX: &str = "egui_adjacency_metadata";

/// Resize bursts are collapsed into one re-layout after this quiet period.
pub(crate) const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Collapses a burst of canvas size changes into a single settled value.
///
/// Every [`note`](Self::note) restarts the quiet period;
/// [`poll`](Self::poll) hands the latest canvas out once, after input has
/// been quiet long enough. Time is injected so the debounce is testable.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ResizeDebounce {
    pending: Option<(Rect, Instant)>,
}

impl ResizeDebounce {
    pub(crate) fn note(&mut self, canvas: Rect, at: Instant) {
        self.pending = Some((canvas, at));
    }

    pub(crate) fn poll(&mut self, now: Instant) -> Option<Rect> {
        let (canvas, at) = self.pending?;
        if now.duration_since(at) < RESIZE_QUIET_PERIOD {
            return None;
        }
        self.pending = None;
        Some(canvas)
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Per-widget frame bookkeeping, stored in egui memory between frames.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Canvas rect seen on the last frame; a differing rect means a resize is
    /// in progress.
    pub canvas: Rect,

    /// Custom key to identify the metadata
    id: String,

    #[serde(skip)]
    pub(crate) resize: ResizeDebounce,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            canvas: Rect::from_min_max(Pos2::ZERO, Pos2::ZERO),
            id: String::new(),
            resize: ResizeDebounce::default(),
        }
    }
}

impl Metadata {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn load(self, ui: &Ui) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<Metadata>(Id::new(self.key()))
                .unwrap_or(self)
        })
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(self.key()), self);
        });
    }

    fn key(&self) -> String {
        format!("{KEY_PREFIX}_{}", self.id)
    }
}

/// Resets [`Metadata`] state for the widget with the given id.
pub fn reset_metadata(ui: &mut Ui, id: Option<String>) {
    Metadata::new(id).save(ui);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: f32, h: f32) -> Rect {
        Rect::from_min_max(Pos2::ZERO, Pos2::new(w, h))
    }

    #[test]
    fn debounce_waits_for_the_quiet_period() {
        let t0 = Instant::now();
        let mut debounce = ResizeDebounce::default();

        debounce.note(rect(800., 600.), t0);
        assert!(debounce.poll(t0).is_none());
        assert!(debounce.poll(t0 + RESIZE_QUIET_PERIOD / 2).is_none());
        assert!(debounce.is_pending());

        assert_eq!(
            debounce.poll(t0 + RESIZE_QUIET_PERIOD),
            Some(rect(800., 600.))
        );
        assert!(!debounce.is_pending());
        assert!(debounce.poll(t0 + RESIZE_QUIET_PERIOD * 2).is_none());
    }

    #[test]
    fn a_burst_collapses_into_the_last_canvas() {
        let t0 = Instant::now();
        let mut debounce = ResizeDebounce::default();

        debounce.note(rect(800., 600.), t0);
        debounce.note(rect(900., 600.), t0 + Duration::from_millis(100));
        debounce.note(rect(1000., 600.), t0 + Duration::from_millis(190));

        // quiet period restarts with every note
        assert!(debounce
            .poll(t0 + Duration::from_millis(190) + RESIZE_QUIET_PERIOD / 2)
            .is_none());
        assert_eq!(
            debounce.poll(t0 + Duration::from_millis(190) + RESIZE_QUIET_PERIOD),
            Some(rect(1000., 600.))
        );
    }
}
