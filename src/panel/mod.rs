//! Draft state of the filter and sort panels.
//!
//! A panel is either closed or open with a draft. Edits only touch the
//! draft; the active spec changes only when the draft is applied.

pub mod filter_panel;
pub mod sort_panel;

pub use filter_panel::{FilterDraft, FilterPanel, FilterRow};
pub use sort_panel::{SortDraft, SortPanel, SortRow, order_label};

/// Closed, or open with a draft being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState<D> {
    Closed,
    Open(D),
}

impl<D> Default for PanelState<D> {
    fn default() -> Self {
        PanelState::Closed
    }
}

impl<D> PanelState<D> {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open(_))
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            PanelState::Open(d) => Some(d),
            PanelState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            PanelState::Open(d) => Some(d),
            PanelState::Closed => None,
        }
    }

    /// Close and hand back the draft, if there was one
    pub fn take(&mut self) -> Option<D> {
        match std::mem::take(self) {
            PanelState::Open(d) => Some(d),
            PanelState::Closed => None,
        }
    }
}
