//! Hover and selection state, driven by pointer events through one transition
//! function.
//!
//! | event                               | effect                                         |
//! |-------------------------------------|------------------------------------------------|
//! | `PointerOver(id)`                   | hover `id`, pointer cursor                     |
//! | `PointerOut { id, inside: false }`  | clear hover if it is `id`, default cursor      |
//! | `PointerOut { id, inside: true }`   | nothing (moved onto a child of the same group) |
//! | `Click(id)`                         | select `id`, open its details                  |
//! | `BackgroundClick`                   | clear selection                                |
//! | `CloseDetails`                      | close details, clear selection                 |
//!
//! Events must be applied in the order they were received.

use serde::{Deserialize, Serialize};
use skymap_catalog::ConstellationId;
use tracing::trace;

/// Pointer cursor shown over the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Over an interactive constellation.
    Pointer,
}

/// Pointer input relevant to constellation interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    /// The pointer entered a constellation's geometry group.
    PointerOver(ConstellationId),
    /// The pointer left an element of a constellation's group.
    PointerOut {
        id: ConstellationId,
        /// True when the pointer moved to another element of the same group.
        still_inside_group: bool,
    },
    /// A constellation was clicked.
    Click(ConstellationId),
    /// Empty sky was clicked.
    BackgroundClick,
    /// The details panel was dismissed.
    CloseDetails,
}

/// Current hover, selection, and detail-panel state.
///
/// Ids are lookups into the catalog, not ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<ConstellationId>,
    selected: Option<ConstellationId>,
    details: Option<ConstellationId>,
    cursor: CursorStyle,
}

impl InteractionState {
    /// Nothing hovered, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns `true` if the state changed.
    pub fn update(&mut self, event: SceneEvent) -> bool {
        let before = self.clone();
        match event {
            SceneEvent::PointerOver(id) => {
                self.hovered = Some(id);
                self.cursor = CursorStyle::Pointer;
            }
            SceneEvent::PointerOut {
                still_inside_group: true,
                ..
            } => {}
            SceneEvent::PointerOut { id, .. } => {
                if self.hovered.as_ref() == Some(&id) {
                    self.hovered = None;
                    self.cursor = CursorStyle::Default;
                }
            }
            SceneEvent::Click(id) => {
                self.selected = Some(id.clone());
                self.details = Some(id);
            }
            SceneEvent::BackgroundClick => {
                self.selected = None;
            }
            SceneEvent::CloseDetails => {
                self.details = None;
                self.selected = None;
            }
        }
        let changed = *self != before;
        if changed {
            trace!(
                hovered = ?self.hovered,
                selected = ?self.selected,
                details = ?self.details,
                "Interaction state changed"
            );
        }
        changed
    }

    /// The hovered constellation, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&ConstellationId> {
        self.hovered.as_ref()
    }

    /// The selected constellation, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ConstellationId> {
        self.selected.as_ref()
    }

    /// The constellation whose details are open, if any.
    #[must_use]
    pub fn details(&self) -> Option<&ConstellationId> {
        self.details.as_ref()
    }

    #[must_use]
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    #[must_use]
    pub fn is_hovered(&self, id: &ConstellationId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    #[must_use]
    pub fn is_selected(&self, id: &ConstellationId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}
