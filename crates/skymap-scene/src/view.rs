//! The constellations to draw this frame, each with its resolved appearance.

use skymap_catalog::{RenderEntry, SkyCatalog};

use crate::interaction::InteractionState;
use crate::style::{Appearance, HighlightState, Palette};

/// A constellation ready to hand to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct SceneItem<'a> {
    pub entry: &'a RenderEntry,
    pub highlight: HighlightState,
    pub appearance: Appearance,
}

/// Renderable constellations in catalog order, styled for the current
/// interaction state. Entries without stars are left out entirely.
pub fn visible_constellations<'a>(
    catalog: &'a SkyCatalog,
    state: &'a InteractionState,
    palette: &'a Palette,
) -> impl Iterator<Item = SceneItem<'a>> + 'a {
    catalog.renderable().map(move |entry| {
        let highlight =
            HighlightState::from_flags(state.is_hovered(&entry.id), state.is_selected(&entry.id));
        SceneItem {
            entry,
            highlight,
            appearance: palette.appearance(highlight),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::SceneEvent;
    use serde_json::json;
    use skymap_catalog::{CONSTELLATION_RADIUS, ConstellationId};

    fn catalog() -> SkyCatalog {
        SkyCatalog::from_json(
            &json!({ "features": [
                { "id": "A", "geometry": { "coordinates": [[[0, 0], [10, 10]]] } },
                { "id": "B", "geometry": { "coordinates": [] } },
                { "id": "C", "geometry": { "coordinates": [[[20, 0], [30, 10]]] } }
            ]}),
            &json!({ "features": [ { "id": "A" }, { "id": "B" }, { "id": "C" } ] }),
            CONSTELLATION_RADIUS,
        )
    }

    #[test]
    fn test_empty_constellations_are_not_drawn() {
        let catalog = catalog();
        let state = InteractionState::new();
        let palette = Palette::default();
        let ids: Vec<&str> = visible_constellations(&catalog, &state, &palette)
            .map(|item| item.entry.id.as_str())
            .collect();
        assert_eq!(ids, ["A", "C"]);
    }

    #[test]
    fn test_highlight_follows_state() {
        let catalog = catalog();
        let mut state = InteractionState::new();
        state.update(SceneEvent::PointerOver(ConstellationId::new("A")));
        state.update(SceneEvent::Click(ConstellationId::new("C")));
        let palette = Palette::default();

        let items: Vec<_> = visible_constellations(&catalog, &state, &palette).collect();
        assert_eq!(items[0].highlight, HighlightState::Hovered);
        assert_eq!(items[1].highlight, HighlightState::Selected);
        assert_eq!(
            items[1].appearance,
            palette.appearance(HighlightState::Selected)
        );
    }
}
