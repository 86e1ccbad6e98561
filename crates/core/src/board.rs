//! Spot selection board
//!
//! Presentation-independent model behind the spot selector: the map and
//! the list views consume the same spot list and the same selection, so
//! switching presentation never disturbs what the guest has picked.

use crate::models::Spot;

/// Which presentation of the spot selector is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Map,
    List,
}

/// Derived per-spot appearance. Mutually exclusive: a selected spot is
/// never rendered as hovered; status only modulates Default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotVisual {
    Selected,
    Hovered,
    Default,
}

/// Selection state over one zone's spots
#[derive(Debug, Clone)]
pub struct SpotBoard {
    spots: Vec<Spot>,
    selected: Option<String>,
    hovered: Option<String>,
    view: ViewMode,
}

impl SpotBoard {
    pub fn new(spots: Vec<Spot>) -> Self {
        Self {
            spots,
            selected: None,
            hovered: None,
            view: ViewMode::Map,
        }
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Spots the list presentation shows (available only)
    pub fn available(&self) -> impl Iterator<Item = &Spot> {
        self.spots.iter().filter(|s| s.is_available())
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_spot(&self) -> Option<&Spot> {
        let id = self.selected.as_deref()?;
        self.spots.iter().find(|s| s.id == id)
    }

    /// Select a spot by id. Only available spots are selectable; a click
    /// on an occupied or maintenance spot is a no-op and the current
    /// selection is untouched. Returns whether the selection changed.
    pub fn select(&mut self, spot_id: &str) -> bool {
        let selectable = self
            .spots
            .iter()
            .any(|s| s.id == spot_id && s.is_available());
        if !selectable {
            tracing::debug!(spot_id, "Ignored click on non-selectable spot");
            return false;
        }

        self.selected = Some(spot_id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn hover(&mut self, spot_id: Option<&str>) {
        self.hovered = spot_id.map(str::to_string);
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch presentation. The selection carries over unchanged.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn visual(&self, spot_id: &str) -> SpotVisual {
        if self.selected.as_deref() == Some(spot_id) {
            SpotVisual::Selected
        } else if self.hovered.as_deref() == Some(spot_id) {
            SpotVisual::Hovered
        } else {
            SpotVisual::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MapPoint, SpotSize, SpotStatus};

    fn spot(id: &str, status: SpotStatus) -> Spot {
        Spot {
            id: id.to_string(),
            zone_id: "riverside".to_string(),
            name: id.to_string(),
            size: SpotSize::Medium,
            status,
            location: MapPoint { x: 50.0, y: 50.0 },
        }
    }

    fn board() -> SpotBoard {
        SpotBoard::new(vec![
            spot("a", SpotStatus::Available),
            spot("b", SpotStatus::Occupied),
            spot("c", SpotStatus::Maintenance),
            spot("d", SpotStatus::Available),
        ])
    }

    #[test]
    fn only_available_spots_selectable() {
        let mut board = board();
        assert!(!board.select("b"));
        assert!(!board.select("c"));
        assert_eq!(board.selected_id(), None);

        assert!(board.select("a"));
        assert_eq!(board.selected_id(), Some("a"));
    }

    #[test]
    fn clicking_maintenance_spot_keeps_selection() {
        let mut board = board();
        board.select("a");
        assert!(!board.select("c"));
        assert_eq!(board.selected_id(), Some("a"));
    }

    #[test]
    fn single_selection() {
        let mut board = board();
        board.select("a");
        board.select("d");
        assert_eq!(board.selected_id(), Some("d"));
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut board = board();
        assert!(!board.select("zz"));
        assert_eq!(board.selected_id(), None);
    }

    #[test]
    fn view_switch_preserves_selection() {
        let mut board = board();
        board.select("a");
        board.set_view(ViewMode::List);
        assert_eq!(board.selected_id(), Some("a"));
        board.set_view(ViewMode::Map);
        assert_eq!(board.selected_id(), Some("a"));
    }

    #[test]
    fn selected_wins_over_hovered() {
        let mut board = board();
        board.select("a");
        board.hover(Some("a"));
        assert_eq!(board.visual("a"), SpotVisual::Selected);

        board.hover(Some("d"));
        assert_eq!(board.visual("d"), SpotVisual::Hovered);
        assert_eq!(board.visual("b"), SpotVisual::Default);
    }

    #[test]
    fn list_shows_available_only() {
        let board = board();
        let ids: Vec<&str> = board.available().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }
}
