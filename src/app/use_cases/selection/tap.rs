//! Use-Case: Punkt-Selektion per Tippen.

use glam::DVec2;

use crate::app::EngineState;
use crate::core::CoordinateFrame;

use super::helpers::{record_changes, toggle_members};

/// Schaltet die Mitgliedschaft eines einzelnen Punkts um.
///
/// Ausgeschlossene oder unbekannte Punkte bleiben unverändert.
pub fn select_by_tap(state: &mut EngineState, point_id: u64) -> bool {
    let changes = toggle_members(state, &[point_id]);
    if changes.is_empty() {
        log::debug!("Tippen auf Punkt {}: nichts zu tun", point_id);
        return false;
    }
    record_changes(state, changes);
    true
}

/// Löst eine Tipp-Position zum nächsten Punkt auf und schaltet ihn um.
///
/// Gibt die ID des umgeschalteten Punkts zurück.
pub fn select_nearest(
    state: &mut EngineState,
    position: DVec2,
    frame: CoordinateFrame,
    max_distance: f64,
) -> Option<u64> {
    let hit = state
        .points
        .nearest_point(position, frame, max_distance)
        .map(|hit| hit.point_id)?;

    select_by_tap(state, hit).then_some(hit)
}
