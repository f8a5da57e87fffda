//! Use-Case: Selektion per gezeichneter Form (Rechteck, Lasso, Ellipse, Polygon, Linie).

use std::borrow::Cow;

use crate::app::EngineState;
use crate::core::{Geometry, GeometryEngine, GeometryError};

use super::helpers::{record_changes, toggle_members};

/// Zusammenfassung einer Form-Selektion für Statusanzeigen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Punkte, die neu selektiert wurden
    pub selected: usize,
    /// Punkte, die abgewählt wurden
    pub deselected: usize,
    /// Punkte, die nicht ins System der Form reprojiziert werden konnten
    pub skipped_unprojectable: usize,
}

impl SelectionOutcome {
    /// Anzahl umgeschalteter Punkte.
    pub fn toggled(&self) -> usize {
        self.selected + self.deselected
    }
}

/// Ermittelt das abzufragende Gebiet.
///
/// Mit Pufferabstand (in Einheiten der Form) wird immer gepuffert. Linien
/// ohne Abstand bekommen den Standard-Korridor, der in Metern angegeben ist
/// und ins System der Form umgerechnet wird.
fn resolve_region<'a, G: GeometryEngine + ?Sized>(
    engine: &G,
    geometry: &'a Geometry,
    buffer_distance: Option<f64>,
    default_line_meters: f64,
) -> Result<Cow<'a, Geometry>, GeometryError> {
    let distance = match buffer_distance {
        Some(distance) => Some(distance),
        None if geometry.is_line() => Some(geometry.frame.meters_to_units(default_line_meters)),
        None => None,
    };

    match distance {
        Some(distance) => engine.buffer(geometry, distance).map(Cow::Owned),
        None => Ok(Cow::Borrowed(geometry)),
    }
}

/// Schaltet alle nicht ausgeschlossenen Punkte innerhalb der Form um.
///
/// Punkte, die sich nicht reprojizieren lassen, werden übersprungen; schlägt
/// die Pufferung fehl, bleibt die Operation ohne Wirkung.
pub fn select_by_geometry<G: GeometryEngine + ?Sized>(
    state: &mut EngineState,
    engine: &G,
    geometry: &Geometry,
    buffer_distance: Option<f64>,
) -> SelectionOutcome {
    let region = match resolve_region(
        engine,
        geometry,
        buffer_distance,
        state.options.line_buffer_distance,
    ) {
        Ok(region) => region,
        Err(e) => {
            log::warn!("{}-Selektion verworfen: {}", geometry.kind_name(), e);
            return SelectionOutcome::default();
        }
    };

    let mut outcome = SelectionOutcome::default();
    let mut hits = Vec::new();

    for point in state.points.all_points().filter(|p| !p.excluded) {
        let position = if point.frame == region.frame {
            point.position
        } else {
            match engine.reproject(point.position, point.frame, region.frame) {
                Ok(position) => position,
                Err(e) => {
                    log::debug!("Punkt {} übersprungen: {}", point.id, e);
                    outcome.skipped_unprojectable += 1;
                    continue;
                }
            }
        };

        if engine.contains(&region, position) {
            hits.push(point.id);
        }
    }

    let changes = toggle_members(state, &hits);
    for change in &changes {
        if change.new {
            outcome.selected += 1;
        } else {
            outcome.deselected += 1;
        }
    }
    record_changes(state, changes);

    outcome
}
