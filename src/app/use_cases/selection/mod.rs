//! Use-Case-Funktionen für Punkt-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `geometry` — Form-Selektion (Rechteck, Lasso, Ellipse, Polygon, gepufferte Linie)
//! - `tap` — Einzelpunkt per ID oder per Nearest-Pick
//! - `bulk` — Alles selektieren / aufheben (setzen den Verlauf zurück)
//! - `helpers` — Toggle-Regel und Undo-Aufzeichnung

mod bulk;
mod geometry;
mod helpers;
mod tap;

pub use bulk::{clear_all, select_all};
pub use geometry::{select_by_geometry, SelectionOutcome};
pub use tap::{select_by_tap, select_nearest};
