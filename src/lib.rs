//! Map Point Select Library.
//! Selektions-Engine für Kartenpunkte: Form-Selektion, Tippen, CGI-Ausschluss
//! und Undo. Als Library exportiert für Hosts und Tests.

pub mod app;
pub mod core;
pub mod persistence;
pub mod shared;

pub use app::{
    EngineCommand, EngineState, SelectionController, SelectionEngine, SelectionOutcome,
    SelectionState, SharedSelectionEngine, UndoEntry, UndoStack,
};
pub use core::{
    CoordinateFrame, Geometry, GeometryEngine, GeometryError, MapPoint, PlanarGeometryEngine,
    PointStore, Shape,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use persistence::{load_or_generate, load_points_from_file, save_points_to_file};
pub use shared::EngineOptions;
