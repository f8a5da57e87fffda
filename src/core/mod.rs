//! Core-Domänentypen: Punkte, Koordinatensysteme, Geometrien, Spatial-Index.

pub mod frame;
pub mod geometry;
pub mod planar;
pub mod point;
pub mod point_store;
pub mod spatial;

pub use frame::{reproject, CoordinateFrame, METERS_PER_DEGREE};
pub use geometry::{Geometry, GeometryEngine, GeometryError, Shape};
pub use planar::PlanarGeometryEngine;
pub use point::{MapPoint, PointAttributes};
pub use point_store::PointStore;
pub use spatial::{SpatialIndex, SpatialMatch};
