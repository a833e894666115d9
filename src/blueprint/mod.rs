mod coords;
mod data;
mod decode;
mod encoding;
mod error;
mod graticule;
mod lanes;
mod model;

/// Spherical projection and Cartesian conversion.
pub use coords::{SURFACE_RADIUS, SphericalCoord, normalize_angle, to_cartesian, to_spherical};
/// Decoded blueprint wire records.
pub use data::{Belt, Blueprint, Building};
/// Blueprint string decode/encode entry points.
pub use decode::{decode, encode};
/// Transport codec helpers (base64 text leg and zlib byte leg).
pub use encoding::{pack, unpack};
/// Error and result aliases.
pub use error::{BlueprintError, Result};
/// Globe grid polyline generation.
pub use graticule::{Graticule, Polyline, generate_graticule};
/// Lane reconstruction types and entry point.
pub use lanes::{BeltLane, reconstruct_lanes};
/// Aggregated decode output handed to renderers.
pub use model::{BlueprintModel, Placement};
