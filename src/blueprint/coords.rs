use std::f64::consts::{PI, TAU};

use glam::DVec3;

/// Fixed sphere surface radius shared by every placement computation.
pub const SURFACE_RADIUS: f64 = 200.2;

/// Placement offsets are expressed in hundredths of a degree.
const GRID_UNITS_PER_DEGREE: f64 = 100.0;

/// Sphere-surface coordinate with both angles normalized into `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoord {
	/// Polar angle in radians, measured from the `+y` axis.
	pub theta: f64,
	/// Azimuthal angle in radians.
	pub phi: f64,
	/// Distance from the sphere center.
	pub radius: f64,
}

/// Project a flat placement offset onto the sphere surface.
///
/// The offset and the blueprint reference position add component-wise before
/// scaling, so `to_spherical(offset, reference)` and
/// `to_spherical(reference, offset)` agree. Pure and total over finite
/// inputs; the decoder rejects non-finite numbers before they reach here.
pub fn to_spherical(offset: [f64; 2], reference: [f64; 2]) -> SphericalCoord {
	SphericalCoord {
		theta: normalize_angle(((offset[0] + reference[0]) / GRID_UNITS_PER_DEGREE).to_radians()),
		phi: normalize_angle(((offset[1] + reference[1]) / GRID_UNITS_PER_DEGREE).to_radians()),
		radius: SURFACE_RADIUS,
	}
}

/// Convert a spherical coordinate to Cartesian with `y` as the polar axis.
pub fn to_cartesian(coord: SphericalCoord) -> DVec3 {
	DVec3::new(
		coord.radius * coord.theta.sin() * coord.phi.cos(),
		coord.radius * coord.theta.cos(),
		coord.radius * coord.theta.sin() * coord.phi.sin(),
	)
}

/// Wrap an angle in radians into `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
	let wrapped = (angle + PI).rem_euclid(TAU) - PI;
	if wrapped <= -PI { wrapped + TAU } else { wrapped }
}
