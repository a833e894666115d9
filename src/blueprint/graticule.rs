//! Reference grid for the sphere surface.
//!
//! The grid is built from parallels covering the whole sphere and
//! meridian segments arranged in latitude bands. Bands near the poles
//! carry few meridians and the count grows toward the equator, so the
//! cell width stays roughly even on the surface. Lines come in three
//! visual weights: every tenth line is `main`, every fifth is
//! `intermediate`, the rest are `normal`.

use glam::DVec3;

/// Grid pitch in degrees.
const ANGLE_STEP: f64 = 0.36;

/// Number of parallel rows across the sphere.
const PARALLEL_ROWS: u32 = 1000;

/// Meridian bands from the pole toward the equator, as
/// `(segments, rows)`: how many meridians the band carries around the
/// sphere and how many grid rows of latitude it spans. The southern
/// hemisphere mirrors each band.
const MERIDIAN_BANDS: [(u32, u32); 12] = [
	(20, 5),
	(40, 5),
	(80, 5),
	(100, 5),
	(160, 10),
	(200, 10),
	(300, 15),
	(400, 15),
	(500, 25),
	(600, 25),
	(800, 50),
	(1000, 80),
];

/// One grid line as an ordered point sequence on the sphere.
pub type Polyline = Vec<DVec3>;

/// The generated grid, split by visual weight.
#[derive(Debug, Clone)]
pub struct Graticule {
	/// Plain grid lines.
	pub normal: Vec<Polyline>,
	/// Every fifth line.
	pub intermediate: Vec<Polyline>,
	/// Every tenth line.
	pub main: Vec<Polyline>,
}

/// Generates the full grid on a sphere of the given radius.
///
/// Parallels come first in row order, then the meridian bands from the
/// pole toward the equator, each northern segment followed by its
/// southern mirror. The output is the same for every call with the same
/// radius.
pub fn generate_graticule(radius: f64) -> Graticule {
	let mut graticule = Graticule { normal: Vec::new(), intermediate: Vec::new(), main: Vec::new() };

	for row in 0..PARALLEL_ROWS {
		let latitude = f64::from(row) * ANGLE_STEP - 180.0;
		bucket(&mut graticule, row).push(parallel(latitude, radius));
	}

	let mut row = 0;
	for (segments, rows) in MERIDIAN_BANDS {
		let angle = 360.0 / f64::from(segments);
		let band_top = 90.0 - f64::from(row) * ANGLE_STEP;
		let band_bottom = 90.0 - f64::from(row + rows) * ANGLE_STEP;

		for segment in 0..segments {
			let longitude = f64::from(segment) * angle - 180.0;
			let north = meridian(longitude, band_bottom, band_top, radius);
			let south = meridian(longitude, -band_top, -band_bottom, radius);
			let class = bucket(&mut graticule, segment);
			class.push(north);
			class.push(south);
		}

		row += rows;
	}

	graticule
}

fn bucket(graticule: &mut Graticule, index: u32) -> &mut Vec<Polyline> {
	if index % 10 == 0 {
		&mut graticule.main
	} else if index % 5 == 0 {
		&mut graticule.intermediate
	} else {
		&mut graticule.normal
	}
}

fn parallel(latitude: f64, radius: f64) -> Polyline {
	let latitude = round_centi(latitude);
	angle_range(-180.0, 180.0).map(|longitude| vertex(longitude, latitude, radius)).collect()
}

fn meridian(longitude: f64, lat0: f64, lat1: f64, radius: f64) -> Polyline {
	let longitude = round_centi(longitude);
	angle_range(lat0, lat1).map(|latitude| vertex(longitude, latitude, radius)).collect()
}

/// Steps from `start` to just past `stop` in grid pitch. Each value is
/// recomputed from `start` so error does not accumulate, and the small
/// overshoot keeps the endpoint when it lands on the pitch.
fn angle_range(start: f64, stop: f64) -> impl Iterator<Item = f64> {
	(0u32..)
		.map(move |step| start + f64::from(step) * ANGLE_STEP)
		.take_while(move |value| *value < stop + 1e-6)
}

fn round_centi(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

/// Geographic longitude/latitude in degrees to a point on the sphere.
fn vertex(longitude: f64, latitude: f64, radius: f64) -> DVec3 {
	let lambda = longitude.to_radians();
	let phi = latitude.to_radians();
	DVec3::new(radius * phi.cos() * lambda.cos(), radius * phi.sin(), -radius * phi.cos() * lambda.sin())
}
