use std::path::PathBuf;

use glam::DVec3;
use sphereprint::blueprint::{BlueprintModel, Result, SURFACE_RADIUS, SphericalCoord, generate_graticule};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub pretty: bool,
	#[arg(long)]
	pub graticule: bool,
}

/// Emit the full renderer feed as JSON: reference position, placed
/// buildings, belt lanes, and optionally the globe grid.
pub fn run(args: Args) -> Result<()> {
	let Args { path, pretty, graticule } = args;

	let encoded = std::fs::read_to_string(&path)?;
	let model = BlueprintModel::from_encoded(&encoded)?;
	let blueprint = model.blueprint();

	let buildings = blueprint
		.buildings
		.iter()
		.filter_map(|building| {
			let placement = model.building_placement(building.original_id)?;
			Some(BuildingJson {
				original_id: building.original_id,
				model_index: building.model_index,
				recipe_id: building.recipe_id,
				yaw_degrees: building.yaw_degrees,
				position: triple(placement.cartesian),
			})
		})
		.collect();

	let lanes = model
		.lanes()
		.iter()
		.map(|lane| LaneJson {
			proto_id: lane.proto_id,
			belt_ids: lane.belt_ids.clone(),
			points: lane.points.iter().copied().map(triple).collect(),
		})
		.collect();

	let feed = FeedJson {
		reference_pos: blueprint.reference_pos,
		reference_spherical: spherical_json(model.reference_spherical()),
		buildings,
		lanes,
		graticule: graticule.then(|| {
			let grid = generate_graticule(SURFACE_RADIUS);
			GraticuleJson {
				normal: polylines_json(&grid.normal),
				intermediate: polylines_json(&grid.intermediate),
				main: polylines_json(&grid.main),
			}
		}),
	};

	let rendered = if pretty {
		serde_json::to_string_pretty(&feed)?
	} else {
		serde_json::to_string(&feed)?
	};
	println!("{rendered}");

	Ok(())
}

fn triple(point: DVec3) -> [f64; 3] {
	[point.x, point.y, point.z]
}

fn spherical_json(coord: SphericalCoord) -> SphericalJson {
	SphericalJson {
		theta: coord.theta,
		phi: coord.phi,
		radius: coord.radius,
	}
}

fn polylines_json(lines: &[Vec<DVec3>]) -> Vec<Vec<[f64; 3]>> {
	lines.iter().map(|line| line.iter().copied().map(triple).collect()).collect()
}

#[derive(serde::Serialize)]
struct FeedJson {
	reference_pos: [f64; 2],
	reference_spherical: SphericalJson,
	buildings: Vec<BuildingJson>,
	lanes: Vec<LaneJson>,
	#[serde(skip_serializing_if = "Option::is_none")]
	graticule: Option<GraticuleJson>,
}

#[derive(serde::Serialize)]
struct SphericalJson {
	theta: f64,
	phi: f64,
	radius: f64,
}

#[derive(serde::Serialize)]
struct BuildingJson {
	original_id: i32,
	model_index: i32,
	recipe_id: i32,
	yaw_degrees: f64,
	position: [f64; 3],
}

#[derive(serde::Serialize)]
struct LaneJson {
	proto_id: i32,
	belt_ids: Vec<i32>,
	points: Vec<[f64; 3]>,
}

#[derive(serde::Serialize)]
struct GraticuleJson {
	normal: Vec<Vec<[f64; 3]>>,
	intermediate: Vec<Vec<[f64; 3]>>,
	main: Vec<Vec<[f64; 3]>>,
}
