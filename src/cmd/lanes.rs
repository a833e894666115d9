use std::path::PathBuf;

use glam::DVec3;
use sphereprint::blueprint::{BeltLane, BlueprintModel, Result};

/// Print one table row per reconstructed belt lane.
pub fn run(path: PathBuf) -> Result<()> {
	let encoded = std::fs::read_to_string(&path)?;
	let model = BlueprintModel::from_encoded(&encoded)?;

	println!("path: {}", path.display());
	println!("lanes: {}", model.lanes().len());
	println!("lane\tproto\tbelts\tfirst\tlast\tlength");
	for (index, lane) in model.lanes().iter().enumerate() {
		println!(
			"{}\t{}\t{}\t{}\t{}\t{:.3}",
			index,
			lane.proto_id,
			lane.belt_ids.len(),
			point_label(lane.points.first()),
			point_label(lane.points.last()),
			polyline_length(lane),
		);
	}

	Ok(())
}

fn point_label(point: Option<&DVec3>) -> String {
	match point {
		Some(p) => format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
		None => "-".to_owned(),
	}
}

fn polyline_length(lane: &BeltLane) -> f64 {
	lane.points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}
