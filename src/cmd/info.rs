use std::collections::HashMap;
use std::path::PathBuf;

use sphereprint::blueprint::{BlueprintModel, Result, unpack};

/// Print high-level payload and reconstruction statistics.
pub fn run(path: PathBuf) -> Result<()> {
	let encoded = std::fs::read_to_string(&path)?;
	let decoded = unpack(&encoded)?;
	let model = BlueprintModel::from_encoded(&encoded)?;
	let blueprint = model.blueprint();
	let reference = model.reference_spherical();

	println!("path: {}", path.display());
	println!("payload_bytes: {}", encoded.trim().len());
	println!("decoded_bytes: {}", decoded.len());
	println!("reference_pos: [{}, {}]", blueprint.reference_pos[0], blueprint.reference_pos[1]);
	println!("reference_theta: {:.6}", reference.theta);
	println!("reference_phi: {:.6}", reference.phi);
	println!("surface_radius: {}", reference.radius);
	println!("buildings: {}", blueprint.buildings.len());
	println!("belts: {}", blueprint.belts.len());
	println!("lanes: {}", model.lanes().len());

	let mut counts: HashMap<i32, usize> = HashMap::new();
	for belt in &blueprint.belts {
		*counts.entry(belt.proto_id).or_default() += 1;
	}

	let mut entries: Vec<_> = counts.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	println!("belt_protos:");
	for (proto_id, count) in entries {
		println!("  {proto_id}: {count}");
	}

	Ok(())
}
