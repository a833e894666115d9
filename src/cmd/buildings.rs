use std::path::PathBuf;

use sphereprint::blueprint::{BlueprintModel, Result};

use crate::cmd::models;

/// Print one table row per building, annotated from the model catalog.
pub fn run(path: PathBuf) -> Result<()> {
	let encoded = std::fs::read_to_string(&path)?;
	let model = BlueprintModel::from_encoded(&encoded)?;
	let blueprint = model.blueprint();

	println!("path: {}", path.display());
	println!("buildings: {}", blueprint.buildings.len());
	println!("id\tmodel\tlabel\tsize\tcolor\trecipe\tyaw\tx\ty\tz");
	for building in &blueprint.buildings {
		let Some(placement) = model.building_placement(building.original_id) else {
			continue;
		};
		let catalog = models::lookup(building.model_index);
		let label = catalog.as_ref().and_then(|info| info.label).unwrap_or("-");
		let size = catalog
			.as_ref()
			.map(|info| format!("{}x{}x{}", info.size[0], info.size[1], info.size[2]))
			.unwrap_or_else(|| "-".to_owned());
		let color = catalog
			.as_ref()
			.and_then(|info| info.color)
			.map(|value| format!("#{value:06x}"))
			.unwrap_or_else(|| "-".to_owned());

		println!(
			"{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.3}\t{:.3}\t{:.3}",
			building.original_id,
			building.model_index,
			label,
			size,
			color,
			building.recipe_id,
			building.yaw_degrees,
			placement.cartesian.x,
			placement.cartesian.y,
			placement.cartesian.z,
		);
	}

	Ok(())
}
