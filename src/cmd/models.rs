//! Display metadata for known building models.
//!
//! The decoder carries `model_index` through opaquely; this table is
//! purely for annotating CLI output. Unknown indexes print bare, never
//! fail. Sizes are footprint x depth x height in surface units.

/// Catalog entry for one building model.
pub struct ModelInfo {
	/// Human-readable name, where one is known.
	pub label: Option<&'static str>,
	/// Bounding box of the placed model.
	pub size: [f64; 3],
	/// Display color, where the model has a signature one.
	pub color: Option<u32>,
}

/// Look a model index up in the static catalog.
pub fn lookup(model_index: i32) -> Option<ModelInfo> {
	let (label, size, color) = match model_index {
		38 => (Some("Splitter"), [2.7, 2.7, 2.4], Some(0x556c8d)),
		39 => (Some("Splitter"), [2.0, 2.7, 2.94], None),
		40 => (Some("Splitter"), [2.7, 2.7, 2.96], None),
		44 => (Some("Tesla tower"), [1.25, 1.25, 6.0], Some(0xffcb35)),
		45 => (Some("Energy exchanger"), [8.3, 8.3, 12.0], Some(0xffcb35)),
		46 => (Some("Accumulator"), [3.27, 2.98, 4.46], Some(0xffcb35)),
		49 => (Some("Planetary logistics station"), [7.6, 7.6, 25.0], Some(0x474641)),
		50 => (Some("Interstellar logistics station"), [8.0, 8.0, 34.0], Some(0x474641)),
		51 => (Some("Storage Mk.I"), [3.2, 3.2, 2.67], None),
		52 => (Some("Storage Mk.II"), [6.2, 4.2, 4.0], None),
		53 => (Some("Wind turbine"), [3.5, 3.8, 7.4], None),
		54 => (Some("Thermal power station"), [4.8, 9.0, 4.2], None),
		55 => (Some("Solar panel"), [3.6, 3.6, 4.0], None),
		56 => (Some("Artificial star"), [5.6, 5.6, 10.2], None),
		57 => (None, [3.8, 6.8, 3.6], None),
		60 => (None, [2.6, 5.6, 6.0], None),
		61 => (None, [6.9, 12.6, 11.6], None),
		62 => (Some("Smelter"), [3.2, 3.2, 3.8], Some(0xa8b3c3)),
		63 => (Some("Refinery"), [4.2, 7.4, 10.6], None),
		64 => (Some("Chemical plant"), [9.2, 5.3, 6.3], None),
		65 => (Some("Assembler Mk.I"), [4.2, 4.2, 4.6], Some(0xe8a931)),
		66 => (Some("Assembler Mk.II"), [4.2, 4.2, 4.6], Some(0x05a79c)),
		67 => (Some("Assembler Mk.III"), [4.2, 4.2, 4.6], Some(0x23a7d5)),
		68 => (Some("Satellite substation"), [3.5, 3.5, 7.0], Some(0xffcb35)),
		69 => (Some("Particle collider"), [11.2, 6.1, 13.0], None),
		70 => (Some("Matrix lab"), [6.1, 6.1, 3.1], None),
		71 => (Some("Wireless power tower"), [2.3, 2.3, 9.2], Some(0xffcb35)),
		72 => (Some("EM-rail ejector"), [5.0, 5.0, 6.0], None),
		73 => (Some("Ray receiver"), [7.0, 5.0, 10.0], Some(0x400000)),
		74 => (None, [15.0, 18.2, 19.0], None),
		117 => (None, [8.0, 8.0, 34.0], None),
		118 => (Some("Nuclear power station"), [4.8, 9.0, 4.2], None),
		119 => (Some("Fractionator"), [4.8, 4.8, 9.4], None),
		120 => (None, [3.8, 3.15, 2.5], None),
		121 => (Some("Storage tank"), [4.8, 4.8, 4.0], None),
		_ => return None,
	};

	Some(ModelInfo { label, size, color })
}

#[cfg(test)]
mod tests {
	use super::lookup;

	#[test]
	fn known_models_resolve() {
		let smelter = lookup(62).expect("smelter is cataloged");
		assert_eq!(smelter.label, Some("Smelter"));
		assert_eq!(smelter.size, [3.2, 3.2, 3.8]);
		assert_eq!(smelter.color, Some(0xa8b3c3));
	}

	#[test]
	fn unlabeled_models_still_carry_a_size() {
		let info = lookup(120).expect("index 120 is cataloged");
		assert_eq!(info.label, None);
		assert_eq!(info.size, [3.8, 3.15, 2.5]);
	}

	#[test]
	fn unknown_models_resolve_to_none() {
		assert!(lookup(0).is_none());
		assert!(lookup(9999).is_none());
	}
}
