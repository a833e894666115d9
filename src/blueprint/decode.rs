use std::collections::HashSet;

use crate::blueprint::data::Blueprint;
use crate::blueprint::encoding;
use crate::blueprint::{BlueprintError, Result};

/// Decode an encoded blueprint string into a validated [`Blueprint`].
///
/// Reverses the producing pipeline — base64, zlib inflate, JSON — and then
/// validates what serde alone cannot: id uniqueness per collection and
/// finiteness of every coordinate the mapper will later consume. Any failure
/// aborts the whole import; there is no partial decode.
pub fn decode(encoded: &str) -> Result<Blueprint> {
	let payload = encoding::unpack(encoded)?;
	let blueprint: Blueprint = serde_json::from_slice(&payload)?;
	validate(&blueprint)?;
	Ok(blueprint)
}

/// Encode a blueprint through the inverse pipeline: JSON, zlib deflate, base64.
pub fn encode(blueprint: &Blueprint) -> Result<String> {
	let payload = serde_json::to_vec(blueprint)?;
	encoding::pack(&payload)
}

fn validate(blueprint: &Blueprint) -> Result<()> {
	if !blueprint.reference_pos.iter().all(|value| value.is_finite()) {
		return Err(BlueprintError::NonFiniteReference);
	}

	let mut building_ids = HashSet::with_capacity(blueprint.buildings.len());
	for building in &blueprint.buildings {
		if !building_ids.insert(building.original_id) {
			return Err(BlueprintError::DuplicateId {
				kind: "building",
				original_id: building.original_id,
			});
		}
		let finite = building.placement_offset.iter().all(|value| value.is_finite()) && building.yaw_degrees.is_finite();
		if !finite {
			return Err(BlueprintError::NonFinite {
				kind: "building",
				original_id: building.original_id,
			});
		}
	}

	let mut belt_ids = HashSet::with_capacity(blueprint.belts.len());
	for belt in &blueprint.belts {
		if !belt_ids.insert(belt.original_id) {
			return Err(BlueprintError::DuplicateId {
				kind: "belt",
				original_id: belt.original_id,
			});
		}
		if !belt.placement_offset.iter().all(|value| value.is_finite()) {
			return Err(BlueprintError::NonFinite {
				kind: "belt",
				original_id: belt.original_id,
			});
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::blueprint::{Belt, Blueprint, BlueprintError, Building, decode, encode, pack};

	fn sample_blueprint() -> Blueprint {
		Blueprint {
			reference_pos: [4400.0, -1200.5],
			buildings: vec![Building {
				original_id: 7,
				model_index: 65,
				recipe_id: 6,
				placement_offset: [10.0, 20.0],
				yaw_degrees: 90.0,
			}],
			belts: vec![
				Belt {
					original_id: 1,
					proto_id: 2002,
					output_id: Some(2),
					back_input_id: None,
					left_input_id: None,
					right_input_id: None,
					placement_offset: [0.0, 0.0],
				},
				Belt {
					original_id: 2,
					proto_id: 2002,
					output_id: None,
					back_input_id: Some(1),
					left_input_id: None,
					right_input_id: None,
					placement_offset: [1.5, 0.0],
				},
			],
		}
	}

	#[test]
	fn encode_then_decode_round_trips_structurally() {
		let blueprint = sample_blueprint();
		let encoded = encode(&blueprint).expect("encode succeeds");
		let decoded = decode(&encoded).expect("decode succeeds");
		assert_eq!(decoded, blueprint);
	}

	#[test]
	fn decode_rejects_missing_top_level_field() {
		let payload = br#"{"referencePos":[0.0,0.0],"copiedBuildings":[]}"#;
		let encoded = pack(payload).expect("pack succeeds");
		let err = decode(&encoded).expect_err("expected json failure");
		assert!(matches!(err, BlueprintError::Json(_)), "got {err:?}");
	}

	#[test]
	fn decode_rejects_missing_record_field() {
		// Belt without protoId.
		let payload = br#"{
			"referencePos": [0.0, 0.0],
			"copiedBuildings": [],
			"copiedBelts": [{"originalId": 1, "cursorRelativePos": [0.0, 0.0]}]
		}"#;
		let encoded = pack(payload).expect("pack succeeds");
		let err = decode(&encoded).expect_err("expected json failure");
		assert!(matches!(err, BlueprintError::Json(_)), "got {err:?}");
	}

	#[test]
	fn decode_rejects_duplicate_ids_per_collection() {
		let mut blueprint = sample_blueprint();
		blueprint.belts[1].original_id = blueprint.belts[0].original_id;
		let encoded = encode(&blueprint).expect("encode succeeds");
		let err = decode(&encoded).expect_err("expected duplicate failure");
		assert!(
			matches!(err, BlueprintError::DuplicateId { kind: "belt", original_id: 1 }),
			"got {err:?}"
		);
	}

	#[test]
	fn building_and_belt_id_spaces_are_independent() {
		let mut blueprint = sample_blueprint();
		blueprint.buildings[0].original_id = blueprint.belts[0].original_id;
		let encoded = encode(&blueprint).expect("encode succeeds");
		decode(&encoded).expect("shared id across collections decodes");
	}

	#[test]
	fn decode_rejects_overflowing_float_literal() {
		// serde_json parses 1e999 as infinity rather than failing.
		let payload = br#"{
			"referencePos": [0.0, 0.0],
			"copiedBuildings": [],
			"copiedBelts": [{"originalId": 1, "protoId": 2001, "cursorRelativePos": [1e999, 0.0]}]
		}"#;
		let encoded = pack(payload).expect("pack succeeds");
		let err = decode(&encoded).expect_err("expected non-finite failure");
		assert!(
			matches!(err, BlueprintError::NonFinite { kind: "belt", original_id: 1 }),
			"got {err:?}"
		);
	}

	#[test]
	fn decode_rejects_overflowing_reference_pos() {
		let payload = br#"{"referencePos":[1e999,0.0],"copiedBuildings":[],"copiedBelts":[]}"#;
		let encoded = pack(payload).expect("pack succeeds");
		let err = decode(&encoded).expect_err("expected non-finite failure");
		assert!(matches!(err, BlueprintError::NonFiniteReference), "got {err:?}");
	}

	#[test]
	fn decode_rejects_garbage_text_without_partial_output() {
		let err = decode("not-valid-base64!!").expect_err("expected base64 failure");
		assert!(matches!(err, BlueprintError::Base64(_)), "got {err:?}");
	}
}
