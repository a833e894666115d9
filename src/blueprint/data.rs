use serde::{Deserialize, Serialize};

/// Decoded blueprint document: a reference point plus building and belt lists.
///
/// Wire field names follow the original exporter JSON; unknown fields in the
/// payload are ignored. The record is immutable after decoding — derived
/// positions live in [`crate::blueprint::BlueprintModel`], never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
	/// Blueprint-local origin in grid units; every placement offset is relative to it.
	pub reference_pos: [f64; 2],
	/// Placed factory buildings, in exporter order.
	#[serde(rename = "copiedBuildings")]
	pub buildings: Vec<Building>,
	/// Placed conveyor belt nodes, in exporter order.
	#[serde(rename = "copiedBelts")]
	pub belts: Vec<Belt>,
}

/// One placed factory building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
	/// Unique key within the blueprint's building collection.
	pub original_id: i32,
	/// Foreign key into the external model catalog.
	pub model_index: i32,
	/// Assigned recipe id; `0` means none.
	pub recipe_id: i32,
	/// Grid offset relative to the blueprint reference position.
	#[serde(rename = "cursorRelativePos")]
	pub placement_offset: [f64; 2],
	/// Rotation around the local up axis, in degrees.
	#[serde(rename = "cursorRelativeYaw")]
	pub yaw_degrees: f64,
}

/// One placed conveyor belt node with up to four neighbor links.
///
/// Link ids reference other belts by `original_id`. Absent fields, `null`,
/// and ids that resolve to no known belt all mean "no neighbor" to the lane
/// walk — none of them is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Belt {
	/// Unique key within the blueprint's belt collection.
	pub original_id: i32,
	/// Belt tier/speed class; lane boundaries occur where it changes across a link.
	pub proto_id: i32,
	/// Downstream neighbor.
	#[serde(default)]
	pub output_id: Option<i32>,
	/// Primary upstream neighbor.
	#[serde(default)]
	pub back_input_id: Option<i32>,
	/// Secondary upstream neighbor.
	#[serde(default)]
	pub left_input_id: Option<i32>,
	/// Tertiary upstream neighbor.
	#[serde(default)]
	pub right_input_id: Option<i32>,
	/// Grid offset relative to the blueprint reference position.
	#[serde(rename = "cursorRelativePos")]
	pub placement_offset: [f64; 2],
}

impl Belt {
	/// Upstream link candidates in walk priority order: back, then left, then right.
	pub fn upstream_ids(&self) -> [Option<i32>; 3] {
		[self.back_input_id, self.left_input_id, self.right_input_id]
	}
}
