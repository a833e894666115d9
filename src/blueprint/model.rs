//! Fully resolved blueprint: decoded records plus their sphere geometry.

use std::collections::HashMap;

use glam::DVec3;

use crate::blueprint::coords::{SphericalCoord, to_cartesian, to_spherical};
use crate::blueprint::data::Blueprint;
use crate::blueprint::decode;
use crate::blueprint::error::Result;
use crate::blueprint::lanes::{BeltLane, reconstruct_lanes};

/// Where a single record sits on the sphere, in both coordinate forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
	/// Polar/azimuthal position on the sphere.
	pub spherical: SphericalCoord,
	/// The same position as a cartesian point.
	pub cartesian: DVec3,
}

/// A decoded blueprint with every record projected onto the sphere and
/// all belt lanes reconstructed.
///
/// Built once from a [`Blueprint`]; the derived maps stay consistent with
/// the records they were computed from.
#[derive(Debug, Clone)]
pub struct BlueprintModel {
	blueprint: Blueprint,
	building_placements: HashMap<i32, Placement>,
	belt_positions: HashMap<i32, DVec3>,
	lanes: Vec<BeltLane>,
}

impl BlueprintModel {
	/// Decodes `encoded` and builds the full model from it.
	pub fn from_encoded(encoded: &str) -> Result<Self> {
		Ok(Self::build(decode::decode(encoded)?))
	}

	/// Builds the model from an already-decoded blueprint.
	pub fn build(blueprint: Blueprint) -> Self {
		let reference = blueprint.reference_pos;

		let building_placements = blueprint
			.buildings
			.iter()
			.map(|building| {
				let spherical = to_spherical(building.placement_offset, reference);
				(building.original_id, Placement { spherical, cartesian: to_cartesian(spherical) })
			})
			.collect();

		let belt_positions: HashMap<i32, DVec3> = blueprint
			.belts
			.iter()
			.map(|belt| (belt.original_id, to_cartesian(to_spherical(belt.placement_offset, reference))))
			.collect();

		let lanes = reconstruct_lanes(&blueprint.belts, &belt_positions);

		Self { blueprint, building_placements, belt_positions, lanes }
	}

	/// The decoded records this model was built from.
	pub fn blueprint(&self) -> &Blueprint {
		&self.blueprint
	}

	/// Placement of one building, if `original_id` exists.
	pub fn building_placement(&self, original_id: i32) -> Option<Placement> {
		self.building_placements.get(&original_id).copied()
	}

	/// Placements of all buildings, keyed by original id.
	pub fn building_placements(&self) -> &HashMap<i32, Placement> {
		&self.building_placements
	}

	/// Cartesian positions of all belts, keyed by original id.
	pub fn belt_positions(&self) -> &HashMap<i32, DVec3> {
		&self.belt_positions
	}

	/// The reconstructed belt lanes, in seed order.
	pub fn lanes(&self) -> &[BeltLane] {
		&self.lanes
	}

	/// Sphere position of the blueprint's reference point itself.
	pub fn reference_spherical(&self) -> SphericalCoord {
		to_spherical([0.0, 0.0], self.blueprint.reference_pos)
	}
}
