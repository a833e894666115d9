//! Belt lane reconstruction.
//!
//! The payload stores belts as individual segments joined by id links
//! (`outputId` downstream, `backInputId`/`leftInputId`/`rightInputId`
//! upstream). Rendering and analysis want whole lanes instead, so this
//! module stitches the segments back into ordered chains. Every belt
//! lands in exactly one lane; links that point outside the payload or
//! into an already-claimed belt terminate the chain rather than fail.

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

use glam::DVec3;

use crate::blueprint::data::Belt;

/// One reconstructed conveyor lane, ordered upstream to downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct BeltLane {
	/// Prototype shared by every belt in the lane.
	pub proto_id: i32,
	/// Original ids of the member belts, in traversal order.
	pub belt_ids: Vec<i32>,
	/// Cartesian sample point for each member belt, in the same order.
	///
	/// Belts with no entry in the position map contribute no point, so
	/// this can be shorter than `belt_ids`.
	pub points: Vec<DVec3>,
}

/// Groups `belts` into lanes by walking their id links.
///
/// Each belt not yet claimed by an earlier lane seeds a new one. From the
/// seed the walk first follows `outputId` downstream, then turns around
/// and extends upstream, preferring the back input over the side inputs.
/// A link stops the walk when it is absent, does not resolve to a belt in
/// `belts`, crosses a prototype boundary, or reaches a belt that is
/// already part of a lane.
///
/// Seeds are taken in input order and a claimed belt is never revisited,
/// so the result is a deterministic partition of `belts`.
pub fn reconstruct_lanes(belts: &[Belt], positions: &HashMap<i32, DVec3>) -> Vec<BeltLane> {
	let by_id: HashMap<i32, &Belt> = belts.iter().map(|belt| (belt.original_id, belt)).collect();
	let mut visited: HashSet<i32> = HashSet::with_capacity(belts.len());
	let mut lanes = Vec::new();

	for belt in belts {
		if visited.contains(&belt.original_id) {
			continue;
		}
		lanes.push(trace_lane(belt, &by_id, positions, &mut visited));
	}

	lanes
}

/// Walks one lane out from `seed`, claiming every belt it visits.
fn trace_lane(
	seed: &Belt,
	by_id: &HashMap<i32, &Belt>,
	positions: &HashMap<i32, DVec3>,
	visited: &mut HashSet<i32>,
) -> BeltLane {
	let mut chain = VecDeque::new();
	chain.push_back(seed.original_id);
	visited.insert(seed.original_id);

	// Downstream: follow outputId until the chain dead-ends.
	let mut current = seed;
	while let Some(next) = resolve(current.output_id, by_id) {
		if next.proto_id != seed.proto_id || !visited.insert(next.original_id) {
			break;
		}
		chain.push_back(next.original_id);
		current = next;
	}

	// Upstream: extend in front of the seed along the input links.
	let mut current = seed;
	while let Some(prev) = upstream_of(current, by_id) {
		if prev.proto_id != seed.proto_id || !visited.insert(prev.original_id) {
			break;
		}
		chain.push_front(prev.original_id);
		current = prev;
	}

	let belt_ids: Vec<i32> = chain.into_iter().collect();
	let points = belt_ids.iter().filter_map(|id| positions.get(id).copied()).collect();

	BeltLane { proto_id: seed.proto_id, belt_ids, points }
}

/// Looks a link up in the id map. Absent and dangling links are both `None`.
fn resolve<'a>(id: Option<i32>, by_id: &HashMap<i32, &'a Belt>) -> Option<&'a Belt> {
	by_id.get(&id?).copied()
}

/// Picks the upstream continuation of `belt`: the first input link, in
/// back/left/right order, that resolves to a known belt.
fn upstream_of<'a>(belt: &Belt, by_id: &HashMap<i32, &'a Belt>) -> Option<&'a Belt> {
	belt.upstream_ids().into_iter().find_map(|id| resolve(id, by_id))
}
