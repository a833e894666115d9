#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

use sphereprint::blueprint::{Belt, Blueprint, Building, encode};

#[test]
fn export_json_carries_the_full_renderer_feed() {
	let payload = write_payload("export_feed");

	let json = run_json(&["export", &payload.display().to_string()]);

	assert_eq!(json["reference_pos"], serde_json::json!([4500.0, 0.0]));
	let reference = &json["reference_spherical"];
	assert!(reference["theta"].is_f64() && reference["phi"].is_f64());
	assert_eq!(reference["radius"], serde_json::json!(200.2));

	let buildings = json["buildings"].as_array().expect("buildings array");
	assert_eq!(buildings.len(), 1);
	assert_eq!(buildings[0]["original_id"], 7);
	assert_eq!(buildings[0]["model_index"], 65);
	assert_eq!(buildings[0]["position"].as_array().map(Vec::len), Some(3));

	let lanes = json["lanes"].as_array().expect("lanes array");
	assert_eq!(lanes.len(), 1);
	assert_eq!(lanes[0]["proto_id"], 2001);
	assert_eq!(lanes[0]["belt_ids"], serde_json::json!([10, 11]));
	assert_eq!(lanes[0]["points"].as_array().map(Vec::len), Some(2));

	assert!(json.get("graticule").is_none(), "grid should only appear on request");

	std::fs::remove_file(payload).ok();
}

#[test]
fn export_graticule_flag_adds_the_globe_grid() {
	let payload = write_payload("export_grid");

	let json = run_json(&["export", &payload.display().to_string(), "--graticule"]);

	let grid = &json["graticule"];
	assert_eq!(grid["main"].as_array().map(Vec::len), Some(940));
	assert_eq!(grid["intermediate"].as_array().map(Vec::len), Some(940));
	assert_eq!(grid["normal"].as_array().map(Vec::len), Some(7520));

	std::fs::remove_file(payload).ok();
}

#[test]
fn corrupt_payload_fails_with_error_line_and_exit_code() {
	let path = temp_path("corrupt");
	std::fs::write(&path, "not-valid-base64!!").expect("payload file writes");

	let output = Command::new(env!("CARGO_BIN_EXE_sphereprint"))
		.args(["info", &path.display().to_string()])
		.output()
		.expect("command executes");

	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty(), "no partial output on failure");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: "), "got stderr {stderr:?}");

	std::fs::remove_file(path).ok();
}

fn run_json(args: &[&str]) -> Value {
	let output = Command::new(env!("CARGO_BIN_EXE_sphereprint")).args(args).output().expect("command executes");

	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn write_payload(tag: &str) -> PathBuf {
	let blueprint = Blueprint {
		reference_pos: [4500.0, 0.0],
		buildings: vec![Building {
			original_id: 7,
			model_index: 65,
			recipe_id: 6,
			placement_offset: [100.0, -50.0],
			yaw_degrees: 90.0,
		}],
		belts: vec![
			Belt {
				original_id: 10,
				proto_id: 2001,
				output_id: Some(11),
				back_input_id: None,
				left_input_id: None,
				right_input_id: None,
				placement_offset: [0.0, 0.0],
			},
			Belt {
				original_id: 11,
				proto_id: 2001,
				output_id: None,
				back_input_id: Some(10),
				left_input_id: None,
				right_input_id: None,
				placement_offset: [100.0, 0.0],
			},
		],
	};

	let path = temp_path(tag);
	std::fs::write(&path, encode(&blueprint).expect("encode succeeds")).expect("payload file writes");
	path
}

fn temp_path(tag: &str) -> PathBuf {
	std::env::temp_dir().join(format!("sphereprint_{tag}_{}.txt", std::process::id()))
}
