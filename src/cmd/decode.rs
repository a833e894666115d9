use std::path::PathBuf;

use sphereprint::blueprint::{Result, decode};

/// Print the decoded blueprint document as parsed, before any derived
/// computation.
pub fn run(path: PathBuf) -> Result<()> {
	let encoded = std::fs::read_to_string(&path)?;
	let blueprint = decode(&encoded)?;

	println!("{}", serde_json::to_string_pretty(&blueprint)?);

	Ok(())
}
