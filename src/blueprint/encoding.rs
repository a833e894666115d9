use std::io::Read;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::{ZlibDecoder, ZlibEncoder};

use crate::blueprint::{BlueprintError, Result};

const MAX_DECODED_BYTES: usize = 64 * 1024 * 1024;

/// Reverse the text transport: base64-decode, then zlib-inflate.
///
/// ASCII whitespace anywhere in the input is ignored, matching the forgiving
/// decode of the producing pipeline (payloads are pasted or piped with line
/// wraps and trailing newlines).
pub fn unpack(text: &str) -> Result<Vec<u8>> {
	let stripped: String = text.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
	let compressed = STANDARD.decode(stripped.as_bytes())?;
	check_zlib_header(&compressed)?;
	inflate(&compressed)
}

/// Apply the text transport: zlib-deflate, then base64-encode.
pub fn pack(bytes: &[u8]) -> Result<String> {
	let mut encoder = ZlibEncoder::new(bytes, Compression::default());
	let mut compressed = Vec::new();
	encoder.read_to_end(&mut compressed)?;
	Ok(STANDARD.encode(compressed))
}

fn check_zlib_header(bytes: &[u8]) -> Result<()> {
	if bytes.len() < 2 {
		return Err(BlueprintError::NotZlib { header: first2(bytes) });
	}

	let cmf = bytes[0];
	let flg = bytes[1];
	// CM nibble must be 8 (deflate) and CMF<<8 | FLG must pass the FCHECK rule.
	if cmf & 0x0f != 8 || (u16::from(cmf) * 256 + u16::from(flg)) % 31 != 0 {
		return Err(BlueprintError::NotZlib { header: [cmf, flg] });
	}

	Ok(())
}

fn inflate(compressed: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = ZlibDecoder::new(compressed);
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(BlueprintError::Inflate)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECODED_BYTES {
			return Err(BlueprintError::DecompressedTooLarge { limit: MAX_DECODED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

fn first2(bytes: &[u8]) -> [u8; 2] {
	let mut header = [0_u8; 2];
	let take = bytes.len().min(2);
	header[..take].copy_from_slice(&bytes[..take]);
	header
}
