use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlueprintError>;

/// Errors produced while decoding and validating blueprint payloads.
///
/// Every variant is fatal to an import: nothing downstream of the decoder
/// runs once one of these surfaces. Link anomalies inside a decoded
/// blueprint (dangling ids, loops, tier boundaries) are deliberately not
/// represented here; the lane walk treats them as chain terminators.
#[derive(Debug, Error)]
pub enum BlueprintError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text is not valid standard base64.
	#[error("base64: {0}")]
	Base64(#[from] base64::DecodeError),
	/// Decoded bytes do not carry a zlib envelope.
	#[error("not a zlib stream (header={header:?})")]
	NotZlib {
		/// First up-to-2 bytes of the decoded payload.
		header: [u8; 2],
	},
	/// Compressed stream is corrupt or truncated.
	#[error("inflate: {0}")]
	Inflate(std::io::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Payload JSON is syntactically invalid or missing required fields.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Two records of the same kind share an original id.
	#[error("duplicate {kind} originalId {original_id}")]
	DuplicateId {
		/// Record collection name (`building` or `belt`).
		kind: &'static str,
		/// Offending id value.
		original_id: i32,
	},
	/// Blueprint reference position is not a finite number pair.
	#[error("non-finite referencePos")]
	NonFiniteReference,
	/// A record carries a non-finite placement offset or yaw.
	#[error("non-finite {kind} coordinate on originalId {original_id}")]
	NonFinite {
		/// Record collection name (`building` or `belt`).
		kind: &'static str,
		/// Offending record id.
		original_id: i32,
	},
}
