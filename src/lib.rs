//! Public library API for decoding and reconstructing spherical factory blueprints.

/// Blueprint transport decoding, coordinate mapping, lane reconstruction, and model aggregation.
pub mod blueprint;
