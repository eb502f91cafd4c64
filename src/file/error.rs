//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when loading or parsing SWF container files
#[derive(Debug, Error)]
pub enum SwfError {
	/// Not enough data to parse
	#[error("Insufficient data: expected at least {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Invalid signature bytes
	#[error("Invalid signature: {0:02X?}")]
	InvalidSignature([u8; 3]),

	/// LZMA-compressed container
	#[error("LZMA-compressed container (ZWS) is not supported")]
	LzmaNotSupported,

	/// Compressed body could not be inflated
	#[error("Failed to inflate compressed body: {0}")]
	Decompression(std::io::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when parsing a confirmed visualization payload
#[derive(Debug, Error)]
pub enum VisualizationError {
	/// Malformed XML in the document
	#[error("Malformed visualization XML: {0}")]
	Xml(#[from] quick_xml::Error),
}
