//! `DefineBinaryData` payload access.
//!
//! The body of a `DefineBinaryData` tag wraps an arbitrary byte payload in a
//! small fixed prefix:
//!
//! ```text
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! +0x00   2     character_id  Identifier scripts use to address the data
//! +0x02   4     reserved      Always zero, skipped on read
//! +0x06   var   payload       The embedded bytes
//! ```

/// Embedded payload carried by a `DefineBinaryData` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryData<'a> {
	character_id: u16,
	payload: &'a [u8],
}

impl<'a> BinaryData<'a> {
	/// Minimum body size: the character id plus the reserved bytes
	pub const MIN_BODY_SIZE: usize = 6;

	/// Splits a `DefineBinaryData` tag body into its identifier and payload.
	///
	/// Returns `None` when the body is too short to carry the fixed prefix.
	/// A body of exactly [`BinaryData::MIN_BODY_SIZE`] bytes is valid and
	/// carries an empty payload.
	pub fn from_tag_body(body: &'a [u8]) -> Option<Self> {
		if body.len() < Self::MIN_BODY_SIZE {
			return None;
		}

		Some(BinaryData {
			character_id: u16::from_le_bytes([body[0], body[1]]),
			payload: &body[Self::MIN_BODY_SIZE..],
		})
	}

	/// Returns the identifier scripts use to address this payload.
	pub fn character_id(&self) -> u16 {
		self.character_id
	}

	/// Returns the raw payload bytes.
	pub fn payload(&self) -> &'a [u8] {
		self.payload
	}
}
