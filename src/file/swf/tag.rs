//! Tag record decoding for SWF containers.
//!
//! Every record in the tag stream starts with a 16-bit little-endian word
//! packing the tag code and a short length:
//!
//! ```text
//! Bits    Field       Description
//! ------  ----------  ------------------------------------------
//! 15..6   code        Tag type code (10 bits)
//! 5..0    length      Body length in bytes (6 bits)
//! ```
//!
//! A short length of `0x3F` does not stand for itself; it announces that the
//! real body length follows as a 32-bit little-endian value. Bodies of 63
//! bytes or more must use this extended form, while smaller bodies may use
//! either form.

use super::constants;

/// Short length value that escapes to a 32-bit extended length
pub const EXTENDED_LENGTH_MARKER: u16 = 0x3F;

/// A single tag record borrowed from the container buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
	code: u16,
	body: &'a [u8],
}

impl<'a> Tag<'a> {
	/// Returns the tag type code.
	pub fn code(&self) -> u16 {
		self.code
	}

	/// Returns the tag body bytes.
	pub fn body(&self) -> &'a [u8] {
		self.body
	}

	/// Returns the canonical name of the tag type, when known.
	pub fn name(&self) -> Option<&'static str> {
		tag_name(self.code)
	}
}

/// Returns the canonical name for tag codes commonly seen in furniture assets.
pub fn tag_name(code: u16) -> Option<&'static str> {
	match code {
		0 => Some("End"),
		1 => Some("ShowFrame"),
		9 => Some("SetBackgroundColor"),
		36 => Some("DefineBitsLossless2"),
		39 => Some("DefineSprite"),
		69 => Some("FileAttributes"),
		76 => Some("SymbolClass"),
		77 => Some("Metadata"),
		82 => Some("DoABC"),
		86 => Some("DefineSceneAndFrameLabelData"),
		constants::TAG_DEFINE_BINARY_DATA => Some("DefineBinaryData"),
		_ => None,
	}
}

// Decoded code-and-length word plus the size of the header that carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TagHeader {
	code: u16,
	body_len: usize,
	header_len: usize,
}

// Decodes the tag header at `offset`, returning `None` when the buffer ends
// before the header is complete.
fn decode_tag_header(data: &[u8], offset: usize) -> Option<TagHeader> {
	let word_end = offset.checked_add(2)?;
	if data.len() < word_end {
		return None;
	}

	let word = u16::from_le_bytes([data[offset], data[offset + 1]]);
	let code = word >> 6;
	let short_len = word & EXTENDED_LENGTH_MARKER;

	if short_len != EXTENDED_LENGTH_MARKER {
		return Some(TagHeader {
			code,
			body_len: short_len as usize,
			header_len: 2,
		});
	}

	let extended_end = word_end.checked_add(4)?;
	if data.len() < extended_end {
		return None;
	}

	let body_len = u32::from_le_bytes([
		data[word_end],
		data[word_end + 1],
		data[word_end + 2],
		data[word_end + 3],
	]) as usize;

	Some(TagHeader {
		code,
		body_len,
		header_len: 6,
	})
}

/// Iterator over the tag records of a normalized container buffer.
///
/// The iterator walks records by offset arithmetic only; tag bodies are
/// never inspected. It ends when the buffer is exhausted or when a record
/// header or body would run past the end of the buffer, so a truncated
/// container simply yields fewer tags instead of an error.
#[derive(Debug, Clone)]
pub struct TagIterator<'a> {
	data: &'a [u8],
	offset: usize,
}

impl<'a> TagIterator<'a> {
	// An absent start offset produces an empty iterator.
	pub(crate) fn new(data: &'a [u8], offset: Option<usize>) -> Self {
		Self {
			data,
			offset: offset.unwrap_or(data.len()),
		}
	}
}

impl<'a> Iterator for TagIterator<'a> {
	type Item = Tag<'a>;

	fn next(&mut self) -> Option<Tag<'a>> {
		let header = decode_tag_header(self.data, self.offset)?;
		let body_start = self.offset.checked_add(header.header_len)?;
		let body_end = body_start.checked_add(header.body_len)?;
		if self.data.len() < body_end {
			return None;
		}

		self.offset = body_end;
		Some(Tag {
			code: header.code,
			body: &self.data[body_start..body_end],
		})
	}
}
