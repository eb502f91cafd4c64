//! SWF container support for `furni-rs` project.
//!
//! This module provides read-only support for the legacy SWF containers that
//! carry furniture assets. Only the pieces needed to reach the embedded
//! visualization document are decoded: the file header, the tag stream, and
//! `DefineBinaryData` payloads.
//!
//! # File Structure Overview
//!
//! ```text
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! 0x00    3     signature     "FWS" (uncompressed) or "CWS" (zlib)
//! 0x03    1     version       Format version
//! 0x04    4     file_length   Total uncompressed length (little-endian)
//! 0x08    var   bounding_box  Bit-packed stage rectangle
//! +0x00   2     frame_rate    Playback rate in 8.8 fixed point
//! +0x02   2     frame_count   Number of frames on the main timeline
//! ```
//!
//! Everything after the frame count is a sequence of tag records; see the
//! [`tag`] module for their encoding.
//!
//! ## Bounding Box
//!
//! The stage rectangle is bit-packed: the top five bits of its first byte
//! give the field width `nbits`, followed by four fields of `nbits` bits
//! each. The rectangle therefore spans `5 + 4 × nbits` bits, rounded up to
//! whole bytes. Only the size matters for locating the tag stream, so the
//! field values are never decoded.
//!
//! ## Compressed Containers
//!
//! A `CWS` container is identical to an `FWS` container except that every
//! byte past the 8-byte fixed header is zlib-compressed. Loading inflates
//! the body and rebuilds an uncompressed buffer, so downstream parsing only
//! ever sees the `FWS` shape. The length field of the rebuilt buffer is
//! recomputed from the inflated body and may differ from the value the
//! original file declared.
//!
//! # Usage Examples
//!
//! ## Loading a container
//!
//! ```no_run
//! use furni_rs::file::swf::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let swf = File::open("throne.swf")?;
//!
//! println!("{}", swf.header());
//!
//! for data in swf.binary_data() {
//!     println!("binary data {}: {} bytes", data.character_id(), data.payload().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod binary_data;
pub mod tag;


use std::{fmt::Display, io::Read, path::Path};

use flate2::read::ZlibDecoder;
use log::trace;
use serde::Serialize;

use crate::file::SwfError;

pub use self::binary_data::BinaryData;
pub use self::tag::{Tag, TagIterator};

/// Constants describing the container layout.
pub mod constants {
	/// Signature bytes of an uncompressed container
	pub const SIGNATURE_UNCOMPRESSED: [u8; 3] = [0x46, 0x57, 0x53]; // "FWS"

	/// Signature bytes of a zlib-compressed container
	pub const SIGNATURE_ZLIB: [u8; 3] = [0x43, 0x57, 0x53]; // "CWS"

	/// Signature bytes of an LZMA-compressed container
	pub const SIGNATURE_LZMA: [u8; 3] = [0x5A, 0x57, 0x53]; // "ZWS"

	/// Size of the fixed header (signature, version and length field)
	pub const FIXED_HEADER_SIZE: usize = 8;

	/// Tag code of `DefineBinaryData` records
	pub const TAG_DEFINE_BINARY_DATA: u16 = 87;
}

/// Compression variants used by SWF containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Compression {
	/// No compression ("FWS")
	None,

	/// zlib-compressed body ("CWS")
	Zlib,

	/// LZMA-compressed body ("ZWS"), recognized but not supported
	Lzma,
}

impl Display for Compression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Compression::None => write!(f, "None"),
			Compression::Zlib => write!(f, "Zlib"),
			Compression::Lzma => write!(f, "LZMA"),
		}
	}
}

/// Header structure for SWF containers
///
/// The fixed fields (compression, version, declared length) are always
/// present. The geometry fields are only available when the buffer is
/// uncompressed and long enough to contain them; a container truncated
/// after the fixed header still parses, it just has no tag stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
	compression: Compression,
	version: u8,
	file_length: u32,
	rect_bytes: Option<usize>,
	frame_rate: Option<u16>,
	frame_count: Option<u16>,
}

impl Header {
	/// Size of the fixed portion of the header in bytes
	pub const FIXED_SIZE: usize = constants::FIXED_HEADER_SIZE;

	/// Returns the compression variant announced by the signature.
	pub fn compression(&self) -> Compression {
		self.compression
	}

	/// Returns the format version.
	pub fn version(&self) -> u8 {
		self.version
	}

	/// Returns the total file length declared by the header.
	pub fn file_length(&self) -> u32 {
		self.file_length
	}

	/// Returns the size of the bit-packed bounding box in bytes.
	pub fn rect_bytes(&self) -> Option<usize> {
		self.rect_bytes
	}

	/// Returns the raw frame rate in 8.8 fixed point.
	pub fn frame_rate(&self) -> Option<u16> {
		self.frame_rate
	}

	/// Returns the frame rate converted to frames per second.
	pub fn frames_per_second(&self) -> Option<f32> {
		self.frame_rate.map(|rate| f32::from(rate) / 256.0)
	}

	/// Returns the number of frames on the main timeline.
	pub fn frame_count(&self) -> Option<u16> {
		self.frame_count
	}

	/// Returns the offset where the tag stream starts.
	///
	/// `None` when the buffer ended before the frame count, in which case
	/// there is no tag stream at all.
	pub fn tag_stream_offset(&self) -> Option<usize> {
		let rect_bytes = self.rect_bytes?;
		self.frame_count?;
		Some(constants::FIXED_HEADER_SIZE + rect_bytes + 4)
	}

	/// Parses a container header from the given byte slice.
	///
	/// The slice may hold a compressed container; in that case only the
	/// fixed fields are read, since the geometry bytes are part of the
	/// compressed body.
	///
	/// # Examples
	///
	/// ```
	/// use furni_rs::file::swf::{Compression, Header};
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let data = [
	///     0x46, 0x57, 0x53, 0x06, // "FWS", version 6
	///     0x0E, 0x00, 0x00, 0x00, // declared length: 14 bytes
	///     0x08, 0x00, // bounding box: nbits = 1, all fields zero
	///     0x00, 0x18, // frame rate: 24.0
	///     0x01, 0x00, // frame count: 1
	/// ];
	/// let header = Header::from_bytes(&data)?;
	///
	/// assert_eq!(header.compression(), Compression::None);
	/// assert_eq!(header.version(), 6);
	/// assert_eq!(header.tag_stream_offset(), Some(14));
	/// # Ok(())
	/// # }
	/// ```
	pub fn from_bytes(data: &[u8]) -> Result<Header, SwfError> {
		if data.len() < constants::FIXED_HEADER_SIZE {
			return Err(SwfError::InsufficientData {
				expected: constants::FIXED_HEADER_SIZE,
				actual: data.len(),
			});
		}

		let signature = [data[0], data[1], data[2]];
		let compression = match signature {
			constants::SIGNATURE_UNCOMPRESSED => Compression::None,
			constants::SIGNATURE_ZLIB => Compression::Zlib,
			constants::SIGNATURE_LZMA => Compression::Lzma,
			_ => return Err(SwfError::InvalidSignature(signature)),
		};

		let version = data[3];
		let file_length = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);

		let mut header = Header {
			compression,
			version,
			file_length,
			rect_bytes: None,
			frame_rate: None,
			frame_count: None,
		};

		if compression == Compression::None {
			header.read_geometry(&data[constants::FIXED_HEADER_SIZE..]);
		}

		Ok(header)
	}

	/// Loads a container header from any reader
	///
	/// This reads everything the reader offers, so it is mostly useful for
	/// in-memory sources. Use [`Header::from_bytes`] when the data is
	/// already available as a slice.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, SwfError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	// Fills in the geometry fields from the bytes following the fixed
	// header. Truncation at any point leaves the remaining fields unset.
	fn read_geometry(&mut self, data: &[u8]) {
		let Some(&first) = data.first() else {
			return;
		};

		let nbits = first >> 3;
		let rect_bits = 5u32 + 4u32 * u32::from(nbits);
		let rect_bytes = rect_bits.div_ceil(8) as usize;
		self.rect_bytes = Some(rect_bytes);

		if data.len() < rect_bytes + 4 {
			return;
		}

		self.frame_rate = Some(u16::from_le_bytes([data[rect_bytes], data[rect_bytes + 1]]));
		self.frame_count = Some(u16::from_le_bytes([data[rect_bytes + 2], data[rect_bytes + 3]]));
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"SWF File Header:\n\
			- Compression: {}\n\
			- Version: {}\n\
			- Declared Length: {} bytes\n\
			- Bounding Box: {}\n\
			- Frame Rate: {}\n\
			- Frame Count: {}",
			self.compression,
			self.version,
			self.file_length,
			match self.rect_bytes {
				Some(bytes) => format!("{bytes} bytes"),
				None => "<absent>".to_string(),
			},
			match self.frames_per_second() {
				Some(fps) => format!("{fps} fps"),
				None => "<absent>".to_string(),
			},
			match self.frame_count {
				Some(count) => count.to_string(),
				None => "<absent>".to_string(),
			},
		)
	}
}

/// Representation of a loaded SWF container
///
/// The buffer held here is always in the uncompressed shape: a compressed
/// container is inflated on load and reframed with an `FWS` signature, so
/// tag access behaves identically for both variants. The original framing
/// is still available through [`File::compression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	/// Compression variant of the source data
	compression: Compression,

	/// Header parsed from the normalized buffer
	header: Header,

	/// Normalized container bytes
	data: Vec<u8>,
}

impl File {
	/// Returns the compression variant the source data arrived in.
	pub fn compression(&self) -> Compression {
		self.compression
	}

	/// Returns a reference to the parsed header.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the normalized container bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	/// Returns an iterator over the tag records of the container.
	///
	/// The iterator is empty when the header ended before the tag stream.
	pub fn tags(&self) -> TagIterator<'_> {
		TagIterator::new(&self.data, self.header.tag_stream_offset())
	}

	/// Returns an iterator over the decoded `DefineBinaryData` records.
	///
	/// Records whose body is too short to carry the fixed prefix are
	/// silently skipped.
	pub fn binary_data(&self) -> impl Iterator<Item = BinaryData<'_>> {
		self.tags()
			.filter(|tag| tag.code() == constants::TAG_DEFINE_BINARY_DATA)
			.filter_map(|tag| BinaryData::from_tag_body(tag.body()))
	}

	/// Opens and loads an SWF container from the specified path
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SwfError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Loads an SWF container from any reader
	///
	/// Note: this reads the entire file into memory before parsing. The
	/// compressed variant requires the whole body for inflation, so
	/// streaming access is not supported.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, SwfError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Loads an SWF container from the given byte slice.
	///
	/// A compressed (`CWS`) container is inflated and normalized here; see
	/// the module documentation for the buffer shape this produces.
	///
	/// # Errors
	///
	/// - [`SwfError::InsufficientData`] when fewer than 8 bytes are given
	/// - [`SwfError::InvalidSignature`] for unknown signature bytes
	/// - [`SwfError::LzmaNotSupported`] for `ZWS` containers
	/// - [`SwfError::Decompression`] when the compressed body is corrupt
	pub fn from_bytes(data: &[u8]) -> Result<Self, SwfError> {
		if data.len() < Header::FIXED_SIZE {
			return Err(SwfError::InsufficientData {
				expected: Header::FIXED_SIZE,
				actual: data.len(),
			});
		}

		let signature = [data[0], data[1], data[2]];
		let (compression, data) = match signature {
			constants::SIGNATURE_UNCOMPRESSED => (Compression::None, data.to_vec()),
			constants::SIGNATURE_ZLIB => (Compression::Zlib, inflate_body(data)?),
			constants::SIGNATURE_LZMA => return Err(SwfError::LzmaNotSupported),
			_ => return Err(SwfError::InvalidSignature(signature)),
		};

		let header = Header::from_bytes(&data)?;

		Ok(File {
			compression,
			header,
			data,
		})
	}
}

impl Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}\n- Source Compression: {}\n- Normalized Size: {} bytes",
			self.header,
			self.compression,
			self.data.len(),
		)
	}
}

// Inflates the body of a compressed container and reframes it as an
// uncompressed buffer. The length field is recomputed from the inflated
// body rather than copied from the original header.
fn inflate_body(data: &[u8]) -> Result<Vec<u8>, SwfError> {
	let version = data[3];
	let compressed = &data[Header::FIXED_SIZE..];

	let mut body = Vec::new();
	let mut decoder = ZlibDecoder::new(compressed);
	decoder.read_to_end(&mut body).map_err(SwfError::Decompression)?;
	trace!("inflated {} compressed bytes into a {} byte body", compressed.len(), body.len());

	let total_length = (Header::FIXED_SIZE + body.len()) as u32;
	let mut normalized = Vec::with_capacity(Header::FIXED_SIZE + body.len());
	normalized.extend_from_slice(&constants::SIGNATURE_UNCOMPRESSED);
	normalized.push(version);
	normalized.extend_from_slice(&total_length.to_le_bytes());
	normalized.extend_from_slice(&body);

	Ok(normalized)
}
