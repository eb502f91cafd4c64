//! Benchmark helper utilities for furni-rs
//!
//! This module provides utilities for generating synthetic furniture
//! containers and common benchmark helpers for the furni-rs project.
//!
//! Real catalogue assets range from a few kilobytes to a few hundred
//! kilobytes; the profiles in [`sizes`] span that range.

use std::io::Write;

/// Generates a visualization document with the given number of animations
///
/// Animation ids are assigned sequentially from zero, so the expected state
/// count of the generated document equals `animation_count`.
pub fn generate_visualization_document(animation_count: u32) -> String {
	let mut document = String::new();

	document.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
	document.push_str("<visualizationData type=\"furniture\">\n");
	document.push_str("\t<graphics>\n");
	document.push_str("\t\t<visualization size=\"64\" layerCount=\"4\">\n");
	document.push_str("\t\t\t<animations>\n");

	for id in 0..animation_count {
		document.push_str(&format!("\t\t\t\t<animation id=\"{id}\"/>\n"));
	}

	document.push_str("\t\t\t</animations>\n");
	document.push_str("\t\t</visualization>\n");
	document.push_str("\t</graphics>\n");
	document.push_str("</visualizationData>\n");

	document
}

/// Generates an uncompressed furniture container with the given shape
///
/// The container carries `filler_tags` non-qualifying records ahead of the
/// qualifying visualization payload, followed by an End record. Every third
/// filler is itself a DefineBinaryData record without the document markers,
/// so scans over the output exercise payload classification as well as
/// plain record walking.
pub fn generate_furniture_swf(animation_count: u32, filler_tags: usize) -> Vec<u8> {
	let document = generate_visualization_document(animation_count);

	let mut data = Vec::new();

	// Signature "FWS"
	data.extend_from_slice(&[0x46, 0x57, 0x53]);

	// Version
	data.push(0x09);

	// File length (placeholder, patched below)
	let file_length_pos = data.len();
	data.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

	// Bounding box (nbits = 1, two bytes total)
	data.extend_from_slice(&[0x08, 0x00]);

	// Frame rate 24.0 (8.8 fixed point)
	data.extend_from_slice(&[0x00, 0x18]);

	// Frame count
	data.extend_from_slice(&[0x01, 0x00]);

	// Filler records ahead of the qualifying payload
	for index in 0..filler_tags {
		if index % 3 == 2 {
			append_binary_data_tag(
				&mut data,
				index as u16,
				b"<?xml version=\"1.0\"?><manifest/>",
			);
		} else {
			// ShowFrame, empty body
			data.extend_from_slice(&(1u16 << 6).to_le_bytes());
		}
	}

	// Qualifying visualization payload
	append_binary_data_tag(&mut data, 1000, document.as_bytes());

	// End record
	data.extend_from_slice(&[0x00, 0x00]);

	// Update file length
	let file_length = data.len() as u32;
	data[file_length_pos..file_length_pos + 4].copy_from_slice(&file_length.to_le_bytes());

	data
}

/// Appends a DefineBinaryData record in the extended-length form
fn append_binary_data_tag(data: &mut Vec<u8>, character_id: u16, payload: &[u8]) {
	let body_len = (6 + payload.len()) as u32;

	// Tag code 87 with the extended-length marker
	data.extend_from_slice(&((87u16 << 6) | 0x3F).to_le_bytes());
	data.extend_from_slice(&body_len.to_le_bytes());

	// Character id and reserved word
	data.extend_from_slice(&character_id.to_le_bytes());
	data.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

	data.extend_from_slice(payload);
}

/// Deflates an uncompressed container into its zlib-compressed form
pub fn compress_container(container: &[u8]) -> Vec<u8> {
	let mut data = Vec::new();

	// Signature "CWS"; version and length prefix carry over unchanged
	data.extend_from_slice(&[0x43, 0x57, 0x53]);
	data.push(container[3]);
	data.extend_from_slice(&container[4..8]);

	let mut encoder =
		flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
	encoder.write_all(&container[8..]).expect("deflate container body");
	data.extend_from_slice(&encoder.finish().expect("finish deflate stream"));

	data
}

/// Common container shapes for synthetic benchmark data
///
/// Each profile is `(animation_count, filler_tags)`.
pub mod sizes {
	/// Minimal asset: a handful of states, no surrounding records
	pub const SMALL: (u32, usize) = (4, 0);
	/// Typical catalogue asset: a dozen states behind a few records
	pub const TYPICAL: (u32, usize) = (12, 8);
	/// Heavy asset: many states buried in a long record stream
	pub const LARGE: (u32, usize) = (64, 48);
	/// Stress shape: far beyond anything the catalogue ships
	pub const XLARGE: (u32, usize) = (256, 192);
}

#[cfg(test)]
mod tests {
	use super::*;

	use furni_rs::extract;
	use furni_rs::file::SwfFile;

	#[test]
	fn test_generate_visualization_document() {
		let document = generate_visualization_document(6);

		assert!(document.starts_with("<?xml"));
		assert!(document.contains("visualizationData"));
		assert_eq!(document.matches("<animation ").count(), 6);
	}

	#[test]
	fn test_generate_furniture_swf() {
		let data = generate_furniture_swf(6, 8);

		// Check signature and version
		assert_eq!(&data[0..3], b"FWS");
		assert_eq!(data[3], 0x09);

		// Check the patched length field
		assert_eq!(
			u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
			data.len() as u32
		);

		let file = SwfFile::from_bytes(&data).expect("decode generated container");
		assert_eq!(extract::state_count_from(&file).expect("count states"), 6);
	}

	#[test]
	fn test_compress_container_preserves_states() {
		let plain = generate_furniture_swf(6, 0);
		let packed = compress_container(&plain);

		assert_eq!(&packed[0..3], b"CWS");

		let file = SwfFile::from_bytes(&packed).expect("decode compressed container");
		assert_eq!(extract::state_count_from(&file).expect("count states"), 6);
	}

	#[test]
	fn test_sizes_profiles() {
		assert_eq!(sizes::SMALL, (4, 0));
		assert_eq!(sizes::TYPICAL, (12, 8));
		assert_eq!(sizes::LARGE, (64, 48));
		assert_eq!(sizes::XLARGE, (256, 192));
	}
}
