//! Animation state extraction pipeline.
//!
//! This module composes the container loader, the tag scanner and the
//! visualization parser into the single operation most callers need:
//! counting the animation states of a furniture asset.
//!
//! The pipeline runs in three steps:
//!
//! 1. Load the container and normalize it to the uncompressed shape.
//! 2. Scan the tag stream for the first `DefineBinaryData` payload that
//!    decodes as UTF-8 and carries the visualization markers. Payloads that
//!    fail either check are skipped and the scan continues.
//! 3. Parse the confirmed document and count its animation states.
//!
//! Soft misses (no qualifying payload, no usable ids) all collapse into the
//! [`NO_VISUALIZATION`] sentinel. Hard failures (unreadable file, broken
//! container, malformed confirmed document) surface as [`ExtractError`].
//!
//! # Examples
//!
//! ```no_run
//! use furni_rs::extract::{self, NO_VISUALIZATION};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! match extract::state_count("throne.swf")? {
//!     NO_VISUALIZATION => println!("no animation states"),
//!     states => println!("{states} animation states"),
//! }
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::file::swf::File;
use crate::file::visualization::{self, Document};
use crate::file::{SwfError, VisualizationError};

/// Sentinel returned when an asset carries no countable animation states.
pub const NO_VISUALIZATION: i32 = -1;

/// Errors that can occur while extracting animation states
#[derive(Debug, Error)]
pub enum ExtractError {
	/// The container could not be loaded
	#[error(transparent)]
	SWFError(#[from] SwfError),

	/// A confirmed visualization payload could not be parsed
	#[error(transparent)]
	VisualizationError(#[from] VisualizationError),
}

/// Returns the text of the first confirmed visualization document.
///
/// Candidate payloads are taken from the `DefineBinaryData` records in tag
/// stream order. A payload that fails strict decoding or the marker checks
/// disqualifies only itself; the scan moves on to the next record.
pub fn find_visualization(file: &File) -> Option<Cow<'_, str>> {
	for data in file.binary_data() {
		match visualization::decode_text(data.payload()) {
			Some(text) if visualization::is_visualization(&text) => return Some(text),
			Some(_) => {
				debug!("binary data {} lacks visualization markers, skipping", data.character_id());
			}
			None => {
				debug!("binary data {} is not valid UTF-8, skipping", data.character_id());
			}
		}
	}

	None
}

/// Extracts the animation state count from a furniture SWF file.
///
/// The count is the highest animation state id plus one, or
/// [`NO_VISUALIZATION`] when the container holds no confirmed visualization
/// document or no entry with a usable id. Counts beyond [`i32::MAX`] clamp
/// to [`i32::MAX`]. The operation is read-only and leaves no state behind,
/// so repeated calls on the same file return the same result.
///
/// # Errors
///
/// - [`ExtractError::SWFError`] when the file is missing or the container
///   is invalid
/// - [`ExtractError::VisualizationError`] when a confirmed document does
///   not parse
///
/// # Examples
///
/// ```no_run
/// use furni_rs::extract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let states = extract::state_count("throne.swf")?;
/// println!("{states}");
/// # Ok(())
/// # }
/// ```
pub fn state_count(path: impl AsRef<Path>) -> Result<i32, ExtractError> {
	let file = File::open(path)?;
	state_count_from(&file)
}

/// Extracts the animation state count from an already loaded container.
pub fn state_count_from(file: &File) -> Result<i32, ExtractError> {
	let Some(text) = find_visualization(file) else {
		return Ok(NO_VISUALIZATION);
	};

	let document = Document::parse(&text)?;
	match document.state_count() {
		Some(count) => Ok(i32::try_from(count).unwrap_or(i32::MAX)),
		None => Ok(NO_VISUALIZATION),
	}
}
