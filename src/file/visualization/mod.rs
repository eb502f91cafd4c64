//! Furniture visualization documents.
//!
//! Furniture assets embed an XML document describing how the item renders:
//! layers, directions, colors and animations. This module classifies
//! candidate payloads, parses confirmed documents and exposes the animation
//! entries needed to count animation states.
//!
//! # Document Structure
//!
//! The portions of the document relevant here look like this:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <visualizationData>
//!     <graphics>                      <- literal wrapper, stripped on parse
//!         <visualization size="64">
//!             <animations>
//!                 <animation id="0"> ... </animation>
//!             </animations>
//!             <directions>
//!                 <direction id="0">
//!                     <animations>
//!                         <animation id="1"/> <- fallback location
//!                     </animations>
//!                 </direction>
//!             </directions>
//!         </visualization>
//!     </graphics>
//! </visualizationData>
//! ```
//!
//! Animation entries are looked up at `visualization/animations/animation`
//! first. The per-direction location is consulted only when that path
//! matches no element at all, and the two locations are never combined.
//! Paths match as suffixes of the element stack, so the enclosing document
//! root does not need a fixed name.

use std::borrow::Cow;

use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::Serialize;

use crate::file::VisualizationError;

mod constants {
	/// Declaration marker every payload must carry
	pub const XML_DECLARATION: &str = "<?xml";

	/// Schema marker identifying furniture visualization documents
	pub const SCHEMA_MARKER: &str = "visualizationData";

	/// Literal wrapper markers removed before parsing
	pub const WRAPPER_OPEN: &str = "<graphics>";
	/// Closing counterpart of [`WRAPPER_OPEN`]
	pub const WRAPPER_CLOSE: &str = "</graphics>";

	/// Attribute carrying the animation state id
	pub const ID_ATTRIBUTE: &[u8] = b"id";

	/// Element paths searched for animation entries, in priority order
	pub const ANIMATION_PATHS: [&[&str]; 2] = [
		&["visualization", "animations", "animation"],
		&["visualization", "directions", "direction", "animations", "animation"],
	];
}

/// Decodes a candidate payload as strict UTF-8.
///
/// Classification treats undecodable payloads as non-matches, so malformed
/// bytes yield `None` rather than an error.
pub fn decode_text(payload: &[u8]) -> Option<Cow<'_, str>> {
	encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(payload)
}

/// Returns `true` when the decoded text is a furniture visualization document.
///
/// Both the XML declaration and the schema marker must be present; either
/// one alone does not qualify a payload.
pub fn is_visualization(text: &str) -> bool {
	text.contains(constants::XML_DECLARATION) && text.contains(constants::SCHEMA_MARKER)
}

// Removes the literal wrapper markers some assets carry around the document.
// The markers are plain substrings here, not parsed elements.
fn strip_wrapper(text: &str) -> Cow<'_, str> {
	if text.contains(constants::WRAPPER_OPEN) || text.contains(constants::WRAPPER_CLOSE) {
		Cow::Owned(
			text.replace(constants::WRAPPER_OPEN, "").replace(constants::WRAPPER_CLOSE, ""),
		)
	} else {
		Cow::Borrowed(text)
	}
}

/// A single animation entry found in a visualization document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Animation {
	id: Option<u32>,
}

impl Animation {
	/// Returns the state id carried by the entry's `id` attribute.
	///
	/// `None` when the attribute is missing or does not parse as an
	/// unsigned integer; such entries exist structurally but contribute no
	/// state.
	pub fn id(&self) -> Option<u32> {
		self.id
	}
}

/// Parsed view of a furniture visualization document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	animations: Vec<Animation>,
}

impl Document {
	/// Parses a confirmed visualization payload.
	///
	/// Wrapper markers are removed first, then the animation entries are
	/// collected from the first query path that matches any element; see
	/// the module documentation for the lookup order.
	///
	/// # Errors
	///
	/// Structural XML errors are fatal. A payload that passed
	/// classification is expected to parse, so nothing is recovered here.
	///
	/// # Examples
	///
	/// ```
	/// use furni_rs::file::visualization::Document;
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
	/// <visualizationData>
	///     <visualization size="64">
	///         <animations>
	///             <animation id="0"/>
	///             <animation id="2"/>
	///         </animations>
	///     </visualization>
	/// </visualizationData>"#;
	///
	/// let document = Document::parse(xml)?;
	/// assert_eq!(document.state_count(), Some(3));
	/// # Ok(())
	/// # }
	/// ```
	pub fn parse(text: &str) -> Result<Document, VisualizationError> {
		let text = strip_wrapper(text);

		for path in constants::ANIMATION_PATHS {
			let animations = collect_animations(&text, path)?;
			if !animations.is_empty() {
				return Ok(Document {
					animations,
				});
			}
		}

		Ok(Document {
			animations: Vec::new(),
		})
	}

	/// Returns the animation entries of the document.
	pub fn animations(&self) -> &[Animation] {
		&self.animations
	}

	/// Returns the number of animation states.
	///
	/// The count is the highest state id plus one, saturating at
	/// [`u32::MAX`]. `None` when no entry carried a usable id, including
	/// documents without any animation entries at all.
	pub fn state_count(&self) -> Option<u32> {
		let highest = self.animations.iter().filter_map(Animation::id).max()?;
		Some(highest.saturating_add(1))
	}
}

// Collects every animation element whose stack matches `path` as a suffix.
fn collect_animations(text: &str, path: &[&str]) -> Result<Vec<Animation>, VisualizationError> {
	let mut reader = Reader::from_str(text);
	let mut buf = Vec::new();
	let mut stack: Vec<String> = Vec::new();
	let mut animations = Vec::new();

	loop {
		match reader.read_event_into(&mut buf)? {
			Event::Start(element) => {
				stack.push(local_name(&element));
				if path_matches(&stack, path) {
					animations.push(read_animation(&element)?);
				}
			}
			Event::Empty(element) => {
				stack.push(local_name(&element));
				if path_matches(&stack, path) {
					animations.push(read_animation(&element)?);
				}
				stack.pop();
			}
			Event::End(_) => {
				stack.pop();
			}
			Event::Eof => break,
			_ => {}
		}
		buf.clear();
	}

	Ok(animations)
}

fn local_name(element: &BytesStart<'_>) -> String {
	String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn path_matches(stack: &[String], path: &[&str]) -> bool {
	stack.len() >= path.len()
		&& stack[stack.len() - path.len()..].iter().zip(path).all(|(have, want)| have == want)
}

// Reads the id attribute of an animation element. An unusable id is logged
// and dropped; the entry itself is kept.
fn read_animation(element: &BytesStart<'_>) -> Result<Animation, VisualizationError> {
	let mut id = None;

	for attr in element.attributes() {
		let attr = attr.map_err(quick_xml::Error::from)?;
		if attr.key.as_ref() != constants::ID_ATTRIBUTE {
			continue;
		}

		let value = attr.unescape_value()?;
		id = match value.parse::<u32>() {
			Ok(parsed) => Some(parsed),
			Err(err) => {
				debug!("skipping animation entry with unusable id {value:?}: {err}");
				None
			}
		};
		break;
	}

	Ok(Animation {
		id,
	})
}
