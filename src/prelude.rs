//! Prelude module for `furni-rs`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use furni_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let swf = SwfFile::open("throne.swf")?;
//! let states = state_count("throne.swf")?;
//! # Ok(())
//! # }
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Binary data types
	BinaryData,

	// SWF container types
	SwfCompression,
	SwfError,
	SwfFile,
	SwfHeader,

	Tag,
	TagIterator,

	// Visualization types
	VisualizationDocument,
	VisualizationError,
};

// Extraction pipeline
#[doc(inline)]
pub use crate::extract::{ExtractError, NO_VISUALIZATION, find_visualization, state_count};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
