//! File type support for `furni-rs`.

mod error;

pub mod swf;
pub mod visualization;

// Re-export unified error types
pub use error::{SwfError, VisualizationError};

// Re-export main file types
pub use swf::{
	BinaryData, Compression as SwfCompression, File as SwfFile, Header as SwfHeader, Tag,
	TagIterator,
};
pub use visualization::{Animation, Document as VisualizationDocument};
