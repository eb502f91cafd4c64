//! `furni-rs` reads legacy furniture SWF assets and extracts the animation
//! state information carried by their embedded visualization documents.
//!
//! # File Formats
//!
//! - **SWF**: Legacy container holding the furniture asset. Both the
//!   uncompressed (`FWS`) and zlib-compressed (`CWS`) variants are supported;
//!   compressed containers are inflated and normalized before any parsing.
//! - **Visualization XML**: `DefineBinaryData` payload describing how the
//!   furniture renders, including its animation entries.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use furni_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Count animation states directly from a path
//! let states = state_count("throne.swf")?;
//! if states == NO_VISUALIZATION {
//!     println!("no animation states");
//! } else {
//!     println!("{states} animation states");
//! }
//!
//! // Or work with the container itself
//! let swf = SwfFile::open("throne.swf")?;
//! println!("{}", swf.header());
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use furni_rs::file::swf::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let swf = File::open("throne.swf")?;
//! for tag in swf.tags() {
//!     println!("tag {} ({} bytes)", tag.code(), tag.body().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod file;

/// `use furni_rs::prelude::*;` to import commonly used items.
pub mod prelude;
