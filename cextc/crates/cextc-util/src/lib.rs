//! cextc-util - Core Utilities and Foundation Types
//!
//! Shared foundation for the cextc crates:
//!
//! - [`span`] - byte-range source locations with line/column
//! - [`source`] - loading source buffers and quoting lines for diagnostics
//! - [`error`] - error types for the above
//!
//! # Example
//!
//! ```no_run
//! use cextc_util::{read_source, SourceFile};
//!
//! let bytes = read_source("build/sample.cext")?;
//! let file = SourceFile::new("build/sample.cext", bytes);
//! println!("{} lines", file.line_count());
//! # Ok::<(), cextc_util::SourceError>(())
//! ```

pub mod error;
pub mod source;
pub mod span;

pub use error::{SourceError, SourceResult};
pub use source::{read_source, SourceFile};
pub use span::Span;
