//! Template assembly.
//!
//! - [`pipeline`] resolves each argument in order and applies the error policy
//! - [`segment`] folds resolved templates into the output text
//! - [`banner`] renders the header above each template
//! - [`writer`] persists the result
//!
//! # Example
//!
//! ```
//! use gignr::assembly::{assemble, Segment};
//!
//! let output = assemble(&[
//!     Segment::new("gh:Go", "GH", "*.exe\n"),
//!     Segment::new("my-stack", "LOCAL", ".env\n"),
//! ]);
//!
//! assert!(output.contains("GH:GO Template (GH)"));
//! assert!(output.find("*.exe").unwrap() < output.find(".env").unwrap());
//! ```

pub mod banner;
pub mod pipeline;
pub mod segment;
pub mod writer;

pub use banner::{banner_title, render_banner};
pub use pipeline::Assembler;
pub use segment::{assemble, Segment, SEGMENT_SEPARATOR};
pub use writer::{write_output, OUTPUT_FILE_NAME};
