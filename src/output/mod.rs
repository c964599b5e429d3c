//! Output module for progress, summaries and the final archive
//!
//! This module handles:
//! - Progress reporting during a run
//! - Bundling the PDF directory into a zip archive
//! - Run summaries and listings of downloaded files

mod archive;
mod progress;
pub mod stats;

pub use archive::{build_archive, ArchiveError};
pub use progress::{LogReporter, NullReporter, ProgressReporter};
pub use stats::{list_documents, print_listing, print_report, RunReport};
