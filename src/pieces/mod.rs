//! Piece maps and swarm health
//!
//! aria2 reports which pieces of a torrent are downloaded as a hex string,
//! four pieces per digit. This module decodes those bitfields, compresses the
//! decoded map into runs for the piece map view, and combines the local map
//! with the peers' maps into a health estimate.
//!
//! ## Usage
//!
//! ```
//! use aria2_tasks::pieces::{compress_runs, decode_bitfield};
//!
//! let pieces = decode_bitfield("fc0", 10);
//! let runs = compress_runs(&pieces);
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].length, 6);
//! assert_eq!(runs[1].length, 4);
//! ```
//!
//! All functions here are total: empty bitfields, zero piece counts and empty
//! peer lists produce empty or zero results instead of errors.

mod bitfield;
mod health;
mod runs;

pub use bitfield::{decode_bitfield, estimate_completed_ratio};
pub use health::{availability_counts, estimate_health_percent, simulate_rounds};
pub use runs::compress_runs;
