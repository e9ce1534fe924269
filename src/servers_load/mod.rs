//! Module for building the per-server load report.
//!
//! One cluster-status query enumerates the live servers, then one load
//! sub-query per live server fetches that server's aggregate counters
//! and the counters of every region it hosts. This is an N+1 query
//! pattern, acceptable for a low frequency administrative report.
//!
//! The sub-queries fan out over a rayon thread pool and the results
//! are collected back into the live server order of the initial query:
//! exactly one [ServerLoadSnapshot] per live server, no duplicates, no
//! omissions. If any sub-query fails, the whole operation fails with
//! [crate::errors::AdminError::PartialLoadQuery] naming every failing
//! server; a partial sequence is never returned as if it were complete.
//!
//! Called from:
//! - [crate] main -> [AllServersLoad::get] (`--servers-load`)
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
