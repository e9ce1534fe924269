//! Module for querying the cluster administrative endpoint.
//!
//! This module owns the seam between the snapshot builders and the
//! cluster: the [AdminSession] trait describes the two queries the
//! builders need, and [HttpAdminSession] implements them against the
//! JSON endpoints of the active master's info server:
//! - `api/v1/cluster-status`: cluster identity, master and backup
//!   masters, live and dead servers, regions in transition, balancer
//!   state ([ClusterStatusResult]).
//! - `api/v1/server-load/<host>:<port>`: the aggregate counters of one
//!   live server plus the per-region counters of every region it hosts
//!   ([ServerLoadResult]).
//!
//! The raw result structs deserialize the endpoint payloads verbatim.
//! They are inputs to the builders in [crate::cluster_status] and
//! [crate::servers_load], never part of a snapshot: snapshots copy
//! every field by value and hold no handle back into the session.
//!
//! Connection, authentication and timeout policy belong to the session
//! implementation; the builders impose none of their own.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
