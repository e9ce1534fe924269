//! Module for building the cluster status snapshot.
//!
//! One cluster-status query produces one [ClusterSnapshot]: cluster
//! identity and versions, the master and backup masters, live and dead
//! servers, the regions currently in transition, request totals,
//! balancer state and average load. Everything is copied by value from
//! the query result; the snapshot is immutable and independent of any
//! later query.
//!
//! Every `nb_*` count that has a sibling list is computed from the
//! length of that list, never taken from a second accessor of the
//! result, so a count can never disagree with the list it describes.
//!
//! List ordering follows the order the query returned. The cluster
//! does not promise an order for its server and transition collections,
//! so two snapshots may order them differently.
//!
//! Called from:
//! - [crate] main -> [ClusterSnapshot::get] (default report)
//! - [crate::servers_load::AllServersLoad::get] (live server
//!   enumeration for the load fan-out)
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
