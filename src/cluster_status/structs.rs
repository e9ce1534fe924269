//! The structs
//!
use chrono::{DateTime, Local};

/// A network addressable cluster node: master, backup master, live or
/// dead server.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct EndpointRef {
    pub host: String,
    pub port: i32,
}
/// The identity of one region: names and owning table, no load data.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RegionDescriptor {
    pub encoded_name: String,
    pub region_name: String,
    pub table_name: String,
    pub table_namespace: String,
}
/// One region mid-transition (splitting, merging, opening, closing,
/// failed).
///
/// The flags mirror the cluster's state model verbatim: they are not
/// mutually exclusive, and a record can carry several true flags at
/// once. They are never collapsed into a single enum.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RegionTransitionState {
    /// None exactly when the region is currently unassigned.
    pub server: Option<EndpointRef>,
    pub is_closed: bool,
    pub is_closing: bool,
    pub is_failed_close: bool,
    pub is_failed_open: bool,
    pub is_merged: bool,
    pub is_merging: bool,
    pub is_opened: bool,
    pub is_split: bool,
    pub is_splitting: bool,
    pub is_offline: bool,
    pub state: String,
    pub region_info: RegionDescriptor,
}
/// The top level cluster report, immutable once built.
///
/// Serializes with hyphenated field tags (`nb-live-servers`,
/// `is-balancer-on`, ...), the stable naming scheme every downstream
/// consumer of the snapshot tree sees.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterSnapshot {
    /// hb_status added to allow understanding the capture time.
    pub timestamp: Option<DateTime<Local>>,
    pub hbase_version: String,
    pub version: String,
    pub cluster_id: String,
    /// None while the cluster reports no elected master.
    pub master: Option<EndpointRef>,
    pub nb_master_backup: usize,
    pub backup_masters: Vec<EndpointRef>,
    pub nb_live_servers: usize,
    pub live_servers: Vec<EndpointRef>,
    pub nb_dead_servers: usize,
    pub dead_servers: Vec<EndpointRef>,
    pub nb_regions: i32,
    pub regions_in_transitions: Vec<RegionTransitionState>,
    pub nb_requests: u64,
    pub is_balancer_on: Option<bool>,
    pub average_load: f64,
}
