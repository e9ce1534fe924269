//! The structs
//!
use chrono::{DateTime, Local};

use crate::cluster_status::EndpointRef;

/// Per-region performance and storage counters. Purely numeric, no
/// identity beyond the region name.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RegionLoadMetrics {
    pub name: String,
    pub nb_requests: u64,
    pub nb_read_requests: u64,
    pub nb_write_requests: u64,
    pub nb_stores: i32,
    pub nb_store_files: i32,
    pub data_locality: f64,
    pub store_file_size_mb: i32,
    pub store_file_index_size_mb: i32,
    pub memstore_size_mb: i32,
    pub root_index_size_kb: i32,
    pub total_static_bloom_size_kb: i32,
    pub total_static_index_size_kb: i32,
    pub current_compacted_kvs: u64,
    pub total_compacting_kvs: u64,
}
/// Aggregate counters of one live server, spanning all regions it
/// hosts.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ServerLoadMetrics {
    pub nb_regions: i32,
    pub nb_requests: u64,
    pub nb_read_requests: u64,
    pub nb_write_requests: u64,
    pub memstore_size_mb: i32,
    pub requests_per_second: f64,
    pub nb_stores: i32,
    pub uncompressed_store_size_mb: i32,
    pub nb_store_files: i32,
    pub store_file_size_mb: i32,
    pub store_file_index_size_mb: i32,
    pub root_index_size_kb: i32,
    pub total_static_bloom_size_kb: i32,
    pub total_static_index_size_kb: i32,
    pub current_compacted_kvs: u64,
    pub total_compacting_kvs: u64,
    /// Coprocessors loaded at the region server level.
    pub rs_coprocessor: Vec<String>,
    /// Coprocessors loaded by any region on the server.
    pub rs_coprocessor_region_level: Vec<String>,
    pub max_heap_mb: i32,
    pub used_heap_mb: i32,
}
/// The load report of one live server: aggregate counters plus one
/// [RegionLoadMetrics] per hosted region, ordered by region name.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ServerLoadSnapshot {
    /// hb_status added to allow understanding the capture time.
    pub timestamp: Option<DateTime<Local>>,
    pub server: EndpointRef,
    pub load_info: ServerLoadMetrics,
    pub regions_load: Vec<RegionLoadMetrics>,
}
/// This struct is a wrapper for the vec of [ServerLoadSnapshot].
///
/// In this way, the struct can be used with functions in impl.
#[derive(Debug, Default)]
pub struct AllServersLoad {
    pub servers_load: Vec<ServerLoadSnapshot>,
}
