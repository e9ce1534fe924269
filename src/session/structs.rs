//! The structs
//!
use std::collections::BTreeMap;

/// The root struct for deserializing `api/v1/cluster-status`.
///
/// A minimal healthy two-node cluster answers:
/// ```json
/// {
///   "hbase_version": "1.4.13",
///   "version": "2",
///   "cluster_id": "53255b2f-b8e6-4d12-9517-7bbd344887fa",
///   "master": { "host": "hb-1.local", "port": 16000 },
///   "backup_masters": [],
///   "live_servers": [
///     { "host": "hb-1.local", "port": 16020 },
///     { "host": "hb-2.local", "port": 16020 }
///   ],
///   "dead_servers": [],
///   "regions_count": 8,
///   "regions_in_transition": [],
///   "requests_count": 1024,
///   "balancer_on": true,
///   "average_load": 4.0
/// }
/// ```
/// `master` is absent while no master is elected, which is a reportable
/// cluster state, not an error. `balancer_on` is absent when the
/// cluster cannot tell the balancer state.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ClusterStatusResult {
    pub hbase_version: String,
    pub version: String,
    pub cluster_id: String,
    pub master: Option<EndpointResult>,
    #[serde(default)]
    pub backup_masters: Vec<EndpointResult>,
    #[serde(default)]
    pub live_servers: Vec<EndpointResult>,
    #[serde(default)]
    pub dead_servers: Vec<EndpointResult>,
    pub regions_count: i32,
    #[serde(default)]
    pub regions_in_transition: Vec<RegionStateResult>,
    pub requests_count: u64,
    pub balancer_on: Option<bool>,
    pub average_load: f64,
}
/// One server reference as the endpoint reports it.
///
/// Host and port are optional on purpose: a reference missing either is
/// a broken reference, and the builders report it as a consistency
/// error instead of guessing.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EndpointResult {
    pub host: Option<String>,
    pub port: Option<i32>,
}
/// One region currently in transition.
///
/// The state flags are not mutually exclusive: the cluster can report,
/// say, `is_merging` and `is_offline` at the same time. Absent flags
/// default to false.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RegionStateResult {
    /// Absent exactly when the region is currently unassigned.
    pub server: Option<EndpointResult>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub is_closing: bool,
    #[serde(default)]
    pub is_failed_close: bool,
    #[serde(default)]
    pub is_failed_open: bool,
    #[serde(default)]
    pub is_merged: bool,
    #[serde(default)]
    pub is_merging: bool,
    #[serde(default)]
    pub is_opened: bool,
    #[serde(default)]
    pub is_split: bool,
    #[serde(default)]
    pub is_splitting: bool,
    #[serde(default)]
    pub is_offline: bool,
    pub state: String,
    pub region_info: RegionInfoResult,
}
/// The identity of one region, no load data.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RegionInfoResult {
    pub encoded_name: String,
    pub region_name: String,
    pub table_name: String,
    pub table_namespace: String,
}
/// The root struct for deserializing `api/v1/server-load/<host>:<port>`.
///
/// `regions_load` is a map keyed by region name, one entry per region
/// hosted on the server:
/// ```json
/// {
///   "number_of_regions": 2,
///   "number_of_requests": 512,
///   "read_requests_count": 300,
///   "write_requests_count": 212,
///   "memstore_size_mb": 48,
///   "requests_per_second": 12.5,
///   "stores": 4,
///   "store_uncompressed_size_mb": 512,
///   "store_files": 6,
///   "store_file_size_mb": 256,
///   "store_file_index_size_mb": 2,
///   "root_index_size_kb": 16,
///   "total_static_bloom_size_kb": 32,
///   "total_static_index_size_kb": 64,
///   "current_compacted_kvs": 1000,
///   "total_compacting_kvs": 2000,
///   "region_server_coprocessors": [],
///   "region_coprocessors": [],
///   "max_heap_mb": 4096,
///   "used_heap_mb": 512,
///   "regions_load": {
///     "t1,,1688000000000.5d6f.": {
///       "requests_count": 256,
///       "read_requests_count": 150,
///       "write_requests_count": 106,
///       "stores": 2,
///       "store_files": 3,
///       "data_locality": 1.0,
///       "store_file_size_mb": 128,
///       "store_file_index_size_mb": 1,
///       "memstore_size_mb": 24,
///       "root_index_size_kb": 8,
///       "total_static_bloom_size_kb": 16,
///       "total_static_index_size_kb": 32,
///       "current_compacted_kvs": 500,
///       "total_compacting_kvs": 1000
///     }
///   }
/// }
/// ```
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServerLoadResult {
    pub number_of_regions: i32,
    pub number_of_requests: u64,
    pub read_requests_count: u64,
    pub write_requests_count: u64,
    pub memstore_size_mb: i32,
    pub requests_per_second: f64,
    pub stores: i32,
    pub store_uncompressed_size_mb: i32,
    pub store_files: i32,
    pub store_file_size_mb: i32,
    pub store_file_index_size_mb: i32,
    pub root_index_size_kb: i32,
    pub total_static_bloom_size_kb: i32,
    pub total_static_index_size_kb: i32,
    pub current_compacted_kvs: u64,
    pub total_compacting_kvs: u64,
    /// Coprocessors loaded at the region server level.
    #[serde(default)]
    pub region_server_coprocessors: Vec<String>,
    /// Coprocessors loaded by any region on the server.
    #[serde(default)]
    pub region_coprocessors: Vec<String>,
    pub max_heap_mb: i32,
    pub used_heap_mb: i32,
    #[serde(default)]
    pub regions_load: BTreeMap<String, RegionLoadResult>,
}
/// Per-region counters within a [ServerLoadResult]. The region name is
/// the `regions_load` map key.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RegionLoadResult {
    pub requests_count: u64,
    pub read_requests_count: u64,
    pub write_requests_count: u64,
    pub stores: i32,
    pub store_files: i32,
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
