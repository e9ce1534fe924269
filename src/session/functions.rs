//! Session functions
//!
use log::*;
use reqwest::StatusCode;

use crate::cluster_status::EndpointRef;
use crate::errors::AdminError;
use crate::session::{ClusterStatusResult, ServerLoadResult};

const ACCEPT_INVALID_CERTS: bool = true;

/// The two administrative queries the snapshot builders need.
///
/// An implementation owns connection establishment, authentication and
/// timeout policy. `Sync` because [crate::servers_load::AllServersLoad]
/// fans the per-server load queries out over a thread pool.
pub trait AdminSession: Sync {
    fn cluster_status(&self) -> Result<ClusterStatusResult, AdminError>;
    fn server_load(&self, server: &EndpointRef) -> Result<ServerLoadResult, AdminError>;
}

/// [AdminSession] against the JSON endpoints of the master info server.
pub struct HttpAdminSession {
    hostname: String,
    port: String,
    client: reqwest::blocking::Client,
}

impl HttpAdminSession {
    pub fn new(
        hostname: &str,
        port: &str,
    ) -> Result<HttpAdminSession, AdminError>
    {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(ACCEPT_INVALID_CERTS)
            .build()
            .map_err(|e| AdminError::Connectivity(format!("cannot build http client: {}", e)))?;
        Ok(HttpAdminSession {
            hostname: hostname.to_string(),
            port: port.to_string(),
            client,
        })
    }
    fn http_get(
        &self,
        url: &str,
    ) -> Result<String, AdminError>
    {
        let data_from_web_request = self.client
            .get(format!("http://{}:{}/{}", self.hostname, self.port, url))
            .send()
            .map_err(|e| {
                debug!("No response: {}:{}/{}: {}", self.hostname, self.port, url, e);
                AdminError::Connectivity(format!("{}:{}/{}: {}", self.hostname, self.port, url, e))
            })?;
        let status = data_from_web_request.status();
        if status.is_success()
        {
            debug!("Success response: {}:{}/{} = {}", self.hostname, self.port, url, status);
            data_from_web_request.text()
                .map_err(|e| AdminError::Connectivity(format!("{}:{}/{}: {}", self.hostname, self.port, url, e)))
        }
        else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
        {
            debug!("Unauthorized response: {}:{}/{} = {}", self.hostname, self.port, url, status);
            Err(AdminError::Authorization(format!("{}:{}/{} = {}", self.hostname, self.port, url, status)))
        }
        else
        {
            debug!("Non success response: {}:{}/{} = {}", self.hostname, self.port, url, status);
            Err(AdminError::Connectivity(format!("{}:{}/{} = {}", self.hostname, self.port, url, status)))
        }
    }
}

impl AdminSession for HttpAdminSession {
    fn cluster_status(&self) -> Result<ClusterStatusResult, AdminError>
    {
        let data_from_http = self.http_get("api/v1/cluster-status")?;
        ClusterStatusResult::parse(&data_from_http)
    }
    fn server_load(&self, server: &EndpointRef) -> Result<ServerLoadResult, AdminError>
    {
        let data_from_http = self.http_get(&format!("api/v1/server-load/{}:{}", server.host, server.port))?;
        ServerLoadResult::parse(&data_from_http)
    }
}

impl ClusterStatusResult {
    pub fn parse(
        http_data: &str,
    ) -> Result<ClusterStatusResult, AdminError>
    {
        serde_json::from_str(http_data)
            .map_err(|e| {
                debug!("could not parse cluster-status json data, error: {}", e);
                AdminError::Consistency(format!("cannot decode cluster-status data: {}", e))
            })
    }
}

impl ServerLoadResult {
    pub fn parse(
        http_data: &str,
    ) -> Result<ServerLoadResult, AdminError>
    {
        serde_json::from_str(http_data)
            .map_err(|e| {
                debug!("could not parse server-load json data, error: {}", e);
                AdminError::Consistency(format!("cannot decode server-load data: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parse_cluster_status_data() {
        let json = r#"
{
  "hbase_version": "1.4.13",
  "version": "2",
  "cluster_id": "53255b2f-b8e6-4d12-9517-7bbd344887fa",
  "master": { "host": "hb-1.local", "port": 16000 },
  "backup_masters": [
    { "host": "hb-2.local", "port": 16000 }
  ],
  "live_servers": [
    { "host": "hb-1.local", "port": 16020 },
    { "host": "hb-2.local", "port": 16020 }
  ],
  "dead_servers": [],
  "regions_count": 8,
  "regions_in_transition": [
    {
      "server": { "host": "hb-2.local", "port": 16020 },
      "is_splitting": true,
      "state": "SPLITTING",
      "region_info": {
        "encoded_name": "5d6f",
        "region_name": "t1,,1688000000000.5d6f.",
        "table_name": "t1",
        "table_namespace": "default"
      }
    }
  ],
  "requests_count": 1024,
  "balancer_on": true,
  "average_load": 4.0
}
"#;
        let result = ClusterStatusResult::parse(json).unwrap();
        assert_eq!(result.hbase_version, "1.4.13");
        assert_eq!(result.master.as_ref().unwrap().host.as_deref(), Some("hb-1.local"));
        assert_eq!(result.live_servers.len(), 2);
        assert_eq!(result.regions_in_transition.len(), 1);
        assert!(result.regions_in_transition[0].is_splitting);
        // absent flags default to false
        assert!(!result.regions_in_transition[0].is_split);
        assert_eq!(result.balancer_on, Some(true));
    }

    #[test]
    fn unit_parse_cluster_status_data_without_master() {
        let json = r#"
{
  "hbase_version": "1.4.13",
  "version": "2",
  "cluster_id": "53255b2f-b8e6-4d12-9517-7bbd344887fa",
  "live_servers": [],
  "regions_count": 0,
  "requests_count": 0,
  "average_load": 0.0
}
"#;
        let result = ClusterStatusResult::parse(json).unwrap();
        assert!(result.master.is_none());
        assert!(result.balancer_on.is_none());
        assert!(result.backup_masters.is_empty());
        assert!(result.dead_servers.is_empty());
    }

    #[test]
    fn unit_parse_server_load_data() {
        let json = r#"
{
  "number_of_regions": 1,
  "number_of_requests": 512,
  "read_requests_count": 300,
  "write_requests_count": 212,
  "memstore_size_mb": 48,
  "requests_per_second": 12.5,
  "stores": 2,
  "store_uncompressed_size_mb": 512,
  "store_files": 3,
  "store_file_size_mb": 256,
  "store_file_index_size_mb": 2,
  "root_index_size_kb": 16,
  "total_static_bloom_size_kb": 32,
  "total_static_index_size_kb": 64,
  "current_compacted_kvs": 1000,
  "total_compacting_kvs": 2000,
  "region_server_coprocessors": ["AccessController"],
  "region_coprocessors": [],
  "max_heap_mb": 4096,
  "used_heap_mb": 512,
  "regions_load": {
    "t1,,1688000000000.5d6f.": {
      "requests_count": 256,
      "read_requests_count": 150,
      "write_requests_count": 106,
      "stores": 2,
      "store_files": 3,
      "data_locality": 1.0,
      "store_file_size_mb": 128,
      "store_file_index_size_mb": 1,
      "memstore_size_mb": 24,
      "root_index_size_kb": 8,
      "total_static_bloom_size_kb": 16,
      "total_static_index_size_kb": 32,
      "current_compacted_kvs": 500,
      "total_compacting_kvs": 1000
    }
  }
}
"#;
        let result = ServerLoadResult::parse(json).unwrap();
        assert_eq!(result.number_of_regions, 1);
        assert_eq!(result.requests_per_second, 12.5);
        assert_eq!(result.region_server_coprocessors, vec!["AccessController".to_string()]);
        assert_eq!(result.regions_load.len(), 1);
        let region_load = result.regions_load.get("t1,,1688000000000.5d6f.").unwrap();
        assert_eq!(region_load.requests_count, 256);
        assert_eq!(region_load.data_locality, 1.0);
    }

    #[test]
    fn unit_parse_undecodable_data_is_consistency_error() {
        let result = ClusterStatusResult::parse("this is not json");
        assert!(matches!(result, Err(AdminError::Consistency(_))));
    }
}
