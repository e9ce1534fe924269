//! Cluster status functions
//!
use std::time::Instant;
use chrono::Local;
use colored::*;
use log::*;

use crate::cluster_status::{ClusterSnapshot, EndpointRef, RegionDescriptor, RegionTransitionState};
use crate::errors::AdminError;
use crate::session::{AdminSession, ClusterStatusResult, EndpointResult, RegionInfoResult, RegionStateResult};

impl EndpointRef {
    /// Validates a raw server reference. A reference that is present
    /// but misses host or port is broken, and broken references are a
    /// consistency error rather than a guessed value.
    pub(crate) fn from_result(
        result: &EndpointResult,
    ) -> Result<EndpointRef, AdminError>
    {
        let host = result.host
            .as_deref()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| AdminError::Consistency("server reference without host".to_string()))?;
        let port = result.port
            .ok_or_else(|| AdminError::Consistency(format!("server reference for {} without port", host)))?;
        Ok(EndpointRef {
            host: host.to_string(),
            port,
        })
    }
    pub fn hostname_port(&self) -> String
    {
        format!("{}:{}", self.host, self.port)
    }
}

fn endpoint_list(
    list: &[EndpointResult],
) -> Result<Vec<EndpointRef>, AdminError>
{
    list.iter()
        .map(EndpointRef::from_result)
        .collect()
}

impl RegionDescriptor {
    fn from_result(
        result: &RegionInfoResult,
    ) -> RegionDescriptor
    {
        RegionDescriptor {
            encoded_name: result.encoded_name.clone(),
            region_name: result.region_name.clone(),
            table_name: result.table_name.clone(),
            table_namespace: result.table_namespace.clone(),
        }
    }
}

impl RegionTransitionState {
    fn from_result(
        result: &RegionStateResult,
    ) -> Result<RegionTransitionState, AdminError>
    {
        Ok(RegionTransitionState {
            server: result.server
                .as_ref()
                .map(EndpointRef::from_result)
                .transpose()?,
            is_closed: result.is_closed,
            is_closing: result.is_closing,
            is_failed_close: result.is_failed_close,
            is_failed_open: result.is_failed_open,
            is_merged: result.is_merged,
            is_merging: result.is_merging,
            is_opened: result.is_opened,
            is_split: result.is_split,
            is_splitting: result.is_splitting,
            is_offline: result.is_offline,
            state: result.state.clone(),
            region_info: RegionDescriptor::from_result(&result.region_info),
        })
    }
}

impl ClusterSnapshot {
    /// This is the public function to build the cluster status
    /// snapshot: one cluster-status query, then a field by field copy.
    pub fn get<S: AdminSession>(
        session: &S,
    ) -> Result<ClusterSnapshot, AdminError>
    {
        info!("begin cluster status query");
        let timer = Instant::now();

        let status = session.cluster_status()?;
        let mut snapshot = ClusterSnapshot::from_status(&status)?;
        snapshot.timestamp = Some(Local::now());

        info!("end cluster status query {:?}", timer.elapsed());
        Ok(snapshot)
    }
    /// Every `nb_*` count with a sibling list is taken from the length
    /// of the converted list itself. The result's own counters are not
    /// consulted for these, so count and list cannot disagree.
    pub fn from_status(
        status: &ClusterStatusResult,
    ) -> Result<ClusterSnapshot, AdminError>
    {
        let backup_masters = endpoint_list(&status.backup_masters)?;
        let live_servers = endpoint_list(&status.live_servers)?;
        let dead_servers = endpoint_list(&status.dead_servers)?;
        let regions_in_transitions = status.regions_in_transition
            .iter()
            .map(RegionTransitionState::from_result)
            .collect::<Result<Vec<_>, AdminError>>()?;
        Ok(ClusterSnapshot {
            timestamp: None,
            hbase_version: status.hbase_version.clone(),
            version: status.version.clone(),
            cluster_id: status.cluster_id.clone(),
            master: status.master
                .as_ref()
                .map(EndpointRef::from_result)
                .transpose()?,
            nb_master_backup: backup_masters.len(),
            backup_masters,
            nb_live_servers: live_servers.len(),
            live_servers,
            nb_dead_servers: dead_servers.len(),
            dead_servers,
            nb_regions: status.regions_count,
            regions_in_transitions,
            nb_requests: status.requests_count,
            is_balancer_on: status.balancer_on,
            average_load: status.average_load,
        })
    }
    pub fn print(
        &self,
        details_enable: &bool,
    )
    {
        println!("{} version {} (protocol {})", self.cluster_id, self.hbase_version, self.version);
        match &self.master {
            Some(master) => println!("master: {}, backup masters: {}", master.hostname_port(), self.nb_master_backup),
            None => println!("master: {}, backup masters: {}", "none elected".red(), self.nb_master_backup),
        };
        if self.nb_dead_servers > 0 {
            println!("live servers: {}, dead servers: {}", self.nb_live_servers, self.nb_dead_servers.to_string().red());
        } else {
            println!("live servers: {}, dead servers: {}", self.nb_live_servers, self.nb_dead_servers);
        }
        println!("regions: {}, in transition: {}, requests: {}, average load: {}, balancer: {}",
                 self.nb_regions,
                 self.regions_in_transitions.len(),
                 self.nb_requests,
                 self.average_load,
                 match self.is_balancer_on {
                     Some(true) => "on".to_string(),
                     Some(false) => "off".yellow().to_string(),
                     None => "unknown".yellow().to_string(),
                 },
        );
        for region in &self.regions_in_transitions {
            println!("  {} {} {} on {}",
                     region.state.yellow(),
                     region.region_info.region_name,
                     region.region_info.table_namespace,
                     region.server
                         .as_ref()
                         .map(|server| server.hostname_port())
                         .unwrap_or_else(|| "<unassigned>".to_string()),
            );
        }
        if *details_enable {
            for backup_master in &self.backup_masters {
                println!("  backup master {}", backup_master.hostname_port());
            }
            for server in &self.live_servers {
                println!("  live server {}", server.hostname_port());
            }
            for server in &self.dead_servers {
                println!("  dead server {}", server.hostname_port().red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_fixture() -> ClusterStatusResult {
        let json = r#"
{
  "hbase_version": "1.4.13",
  "version": "2",
  "cluster_id": "53255b2f-b8e6-4d12-9517-7bbd344887fa",
  "master": { "host": "hb-1.local", "port": 16000 },
  "backup_masters": [
    { "host": "hb-2.local", "port": 16000 },
    { "host": "hb-3.local", "port": 16000 }
  ],
  "live_servers": [
    { "host": "hb-1.local", "port": 16020 },
    { "host": "hb-2.local", "port": 16020 },
    { "host": "hb-3.local", "port": 16020 }
  ],
  "dead_servers": [
    { "host": "hb-4.local", "port": 16020 }
  ],
  "regions_count": 8,
  "regions_in_transition": [],
  "requests_count": 1024,
  "balancer_on": true,
  "average_load": 2.5
}
"#;
        ClusterStatusResult::parse(json).unwrap()
    }

    #[test]
    fn unit_counts_follow_lists() {
        let snapshot = ClusterSnapshot::from_status(&status_fixture()).unwrap();
        assert_eq!(snapshot.nb_master_backup, 2);
        assert_eq!(snapshot.nb_master_backup, snapshot.backup_masters.len());
        assert_eq!(snapshot.nb_live_servers, 3);
        assert_eq!(snapshot.nb_live_servers, snapshot.live_servers.len());
        assert_eq!(snapshot.nb_dead_servers, 1);
        assert_eq!(snapshot.nb_dead_servers, snapshot.dead_servers.len());
        assert!(snapshot.regions_in_transitions.is_empty());
        assert_eq!(snapshot.is_balancer_on, Some(true));
        assert_eq!(snapshot.average_load, 2.5);
        assert_eq!(snapshot.master, Some(EndpointRef { host: "hb-1.local".to_string(), port: 16000 }));
        assert_eq!(snapshot.live_servers[0], EndpointRef { host: "hb-1.local".to_string(), port: 16020 });
        assert_eq!(snapshot.live_servers[2], EndpointRef { host: "hb-3.local".to_string(), port: 16020 });
        assert_eq!(snapshot.dead_servers[0], EndpointRef { host: "hb-4.local".to_string(), port: 16020 });
    }

    #[test]
    fn unit_counts_follow_lists_not_result_counters() {
        // the result's own counters are never consulted for count
        // fields that have a sibling list, so a stale counter cannot
        // produce a snapshot that disagrees with itself
        let mut status = status_fixture();
        status.live_servers.pop();
        let snapshot = ClusterSnapshot::from_status(&status).unwrap();
        assert_eq!(snapshot.nb_live_servers, 2);
        assert_eq!(snapshot.nb_live_servers, snapshot.live_servers.len());
    }

    #[test]
    fn unit_transition_server_present_iff_assigned() {
        let json = r#"
{
  "hbase_version": "1.4.13",
  "version": "2",
  "cluster_id": "53255b2f-b8e6-4d12-9517-7bbd344887fa",
  "master": { "host": "hb-1.local", "port": 16000 },
  "live_servers": [],
  "regions_count": 2,
  "regions_in_transition": [
    {
      "server": { "host": "hb-2.local", "port": 16020 },
      "is_opened": true,
      "state": "OPEN",
      "region_info": {
        "encoded_name": "5d6f",
        "region_name": "t1,,1688000000000.5d6f.",
        "table_name": "t1",
        "table_namespace": "default"
      }
    },
    {
      "is_closing": true,
      "state": "CLOSING",
      "region_info": {
        "encoded_name": "a0b1",
        "region_name": "t2,,1688000000000.a0b1.",
        "table_name": "t2",
        "table_namespace": "default"
      }
    }
  ],
  "requests_count": 0,
  "average_load": 0.0
}
"#;
        let status = ClusterStatusResult::parse(json).unwrap();
        let snapshot = ClusterSnapshot::from_status(&status).unwrap();
        assert_eq!(snapshot.regions_in_transitions.len(), 2);
        let assigned = &snapshot.regions_in_transitions[0];
        assert_eq!(assigned.server.as_ref().unwrap().hostname_port(), "hb-2.local:16020");
        assert_eq!(assigned.region_info.table_name, "t1");
        let unassigned = &snapshot.regions_in_transitions[1];
        assert!(unassigned.server.is_none());
        assert_eq!(unassigned.state, "CLOSING");
    }

    #[test]
    fn unit_overlapping_transition_flags_are_preserved() {
        let json = r#"
{
  "hbase_version": "1.4.13",
  "version": "2",
  "cluster_id": "53255b2f-b8e6-4d12-9517-7bbd344887fa",
  "live_servers": [],
  "regions_count": 1,
  "regions_in_transition": [
    {
      "is_merging": true,
      "is_offline": true,
      "state": "MERGING",
      "region_info": {
        "encoded_name": "5d6f",
        "region_name": "t1,,1688000000000.5d6f.",
        "table_name": "t1",
        "table_namespace": "default"
      }
    }
  ],
  "requests_count": 0,
  "average_load": 0.0
}
"#;
        let status = ClusterStatusResult::parse(json).unwrap();
        let snapshot = ClusterSnapshot::from_status(&status).unwrap();
        let region = &snapshot.regions_in_transitions[0];
        assert!(region.is_merging);
        assert!(region.is_offline);
        assert!(!region.is_merged);
        assert!(!region.is_closed);
    }

    #[test]
    fn unit_absent_master_is_not_an_error() {
        let mut status = status_fixture();
        status.master = None;
        let snapshot = ClusterSnapshot::from_status(&status).unwrap();
        assert!(snapshot.master.is_none());
    }

    #[test]
    fn unit_broken_master_reference_is_consistency_error() {
        let mut status = status_fixture();
        status.master.as_mut().unwrap().port = None;
        let result = ClusterSnapshot::from_status(&status);
        assert!(matches!(result, Err(AdminError::Consistency(_))));
    }

    #[test]
    fn unit_broken_live_server_reference_is_consistency_error() {
        let mut status = status_fixture();
        status.live_servers[1].host = Some(String::new());
        let result = ClusterSnapshot::from_status(&status);
        assert!(matches!(result, Err(AdminError::Consistency(_))));
    }

    #[test]
    fn unit_serialized_field_tags_are_hyphenated() {
        let snapshot = ClusterSnapshot::from_status(&status_fixture()).unwrap();
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["nb-master-backup"], 2);
        assert_eq!(value["nb-live-servers"], 3);
        assert_eq!(value["nb-dead-servers"], 1);
        assert_eq!(value["is-balancer-on"], true);
        assert_eq!(value["average-load"], 2.5);
        assert_eq!(value["master"]["host"], "hb-1.local");
        assert_eq!(value["master"]["port"], 16000);
        assert!(value["regions-in-transitions"].as_array().unwrap().is_empty());
    }
}
