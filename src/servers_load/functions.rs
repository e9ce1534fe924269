//! Servers load functions
//!
use std::{sync::mpsc::channel, time::Instant};
use chrono::Local;
use colored::*;
use log::*;

use crate::cluster_status::EndpointRef;
use crate::errors::{AdminError, FailedServerLoad};
use crate::servers_load::{AllServersLoad, RegionLoadMetrics, ServerLoadMetrics, ServerLoadSnapshot};
use crate::session::{AdminSession, RegionLoadResult, ServerLoadResult};

impl RegionLoadMetrics {
    fn from_result(
        name: &str,
        result: &RegionLoadResult,
    ) -> RegionLoadMetrics
    {
        RegionLoadMetrics {
            name: name.to_string(),
            nb_requests: result.requests_count,
            nb_read_requests: result.read_requests_count,
            nb_write_requests: result.write_requests_count,
            nb_stores: result.stores,
            nb_store_files: result.store_files,
            data_locality: result.data_locality,
            store_file_size_mb: result.store_file_size_mb,
            store_file_index_size_mb: result.store_file_index_size_mb,
            memstore_size_mb: result.memstore_size_mb,
            root_index_size_kb: result.root_index_size_kb,
            total_static_bloom_size_kb: result.total_static_bloom_size_kb,
            total_static_index_size_kb: result.total_static_index_size_kb,
            current_compacted_kvs: result.current_compacted_kvs,
            total_compacting_kvs: result.total_compacting_kvs,
        }
    }
}

impl ServerLoadMetrics {
    fn from_result(
        result: &ServerLoadResult,
    ) -> ServerLoadMetrics
    {
        ServerLoadMetrics {
            nb_regions: result.number_of_regions,
            nb_requests: result.number_of_requests,
            nb_read_requests: result.read_requests_count,
            nb_write_requests: result.write_requests_count,
            memstore_size_mb: result.memstore_size_mb,
            requests_per_second: result.requests_per_second,
            nb_stores: result.stores,
            uncompressed_store_size_mb: result.store_uncompressed_size_mb,
            nb_store_files: result.store_files,
            store_file_size_mb: result.store_file_size_mb,
            store_file_index_size_mb: result.store_file_index_size_mb,
            root_index_size_kb: result.root_index_size_kb,
            total_static_bloom_size_kb: result.total_static_bloom_size_kb,
            total_static_index_size_kb: result.total_static_index_size_kb,
            current_compacted_kvs: result.current_compacted_kvs,
            total_compacting_kvs: result.total_compacting_kvs,
            rs_coprocessor: result.region_server_coprocessors.clone(),
            rs_coprocessor_region_level: result.region_coprocessors.clone(),
            max_heap_mb: result.max_heap_mb,
            used_heap_mb: result.used_heap_mb,
        }
    }
}

impl ServerLoadSnapshot {
    fn from_load(
        server: EndpointRef,
        load: &ServerLoadResult,
    ) -> ServerLoadSnapshot
    {
        // regions_load is a name keyed BTreeMap, so the vec comes out
        // ordered by region name
        let regions_load = load.regions_load
            .iter()
            .map(|(name, region_load)| RegionLoadMetrics::from_result(name, region_load))
            .collect();
        ServerLoadSnapshot {
            timestamp: None,
            server,
            load_info: ServerLoadMetrics::from_result(load),
            regions_load,
        }
    }
}

impl AllServersLoad {
    /// This is the public function to build the per-server load report:
    /// one cluster-status query for the live servers, then one load
    /// sub-query per live server over a pool of `parallel` threads.
    ///
    /// All or nothing: one failing sub-query fails the whole operation
    /// with [AdminError::PartialLoadQuery] naming every failing server.
    pub fn get<S: AdminSession>(
        session: &S,
        parallel: usize,
    ) -> Result<AllServersLoad, AdminError>
    {
        info!("begin servers load query");
        let timer = Instant::now();

        let status = session.cluster_status()?;
        let live_servers = status.live_servers
            .iter()
            .map(EndpointRef::from_result)
            .collect::<Result<Vec<_>, AdminError>>()?;

        let pool = rayon::ThreadPoolBuilder::new().num_threads(parallel).build().unwrap();
        let (tx, rx) = channel();
        pool.scope(|s| {
            for (order, server) in live_servers.iter().enumerate() {
                let tx = tx.clone();
                let server = server.clone();
                s.spawn(move |_| {
                    let detail_snapshot_time = Local::now();
                    let load = session.server_load(&server);
                    tx.send((order, server, load, detail_snapshot_time)).expect("error sending data via tx");
                });
            }
        });
        drop(tx);

        // collect back into the live server order of the initial query
        let mut fetched: Vec<Option<ServerLoadSnapshot>> = (0..live_servers.len()).map(|_| None).collect();
        let mut failed: Vec<FailedServerLoad> = Vec::new();
        for (order, server, load, detail_snapshot_time) in rx {
            match load {
                Ok(load) => {
                    let mut snapshot = ServerLoadSnapshot::from_load(server, &load);
                    snapshot.timestamp = Some(detail_snapshot_time);
                    fetched[order] = Some(snapshot);
                }
                Err(error) => {
                    failed.push(FailedServerLoad {
                        server: server.hostname_port(),
                        reason: error.to_string(),
                    });
                }
            }
        }
        if !failed.is_empty() {
            failed.sort_by(|a, b| a.server.cmp(&b.server));
            return Err(AdminError::PartialLoadQuery(failed));
        }
        let servers_load = fetched
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| AdminError::Consistency("load result missing for a live server".to_string()))?;

        info!("end servers load query {:?}", timer.elapsed());
        Ok(AllServersLoad { servers_load })
    }
    pub fn print(
        &self,
        details_enable: &bool,
    )
    {
        for row in &self.servers_load {
            println!("{} regions: {}, requests: {} ({} rd, {} wr), {} req/s, heap used/max: {}/{} MB",
                     row.server.hostname_port(),
                     row.load_info.nb_regions,
                     row.load_info.nb_requests,
                     row.load_info.nb_read_requests,
                     row.load_info.nb_write_requests,
                     row.load_info.requests_per_second,
                     row.load_info.used_heap_mb,
                     row.load_info.max_heap_mb,
            );
            if !*details_enable {
                continue
            }
            println!("{} stores: {}, store files: {}, store file size: {} MB (index {} MB), memstore: {} MB, compacting: {}/{} kvs",
                     " ".repeat(row.server.hostname_port().len()),
                     row.load_info.nb_stores,
                     row.load_info.nb_store_files,
                     row.load_info.store_file_size_mb,
                     row.load_info.store_file_index_size_mb,
                     row.load_info.memstore_size_mb,
                     row.load_info.current_compacted_kvs,
                     row.load_info.total_compacting_kvs,
            );
            for coprocessor in &row.load_info.rs_coprocessor {
                println!("  coprocessor {}", coprocessor);
            }
            for region in &row.regions_load {
                if region.data_locality < 1.0 {
                    println!("  {} requests: {} ({} rd, {} wr), locality: {}",
                             region.name,
                             region.nb_requests,
                             region.nb_read_requests,
                             region.nb_write_requests,
                             region.data_locality.to_string().yellow(),
                    );
                } else {
                    println!("  {} requests: {} ({} rd, {} wr), locality: {}",
                             region.name,
                             region.nb_requests,
                             region.nb_read_requests,
                             region.nb_write_requests,
                             region.data_locality,
                    );
                }
            }
        }
    }
}
