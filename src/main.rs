use anyhow::{bail, Context, Result};
use clap::Parser;
use dotenv::dotenv;

use hb_status::cluster_status::ClusterSnapshot;
use hb_status::servers_load::AllServersLoad;
use hb_status::session::HttpAdminSession;
use hb_status::utility;

/// Read the administrative status endpoint of an HBase-style cluster
/// and report cluster status or per-server load.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Hostname of the master administrative endpoint (env: HOSTNAME_MASTER)
    #[arg(short = 'm', long, value_name = "HOSTNAME")]
    hostname_master: Option<String>,
    /// Port of the master administrative endpoint (env: PORT_MASTER)
    #[arg(short = 'p', long, value_name = "PORT")]
    port_master: Option<String>,
    /// Report per-server and per-region load instead of cluster status
    #[arg(short = 'l', long)]
    servers_load: bool,
    /// Print the snapshot as JSON instead of formatted rows
    #[arg(long)]
    json: bool,
    /// Print detail rows: cluster members, per-region load
    #[arg(long)]
    details_enable: bool,
    /// Number of parallel load queries (env: PARALLEL)
    #[arg(long, value_name = "NUMBER")]
    parallel: Option<usize>,
}

fn main() -> Result<()>
{
    env_logger::init();
    dotenv().ok();
    let opts = Opts::parse();

    let hostname_master = opts.hostname_master.unwrap_or_else(utility::get_hostname_master);
    if hostname_master.is_empty() {
        bail!("no master hostname set, use --hostname-master or HOSTNAME_MASTER");
    }
    let port_master = opts.port_master.unwrap_or_else(utility::get_port_master);
    let parallel = match opts.parallel {
        Some(parallel) => parallel,
        None => utility::get_parallel().parse::<usize>()
            .with_context(|| "PARALLEL is not a number")?,
    };

    let session = HttpAdminSession::new(&hostname_master, &port_master)
        .with_context(|| format!("cannot set up admin session for {}:{}", hostname_master, port_master))?;

    if opts.servers_load {
        let all_servers_load = AllServersLoad::get(&session, parallel)
            .with_context(|| format!("servers load query against {}:{} failed", hostname_master, port_master))?;
        if opts.json {
            println!("{}", serde_json::to_string_pretty(&all_servers_load.servers_load)?);
        } else {
            all_servers_load.print(&opts.details_enable);
        }
    } else {
        let snapshot = ClusterSnapshot::get(&session)
            .with_context(|| format!("cluster status query against {}:{} failed", hostname_master, port_master))?;
        if opts.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            snapshot.print(&opts.details_enable);
        }
    }
    Ok(())
}
