//! The error kinds a status or load query can surface.
//!
//! Every builder failure is one of these kinds; no builder substitutes
//! defaults or returns a partially built snapshot.

/// One failed per-server load sub-query: which server, and what the
/// underlying query reported.
#[derive(Debug)]
pub struct FailedServerLoad {
    pub server: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The cluster administrative endpoint could not be reached, or the
    /// transport failed mid-request.
    #[error("cannot reach cluster: {0}")]
    Connectivity(String),

    /// The session is not privileged for the requested query.
    #[error("not authorized: {0}")]
    Authorization(String),

    /// The query answered, but the result is structurally invalid, such
    /// as an undecodable payload or a server reference without host or
    /// port.
    #[error("inconsistent query result: {0}")]
    Consistency(String),

    /// One or more per-server load sub-queries failed. The whole
    /// operation fails; no partial sequence is returned.
    #[error("load query failed for {}", .0.iter().map(|f| f.server.as_str()).collect::<Vec<_>>().join(", "))]
    PartialLoadQuery(Vec<FailedServerLoad>),
}

impl AdminError {
    /// The failing servers for a [AdminError::PartialLoadQuery], empty
    /// for every other kind.
    pub fn failed_servers(&self) -> Vec<&str> {
        match self {
            AdminError::PartialLoadQuery(failed) => {
                failed.iter().map(|f| f.server.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}
