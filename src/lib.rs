#[macro_use]
extern crate serde_derive;

pub mod errors;
pub mod session;
pub mod cluster_status;
pub mod servers_load;
pub mod utility;
