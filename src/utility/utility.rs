//! Utilities
use std::env;

pub fn get_hostname_master() -> String {
    match env::var("HOSTNAME_MASTER") {
        Ok(value) => value,
        Err(_e) => {String::from("")},
    }
}
pub fn get_port_master() -> String {
    match env::var("PORT_MASTER") {
        Ok(value) => value,
        Err(_e) => {String::from("16010")},
    }
}
pub fn get_parallel() -> String {
    match env::var("PARALLEL") {
        Ok(value) => value,
        Err(_e) => {String::from("1")},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parallel_defaults_to_one() {
        if std::env::var("PARALLEL").is_err() {
            assert_eq!(get_parallel(), "1");
        }
    }
}
