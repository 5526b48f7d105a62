use std::env;

use tracing::{info, warn};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub queue_capacity: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let queue_capacity = parse_capacity(env::var("SPLITTER_QUEUE_CAPACITY").ok().as_deref());

        info!(
            bind_addr = %bind_addr,
            queue_capacity,
            "loaded configuration"
        );

        Self {
            bind_addr,
            queue_capacity,
        }
    }
}

fn parse_capacity(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_QUEUE_CAPACITY;
    };

    match raw.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => capacity,
        _ => {
            warn!(value = raw, "invalid SPLITTER_QUEUE_CAPACITY, using default");
            DEFAULT_QUEUE_CAPACITY
        }
    }
}
