use std::{env, net::IpAddr};

// Runtime/server settings read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 3000;

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

// Bind on all interfaces by default so the service is reachable from a container.
pub fn http_host() -> IpAddr {
    env::var("CALCULATOR_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([0, 0, 0, 0]))
}
