//! Full-mesh topology generation.
//!
//! One pass, fixed emission order: hosts, numbered links, the loopback
//! link, self-routes, pairwise routes. Pairwise link ids are assigned by
//! the same `(i, j), i < j` iteration that emits the routes, so the k-th
//! pairwise route references link id k by construction.

use log::debug;

use crate::config::{PlatformConfig, HOST_SPEED, LOOPBACK_LINK_ID, PLATFORM_VERSION, ZONE_ID};
use crate::platform::types::{Host, Link, Platform, Route, RoutingMode, Zone};

/// Host identifier for a 1-based node index.
fn host_id(index: u64) -> String {
    format!("Node-{index}")
}

/// Build a fully-connected platform from the configuration.
///
/// The configuration is expected to be validated; generation itself cannot
/// fail.
pub fn build_full_mesh(config: &PlatformConfig) -> Platform {
    let n = u64::from(config.num_nodes);
    let mut zone = Zone::new(ZONE_ID, RoutingMode::Full);

    for i in 1..=n {
        zone.hosts.push(Host::new(host_id(i), HOST_SPEED));
    }

    // Numbered links 1..=N*(N+1)-1. Only the first C(N,2) of them are ever
    // referenced by a route; downstream simulator runs expect the surplus
    // links to be present anyway.
    for id in 1..n * (n + 1) {
        zone.links
            .push(Link::new(id.to_string(), &config.bandwidth, &config.latency));
    }
    zone.links.push(Link::loopback(&config.bandwidth));

    for i in 1..=n {
        zone.routes
            .push(Route::new(host_id(i), host_id(i), LOOPBACK_LINK_ID));
    }

    let mut link_id: u64 = 1;
    for i in 1..=n {
        for j in i + 1..=n {
            zone.routes
                .push(Route::new(host_id(i), host_id(j), link_id.to_string()));
            link_id += 1;
        }
    }

    debug!(
        "Built platform: {} hosts, {} links, {} routes",
        zone.hosts.len(),
        zone.links.len(),
        zone.routes.len()
    );

    Platform::new(PLATFORM_VERSION, zone)
}
