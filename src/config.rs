use log::warn;
use regex::Regex;
use std::sync::LazyLock;

/// Platform format version understood by the simulator.
pub const PLATFORM_VERSION: &str = "4.1";

/// Identifier of the single routing zone containing all hosts.
pub const ZONE_ID: &str = "zone0";

/// Compute speed assigned to every generated host.
pub const HOST_SPEED: &str = "2445Mf";

/// Identifier of the loopback link shared by all self-routes.
pub const LOOPBACK_LINK_ID: &str = "loopback";

/// Latency of the loopback link, independent of the configured link latency.
pub const LOOPBACK_LATENCY: &str = "1us";

/// Default bandwidth applied to every generated link.
pub const DEFAULT_BANDWIDTH: &str = "200GBps";

/// Default latency applied to every generated link except loopback.
pub const DEFAULT_LATENCY: &str = "5us";

/// Node count above which the full-mesh link table gets large enough to
/// slow simulator startup noticeably.
const LARGE_TOPOLOGY_THRESHOLD: u32 = 128;

/// Bandwidth strings: a number with an optional scale prefix and a
/// bytes/bits-per-second suffix, e.g. "200GBps", "25Mbps", "1000Bps".
static BANDWIDTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?([kKMGTP]i?)?[Bb]ps$").expect("Invalid bandwidth regex")
});

/// Latency strings: a number with an optional time-unit suffix, e.g.
/// "5us", "1.5ms", "10" (seconds when no suffix is given).
static LATENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?(ps|ns|us|ms|s|m|h|d|w)?$").expect("Invalid latency regex")
});

/// Errors reported by [`PlatformConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid node count: {0}")]
    InvalidNodeCount(String),
    #[error("Invalid bandwidth: {0}")]
    InvalidBandwidth(String),
    #[error("Invalid latency: {0}")]
    InvalidLatency(String),
}

/// Parameters of a generated platform.
///
/// The topology is a pure function of these values: re-running with an
/// identical configuration produces a byte-identical document.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Number of hosts in the zone.
    pub num_nodes: u32,
    /// Accepted for compatibility with simulator launch scripts; has no
    /// effect on the generated topology.
    pub num_clients_per_node: u32,
    /// Bandwidth attribute applied to every link.
    pub bandwidth: String,
    /// Latency attribute applied to every link except loopback.
    pub latency: String,
}

impl PlatformConfig {
    pub fn new(num_nodes: u32, num_clients_per_node: u32) -> Self {
        Self {
            num_nodes,
            num_clients_per_node,
            bandwidth: DEFAULT_BANDWIDTH.to_string(),
            latency: DEFAULT_LATENCY.to_string(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.num_nodes == 0 {
            return Err(ValidationError::InvalidNodeCount(
                "at least one node is required".to_string(),
            ));
        }

        if !BANDWIDTH_PATTERN.is_match(&self.bandwidth) {
            return Err(ValidationError::InvalidBandwidth(format!(
                "'{}' is not a bandwidth value (expected e.g. \"200GBps\" or \"25Mbps\")",
                self.bandwidth
            )));
        }

        if !LATENCY_PATTERN.is_match(&self.latency) {
            return Err(ValidationError::InvalidLatency(format!(
                "'{}' is not a latency value (expected e.g. \"5us\" or \"1.5ms\")",
                self.latency
            )));
        }

        if self.num_nodes > LARGE_TOPOLOGY_THRESHOLD {
            warn!(
                "Full-mesh platform with {} nodes produces {} links; the document may be slow to load",
                self.num_nodes,
                self.link_count()
            );
        }

        Ok(())
    }

    /// Number of host elements in the document.
    pub fn host_count(&self) -> u64 {
        u64::from(self.num_nodes)
    }

    /// Number of link elements in the document, loopback included. The
    /// generator emits N·(N+1)−1 sequentially numbered links plus loopback.
    pub fn link_count(&self) -> u64 {
        let n = u64::from(self.num_nodes);
        n * (n + 1)
    }

    /// Number of host-pair routes, one per unordered pair.
    pub fn pairwise_route_count(&self) -> u64 {
        let n = u64::from(self.num_nodes);
        n * n.saturating_sub(1) / 2
    }

    /// Total number of route elements: one self-route per host plus the
    /// pairwise routes.
    pub fn route_count(&self) -> u64 {
        u64::from(self.num_nodes) + self.pairwise_route_count()
    }
}
