//! Platform document type definitions.
//!
//! These records mirror the simulator's platform file format: a versioned
//! `platform` root, one routing zone, and host/link/route children. Each
//! type knows its own XML form; the document is assembled bottom-up from
//! [`crate::xml::Element`] values so escaping is never a caller concern.

use crate::config::{LOOPBACK_LATENCY, LOOPBACK_LINK_ID};
use crate::xml::Element;

/// Route resolution mode of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingMode {
    /// Every host pair has an explicitly listed route.
    Full,
}

impl RoutingMode {
    /// Wire spelling used in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "Full",
        }
    }
}

/// Bandwidth sharing policy of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingPolicy {
    /// Unlimited concurrent flows, no contention model.
    FatPipe,
}

impl SharingPolicy {
    /// Wire spelling used in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FatPipe => "FATPIPE",
        }
    }
}

/// A simulated host.
#[derive(Debug, Clone)]
pub struct Host {
    /// Host identifier, `Node-<i>`.
    pub id: String,
    /// Compute speed attribute.
    pub speed: String,
}

impl Host {
    pub fn new(id: impl Into<String>, speed: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            speed: speed.into(),
        }
    }

    pub fn to_xml(&self) -> Element {
        Element::new("host").attr("id", &self.id).attr("speed", &self.speed)
    }
}

/// A network link between hosts.
#[derive(Debug, Clone)]
pub struct Link {
    /// Link identifier: a sequential integer rendered as a string, or the
    /// literal loopback id.
    pub id: String,
    pub bandwidth: String,
    pub latency: String,
    /// Only the loopback link carries a sharing policy.
    pub sharing_policy: Option<SharingPolicy>,
}

impl Link {
    pub fn new(
        id: impl Into<String>,
        bandwidth: impl Into<String>,
        latency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            bandwidth: bandwidth.into(),
            latency: latency.into(),
            sharing_policy: None,
        }
    }

    /// The loopback link: fixed id and latency, fat-pipe sharing so
    /// self-traffic never contends with itself.
    pub fn loopback(bandwidth: impl Into<String>) -> Self {
        Self {
            id: LOOPBACK_LINK_ID.to_string(),
            bandwidth: bandwidth.into(),
            latency: LOOPBACK_LATENCY.to_string(),
            sharing_policy: Some(SharingPolicy::FatPipe),
        }
    }

    pub fn is_loopback(&self) -> bool {
        self.id == LOOPBACK_LINK_ID
    }

    pub fn to_xml(&self) -> Element {
        let mut element = Element::new("link")
            .attr("id", &self.id)
            .attr("bandwidth", &self.bandwidth)
            .attr("latency", &self.latency);
        if let Some(policy) = self.sharing_policy {
            element = element.attr("sharing_policy", policy.as_str());
        }
        element
    }
}

/// A route between two hosts, traversing exactly one link.
#[derive(Debug, Clone)]
pub struct Route {
    pub src: String,
    pub dst: String,
    /// Identifier of the link the route traverses.
    pub link_id: String,
}

impl Route {
    pub fn new(
        src: impl Into<String>,
        dst: impl Into<String>,
        link_id: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            link_id: link_id.into(),
        }
    }

    /// A host's route to itself over the loopback link.
    pub fn is_self_route(&self) -> bool {
        self.src == self.dst
    }

    pub fn to_xml(&self) -> Element {
        Element::new("route")
            .attr("src", &self.src)
            .attr("dst", &self.dst)
            .child(Element::new("link_ctn").attr("id", &self.link_id))
    }
}

/// The single routing domain owning all hosts, links, and routes.
#[derive(Debug, Clone)]
pub struct Zone {
    pub id: String,
    pub routing: RoutingMode,
    pub hosts: Vec<Host>,
    pub links: Vec<Link>,
    pub routes: Vec<Route>,
}

impl Zone {
    pub fn new(id: impl Into<String>, routing: RoutingMode) -> Self {
        Self {
            id: id.into(),
            routing,
            hosts: Vec::new(),
            links: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Children are emitted grouped in insertion order: hosts, then links,
    /// then routes. The simulator resolves route link references against
    /// links declared earlier in the same zone.
    pub fn to_xml(&self) -> Element {
        let mut element = Element::new("zone")
            .attr("id", &self.id)
            .attr("routing", self.routing.as_str());
        for host in &self.hosts {
            element.push(host.to_xml());
        }
        for link in &self.links {
            element.push(link.to_xml());
        }
        for route in &self.routes {
            element.push(route.to_xml());
        }
        element
    }
}

/// A complete platform description.
#[derive(Debug, Clone)]
pub struct Platform {
    pub version: String,
    pub zone: Zone,
}

impl Platform {
    pub fn new(version: impl Into<String>, zone: Zone) -> Self {
        Self {
            version: version.into(),
            zone,
        }
    }

    pub fn to_xml(&self) -> Element {
        Element::new("platform")
            .attr("version", &self.version)
            .child(self.zone.to_xml())
    }

    /// Serialize the platform into the final document text.
    pub fn to_document(&self) -> String {
        self.to_xml().to_document()
    }
}
