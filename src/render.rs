//! Corosync config rendering.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// The data needed to render a `corosync.conf` document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// The name of the cluster, used as the totem `cluster_name`.
    pub name: String,
    /// The addresses of the cluster's nodes.
    ///
    /// Each node's `nodeid` is its 1-based position in this sequence.
    pub nodes: Vec<IpAddr>,
}

impl ClusterConfig {
    /// Create a new instance.
    pub fn new(name: impl Into<String>, nodes: Vec<IpAddr>) -> Self {
        Self { name: name.into(), nodes }
    }

    /// Render this config as a `corosync.conf` document.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "totem {{\n version: 2\n cluster_name: {}\n secauth: off\n transport: udpu\n}}\n\n", self.name)?;

        f.write_str("nodelist {")?;
        for (idx, addr) in self.nodes.iter().enumerate() {
            write!(f, "\n  node {{\n    ring0_addr: {}\n    nodeid: {}\n  }}", addr, idx + 1)?;
        }
        f.write_str("\n}\n\n")?;

        f.write_str("quorum {\n  provider: corosync_votequorum\n}\n\n")?;
        f.write_str("logging {\n  to_logfile: yes\n  logfile: /var/log/cluster/corosync.log\n  to_syslog: yes\n}")
    }
}

/// Render a `corosync.conf` document for the given cluster name & node addresses.
pub fn render(name: &str, nodes: &[IpAddr]) -> String {
    ClusterConfig::new(name, nodes.to_vec()).render()
}
