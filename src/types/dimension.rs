use std::fmt;
use std::str::FromStr;

use super::error::ConditionError;

/// A key of the [`FetchVector`](super::FetchVector).
///
/// Each dimension has a stable wire name used by conditions in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// Zone id, e.g. `prod.us-east-3`.
    Zone,
    Hostname,
    /// Application id, e.g. `tenant:app:instance`.
    Application,
    NodeType,
    ClusterType,
    ClusterId,
    /// Platform version of the node. The only dimension relational conditions accept.
    VespaVersion,
    ConsoleUserEmail,
    Tenant,
}

impl Dimension {
    pub const ALL: [Dimension; 9] = [
        Dimension::Zone,
        Dimension::Hostname,
        Dimension::Application,
        Dimension::NodeType,
        Dimension::ClusterType,
        Dimension::ClusterId,
        Dimension::VespaVersion,
        Dimension::ConsoleUserEmail,
        Dimension::Tenant,
    ];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Dimension::Zone => "zone",
            Dimension::Hostname => "hostname",
            Dimension::Application => "application",
            Dimension::NodeType => "node-type",
            Dimension::ClusterType => "cluster-type",
            Dimension::ClusterId => "cluster-id",
            Dimension::VespaVersion => "vespa-version",
            Dimension::ConsoleUserEmail => "console-user-email",
            Dimension::Tenant => "tenant",
        }
    }
}

impl FromStr for Dimension {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.wire_name() == s)
            .ok_or_else(|| ConditionError::UnknownDimension { name: s.to_owned() })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
