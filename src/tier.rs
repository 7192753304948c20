//! Memory tiers measured by the benchmarks.

use std::fmt;

/// Memory-access category under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Local,
    Remote,
    Cxl,
    CxlRemote,
}

impl Tier {
    /// Tiers covered by the write-bandwidth experiment.
    pub const BANDWIDTH: [Tier; 3] = [Tier::Local, Tier::Remote, Tier::Cxl];

    /// Tiers covered by the atomic-operation experiment.
    pub const ATOMIC: [Tier; 4] = [Tier::Local, Tier::Remote, Tier::Cxl, Tier::CxlRemote];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Local => "Local Node",
            Tier::Remote => "Remote Node",
            Tier::Cxl => "CXL",
            Tier::CxlRemote => "CXL Remote",
        }
    }

    /// Conventional result-file name for the write-bandwidth run.
    pub fn bandwidth_file(self) -> &'static str {
        match self {
            Tier::Local => "local_write_bandwidth.csv",
            Tier::Remote => "remote_write_bandwidth.csv",
            Tier::Cxl => "cxl_write_bandwidth.csv",
            Tier::CxlRemote => "cxl_remote_write_bandwidth.csv",
        }
    }

    /// Conventional result-file name for the atomic-operation run.
    pub fn atomic_file(self) -> &'static str {
        match self {
            Tier::Local => "local_atomic.csv",
            Tier::Remote => "remote_atomic.csv",
            Tier::Cxl => "cxl_atomic.csv",
            Tier::CxlRemote => "cxl_remote_atomic.csv",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Tier::Local.label(), "Local Node");
        assert_eq!(Tier::CxlRemote.to_string(), "CXL Remote");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Tier::Cxl.bandwidth_file(), "cxl_write_bandwidth.csv");
        assert_eq!(Tier::Remote.atomic_file(), "remote_atomic.csv");
    }

    #[test]
    fn test_experiment_tier_sets() {
        assert_eq!(Tier::BANDWIDTH.len(), 3);
        assert_eq!(Tier::ATOMIC.len(), 4);
        assert!(!Tier::BANDWIDTH.contains(&Tier::CxlRemote));
    }
}
