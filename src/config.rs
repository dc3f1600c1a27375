//! Runtime knobs for reconstruction.
//!
//! Defaults reproduce the plain sequential behaviour.  The binary layers the
//! environment (`SHARE_CONSENSUS_*`) and then command-line flags on top.

use std::env;

/// Environment variable enabling parallel evaluation when set to `1`/`true`.
pub const ENV_PARALLEL: &str = "SHARE_CONSENSUS_PARALLEL";
/// Environment variable holding the maximum number of combinations to try.
pub const ENV_MAX_COMBINATIONS: &str = "SHARE_CONSENSUS_MAX_COMBINATIONS";

/// Options controlling how the consensus vote is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryConfig {
    /// Evaluate combinations on the rayon pool.  The outcome is identical to
    /// the sequential run; only wall-clock time changes.  Ignored on `wasm32`.
    pub parallel: bool,
    /// Refuse inputs whose `C(n, k)` exceeds this many combinations.
    pub max_combinations: Option<u128>,
}

impl RecoveryConfig {
    /// Returns the defaults overridden by any `SHARE_CONSENSUS_*` variables.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            env::var(ENV_PARALLEL).ok().as_deref(),
            env::var(ENV_MAX_COMBINATIONS).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, parallel: Option<&str>, max: Option<&str>) -> Self {
        if let Some(flag) = parallel.and_then(parse_flag) {
            self.parallel = flag;
        }
        if let Some(limit) = max.and_then(|v| v.trim().parse::<u128>().ok()) {
            self.max_combinations = Some(limit);
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sequential_and_unbounded() {
        let cfg = RecoveryConfig::default();
        assert!(!cfg.parallel);
        assert_eq!(cfg.max_combinations, None);
    }

    #[test]
    fn test_overrides() {
        let cfg = RecoveryConfig::default().with_overrides(Some("TRUE"), Some(" 500 "));
        assert!(cfg.parallel);
        assert_eq!(cfg.max_combinations, Some(500));

        let cfg = RecoveryConfig::default().with_overrides(Some("maybe"), Some("-1"));
        assert_eq!(cfg, RecoveryConfig::default());
    }
}
