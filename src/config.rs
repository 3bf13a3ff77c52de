//! Ambient runtime configuration: logging setup.
//!
//! This crate itself is policy-free about *how* it is configured (there is no server, no CLI, no
//! config file format to own) but it still owns how its own tracing output is wired up.

use tracing_subscriber::EnvFilter;

/// Logging configuration for a process embedding this crate.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Passed to [`tracing_subscriber::EnvFilter`]; e.g. `"radixroute=debug,warn"`.
    pub log_filter: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            log_filter: "radixroute=info,warn".to_string(),
        }
    }
}

impl RouterConfig {
    /// Install a global `tracing` subscriber using this configuration.
    ///
    /// Intended for binaries and integration tests that embed this crate; library code never
    /// calls this itself. Safe to call more than once — later calls are no-ops.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_scopes_to_crate_name() {
        let config = RouterConfig::default();
        assert!(config.log_filter.contains("radixroute"));
    }
}
