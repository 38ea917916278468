//! Runtime configuration.
//!
//! Defaults suit the demo; each knob can be overridden from the
//! environment with a `CG_*` variable.

/// Configuration for the city runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Seed the demo requests and events at startup.
    pub seed_demo_data: bool,
    /// How many records the urgent-first listing shows.
    pub top_urgent_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            top_urgent_limit: 5,
        }
    }
}

impl RuntimeConfig {
    /// Loads the default configuration with environment overrides:
    /// `CG_SEED_DEMO` (true/false) and `CG_TOP_URGENT` (count).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(flag) = std::env::var("CG_SEED_DEMO") {
            if let Ok(value) = flag.parse() {
                config.seed_demo_data = value;
            }
        }
        if let Ok(limit) = std::env::var("CG_TOP_URGENT") {
            if let Ok(value) = limit.parse() {
                config.top_urgent_limit = value;
            }
        }

        config
    }
}
