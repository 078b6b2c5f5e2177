use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub finder: FinderConfig,
}

/// View-loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds; also bounds debounce granularity.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Counter screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Starting value for the counter.
    #[serde(default = "default_initial_count")]
    pub initial_count: i64,
}

/// Finder screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Name the lookup matches against, case-insensitive.
    #[serde(default = "default_target_name")]
    pub target_name: String,
    /// Quiet period in milliseconds before typed input is committed to the
    /// search.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_initial_count() -> i64 {
    10
}

fn default_target_name() -> String {
    "peter".to_string()
}

fn default_debounce_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_count: default_initial_count(),
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            target_name: default_target_name(),
            debounce_ms: default_debounce_ms(),
        }
    }
}
