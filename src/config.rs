use crate::chart::Tab;

/// Dataset used when no source is configured.
pub const DEFAULT_SOURCE: &str = "https://raw.githubusercontent.com/chriszapp/datasets/main/books.csv";

pub const SOURCE_VAR: &str = "RUSTY_SHELF_SOURCE";
pub const TAB_VAR: &str = "RUSTY_SHELF_TAB";

/// Startup configuration, read once before the window opens.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// `http(s)://` URL or local path of the books CSV.
    pub source: String,
    /// Identifier of the tab selected at startup.
    pub initial_tab: String,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            initial_tab: Tab::Bar.id().to_string(),
            window_size: [1200.0, 800.0],
        }
    }
}

impl DashboardConfig {
    /// Resolve from the process arguments and environment.
    /// The first positional argument wins over `RUSTY_SHELF_SOURCE`.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(SOURCE_VAR).ok(),
            std::env::var(TAB_VAR).ok(),
        )
    }

    fn resolve(arg: Option<String>, source_var: Option<String>, tab_var: Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            source: non_empty(arg)
                .or_else(|| non_empty(source_var))
                .unwrap_or(defaults.source),
            initial_tab: non_empty(tab_var).unwrap_or(defaults.initial_tab),
            window_size: defaults.window_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_public_dataset() {
        let cfg = DashboardConfig::resolve(None, None, None);
        assert_eq!(cfg.source, DEFAULT_SOURCE);
        assert_eq!(cfg.initial_tab, "tab-bar-chart");
    }

    #[test]
    fn argument_beats_environment() {
        let cfg = DashboardConfig::resolve(
            Some("local.csv".into()),
            Some("env.csv".into()),
            None,
        );
        assert_eq!(cfg.source, "local.csv");

        let cfg = DashboardConfig::resolve(None, Some("env.csv".into()), Some("tab-histogram".into()));
        assert_eq!(cfg.source, "env.csv");
        assert_eq!(cfg.initial_tab, "tab-histogram");
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = DashboardConfig::resolve(Some("  ".into()), None, Some(String::new()));
        assert_eq!(cfg, DashboardConfig::default());
    }
}
