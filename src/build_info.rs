//! Build information module
//!
//! Version and build time, together with what the server will serve: the
//! catalog it picks from and the default chart canvas.

use serde::Serialize;

use crate::config::Config;
use crate::pizza::Catalog;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// UTC build time, stamped by build.rs
pub const BUILT_AT: &str = env!("PIZZA_BUILT_AT");

/// Description of a running server, shown in the banner and by `pizza_status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub built_at: &'static str,
    pub catalog_size: usize,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl BuildInfo {
    /// Describe a server running with `catalog` and `config`
    pub fn describe(catalog: &Catalog, config: &Config) -> Self {
        Self {
            version: VERSION,
            built_at: BUILT_AT,
            catalog_size: catalog.len(),
            chart_width: config.chart_width,
            chart_height: config.chart_height,
        }
    }

    /// Banner text, one entry per line
    pub fn banner_lines(&self) -> Vec<String> {
        let rule = "=".repeat(47);
        vec![
            rule.clone(),
            format!("  Pizza Builder v{} (built {})", self.version, self.built_at),
            format!("  Catalog: {} ingredients", self.catalog_size),
            format!("  Chart canvas: {}x{} px", self.chart_width, self.chart_height),
            rule,
        ]
    }
}

/// Print the startup banner to stderr; stdout belongs to the MCP transport
pub fn print_startup_banner(info: &BuildInfo) {
    for line in info.banner_lines() {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_reports_catalog_and_chart() {
        let config = Config {
            chart_width: 800,
            chart_height: 400,
        };
        let info = BuildInfo::describe(&Catalog::standard(), &config);
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.catalog_size, 12);
        assert_eq!((info.chart_width, info.chart_height), (800, 400));
    }

    #[test]
    fn test_banner_lines() {
        let info = BuildInfo::describe(&Catalog::standard(), &Config::default());
        let lines = info.banner_lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains(VERSION));
        assert_eq!(lines[2], "  Catalog: 12 ingredients");
        assert_eq!(lines[3], "  Chart canvas: 640x320 px");
    }
}
