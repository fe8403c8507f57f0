//! Pizza Builder Status Tool
//!
//! Runtime status and usage instructions for MCP clients.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::pizza::PizzaBuilder;

/// Usage instructions for AI assistants
pub const PIZZA_INSTRUCTIONS: &str = r#"
# Pizza Builder Instructions

Build a pizza from a fixed catalog of twelve ingredients and read back its
nutrition totals and macronutrient split.

## Workflow

1. `list_ingredients` - see every ingredient, its per-serving nutrition and whether it is on the pizza
2. `toggle_ingredient` with `name` - add or remove one ingredient
   - `set_ingredient` with `name` and `selected` when the desired state is known
3. Every change returns the updated stats:
   - `labels` - ready-to-show strings (one decimal place)
   - `totals` - calories, protein, fat, carbs
   - `macros` - protein/fat/carbohydrate grams and percentages
4. `render_macro_chart` - SVG with a pie chart and a bar chart of the macro split
5. `reset_pizza` - clear all ingredients
6. `quit` - return the final stats and stop the server

## Notes

- Ingredient names are matched exactly, e.g. "Pizza Dough", "Tomato Sauce", "Bell Peppers"
- Unknown names are rejected with `Unknown ingredient: <name>`
- Each ingredient counts once; nutrition is per serving
- Nothing is saved; the pizza is gone when the server exits
"#;

/// Runtime status of the Pizza Builder service
#[derive(Debug, Clone, Serialize)]
pub struct PizzaStatus {
    pub build: BuildInfo,

    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    pub selected_ingredients: usize,
    pub session_finished: bool,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    config: Config,
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
}

impl StatusTracker {
    /// Start tracking a server running with `config`
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Snapshot process and session information
    pub fn get_status(&self, pizza: &PizzaBuilder) -> PizzaStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        PizzaStatus {
            build: BuildInfo::describe(pizza.catalog(), &self.config),
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            selected_ingredients: pizza.selection().selected_count(),
            session_finished: pizza.is_finished(),
        }
    }
}
