//! Pizza Builder MCP Server Implementation
//!
//! Routes MCP tool calls onto the single pizza session.

use std::sync::{Arc, Mutex};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Notify;

use crate::config::Config;
use crate::pizza::PizzaBuilder;
use crate::tools::charts;
use crate::tools::pizza;
use crate::tools::status::StatusTracker;

/// Pizza Builder MCP Service
#[derive(Clone)]
pub struct PizzaService {
    pizza: Arc<Mutex<PizzaBuilder>>,
    status_tracker: Arc<StatusTracker>,
    config: Config,
    /// Fired by the quit tool; main stops serving when it triggers
    shutdown: Arc<Notify>,
    tool_router: ToolRouter<PizzaService>,
}

impl PizzaService {
    pub fn new(config: Config) -> Self {
        Self {
            pizza: Arc::new(Mutex::new(PizzaBuilder::default())),
            status_tracker: Arc::new(StatusTracker::new(config)),
            config,
            shutdown: Arc::new(Notify::new()),
            tool_router: Self::tool_router(),
        }
    }

    pub fn shutdown_signal(&self) -> Arc<Notify> {
        Arc::clone(&self.shutdown)
    }

    fn with_pizza<T, F>(&self, f: F) -> Result<T, McpError>
    where
        F: FnOnce(&mut PizzaBuilder) -> Result<T, String>,
    {
        let mut guard = self
            .pizza
            .lock()
            .map_err(|e| McpError::internal_error(format!("Pizza session unavailable: {}", e), None))?;
        f(&mut *guard).map_err(|e| McpError::internal_error(e, None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientNameParams {
    /// Exact ingredient name, e.g. "Pizza Dough"
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetIngredientParams {
    /// Exact ingredient name, e.g. "Mozzarella"
    pub name: String,
    /// true to put it on the pizza, false to take it off
    pub selected: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RenderChartParams {
    /// Canvas width in pixels (default 640)
    pub width: Option<u32>,
    /// Canvas height in pixels (default 320)
    pub height: Option<u32>,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl PizzaService {
    #[tool(description = "Get the current status of the Pizza Builder service including build info, process information and selection size")]
    fn pizza_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.with_pizza(|p| Ok(self.status_tracker.get_status(p)))?;
        json_result(&status)
    }

    #[tool(description = "Get instructions for building a pizza. Call this when starting a session or when unsure how to use the pizza tools.")]
    fn pizza_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PIZZA_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PIZZA_INSTRUCTIONS)]))
    }

    #[tool(description = "List all catalog ingredients with per-serving nutrition and whether each is on the pizza")]
    fn list_ingredients(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_pizza(|p| Ok(pizza::list_ingredients(p)))?;
        json_result(&result)
    }

    #[tool(description = "Get nutrition and selection state for one ingredient")]
    fn get_ingredient(&self, Parameters(p): Parameters<IngredientNameParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_pizza(|pz| pizza::get_ingredient(pz, &p.name))?;
        json_result(&result)
    }

    #[tool(description = "Add an ingredient to the pizza, or remove it if already present. Returns the updated nutrition stats.")]
    fn toggle_ingredient(&self, Parameters(p): Parameters<IngredientNameParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_pizza(|pz| pizza::toggle_ingredient(pz, &p.name))?;
        json_result(&result)
    }

    #[tool(description = "Explicitly put an ingredient on (selected=true) or off (selected=false) the pizza. Returns the updated nutrition stats.")]
    fn set_ingredient(&self, Parameters(p): Parameters<SetIngredientParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_pizza(|pz| pizza::set_ingredient(pz, &p.name, p.selected))?;
        json_result(&result)
    }

    #[tool(description = "Remove every ingredient from the pizza")]
    fn reset_pizza(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_pizza(pizza::reset_pizza)?;
        json_result(&result)
    }

    #[tool(description = "Get total calories, protein, fat and carbohydrates plus the macronutrient split for the current pizza")]
    fn get_nutrition(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_pizza(|pz| pizza::get_nutrition(pz))?;
        json_result(&result)
    }

    #[tool(description = "Render the macronutrient distribution (pie chart and bar chart) of the current pizza as an SVG document")]
    fn render_macro_chart(&self, Parameters(p): Parameters<RenderChartParams>) -> Result<CallToolResult, McpError> {
        let width = p.width.unwrap_or(self.config.chart_width);
        let height = p.height.unwrap_or(self.config.chart_height);
        let svg = self.with_pizza(|pz| charts::macro_chart_svg(pz, width, height))?;
        Ok(CallToolResult::success(vec![Content::text(svg)]))
    }

    #[tool(description = "Return the final nutrition stats and shut the Pizza Builder server down")]
    fn quit(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_pizza(pizza::quit)?;
        self.shutdown.notify_one();
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for PizzaService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pizza-builder".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Pizza Builder".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Pizza Builder - pick pizza ingredients and see nutrition totals. \
                 Call pizza_instructions first. \
                 Ingredients: list_ingredients/get_ingredient, toggle_ingredient/set_ingredient, reset_pizza. \
                 Stats: get_nutrition, render_macro_chart (SVG). \
                 Session: pizza_status, quit."
                    .into(),
            ),
        }
    }
}
