//! Team Analysis MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes the two read-only analysis operations over stdio.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use team_analysis::{AnalysisConfig, AnalysisError, AnalysisService};
use tokio::io::{stdin, stdout};

#[derive(Debug, Clone)]
pub struct TeamAnalysisService {
    tool_router: ToolRouter<TeamAnalysisService>,
    analysis: Arc<AnalysisService<'static>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RosterSynergyRequest {
    #[schemars(description = "Profile id whose active party should be analysed")]
    pub profile_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EvolutionOptionsRequest {
    #[schemars(description = "Id of the creature to check")]
    pub creature_id: String,
}

fn to_mcp_error(err: AnalysisError) -> McpError {
    // Unknown profiles and creatures are the caller's problem; anything else is ours.
    let code = if err.is_client_error() { -32602 } else { -32603 };
    McpError {
        code: ErrorCode(code),
        message: Cow::from(err.to_string()),
        data: None,
    }
}

fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let body = serde_json::to_string_pretty(value).map_err(|e| McpError {
        code: ErrorCode(-32603),
        message: Cow::from(format!("Failed to encode response: {}", e)),
        data: None,
    })?;
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

#[tool_router]
impl TeamAnalysisService {
    pub fn new(analysis: AnalysisService<'static>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            analysis: Arc::new(analysis),
        }
    }

    #[tool(description = "Offense/defense type synergy for a profile's active party")]
    async fn get_roster_synergy(
        &self,
        Parameters(request): Parameters<RosterSynergyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let report = self
            .analysis
            .roster_synergy(&request.profile_id)
            .map_err(to_mcp_error)?;
        json_result(&report)
    }

    #[tool(description = "Evolution targets a creature can currently reach")]
    async fn get_evolution_options(
        &self,
        Parameters(request): Parameters<EvolutionOptionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let report = self
            .analysis
            .evolution_options(&request.creature_id)
            .map_err(to_mcp_error)?;
        json_result(&report)
    }
}

#[tool_handler]
impl ServerHandler for TeamAnalysisService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the protocol.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AnalysisConfig::resolve(None)?;
    let analysis = AnalysisService::from_config(&config)?;
    log::info!("Team analysis MCP server starting");

    let service = TeamAnalysisService::new(analysis);
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    let quit_reason = server.waiting().await?;
    log::info!("Team analysis MCP server exiting: {:?}", quit_reason);
    Ok(())
}
