//! MCP server implementation for Micromanage
//!
//! Exposes the three work plan commands as tools (`plan`, `track`, `update`)
//! plus planning prompts over a stdio transport. Every tool call returns
//! either a JSON result or an error result carrying the JSON error payload;
//! work plan failures never become protocol errors.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info, warn};
use micromanage_core::WorkPlan;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{DefinePlan, McpResult, UpdateStatus};

/// MCP server for Micromanage
#[derive(Clone)]
pub struct MicromanageMcpServer {
    workplan: Arc<Mutex<WorkPlan>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MicromanageMcpServer {
    /// Create a new Micromanage MCP server
    pub fn new(workplan: WorkPlan) -> Self {
        Self {
            workplan: Arc::new(Mutex::new(workplan)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.workplan.clone())
    }

    #[tool(
        name = "plan",
        description = "Define the implementation plan: a goal split into groups (pull requests) of atomic units (commits). Replaces any existing plan. Goals are at most 60 characters and describe WHAT will be delivered; put HOW in developerNote (at most 300 characters). Every group needs at least one unit, and every unit starts as not_started."
    )]
    async fn plan(&self, params: Parameters<DefinePlan>) -> McpResult {
        self.handlers().plan(params).await
    }

    #[tool(
        name = "track",
        description = "Show progress of the implementation plan: completed and total groups and units, each group's status, and every unit with its developer notes. At most one unit is in_progress at any time. Always follow the agentInstruction field of the response."
    )]
    async fn track(&self) -> McpResult {
        self.handlers().track().await
    }

    #[tool(
        name = "update",
        description = "Update a unit's status, goal, or developer note by groupIndex and unitIndex (zero-based). Allowed paths: not_started → needs_refinement → in_progress → user_review → completed; not_started may also go to cancelled. Completion requires user_review first, and only the user may approve completion. Starting a unit resets any other in_progress unit to not_started. Use unitIndex -1 with only developerNote (no status) to annotate the group itself."
    )]
    async fn update(&self, params: Parameters<UpdateStatus>) -> McpResult {
        self.handlers().update(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MicromanageMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "micromanage".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Micromanage tracks one implementation plan and enforces a review-gated workflow on it.

## Core Concepts
- **Plan**: the overall goal, split into ordered groups
- **Group**: a pull-request sized deliverable, split into ordered units; its status follows its units
- **Unit**: an atomic, commit-sized change with its own status

## Workflow
1. Call `plan` with the goal, groups, and units (use the `task-planning-guide` prompt first)
2. Call `track` to see progress and the next unit to work on
3. Move the unit to `needs_refinement`, clarify it, then to `in_progress`
4. When done, move it to `user_review` and ask the user to review
5. Only after the user approves, move it to `completed`

## Rules
- Only one unit is `in_progress` at a time; starting another resets the previous one to `not_started`
- A unit reaches `completed` only from `user_review`
- A unit reaches `in_progress` only from `needs_refinement`"#.to_string()),
            ..Default::default()
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(self.handlers().list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(&request)
    }
}

/// Run the MCP server with stdio transport
///
/// On SIGINT or SIGTERM, and when the client disconnects, the current plan is
/// saved one last time before returning.
pub async fn run_stdio_server(server: MicromanageMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Micromanage MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let workplan = server.workplan.clone();
    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    match workplan.lock().await.force_save() {
        Ok(()) => info!("Final snapshot saved"),
        Err(e) => warn!("Failed to save final snapshot: {e}"),
    }

    info!("MCP server shutdown complete");
    Ok(())
}
