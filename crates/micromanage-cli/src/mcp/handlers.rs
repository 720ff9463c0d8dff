//! MCP tool handlers implementation

use std::sync::Arc;

use log::{debug, info};
use micromanage_core::{params as core, WorkPlan};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, GetPromptRequestParam, GetPromptResult, ListPromptsResult, Prompt,
        PromptArgument, PromptMessage, PromptMessageContent, PromptMessageRole,
    },
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{
    errors::{to_json_result, to_tool_error},
    prompts::{find_template, prompt_templates, AGENT_INSTRUCTION},
};

/// Generic MCP wrapper for core parameter types
///
/// Core parameter types only derive `JsonSchema` behind the `schema` feature;
/// this transparent wrapper gives rmcp the deserialization and schema it needs
/// without adding MCP concerns to the core crate.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type DefinePlan = McpParams<core::DefinePlan>;
pub type UpdateStatus = McpParams<core::UpdateStatus>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    workplan: Arc<Mutex<WorkPlan>>,
}

impl McpHandlers {
    pub fn new(workplan: Arc<Mutex<WorkPlan>>) -> Self {
        Self { workplan }
    }

    pub async fn plan(&self, Parameters(params): Parameters<DefinePlan>) -> McpResult {
        debug!("plan: {:?}", params);

        match self.workplan.lock().await.define_plan(params.as_ref()) {
            Ok(created) => {
                info!("{}", created.message);
                to_json_result(&created)
            }
            Err(e) => Ok(to_tool_error(&e)),
        }
    }

    pub async fn track(&self) -> McpResult {
        debug!("track");

        let report = match self.workplan.lock().await.get_progress() {
            Ok(report) => report,
            Err(e) => return Ok(to_tool_error(&e)),
        };

        let mut value = serde_json::to_value(&report).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize progress: {e}"), None)
        })?;
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "agentInstruction".to_string(),
                serde_json::Value::String(AGENT_INSTRUCTION.to_string()),
            );
        }
        to_json_result(&value)
    }

    pub async fn update(&self, Parameters(params): Parameters<UpdateStatus>) -> McpResult {
        debug!("update: {:?}", params);

        match self.workplan.lock().await.update_status(params.as_ref()) {
            Ok(outcome) => to_json_result(&outcome),
            Err(e) => Ok(to_tool_error(&e)),
        }
    }

    /// List all available prompts
    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!("list_prompts");

        let prompts = prompt_templates()
            .into_iter()
            .map(|template| {
                Prompt::new(
                    template.name,
                    Some(template.description),
                    None::<Vec<PromptArgument>>,
                )
            })
            .collect();

        ListPromptsResult {
            next_cursor: None,
            prompts,
        }
    }

    /// Get a specific prompt by name
    pub fn get_prompt(&self, request: &GetPromptRequestParam) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let template = find_template(&request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        Ok(GetPromptResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(template.template),
            }],
        })
    }
}
