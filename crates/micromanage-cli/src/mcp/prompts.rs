//! Prompt templates for MCP server

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

/// Guidance appended to every `track` result as `agentInstruction`.
pub const AGENT_INSTRUCTION: &str = r#"Based on this progress report, analyze the current state and suggest the next unit to work on.
**Next, you must strictly follow these procedures without exception**:
1. Before starting the next unit, obtain the user's approval.
2. Once approved, implement the code and tests strictly within this unit's scope.
   - Make sure there are no build errors or test failures.
3. After completing the unit:
   - Review and evaluate the implementation, and run a self-feedback cycle.
   - Request feedback from the user.

**User Review Procedures**:
When setting a unit to "user_review":
1. Write a review request that includes:
   - A summary of the implementation derived from the group and unit goals and developer notes
   - The specific changes made and their intended behavior
   - Areas that need the user's verification
   - How the user approves (status "completed") or requests changes
2. Structure the request with clear section headings.
3. Units cannot move to "completed" from any status other than "user_review".
4. Only the user moves a unit from "user_review" to "completed" after reviewing it.

**Always secure the user's agreement before starting the next unit.**"#;

/// Get predefined prompt templates for planning and status updates
pub fn prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: "task-planning-guide",
            description: "A guide for planning development work as small groups of atomic units. Use it before calling the plan tool.",
            template: r#"# Task Planning Guide

## Purpose
- Design a structured implementation approach before any coding begins
- Make requirements and dependencies explicit
- Split the work into small groups (pull requests) of atomic units (commits) that are easy to review and integrate

## Output
- A work plan organized by groups and units
- Each group is small, functional, and independently reviewable
- Each unit is one atomic change within its group
- Dependencies between groups are minimal, ideally none

## Method
### Analysis Phase
- Analyze the architecture requirements of the task thoroughly
- Read all potentially relevant existing code and similar reference code
- Sketch the overall architecture of the solution

### Planning Approach
- Break the task down into the smallest possible groups
- Order groups logically (e.g. setup → core logic → tests)
- Define 2-4 atomic units for each group
- Prefer more groups over larger units
- Keep goals under 60 characters; put details in developer notes

### Implementation Criteria
- Only proceed after reaching full clarity and confidence
- Identify every affected part of the codebase through dependency tracing
- **The plan must be approved by the user before implementation**

## Prohibited Actions
- **Any implementation or code writing, even "example code"**"#,
        },
        PromptTemplate {
            name: "update-task-status-rule",
            description: "Rules to follow whenever a unit's status is updated",
            template: r#"**STRICT RULES - MUST BE FOLLOWED WITHOUT EXCEPTION:**

in_progress → user_review conditions:
✅ No compilation errors exist
✅ Necessary tests have been added and all pass
✅ Required documentation updates are completed

needs_refinement → in_progress conditions:
✅ Requirements are clear enough to implement
✅ All information needed for implementation is available
✅ The scope of the unit is clearly defined

user_review → in_progress conditions:
✅ The feedback makes the required changes completely clear

* → needs_refinement conditions:
✅ The unit's requirements turned out to be unclear or incomplete

* → cancelled conditions:
✅ There is a clear reason the unit is no longer needed, or another way to meet its requirements is clear
✅ The impact of cancelling on related units has been evaluated"#,
        },
    ]
}

/// Looks up a template by name.
pub fn find_template(name: &str) -> Option<PromptTemplate> {
    prompt_templates()
        .into_iter()
        .find(|template| template.name == name)
}
