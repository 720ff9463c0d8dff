//! Persisted form of the aggregate state.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Workplan;

/// Version of the snapshot layout written by this crate.
pub const SCHEMA_VERSION: &str = "2.0.0";

/// Either no plan, or the one active plan.
///
/// Serialized as the string `"empty"` or as the plan object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PlanStateRepr", into = "PlanStateRepr")]
pub enum PlanState {
    /// No plan has been defined
    #[default]
    Empty,

    /// The active plan
    Active(Box<Workplan>),
}

impl PlanState {
    /// Whether no plan is defined.
    pub fn is_empty(&self) -> bool {
        matches!(self, PlanState::Empty)
    }

    /// The active plan, if any.
    pub fn plan(&self) -> Option<&Workplan> {
        match self {
            PlanState::Empty => None,
            PlanState::Active(plan) => Some(plan),
        }
    }

    /// Mutable access to the active plan, if any.
    pub fn plan_mut(&mut self) -> Option<&mut Workplan> {
        match self {
            PlanState::Empty => None,
            PlanState::Active(plan) => Some(plan),
        }
    }
}

impl From<Workplan> for PlanState {
    fn from(plan: Workplan) -> Self {
        PlanState::Active(Box::new(plan))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PlanStateRepr {
    Marker(EmptyMarker),
    Plan(Box<Workplan>),
}

#[derive(Serialize, Deserialize)]
enum EmptyMarker {
    #[serde(rename = "empty", alias = "noTicket")]
    Empty,
}

impl From<PlanStateRepr> for PlanState {
    fn from(repr: PlanStateRepr) -> Self {
        match repr {
            PlanStateRepr::Marker(EmptyMarker::Empty) => PlanState::Empty,
            PlanStateRepr::Plan(plan) => PlanState::Active(plan),
        }
    }
}

impl From<PlanState> for PlanStateRepr {
    fn from(state: PlanState) -> Self {
        match state {
            PlanState::Empty => PlanStateRepr::Marker(EmptyMarker::Empty),
            PlanState::Active(plan) => PlanStateRepr::Plan(plan),
        }
    }
}

/// Full durable record of the aggregate: the plan plus metadata.
///
/// Older files stored the plan under `currentTicket` and the version under
/// `version`; both names are still read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The plan, or the empty marker
    #[serde(default, alias = "currentTicket")]
    pub plan: PlanState,

    /// When the aggregate was last modified (UTC)
    #[serde(default = "Timestamp::now")]
    pub last_updated: Timestamp,

    /// Layout version of the stored record; empty when the file had none
    #[serde(default, alias = "version")]
    pub schema_version: String,
}

impl Snapshot {
    /// Snapshot of the given state stamped with the current schema version.
    pub fn new(plan: PlanState, last_updated: Timestamp) -> Self {
        Self {
            plan,
            last_updated,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(PlanState::Empty, Timestamp::now())
    }
}
