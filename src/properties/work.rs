//! Projects and to-dos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::{FieldKind, FieldValue};
use crate::model::Value;
use super::ReferenceableProperties;

/// Progress of a to-do or other activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    Requested,
    Approved,
    Waiting,
    Activating,
    InProgress,
    Completed,
    Failed,
    Cancelled,
    Ignored,
    Other,
}

impl ActivityStatus {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "Requested" => Some(ActivityStatus::Requested),
            "Approved" => Some(ActivityStatus::Approved),
            "Waiting" => Some(ActivityStatus::Waiting),
            "Activating" => Some(ActivityStatus::Activating),
            "InProgress" => Some(ActivityStatus::InProgress),
            "Completed" => Some(ActivityStatus::Completed),
            "Failed" => Some(ActivityStatus::Failed),
            "Cancelled" => Some(ActivityStatus::Cancelled),
            "Ignored" => Some(ActivityStatus::Ignored),
            "Other" => Some(ActivityStatus::Other),
            _ => None,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, ActivityStatus::Completed | ActivityStatus::Failed | ActivityStatus::Cancelled | ActivityStatus::Ignored)
    }
}

impl FieldValue for ActivityStatus {
    const KIND: FieldKind = FieldKind::Enum;

    fn convert(value: &Value) -> Option<Self> {
        value.as_symbol().and_then(ActivityStatus::from_symbol)
    }
}

variant_properties! {
    ProjectProperties extends ReferenceableProperties as referenceable {
        identifier: String = "identifier",
        name: String = "name",
        description: String = "description",
        project_status: String = "projectStatus",
        priority: i32 = "priority",
        start_date: DateTime<Utc> = "startDate",
        planned_end_date: DateTime<Utc> = "plannedEndDate",
        project_phase: String = "projectPhase",
        project_health: String = "projectHealth",
    }
}

variant_properties! {
    ToDoProperties extends ReferenceableProperties as referenceable {
        name: String = "name",
        description: String = "description",
        creation_time: DateTime<Utc> = "creationTime",
        priority: i32 = "priority",
        due_time: DateTime<Utc> = "dueTime",
        completion_time: DateTime<Utc> = "completionTime",
        to_do_status: ActivityStatus = "toDoStatus",
        to_do_type: String = "toDoType",
    }
}
