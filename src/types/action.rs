// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a queue message asks its consumer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Start a new unit of work
    NewTask,
    /// A unit of work finished; the message carries its result
    CompletedTask,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ActionType::NewTask => "NEW_TASK",
            ActionType::CompletedTask => "COMPLETED_TASK",
        };
        f.write_str(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_names() {
        assert_eq!(
            serde_json::to_value(ActionType::NewTask).unwrap(),
            serde_json::json!("NEW_TASK")
        );
        let parsed: ActionType = serde_json::from_str("\"COMPLETED_TASK\"").unwrap();
        assert_eq!(parsed, ActionType::CompletedTask);
        assert!(serde_json::from_str::<ActionType>("\"TASK_STREAM\"").is_err());
        assert_eq!(ActionType::CompletedTask.to_string(), "COMPLETED_TASK");
    }
}
