// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Inbound translation: a task result becomes the output the engine records for a node.

use crate::component::ModuleType;
use crate::engine::RunState;
use crate::errors::BridgeError;
use crate::observability::messages::bridge::{ClassificationRejected, ResultDelivered};
use crate::observability::messages::StructuredLog;
use crate::traits::PipelineEngine;
use crate::types::{OutputMap, TaskResult, AGENT_OUTPUT_KEY};

/// Translate `result` for `node_name` and record it with `engine`.
///
/// The node's module type is read from `run_state` on every call:
///
/// | module type       | output handed to the engine       |
/// |-------------------|-----------------------------------|
/// | agent, or none    | `{"output": result.result}`       |
/// | component         | `result.data`, unmodified         |
/// | anything else     | `InvalidClassification`, no call  |
///
/// `engine.record_output` is called exactly once on success and never on error.
pub fn deliver<E: PipelineEngine + ?Sized>(
    engine: &E,
    run_state: &mut RunState,
    node_name: &str,
    result: TaskResult,
) -> Result<(), BridgeError> {
    let component = run_state
        .component(node_name)
        .ok_or_else(|| BridgeError::UnknownNode(node_name.to_string()))?;

    let module_type = component.resolve_module_type().map_err(|e| {
        ClassificationRejected {
            node_name,
            direction: "deliver",
            error: &e,
        }
        .log();
        e
    })?;

    let task_id = result.task_id.clone();
    let output = extract_output(module_type, result);

    let delivered = ResultDelivered {
        node_name,
        task_id: &task_id,
        module_type: module_type.as_str(),
        field_count: output.len(),
    };
    let span = delivered.span("result_delivery");
    let _guard = span.enter();
    delivered.log();

    engine.record_output(output, node_name, run_state);
    Ok(())
}

/// Select the part of `result` that is the node's output for `module_type`.
///
/// The field that is not selected is dropped here; other consumers of the task result
/// see it unchanged.
pub fn extract_output(module_type: ModuleType, result: TaskResult) -> OutputMap {
    match module_type {
        ModuleType::Agent => {
            let mut output = OutputMap::new();
            output.insert(
                AGENT_OUTPUT_KEY.to_string(),
                serde_json::Value::String(result.result),
            );
            output
        }
        ModuleType::Component => result.data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::stub::RecordingEngine;
    use crate::component::ServiceComponent;
    use serde_json::json;

    fn run_state_with(component: ServiceComponent) -> RunState {
        let mut state = RunState::new(vec![component]);
        let mut input = crate::types::InputMap::new();
        input.insert("input".into(), json!("test"));
        state.set_input("module1", input);
        state
    }

    fn task_result() -> TaskResult {
        TaskResult {
            task_id: "1".into(),
            history: vec![],
            result: "output".into(),
            data: json!({"key": "value"}).as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn test_deliver_agent_then_component() {
        let engine = RecordingEngine::default();
        let mut state =
            run_state_with(ServiceComponent::new("module1", "", Some(ModuleType::Agent)));

        deliver(&engine, &mut state, "module1", task_result()).unwrap();
        assert_eq!(
            engine.calls(),
            vec![(json!({"output": "output"}).as_object().cloned().unwrap(), "module1".to_string())]
        );

        engine.calls.lock().unwrap().clear();
        state
            .component_mut("module1")
            .unwrap()
            .set_module_type(Some(ModuleType::Component));

        deliver(&engine, &mut state, "module1", task_result()).unwrap();
        assert_eq!(
            engine.calls(),
            vec![(task_result().data, "module1".to_string())]
        );
    }

    #[test]
    fn test_deliver_without_module_type_uses_result() {
        let engine = RecordingEngine::default();
        let mut state = run_state_with(ServiceComponent::new("module1", "", None));

        deliver(&engine, &mut state, "module1", task_result()).unwrap();

        let calls = engine.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0["output"], json!("output"));
        assert_eq!(calls[0].0.len(), 1);
    }

    #[test]
    fn test_deliver_with_invalid_module_type_skips_engine() {
        let engine = RecordingEngine::default();
        let mut state = run_state_with(ServiceComponent::new("module1", "", Some(ModuleType::Agent)));
        state
            .component_mut("module1")
            .unwrap()
            .set_unchecked_module_type("INVALID");

        let err = deliver(&engine, &mut state, "module1", task_result()).unwrap_err();

        assert!(matches!(err, BridgeError::InvalidClassification { ref value, .. } if value == "INVALID"));
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn test_deliver_to_unknown_node() {
        let engine = RecordingEngine::default();
        let mut state = RunState::default();

        let err = deliver(&engine, &mut state, "ghost", task_result()).unwrap_err();

        assert!(matches!(err, BridgeError::UnknownNode(ref name) if name == "ghost"));
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn test_extract_output_component_passes_data_verbatim() {
        let mut result = task_result();
        result.data.insert("nested".into(), json!({"a": [1, 2]}));

        let output = extract_output(ModuleType::Component, result.clone());

        assert_eq!(output, result.data);
    }

    #[test]
    fn test_extract_output_agent_ignores_data() {
        let output = extract_output(ModuleType::Agent, task_result());
        assert_eq!(serde_json::Value::Object(output), json!({"output": "output"}));
    }
}
