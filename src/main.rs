// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use pipeline_bridge::backends::LoopbackService;
use pipeline_bridge::config::{load_and_validate_config, RuntimeBuilder};
use pipeline_bridge::queue::LocalMessageQueue;
use pipeline_bridge::types::{InputMap, AGENT_INPUT_KEY};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <config.yaml> <input_text>", args[0]);
        eprintln!("Example: {} configs/research-pipeline.yaml \"ocean tides\"", args[0]);
        std::process::exit(1);
    }
    let config_file = &args[1];
    let input_text = &args[2];

    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;
    let (orchestrator, components) = RuntimeBuilder::from_config(&config)?;

    let queue = Arc::new(LocalMessageQueue::new());
    let mut results = queue.register_consumer(&config.control_plane).await;
    for component in &components {
        let inbox = queue.register_consumer(component.name()).await;
        LoopbackService::new(component.clone(), config.control_plane.as_str())
            .spawn(queue.clone(), inbox);
    }

    let mut input = InputMap::new();
    input.insert(
        AGENT_INPUT_KEY.to_string(),
        serde_json::Value::String(input_text.clone()),
    );

    let task_id = uuid::Uuid::new_v4().to_string();
    let run_state = orchestrator.start(components, input);

    let start = Instant::now();
    let outputs = orchestrator
        .run(queue.as_ref(), &mut results, run_state, &task_id)
        .await?;

    println!("{}", serde_json::to_string_pretty(&outputs)?);
    eprintln!("Completed {} in {:?}", config_file, start.elapsed());

    Ok(())
}
