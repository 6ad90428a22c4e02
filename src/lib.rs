// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;     // loopback services
pub mod bridge;       // submit / deliver translators
pub mod component;    // service descriptors
pub mod config;       // config + validation
pub mod engine;       // reference dependency engine
pub mod errors;       // error handling
pub mod observability;
pub mod orchestrator; // engine <-> queue control loop
pub mod queue;        // in-process message queue
pub mod traits;       // seams: engine, factory, queue
pub mod types;        // wire types
