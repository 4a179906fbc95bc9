// PromptForge Library Root
// Copyright (c) 2026 Xing_The_Creator | PromptForge

pub mod agent;
pub mod config;
pub mod engine;
pub mod error;
pub mod server;
pub mod state;
pub mod studio;
pub mod studio_api;
