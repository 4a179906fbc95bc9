// PromptForge Studio Module
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Video projects, the community template gallery and ffmpeg rendering.

pub mod presets;
pub mod project;
pub mod render;
pub mod store;

pub use project::{Layer, Project, ProjectSettings, RenderSpec};
pub use render::{build_ffmpeg_command, render_project, RenderError};
pub use store::{ProjectStore, StoreError};
