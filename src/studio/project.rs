// PromptForge Studio - Project Documents
// Copyright (c) 2026 Xing_The_Creator | PromptForge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_resolution() -> String {
    "1080p".to_string()
}

fn default_fps() -> u32 {
    30
}

fn default_duration() -> f64 {
    10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default = "default_resolution")]
    pub resolution: String,
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            fps: default_fps(),
            duration: default_duration(),
        }
    }
}

/// One timeline layer. Index in `Project::layers` is its ffmpeg input index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Video {
        source: String,
        /// Offset on the output timeline, seconds.
        #[serde(default)]
        start: f64,
    },
    Image {
        source: String,
        #[serde(default = "default_duration")]
        duration: f64,
    },
}

impl Layer {
    pub fn source(&self) -> &str {
        match self {
            Layer::Video { source, .. } | Layer::Image { source, .. } => source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub settings: ProjectSettings,
    pub layers: Vec<Layer>,
    pub assets: Vec<Value>,
    pub version: u64,
    pub is_template: bool,
}

impl Project {
    pub fn render_spec(&self) -> RenderSpec {
        RenderSpec {
            settings: self.settings.clone(),
            layers: self.layers.clone(),
        }
    }
}

/// The subset of a project the renderer needs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderSpec {
    #[serde(default)]
    pub settings: ProjectSettings,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// Body of a create call. Settings arrive flattened at the top level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: Option<String>,
    pub resolution: Option<String>,
    pub fps: Option<u32>,
    pub duration: Option<f64>,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub assets: Vec<Value>,
    #[serde(default)]
    pub is_template: bool,
}

impl ProjectDraft {
    pub fn settings(&self) -> ProjectSettings {
        let d = ProjectSettings::default();
        ProjectSettings {
            resolution: self.resolution.clone().unwrap_or(d.resolution),
            fps: self.fps.unwrap_or(d.fps),
            duration: self.duration.unwrap_or(d.duration),
        }
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub settings: Option<ProjectSettings>,
    pub layers: Option<Vec<Layer>>,
    pub assets: Option<Vec<Value>>,
    pub is_template: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub creator_name: Option<String>,
    #[serde(default)]
    pub price: f64,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateProjectData {
    pub layers: Vec<Layer>,
    pub settings: ProjectSettings,
    pub assets: Vec<Value>,
}

/// A project published to the shared template gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub creator_id: String,
    pub creator_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub downloads: u64,
    pub rating: f64,
    pub price: f64,
    pub project_data: TemplateProjectData,
    pub preview_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub projects_count: u64,
    pub templates_created: u64,
}
