// PromptForge Studio - Project Store
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// In-memory project and template collections, snapshotted to a JSON file
// after every mutation and reloaded at startup. A mutation is applied to a
// copy of the snapshot and only becomes visible once the write succeeded.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::studio::project::{
    CommunityTemplate, Project, ProjectDraft, ProjectPatch, TemplateDraft, TemplateProjectData,
    UserStats,
};

pub const DEFAULT_TEMPLATE_LIMIT: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Project '{project_id}' not found for user '{user_id}'")]
    ProjectNotFound { user_id: String, project_id: String },
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store snapshot is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(default)]
    stats: UserStats,
    #[serde(default)]
    projects: BTreeMap<String, Project>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    users: BTreeMap<String, UserRecord>,
    #[serde(default)]
    templates: Vec<CommunityTemplate>,
    /// Last issued timestamp; keeps ordering strict under bursts.
    #[serde(default)]
    last_stamp: Option<DateTime<Utc>>,
}

impl Snapshot {
    fn next_stamp(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = self.last_stamp {
            if now <= last {
                now = last + Duration::microseconds(1);
            }
        }
        self.last_stamp = Some(now);
        now
    }
}

pub struct ProjectStore {
    inner: Mutex<Snapshot>,
    path: Option<PathBuf>,
}

impl ProjectStore {
    /// Volatile store; nothing touches disk.
    pub fn in_memory() -> Self {
        Self {
            inner: Mutex::new(Snapshot::default()),
            path: None,
        }
    }

    /// Open (or start) a store backed by `path`. Runs once at startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let snapshot = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let snap: Snapshot = serde_json::from_str(&data)?;
            info!(
                "[STUDIO] 📂 Loaded store {:?} ({} users, {} templates)",
                path,
                snap.users.len(),
                snap.templates.len()
            );
            snap
        } else {
            Snapshot::default()
        };

        Ok(Self {
            inner: Mutex::new(snapshot),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write `snapshot` through a temp file and rename. The caller holds the
    /// lock, so writes land on disk in the order they were applied.
    async fn persist(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = serde_json::to_vec_pretty(snapshot)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    pub async fn create_project(
        &self,
        user_id: &str,
        draft: ProjectDraft,
    ) -> Result<String, StoreError> {
        let mut snap = self.inner.lock().await;
        let mut next = snap.clone();
        let now = next.next_stamp();
        let id = Uuid::new_v4().to_string();

        let project = Project {
            id: id.clone(),
            name: draft
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Untitled Project".to_string()),
            created_at: now,
            modified_at: now,
            settings: draft.settings(),
            layers: draft.layers,
            assets: draft.assets,
            version: 1,
            is_template: draft.is_template,
        };

        let user = next.users.entry(user_id.to_string()).or_default();
        user.projects.insert(id.clone(), project);
        user.stats.projects_count += 1;

        self.persist(&next).await?;
        *snap = next;
        info!("[STUDIO] Created project {} for user {}", id, user_id);
        Ok(id)
    }

    pub async fn get_project(&self, user_id: &str, project_id: &str) -> Result<Project, StoreError> {
        let snap = self.inner.lock().await;
        snap.users
            .get(user_id)
            .and_then(|u| u.projects.get(project_id))
            .cloned()
            .ok_or_else(|| not_found(user_id, project_id))
    }

    /// All of a user's projects, most recently modified first.
    pub async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, StoreError> {
        let snap = self.inner.lock().await;
        let mut projects: Vec<Project> = snap
            .users
            .get(user_id)
            .map(|u| u.projects.values().cloned().collect())
            .unwrap_or_default();
        projects.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        Ok(projects)
    }

    pub async fn update_project(
        &self,
        user_id: &str,
        project_id: &str,
        patch: ProjectPatch,
    ) -> Result<Project, StoreError> {
        let mut snap = self.inner.lock().await;
        let mut next = snap.clone();
        let now = next.next_stamp();

        let project = next
            .users
            .get_mut(user_id)
            .and_then(|u| u.projects.get_mut(project_id))
            .ok_or_else(|| not_found(user_id, project_id))?;

        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(settings) = patch.settings {
            project.settings = settings;
        }
        if let Some(layers) = patch.layers {
            project.layers = layers;
        }
        if let Some(assets) = patch.assets {
            project.assets = assets;
        }
        if let Some(is_template) = patch.is_template {
            project.is_template = is_template;
        }
        project.modified_at = now;
        project.version += 1;

        let updated = project.clone();
        self.persist(&next).await?;
        *snap = next;
        Ok(updated)
    }

    /// Publish a copy of a project's timeline to the template gallery.
    pub async fn save_as_template(
        &self,
        user_id: &str,
        project_id: &str,
        draft: TemplateDraft,
    ) -> Result<String, StoreError> {
        let mut snap = self.inner.lock().await;
        let mut next = snap.clone();
        let now = next.next_stamp();

        let user = next
            .users
            .get_mut(user_id)
            .ok_or_else(|| not_found(user_id, project_id))?;
        let project = user
            .projects
            .get(project_id)
            .ok_or_else(|| not_found(user_id, project_id))?;

        let id = Uuid::new_v4().to_string();
        let template = CommunityTemplate {
            id: id.clone(),
            name: draft.name.unwrap_or_else(|| project.name.clone()),
            description: draft.description.unwrap_or_default(),
            category: draft.category.unwrap_or_else(|| "general".to_string()),
            creator_id: user_id.to_string(),
            creator_name: draft.creator_name,
            created_at: now,
            downloads: 0,
            rating: 0.0,
            price: draft.price,
            project_data: TemplateProjectData {
                layers: project.layers.clone(),
                settings: project.settings.clone(),
                assets: project.assets.clone(),
            },
            preview_url: draft.preview_url,
            tags: draft.tags,
        };
        user.stats.templates_created += 1;
        next.templates.push(template);

        self.persist(&next).await?;
        *snap = next;
        info!("[STUDIO] Published template {} from project {}", id, project_id);
        Ok(id)
    }

    /// Newest templates first, optionally filtered by category.
    pub async fn list_templates(
        &self,
        category: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CommunityTemplate>, StoreError> {
        let snap = self.inner.lock().await;
        let mut templates: Vec<CommunityTemplate> = snap
            .templates
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        templates.truncate(limit);
        Ok(templates)
    }

    pub async fn user_stats(&self, user_id: &str) -> Result<UserStats, StoreError> {
        let snap = self.inner.lock().await;
        Ok(snap.users.get(user_id).map(|u| u.stats).unwrap_or_default())
    }
}

fn not_found(user_id: &str, project_id: &str) -> StoreError {
    warn!("[STUDIO] Project {} not found for {}", project_id, user_id);
    StoreError::ProjectNotFound {
        user_id: user_id.to_string(),
        project_id: project_id.to_string(),
    }
}
