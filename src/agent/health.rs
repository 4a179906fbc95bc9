// PromptForge Service Health
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Readiness checks behind `GET /health`: can the project store be written,
// does the render binary answer, how much memory is in use.

use serde::Serialize;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use sysinfo::{System, SystemExt};
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::warn;

const MARKER_FILE: &str = ".promptforge_health";

#[derive(Debug, Clone, Serialize)]
pub struct ServiceChecks {
    /// `None` for a store that never touches disk.
    pub store_writable: Option<bool>,
    pub ffmpeg_available: bool,
    pub memory_used_percent: Option<f64>,
}

impl ServiceChecks {
    /// Only an unwritable store degrades the service; renders are optional.
    pub fn is_healthy(&self) -> bool {
        self.store_writable != Some(false)
    }
}

pub struct ServiceHealth {
    started: Instant,
    ffmpeg_bin: String,
    ffmpeg: OnceCell<bool>,
}

impl ServiceHealth {
    pub fn new(ffmpeg_bin: impl Into<String>) -> Self {
        Self {
            started: Instant::now(),
            ffmpeg_bin: ffmpeg_bin.into(),
            ffmpeg: OnceCell::new(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub async fn check(&self, store_path: Option<&Path>) -> ServiceChecks {
        ServiceChecks {
            store_writable: match store_path {
                Some(path) => Some(store_dir_writable(path).await),
                None => None,
            },
            ffmpeg_available: self.ffmpeg_available().await,
            memory_used_percent: memory_used_percent(),
        }
    }

    /// Checked once per process.
    pub async fn ffmpeg_available(&self) -> bool {
        let bin = &self.ffmpeg_bin;
        *self
            .ffmpeg
            .get_or_init(|| async move {
                let status = Command::new(bin)
                    .arg("-version")
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .await;
                matches!(status, Ok(s) if s.success())
            })
            .await
    }
}

async fn store_dir_writable(store_path: &Path) -> bool {
    let Some(dir) = store_path.parent() else {
        return false;
    };
    let marker = dir.join(MARKER_FILE);
    let result: std::io::Result<()> = async {
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&marker, b"ok").await?;
        tokio::fs::remove_file(&marker).await
    }
    .await;

    if let Err(e) = &result {
        warn!("[HEALTH] Store directory {:?} is not writable: {}", dir, e);
    }
    result.is_ok()
}

fn memory_used_percent() -> Option<f64> {
    let mut sys = System::new();
    sys.refresh_memory();
    let total = sys.total_memory();
    (total > 0).then(|| sys.used_memory() as f64 / total as f64 * 100.0)
}
