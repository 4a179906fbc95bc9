// PromptForge Studio - Export Presets
// Copyright (c) 2026 Xing_The_Creator | PromptForge

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPreset {
    pub resolution: &'static str,
    pub format: &'static str,
    pub fps: u32,
    pub bitrate: &'static str,
}

/// Platform name → delivery settings.
pub fn export_presets() -> BTreeMap<&'static str, ExportPreset> {
    BTreeMap::from([
        (
            "instagram",
            ExportPreset { resolution: "1080x1080", format: "mp4", fps: 30, bitrate: "5M" },
        ),
        (
            "youtube",
            ExportPreset { resolution: "1920x1080", format: "mp4", fps: 30, bitrate: "12M" },
        ),
        (
            "tiktok",
            ExportPreset { resolution: "1080x1920", format: "mp4", fps: 60, bitrate: "8M" },
        ),
    ])
}
