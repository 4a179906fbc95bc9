// PromptForge Studio - Timeline Renderer
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Turns a project timeline into a single ffmpeg invocation: one input per
// layer, each scaled to the project size, composited bottom-up with chained
// overlays.

use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{error, info};

use crate::studio::project::{Layer, RenderSpec};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Project has no layers to render")]
    EmptyProject,
    #[error("Unknown resolution '{0}'")]
    UnknownResolution(String),
    #[error("Layer {index} has an invalid source '{source_path}'")]
    InvalidSource { index: usize, source_path: String },
    #[error("FFmpeg failed: {stderr}")]
    Ffmpeg { stderr: String },
    #[error("Render I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct RenderOutput {
    pub output_path: PathBuf,
    pub size_mb: f64,
}

/// Map a resolution name (`720p`, `4k`) or `WxH` to an ffmpeg `W:H` size.
pub fn scale_size(resolution: &str) -> Result<String, RenderError> {
    let named = match resolution.trim().to_ascii_lowercase().as_str() {
        "480p" => Some("854:480"),
        "720p" => Some("1280:720"),
        "1080p" => Some("1920:1080"),
        "1440p" => Some("2560:1440"),
        "2160p" | "4k" => Some("3840:2160"),
        _ => None,
    };
    if let Some(size) = named {
        return Ok(size.to_string());
    }

    let unknown = || RenderError::UnknownResolution(resolution.to_string());
    let (w, h) = resolution.trim().split_once(['x', 'X']).ok_or_else(unknown)?;
    let w: u32 = w.parse().map_err(|_| unknown())?;
    let h: u32 = h.parse().map_err(|_| unknown())?;
    if w == 0 || h == 0 {
        return Err(unknown());
    }
    Ok(format!("{}:{}", w, h))
}

/// Build the full argv (program first) for rendering `spec` into `output`.
pub fn build_ffmpeg_command(
    ffmpeg_bin: &str,
    spec: &RenderSpec,
    output: &Path,
) -> Result<Vec<String>, RenderError> {
    if spec.layers.is_empty() {
        return Err(RenderError::EmptyProject);
    }
    let size = scale_size(&spec.settings.resolution)?;

    let mut args: Vec<String> = vec![ffmpeg_bin.to_string(), "-y".to_string()];
    let mut filters: Vec<String> = Vec::with_capacity(spec.layers.len() + 1);

    for (i, layer) in spec.layers.iter().enumerate() {
        let source = layer.source();
        // Sources starting with '-' would be parsed as ffmpeg options.
        if source.trim().is_empty() || source.starts_with('-') {
            return Err(RenderError::InvalidSource {
                index: i,
                source_path: source.to_string(),
            });
        }

        match layer {
            Layer::Video { start, .. } => {
                args.extend(["-i".to_string(), source.to_string()]);
                filters.push(format!(
                    "[{i}:v]scale={size},setpts=PTS-STARTPTS+{start}/TB[v{i}]"
                ));
            }
            Layer::Image { duration, .. } => {
                args.extend(["-loop".to_string(), "1".to_string()]);
                args.extend(["-i".to_string(), source.to_string()]);
                filters.push(format!("[{i}:v]scale={size},trim=duration={duration}[v{i}]"));
            }
        }
    }

    let count = spec.layers.len();
    if count == 1 {
        filters.push("[v0]copy[out]".to_string());
    } else {
        let mut below = "v0".to_string();
        for i in 1..count {
            let label = if i == count - 1 { "out".to_string() } else { format!("o{i}") };
            filters.push(format!("[{below}][v{i}]overlay=shortest=1[{label}]"));
            below = label;
        }
    }

    let fps = spec.settings.fps.to_string();
    let duration = spec.settings.duration.to_string();

    args.push("-filter_complex".to_string());
    args.push(filters.join(";"));
    args.extend(
        [
            "-map", "[out]",
            "-r", fps.as_str(),
            "-t", duration.as_str(),
            "-c:v", "libx264",
            "-preset", "fast",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    args.push(output.to_string_lossy().into_owned());

    Ok(args)
}

/// Run ffmpeg for `spec`, writing `output`.
pub async fn render_project(
    ffmpeg_bin: &str,
    spec: &RenderSpec,
    output: &Path,
) -> Result<RenderOutput, RenderError> {
    let argv = build_ffmpeg_command(ffmpeg_bin, spec, output)?;
    if let Some(parent) = output.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    info!(
        "[RENDER] 🎬 Rendering {} layer(s) at {} -> {:?}",
        spec.layers.len(),
        spec.settings.resolution,
        output
    );

    let result = Command::new(&argv[0]).args(&argv[1..]).output().await?;
    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        error!("[RENDER] FFmpeg exited with {}: {}", result.status, stderr);
        return Err(RenderError::Ffmpeg { stderr });
    }

    let size_mb = tokio::fs::metadata(output).await?.len() as f64 / 1_048_576.0;
    info!("[RENDER] ✅ Done: {:?} ({:.2} MB)", output, size_mb);

    Ok(RenderOutput {
        output_path: output.to_path_buf(),
        size_mb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::project::ProjectSettings;

    fn spec(layers: Vec<Layer>) -> RenderSpec {
        RenderSpec {
            settings: ProjectSettings::default(),
            layers,
        }
    }

    fn filter_of(argv: &[String]) -> &str {
        let pos = argv.iter().position(|a| a == "-filter_complex").unwrap();
        &argv[pos + 1]
    }

    #[test]
    fn test_scale_names_and_dimensions() {
        assert_eq!(scale_size("1080p").unwrap(), "1920:1080");
        assert_eq!(scale_size("4K").unwrap(), "3840:2160");
        assert_eq!(scale_size("1080x1920").unwrap(), "1080:1920");
        assert!(scale_size("huge").is_err());
        assert!(scale_size("0x10").is_err());
    }

    #[test]
    fn test_single_layer_copies_to_out() {
        let argv = build_ffmpeg_command(
            "ffmpeg",
            &spec(vec![Layer::Video { source: "a.mp4".into(), start: 0.0 }]),
            Path::new("out.mp4"),
        )
        .unwrap();
        assert_eq!(&argv[..4], ["ffmpeg", "-y", "-i", "a.mp4"]);
        assert_eq!(
            filter_of(&argv),
            "[0:v]scale=1920:1080,setpts=PTS-STARTPTS+0/TB[v0];[v0]copy[out]"
        );
        assert_eq!(argv.last().unwrap(), "out.mp4");
    }

    #[test]
    fn test_three_layers_chain_overlays() {
        let argv = build_ffmpeg_command(
            "ffmpeg",
            &spec(vec![
                Layer::Video { source: "a.mp4".into(), start: 0.0 },
                Layer::Image { source: "b.png".into(), duration: 2.5 },
                Layer::Video { source: "c.mp4".into(), start: 1.5 },
            ]),
            Path::new("out.mp4"),
        )
        .unwrap();
        assert!(argv.windows(4).any(|w| w == ["-loop", "1", "-i", "b.png"]));
        let filter = filter_of(&argv);
        assert!(filter.contains("[1:v]scale=1920:1080,trim=duration=2.5[v1]"));
        assert!(filter.contains("setpts=PTS-STARTPTS+1.5/TB[v2]"));
        assert!(filter.ends_with("[v0][v1]overlay=shortest=1[o1];[o1][v2]overlay=shortest=1[out]"));
    }

    #[test]
    fn test_rejects_empty_and_option_like_sources() {
        assert!(matches!(
            build_ffmpeg_command("ffmpeg", &spec(vec![]), Path::new("o.mp4")),
            Err(RenderError::EmptyProject)
        ));
        assert!(matches!(
            build_ffmpeg_command(
                "ffmpeg",
                &spec(vec![Layer::Image { source: "-i".into(), duration: 1.0 }]),
                Path::new("o.mp4"),
            ),
            Err(RenderError::InvalidSource { index: 0, .. })
        ));
    }
}
