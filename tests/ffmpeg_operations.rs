use promptforge::studio::project::{Layer, Project, RenderSpec};
use promptforge::studio::render::{build_ffmpeg_command, render_project, RenderError};
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_command_from_stored_project_json() {
    let project: Project = serde_json::from_str(
        r#"{
            "id": "p1",
            "name": "Promo",
            "createdAt": "2026-01-01T00:00:00Z",
            "modifiedAt": "2026-01-01T00:00:00Z",
            "settings": { "resolution": "1080x1920", "fps": 60, "duration": 15 },
            "layers": [
                { "type": "video", "source": "clip.mp4" },
                { "type": "image", "source": "logo.png", "duration": 4 }
            ],
            "assets": [],
            "version": 3,
            "isTemplate": false
        }"#,
    )
    .unwrap();

    let argv = build_ffmpeg_command("ffmpeg", &project.render_spec(), Path::new("promo.mp4")).unwrap();
    let joined = argv.join(" ");

    assert!(joined.starts_with("ffmpeg -y -i clip.mp4 -loop 1 -i logo.png -filter_complex "));
    assert!(joined.contains("[0:v]scale=1080:1920,setpts=PTS-STARTPTS+0/TB[v0]"));
    assert!(joined.contains("[1:v]scale=1080:1920,trim=duration=4[v1]"));
    assert!(joined.contains("[v0][v1]overlay=shortest=1[out]"));
    assert!(joined.ends_with("-map [out] -r 60 -t 15 -c:v libx264 -preset fast promo.mp4"));
}

#[test]
fn test_unknown_resolution_rejected() {
    let mut spec = RenderSpec::default();
    spec.settings.resolution = "cinema".into();
    spec.layers.push(Layer::Video { source: "a.mp4".into(), start: 0.0 });

    let err = build_ffmpeg_command("ffmpeg", &spec, Path::new("o.mp4")).unwrap_err();
    assert!(matches!(err, RenderError::UnknownResolution(r) if r == "cinema"));
}

#[tokio::test]
async fn test_missing_binary_is_io_error() {
    let dir = tempdir().unwrap();
    let mut spec = RenderSpec::default();
    spec.layers.push(Layer::Image { source: "a.png".into(), duration: 1.0 });

    let err = render_project(
        "promptforge-no-such-ffmpeg",
        &spec,
        &dir.path().join("out.mp4"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}

#[tokio::test]
async fn test_render_single_video_layer() {
    if !ffmpeg_available() {
        eprintln!("ffmpeg not found, skipping render test");
        return;
    }

    let dir = tempdir().unwrap();
    let input = dir.path().join("input.mp4");
    let output = dir.path().join("renders").join("out.mp4");

    let status = Command::new("ffmpeg")
        .args([
            "-y",
            "-f",
            "lavfi",
            "-i",
            "testsrc=duration=2:size=640x360:rate=30",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
        ])
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success(), "failed to create test input");

    let mut spec = RenderSpec::default();
    spec.settings.resolution = "480p".into();
    spec.settings.duration = 1.0;
    spec.layers.push(Layer::Video {
        source: input.to_string_lossy().into_owned(),
        start: 0.0,
    });

    let out = render_project("ffmpeg", &spec, &output).await.unwrap();
    assert!(out.output_path.exists());
    assert!(out.size_mb > 0.0);
}
