use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, Command, Stdio};

use log::{debug, info};
use plotters::prelude::*;

use crate::animation::Animation;
use crate::error::Error;
use crate::render::{draw_frame, render_error, CANVAS_SIZE};
use crate::Result;

pub const FILE_STEM: &str = "nbody_animation";
pub const TITLE: &str = "n-body simulation";
pub const COMMENT: &str = "Made with stdpar";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Mp4,
    Gif,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Mp4 => "mp4",
            ExportFormat::Gif => "gif",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.{}", FILE_STEM, self.extension())
    }
}

/// Saves `animation` as `nbody_animation.<ext>` in `dir`, replacing any
/// existing file, and returns the written path.
pub fn save_animation(
    animation: &Animation,
    format: ExportFormat,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(format.file_name());
    info!("Saving animation to {} ...", path.display());

    match format {
        ExportFormat::Mp4 => save_mp4(animation, &path)?,
        ExportFormat::Gif => save_gif(animation, &path)?,
    }
    Ok(path)
}

fn save_gif(animation: &Animation, path: &Path) -> Result<()> {
    let root = BitMapBackend::gif(path, CANVAS_SIZE, animation.interval_ms)
        .map_err(render_error)?
        .into_drawing_area();

    for frame in animation.playback() {
        root.fill(&WHITE).map_err(render_error)?;
        draw_frame(&root, &animation.view, frame)?;
        root.present().map_err(render_error)?;
    }
    Ok(())
}

fn save_mp4(animation: &Animation, path: &Path) -> Result<()> {
    let (width, height) = CANVAS_SIZE;
    let size_arg = format!("{}x{}", width, height);
    let fps_arg = animation.fps().to_string();
    let title_arg = format!("title={}", TITLE);
    let comment_arg = format!("comment={}", COMMENT);

    let mut cmd = Command::new("ffmpeg");
    cmd.args([
        "-y",
        "-hide_banner",
        "-loglevel", "error",
        "-nostats",
        "-f", "rawvideo",
        "-pix_fmt", "rgb24",
        "-s", &size_arg,
        "-r", &fps_arg,
        "-i", "pipe:0",
        "-an",
        "-c:v", "libx264",
        "-pix_fmt", "yuv420p",
        "-metadata", &title_arg,
        "-metadata", &comment_arg,
    ])
    .arg(path)
    .stdin(Stdio::piped())
    .stdout(Stdio::null());
    debug!("{:?}", cmd);

    let mut child = cmd.spawn().map_err(Error::EncoderSpawnError)?;
    let mut stdin = child.stdin.take().ok_or_else(|| {
        Error::EncoderPipeError(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "ffmpeg stdin unavailable",
        ))
    })?;

    let fed = feed_frames(animation, &mut stdin);
    drop(stdin);
    let status = child.wait().map_err(Error::EncoderPipeError)?;
    fed?;

    if !status.success() {
        return Err(Error::EncoderFailed(status));
    }
    Ok(())
}

/// Rasterizes every frame as packed RGB and writes it to ffmpeg.
fn feed_frames(animation: &Animation, stdin: &mut ChildStdin) -> Result<()> {
    let (width, height) = CANVAS_SIZE;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    for frame in &animation.frames {
        {
            let root = BitMapBackend::with_buffer(&mut buffer, CANVAS_SIZE).into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;
            draw_frame(&root, &animation.view, frame)?;
            root.present().map_err(render_error)?;
        }
        stdin.write_all(&buffer).map_err(Error::EncoderPipeError)?;
    }
    Ok(())
}
