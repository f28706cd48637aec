use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{PlotError, PlotResult},
    render::cpu::PlotFrame,
};

/// Where a finished plot ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Written to the requested path.
    File(PathBuf),
    /// Written to a temporary file and handed to the system image viewer.
    Preview(PathBuf),
}

/// Write `frame` to `path`, or preview it when no path is given.
pub fn write_output(frame: &PlotFrame, path: Option<&Path>) -> PlotResult<OutputTarget> {
    match path {
        Some(path) => {
            save_frame(frame, path)?;
            Ok(OutputTarget::File(path.to_path_buf()))
        }
        None => show_frame(frame).map(OutputTarget::Preview),
    }
}

/// Create missing parent directories of `path`.
pub fn ensure_parent_dir(path: &Path) -> PlotResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PlotError::io(parent, e))?;
    }
    Ok(())
}

/// Encode `frame` to `path`. The format follows the file extension.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn save_frame(frame: &PlotFrame, path: &Path) -> PlotResult<()> {
    let format = image::ImageFormat::from_path(path)?;
    ensure_parent_dir(path)?;
    tracing::info!(path = %path.display(), "saving plot");
    frame.to_rgb_image()?.save_with_format(path, format)?;
    Ok(())
}

/// Write `frame` as a PNG in the temp directory and open it in the platform viewer.
pub fn show_frame(frame: &PlotFrame) -> PlotResult<PathBuf> {
    let path = std::env::temp_dir().join(format!("wireplot-{}.png", std::process::id()));
    save_frame(frame, &path)?;

    // The launchers hand the file to the desktop and exit, so waiting here is short.
    let mut cmd = viewer_command(&path);
    tracing::info!(path = %path.display(), "opening preview");
    let status = cmd.status().map_err(|e| PlotError::io(&path, e))?;
    if !status.success() {
        let program = cmd.get_program().to_string_lossy().into_owned();
        return Err(PlotError::io(
            &path,
            std::io::Error::other(format!("viewer '{program}' exited with {status}")),
        ));
    }
    Ok(path)
}

fn viewer_command(path: &Path) -> std::process::Command {
    if cfg!(target_os = "macos") {
        let mut cmd = std::process::Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(windows) {
        let mut cmd = std::process::Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = std::process::Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
