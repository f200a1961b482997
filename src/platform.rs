use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use albumen_core::download::DEFAULT_FILE_STEM;
use albumen_core::platform::Platform;
use albumen_core::print::PrintDocument;

use crate::config::APP_DIR;

/// Printing and downloads on a desktop: print documents open in the default
/// browser, downloads land in the user's download folder.
pub struct DesktopPlatform {
    print_dir: PathBuf,
    download_dir: PathBuf,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        let print_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join("print");
        let download_dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            print_dir,
            download_dir,
        }
    }
}

impl Platform for DesktopPlatform {
    fn print(&self, document: &PrintDocument) -> albumen_core::Result<()> {
        let path = write_print_document(&self.print_dir, document)?;
        open_with_system(&path)?;
        info!(?path, "opened print document");
        Ok(())
    }

    fn save_download(&self, file_name: &str, bytes: &[u8]) -> albumen_core::Result<PathBuf> {
        fs::create_dir_all(&self.download_dir)?;
        let path = unique_destination(&self.download_dir, file_name);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

fn write_print_document(dir: &Path, document: &PrintDocument) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let path = dir.join(format!("print-{stamp}.html"));
    fs::write(&path, &document.html)?;
    debug!(?path, title = %document.title, "wrote print document");
    Ok(path)
}

/// `name` inside `dir`, or `stem (n).ext` for the first `n` not already taken.
fn unique_destination(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem };
    (1..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

fn open_with_system(path: &Path) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    command.arg(path).spawn().map(|_| ())
}
