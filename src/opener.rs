//! Opening exported files with the host's default application.
//!
//! [`FileOpener`] is the seam the recorder calls after writing its exports.
//! [`PlatformOpener`] picks the native mechanism once at startup from the OS
//! identification string; [`NoopOpener`] skips opening entirely.

use anyhow::{Result, bail};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Hands a file to whatever the desktop uses to open it.
pub trait FileOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// One variant per supported desktop family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformOpener {
    /// `cmd /C start "" <path>`
    Windows,
    /// `open <path>`
    MacOs,
    /// `xdg-open <path>`, used for every other OS.
    Xdg,
}

impl PlatformOpener {
    /// Selects the opener for the OS this binary was built for.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Selects the opener for an OS identification string such as
    /// `"windows"`, `"macos"` or `"linux"`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => PlatformOpener::Windows,
            "macos" => PlatformOpener::MacOs,
            _ => PlatformOpener::Xdg,
        }
    }

    /// Builds the command that opens `path`, without running it.
    pub fn command(&self, path: &Path) -> Command {
        match self {
            PlatformOpener::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", "start", ""]).arg(path);
                cmd
            }
            PlatformOpener::MacOs => {
                let mut cmd = Command::new("open");
                cmd.arg(path);
                cmd
            }
            PlatformOpener::Xdg => {
                let mut cmd = Command::new("xdg-open");
                cmd.arg(path);
                cmd
            }
        }
    }
}

impl FileOpener for PlatformOpener {
    fn open(&self, path: &Path) -> Result<()> {
        let mut cmd = self.command(path);
        debug!(opener = ?self, path = %path.display(), "Opening file");

        let status = cmd.status()?;
        if !status.success() {
            bail!("{:?} exited with {} for {}", self, status, path.display());
        }
        Ok(())
    }
}

/// Leaves exported files alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOpener;

impl FileOpener for NoopOpener {
    fn open(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "File opening disabled");
        Ok(())
    }
}
