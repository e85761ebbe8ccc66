use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command as ProcessCommand, Stdio};
use std::thread;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::video_id::VideoId;

pub(crate) const OPENER_ENV: &str = "YTDECK_OPENER";

/// Where a validated video ends up once the controller decides to play it.
pub(crate) trait Playback {
    fn load(&mut self, id: &VideoId, embed_url: &str) -> Result<()>;
}

/// Produces the display title recorded alongside a played video.
pub(crate) trait TitleSource {
    fn fetch_title(&self, id: &VideoId) -> Result<String>;
}

/// Title lookup without an API key: a fixed label built from the id.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PlaceholderTitles;

impl TitleSource for PlaceholderTitles {
    fn fetch_title(&self, id: &VideoId) -> Result<String> {
        Ok(format!("YouTube Video ({id})"))
    }
}

/// Hands the embed URL to an external program (browser opener, mpv, ...).
#[derive(Debug)]
pub(crate) struct ExternalOpener {
    program: PathBuf,
}

impl ExternalOpener {
    pub(crate) fn resolve(cli_value: Option<PathBuf>) -> Self {
        match cli_value {
            Some(program) => Self { program },
            None => Self::from_env(env::var_os(OPENER_ENV)),
        }
    }

    pub(crate) fn from_env(env_value: Option<OsString>) -> Self {
        match env_value {
            Some(value) if !value.is_empty() => Self {
                program: PathBuf::from(value),
            },
            _ => Self::platform_default(),
        }
    }

    fn platform_default() -> Self {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(windows) {
            "explorer"
        } else {
            "xdg-open"
        };
        Self {
            program: PathBuf::from(program),
        }
    }

    pub(crate) fn program(&self) -> &PathBuf {
        &self.program
    }
}

impl Playback for ExternalOpener {
    fn load(&mut self, id: &VideoId, embed_url: &str) -> Result<()> {
        debug!(program = %self.program.display(), %id, "spawning opener");
        let mut child = ProcessCommand::new(&self.program)
            .arg(embed_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch {}", self.program.display()))?;

        // Players like mpv stay up for the whole video; reap off the UI thread.
        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                warn!(program = %program.display(), %status, "opener exited unsuccessfully");
            }
            Ok(_) => {}
            Err(err) => {
                warn!(program = %program.display(), error = %err, "failed to wait on opener");
            }
        });
        Ok(())
    }
}

/// Records what would have been opened without starting anything.
#[derive(Debug, Default)]
pub(crate) struct DryRun {
    last_url: Option<String>,
}

impl DryRun {
    pub(crate) fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }
}

impl Playback for DryRun {
    fn load(&mut self, id: &VideoId, embed_url: &str) -> Result<()> {
        info!(%id, url = embed_url, "dry run: not opening player");
        self.last_url = Some(embed_url.to_string());
        Ok(())
    }
}

/// The adapter chosen from CLI flags.
#[derive(Debug)]
pub(crate) enum PlaybackMode {
    Open(ExternalOpener),
    DryRun(DryRun),
}

impl Playback for PlaybackMode {
    fn load(&mut self, id: &VideoId, embed_url: &str) -> Result<()> {
        match self {
            Self::Open(opener) => opener.load(id, embed_url),
            Self::DryRun(dry) => dry.load(id, embed_url),
        }
    }
}
