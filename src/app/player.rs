use std::cell::Cell;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};

use super::links::embed_url;
use super::playback::{Playback, TitleSource};
use super::recent::RecentHistory;
use super::video_id::{VideoId, extract_video_id};

/// Failures surfaced to the user. `Display` is the exact message shown.
#[derive(Debug, Error)]
pub(crate) enum PlayError {
    #[error("Please enter a YouTube URL")]
    EmptyInput,
    #[error("Invalid YouTube URL. Please check the URL and try again.")]
    UnrecognizedFormat,
    #[error("Error loading video. Please try again.")]
    PlaybackSetup(#[source] anyhow::Error),
    #[error("Invalid video ID")]
    InvalidDirectSelection,
    #[error("Video is not in recent history")]
    NotInHistory,
    #[error("A video is already loading")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayOutcome {
    pub(crate) id: VideoId,
    pub(crate) title: String,
    pub(crate) embed_url: String,
}

/// Marks the controller busy for as long as it is alive.
struct BusyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

fn start_playback<P: Playback>(playback: &mut P, id: &VideoId) -> Result<String, PlayError> {
    let url = embed_url(id);
    playback.load(id, &url).map_err(|err| {
        error!(%id, error = ?err, "playback setup failed");
        PlayError::PlaybackSetup(err)
    })?;
    Ok(url)
}

/// Session controller: extraction, playback and recent history in one place.
/// Build exactly one per session.
pub(crate) struct Player<P, T> {
    history: RecentHistory,
    playback: P,
    titles: T,
    busy: Cell<bool>,
}

impl<P: Playback, T: TitleSource> Player<P, T> {
    pub(crate) fn new(history: RecentHistory, playback: P, titles: T) -> Self {
        Self {
            history,
            playback,
            titles,
            busy: Cell::new(false),
        }
    }

    pub(crate) fn play(&mut self, raw: &str) -> Result<PlayOutcome, PlayError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(PlayError::EmptyInput);
        }
        let id = extract_video_id(input).ok_or(PlayError::UnrecognizedFormat)?;

        let _guard = BusyGuard::acquire(&self.busy).ok_or(PlayError::Busy)?;
        let title = self.titles.fetch_title(&id).map_err(|err| {
            error!(%id, error = ?err, "title lookup failed");
            PlayError::PlaybackSetup(err)
        })?;
        let url = start_playback(&mut self.playback, &id)?;

        self.history.record(id.clone(), title.clone(), Utc::now());
        info!(%id, recent = self.history.len(), "video loaded");
        Ok(PlayOutcome {
            id,
            title,
            embed_url: url,
        })
    }

    /// Loads a video by raw id without touching recent history.
    pub(crate) fn play_by_id(&mut self, raw_id: &str) -> Result<String, PlayError> {
        let id = VideoId::parse(raw_id).ok_or(PlayError::InvalidDirectSelection)?;
        let _guard = BusyGuard::acquire(&self.busy).ok_or(PlayError::Busy)?;
        start_playback(&mut self.playback, &id)
    }

    /// Replays an entry from recent history. Order and timestamps stay as they were.
    pub(crate) fn replay_recent(&mut self, raw_id: &str) -> Result<PlayOutcome, PlayError> {
        let id = VideoId::parse(raw_id).ok_or(PlayError::InvalidDirectSelection)?;
        let _guard = BusyGuard::acquire(&self.busy).ok_or(PlayError::Busy)?;
        let Some(entry) = self.history.select(&id) else {
            warn!(%id, "replay requested for a video not in recent history");
            return Err(PlayError::NotInHistory);
        };
        let title = entry.title.clone();
        let url = start_playback(&mut self.playback, &id)?;
        Ok(PlayOutcome {
            id,
            title,
            embed_url: url,
        })
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub(crate) fn history(&self) -> &RecentHistory {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut RecentHistory {
        &mut self.history
    }

    pub(crate) fn playback(&self) -> &P {
        &self.playback
    }
}
