mod links;
mod playback;
mod player;
mod recent;
mod tui;
mod video_id;


use anyhow::{Result, bail};
use serde_json::json;

use crate::cli::{Cli, Command, PlaybackArgs};
use crate::logging::{self, LogTarget};

use self::links::{embed_url, thumbnail_url, watch_url};
use self::playback::{DryRun, ExternalOpener, PlaceholderTitles, PlaybackMode};
use self::player::Player;
use self::recent::RecentHistory;
use self::video_id::matching_rule;

pub(crate) type SessionPlayer = Player<PlaybackMode, PlaceholderTitles>;

pub fn run(cli: Cli) -> Result<()> {
    let log_target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Some(Command::Tui { .. }) | None) => LogTarget::Off,
        (None, Some(_)) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    match cli.command {
        Some(Command::Resolve { input, json }) => run_resolve(&input, json)?,
        Some(Command::Play { input, playback }) => {
            run_play(&input, session_player(cli.capacity, playback))?
        }
        Some(Command::Open { id, playback }) => {
            run_open(&id, session_player(cli.capacity, playback))?
        }
        Some(Command::Tui { playback }) => tui::run_tui(session_player(cli.capacity, playback))?,
        None => tui::run_tui(session_player(cli.capacity, PlaybackArgs::default()))?,
    }

    Ok(())
}

fn session_player(capacity: usize, args: PlaybackArgs) -> SessionPlayer {
    let mode = if args.dry_run {
        PlaybackMode::DryRun(DryRun::default())
    } else {
        PlaybackMode::Open(ExternalOpener::resolve(args.opener))
    };
    Player::new(RecentHistory::with_capacity(capacity), mode, PlaceholderTitles)
}

fn run_resolve(input: &str, as_json: bool) -> Result<()> {
    let Some((rule, id)) = matching_rule(input) else {
        if input.trim().is_empty() {
            bail!("{}", player::PlayError::EmptyInput);
        }
        bail!("{}", player::PlayError::UnrecognizedFormat);
    };

    if as_json {
        let out = json!({
            "id": id.as_str(),
            "rule": rule,
            "watch_url": watch_url(&id),
            "embed_url": embed_url(&id),
            "thumbnail_url": thumbnail_url(&id),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{:<10} {}", "ID", id);
    println!("{:<10} {}", "RULE", rule);
    println!("{:<10} {}", "WATCH", watch_url(&id));
    println!("{:<10} {}", "EMBED", embed_url(&id));
    println!("{:<10} {}", "THUMBNAIL", thumbnail_url(&id));
    Ok(())
}

fn run_play(input: &str, mut player: SessionPlayer) -> Result<()> {
    match player.play(input) {
        Ok(outcome) => {
            println!("Playing: {}", outcome.title);
            println!("{}", playback_target_line(&player, &outcome.embed_url));
            Ok(())
        }
        Err(err) => bail!("{err}"),
    }
}

fn run_open(id: &str, mut player: SessionPlayer) -> Result<()> {
    match player.play_by_id(id) {
        Ok(url) => {
            println!("{}", playback_target_line(&player, &url));
            Ok(())
        }
        Err(err) => bail!("{err}"),
    }
}

fn playback_target_line(player: &SessionPlayer, url: &str) -> String {
    match player.playback() {
        PlaybackMode::Open(opener) => format!("Opened {url} with {}", opener.program().display()),
        PlaybackMode::DryRun(dry) => {
            format!("Dry run: {}", dry.last_url().unwrap_or(url))
        }
    }
}
