use crate::cli::commands::common::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::feed::FeedEntry;
use crate::errors::{AppError, AppResult};
use crate::state::{ClientState, Theme};
use crate::ui::dashboard::{render_dashboard, render_feed};
use crate::utils::colors::Palette;

fn theme_override(requested: &Option<String>, client: &ClientState) -> AppResult<Theme> {
    match requested {
        Some(t) => Theme::from_str_opt(t)
            .ok_or_else(|| AppError::Config(format!("unknown theme '{t}'"))),
        None => Ok(client.theme),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        filters,
        limit,
        theme,
    } = cmd
    {
        let client = ClientState::load();
        let theme = theme_override(theme, &client)?;
        let state = load_state(cfg, &client, filters)?;
        let view = state.view(limit.unwrap_or(cfg.feed_limit));

        print!("{}", render_dashboard(&view, theme));
    }
    Ok(())
}

pub fn handle_feed(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Feed {
        filters,
        limit,
        json,
    } = cmd
    {
        let client = ClientState::load();
        let state = load_state(cfg, &client, filters)?;
        let view = state.view(limit.unwrap_or(cfg.feed_limit));

        if *json {
            println!("{}", serde_json::to_string_pretty::<Vec<FeedEntry>>(&view.feed)?);
        } else {
            print!("{}", render_feed(&view.feed, &Palette::for_theme(client.theme)));
        }
    }
    Ok(())
}
