//! Pieces shared by the command handlers: session gate, range resolution
//! and the load cycle.

use crate::cli::parser::FilterArgs;
use crate::config::{Config, SourceKind};
use crate::core::loader;
use crate::core::pipeline::{AppState, LoadOutcome, LoadStatus};
use crate::db::oplog::oplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Range;
use crate::session::{IdentityProvider, LocalIdentity, rows_visible};
use crate::source;
use crate::state::ClientState;
use crate::utils::date::{parse_day, today};
use std::path::Path;

pub fn identity(cfg: &Config) -> LocalIdentity {
    LocalIdentity::new(Config::config_dir(), &cfg.admin_email)
}

/// Fail unless the privileged user is signed in and has passed the gate.
pub fn require_visible(cfg: &Config, client: &ClientState) -> AppResult<()> {
    let admin = cfg.require_admin_email()?;
    let session = identity(cfg).get_session()?;
    if rows_visible(session.as_ref(), client, admin) {
        Ok(())
    } else {
        Err(AppError::NotSignedIn)
    }
}

pub fn resolve_range(filters: &FilterArgs, cfg: &Config) -> AppResult<Range> {
    if let Some(from) = &filters.from {
        let first = parse_day(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
        let last = match &filters.to {
            Some(to) => parse_day(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?,
            None => today(),
        };
        return Range::custom(first, last);
    }

    let spec = filters.range.as_deref().unwrap_or(&cfg.default_range);
    Range::parse(spec, today())
}

/// Build the application state for one command and run a load cycle.
pub fn load_state(cfg: &Config, client: &ClientState, filters: &FilterArgs) -> AppResult<AppState> {
    require_visible(cfg, client)?;

    let range = resolve_range(filters, cfg)?;
    let property = filters
        .property
        .clone()
        .unwrap_or_else(|| client.property_filter.clone());

    let source = source::from_config(cfg)?;
    log::info!("loading from {} ({})", source.describe(), range.label);

    let mut state = AppState::new(range)
        .with_property(property)
        .with_search(filters.search.clone().unwrap_or_default());

    if loader::load(&mut state, source.as_ref(), cfg.row_limit) == LoadOutcome::Failed
        && let LoadStatus::Failed(msg) = &state.status
    {
        return Err(AppError::Load(msg.clone()));
    }

    Ok(state)
}

/// Record an operation in the store's log table. Never fails the command.
pub fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if cfg.source != SourceKind::Sqlite || !Path::new(&cfg.database).exists() {
        return;
    }
    let result = DbPool::new(&cfg.database).and_then(|pool| oplog(&pool.conn, operation, target, message));
    if let Err(e) = result {
        log::warn!("failed to write operation log: {e}");
    }
}
