use crate::cli::commands::common::identity;
use crate::config::{Config, SourceKind};
use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::errors::AppResult;
use crate::models::SourceTable;
use crate::session::{IdentityProvider, rows_visible};
use crate::source;
use crate::state::ClientState;
use crate::ui::messages::{field, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let client = ClientState::load();
    let session = identity(cfg).get_session()?;

    println!("opsdash {}", env!("CARGO_PKG_VERSION"));
    field("Config", Config::config_file().display());
    field(
        "Signed in as",
        session
            .as_ref()
            .map(|s| s.user.email.as_str())
            .unwrap_or("(nobody)"),
    );
    field(
        "Data visible",
        if rows_visible(session.as_ref(), &client, &cfg.admin_email) {
            "yes"
        } else {
            "no"
        },
    );

    match source::from_config(cfg) {
        Ok(src) => field("Source", src.describe()),
        Err(e) => warning(e),
    }
    if cfg.source == SourceKind::Sqlite
        && let Ok(pool) = DbPool::open_existing(&cfg.database)
    {
        for table in SourceTable::ALL {
            match count_records(&pool.conn, table) {
                Ok(n) => field(table.table_name(), format!("{n} record(s)")),
                Err(e) => warning(format!("{table}: {e}")),
            }
        }
    }

    field("Theme", client.theme.as_str());
    field("Property", &client.property_filter);
    field("Default range", &cfg.default_range);
    Ok(())
}
