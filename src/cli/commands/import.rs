use crate::cli::commands::common::audit;
use crate::cli::parser::Commands;
use crate::config::{Config, SourceKind};
use crate::db::pool::DbPool;
use crate::db::queries::{count_records, import_records};
use crate::errors::{AppError, AppResult};
use crate::models::SourceTable;
use crate::source::parse_records;
use crate::ui::messages::{info, success};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { table, file } = cmd {
        if cfg.source != SourceKind::Sqlite {
            return Err(AppError::Config(
                "import writes to the SQLite store, but `source` is not `sqlite`; \
                 copy the file into json_dir instead"
                    .to_string(),
            ));
        }

        let table: SourceTable = table.parse()?;
        let content = fs::read_to_string(file)?;
        let records = parse_records(&content, table)?;

        info(format!("Importing {} record(s) into {table}…", records.len()));

        let mut pool = DbPool::new(&cfg.database)?;
        let inserted = import_records(&mut pool, table, &records)?;
        let total = count_records(&pool.conn, table)?;

        audit(cfg, "import", table.table_name(), &format!("{inserted} record(s) from {file}"));
        success(format!("Imported {inserted} record(s); {table} now holds {total}."));
    }
    Ok(())
}
