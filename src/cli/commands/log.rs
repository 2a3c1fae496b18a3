use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::oplog::recent;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, limit } = cmd
        && *print
    {
        let pool = DbPool::open_existing(&cfg.database)?;
        let lines = recent(&pool.conn, *limit)?;

        let mut table = Table::new(vec![
            Column::new("DATE", 25),
            Column::new("OPERATION", 18),
            Column::new("TARGET", 36),
            Column::new("MESSAGE", 40),
        ]);
        for l in lines {
            table.add_row(vec![l.date, l.operation, l.target, l.message]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
