use crate::core::normalize::normalize_all;
use crate::core::pipeline::{AppState, LoadOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{NormalizedRow, SourceTable};
use crate::source::RecordSource;
use std::thread;

/// Fetch both tables concurrently, wait for both, then normalize.
/// Either fetch failing fails the whole load.
pub fn fetch_rows<S>(source: &S, limit: usize) -> AppResult<Vec<NormalizedRow>>
where
    S: RecordSource + Sync + ?Sized,
{
    let (reservations, calls) = thread::scope(|scope| {
        let res = scope.spawn(|| source.fetch_table(SourceTable::Reservations, limit));
        let cal = scope.spawn(|| source.fetch_table(SourceTable::CallLogs, limit));
        (join(res, SourceTable::Reservations), join(cal, SourceTable::CallLogs))
    });

    let reservations = reservations?;
    let calls = calls?;
    log::debug!(
        "fetched {} reservation(s) and {} call(s)",
        reservations.len(),
        calls.len()
    );

    Ok(normalize_all(reservations, calls))
}

fn join<T>(
    handle: thread::ScopedJoinHandle<'_, AppResult<T>>,
    table: SourceTable,
) -> AppResult<T> {
    handle
        .join()
        .map_err(|_| AppError::fetch(table.table_name(), "fetch worker panicked"))?
}

/// Run one full load cycle against `state`.
pub fn load<S>(state: &mut AppState, source: &S, limit: usize) -> LoadOutcome
where
    S: RecordSource + Sync + ?Sized,
{
    let token = state.begin_load();
    let result = fetch_rows(source, limit);
    state.complete_load(token, result)
}
