use chrono::{NaiveDate, Utc};
use eyre::Result;
use slotkeeper_core::models::exception::{ExceptionPayload, ScheduleException};
use uuid::Uuid;

use crate::{models::StoredException, StorePool};

/// Exceptions dated within `[date_from, date_to]`, by date and then creation
/// order.
pub async fn list_exceptions_in_range(
    pool: &StorePool,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<Vec<ScheduleException>> {
    let stored = pool.exceptions.read().await;

    let mut matching: Vec<&StoredException> = stored
        .iter()
        .filter(|row| date_from <= row.exception.date && row.exception.date <= date_to)
        .collect();
    matching.sort_by_key(|row| (row.exception.date, row.sequence));

    Ok(matching.into_iter().map(|row| row.exception.clone()).collect())
}

pub async fn create_exception(pool: &StorePool, payload: ExceptionPayload) -> Result<ScheduleException> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let exception = ScheduleException::from_payload(id, payload);

    tracing::debug!(
        "Creating schedule exception: id={}, date={}, type={}",
        id, exception.date, exception.kind
    );

    pool.exceptions.write().await.push(StoredException {
        sequence: pool.next_sequence(),
        created_at: now,
        updated_at: now,
        exception: exception.clone(),
    });

    Ok(exception)
}

/// Replaces every mutable field. `None` when no exception has this id.
pub async fn update_exception(
    pool: &StorePool,
    id: Uuid,
    payload: ExceptionPayload,
) -> Result<Option<ScheduleException>> {
    let mut stored = pool.exceptions.write().await;

    let Some(row) = stored.iter_mut().find(|row| row.exception.id == id) else {
        tracing::debug!("Schedule exception not found: id={}", id);
        return Ok(None);
    };

    row.exception = ScheduleException::from_payload(id, payload);
    row.updated_at = Utc::now();

    Ok(Some(row.exception.clone()))
}

/// `false` when no exception has this id.
pub async fn delete_exception(pool: &StorePool, id: Uuid) -> Result<bool> {
    let mut stored = pool.exceptions.write().await;
    let before = stored.len();
    stored.retain(|row| row.exception.id != id);

    Ok(stored.len() != before)
}
