use eyre::Result;
use slotkeeper_core::{models::schedule::ScheduleDay, template::WeeklyTemplate};

use crate::StorePool;

/// Stored template rows in weekday order. Empty until the first save.
pub async fn get_weekly_schedule(pool: &StorePool) -> Result<Vec<ScheduleDay>> {
    let mut days = pool.weekly.read().await.clone();
    days.sort_by_key(|day| day.day_of_week);
    Ok(days)
}

/// Replaces all seven rows at once. Nothing is written unless the whole set
/// is valid.
pub async fn replace_weekly_schedule(pool: &StorePool, days: &[ScheduleDay]) -> Result<Vec<ScheduleDay>> {
    let template = WeeklyTemplate::try_from_complete(days)?;
    let rows = template.to_rows();

    tracing::debug!(
        "Replacing weekly schedule: working_days={}",
        rows.iter().filter(|day| day.is_working_day).count()
    );

    let mut stored = pool.weekly.write().await;
    *stored = rows.clone();

    Ok(rows)
}
