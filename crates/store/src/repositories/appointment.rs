use chrono::NaiveDate;
use eyre::Result;
use slotkeeper_core::models::appointment::{Appointment, AppointmentStatus};

use crate::StorePool;

/// Adds a booking. Appointments belong to the booking subsystem, so the
/// backend only exposes reads; this is how they get seeded.
pub async fn insert_appointment(pool: &StorePool, appointment: Appointment) -> Result<Appointment> {
    pool.appointments.write().await.push(appointment.clone());
    Ok(appointment)
}

pub async fn list_appointments_in_range(
    pool: &StorePool,
    date_from: NaiveDate,
    date_to: NaiveDate,
    status: Option<AppointmentStatus>,
) -> Result<Vec<Appointment>> {
    let stored = pool.appointments.read().await;

    let mut matching: Vec<Appointment> = stored
        .iter()
        .filter(|appointment| date_from <= appointment.date && appointment.date <= date_to)
        .filter(|appointment| status.is_none_or(|status| appointment.status == status))
        .cloned()
        .collect();
    matching.sort_by_key(|appointment| (appointment.date, appointment.start_time));

    Ok(matching)
}
