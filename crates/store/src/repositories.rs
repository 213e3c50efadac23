pub mod appointment;
pub mod exception;
pub mod weekly;
