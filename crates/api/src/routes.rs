pub mod appointments;
pub mod exceptions;
pub mod health;
pub mod weekly;
