//! Client side of the availability core: the backend contract, its HTTP
//! implementation, and the controller behind the schedule page.

pub mod backend;
pub mod config;
pub mod http;
pub mod mock;
pub mod page;

pub use backend::ScheduleBackend;
pub use http::HttpBackend;
pub use page::{SavingIndicator, SchedulePage};
