//! External collaborators: weather and trend sources, alert dispatch.

pub mod notify;
pub mod trend;
pub mod weather;
