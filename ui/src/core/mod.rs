pub mod fetch;
pub mod format;
pub mod projection;
pub mod timing;
pub mod trend;
