//! Event system for analysis lifecycle notifications.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::StrataEventHandler;
pub use types::{
    AnalysisCompletedEvent, AnalysisStartedEvent, HealthChangedEvent, MonitorTickFailedEvent,
};
