pub mod settings;

pub use settings::{AppConfig, EndpointSettings, HttpSettings, MonitorSettings};
