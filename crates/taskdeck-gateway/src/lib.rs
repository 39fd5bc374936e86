mod error;
pub use error::GatewayError;

mod config;
pub use config::{GatewayConfig, UpdateStyle};

mod gateway;
pub use gateway::TaskGateway;

mod http;
pub use http::HttpGateway;
