pub mod answer;
pub mod dispatcher;
pub mod metrics;
pub mod numeric;
pub mod providers;

pub use dispatcher::RequestDispatcher;
pub use metrics::{get_metrics, init_metrics};
pub use providers::{AiGateway, GatewayError};
