pub mod error_log;
pub mod http_client;
pub mod relay_config;
pub mod relay_request;
pub mod relay_service;
pub mod std_logger;
pub mod token_client;
