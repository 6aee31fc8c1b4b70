use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_addr = std::env::var("SERVER_ADDR")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: server_addr
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "SERVER_ADDR".to_string(),
                    value: server_addr.clone(),
                })?,
        })
    }
}
