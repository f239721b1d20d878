//! Startup configuration: flags with environment fallbacks.
//!
//! Every required value must be present before anything starts; clap exits
//! with a usage error otherwise.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Args;
use db::DbConfig;

/// HTTP listener settings.
#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Address to bind.
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0")]
    pub listen_host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT")]
    pub port: u16,

    /// Path prefix the todo routes are mounted under.
    #[arg(long, env = "BASE_PATH", default_value = "/api")]
    pub base_path: String,
}

impl ServerArgs {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_host, self.port)
    }
}

/// MySQL connection settings.
#[derive(Clone, Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "MYSQL_HOST")]
    pub db_host: String,

    #[arg(long, env = "MYSQL_PORT")]
    pub db_port: u16,

    #[arg(long, env = "MYSQL_USER")]
    pub db_user: String,

    #[arg(long, env = "MYSQL_PASS", hide_env_values = true)]
    pub db_password: String,

    #[arg(long, env = "MYSQL_DB")]
    pub db_name: String,

    #[arg(long, env = "MYSQL_MAX_CONNECTIONS", default_value_t = 5)]
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request.
    #[arg(long, env = "MYSQL_ACQUIRE_TIMEOUT", default_value_t = 30)]
    pub db_acquire_timeout: u64,
}

impl From<DatabaseArgs> for DbConfig {
    fn from(args: DatabaseArgs) -> Self {
        Self {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_password,
            database: args.db_name,
            max_connections: args.db_max_connections,
            acquire_timeout: Duration::from_secs(args.db_acquire_timeout),
        }
    }
}
