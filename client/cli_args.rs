use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// 客户端可运行的演示调用
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    /// GetFeature
    Get,
    /// ListFeatures
    List,
    /// RecordRoute
    Record,
    /// RouteChat
    Chat,
}

#[derive(Parser, Debug)]
#[command(
    name = "routeguide-client",
    about = "A demo client for the routeguide gRPC server",
    long_about = "routeguide-client connects to a routeguide server and exercises its four RPCs:\nGetFeature, ListFeatures, RecordRoute and RouteChat."
)]
pub struct ClientArgs {
    /// Server hostname
    #[arg(long = "host", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(short = 'p', long = "port", default_value = "50051")]
    pub port: u16,

    /// Local feature database used to pick random route points
    #[arg(long = "db-path", alias = "db_path", default_value = "data/route_guide_db.json")]
    pub db_path: PathBuf,

    /// Number of points to send in RecordRoute
    #[arg(short = 'n', long = "num-points", default_value = "10")]
    pub num_points: usize,

    /// Upper bound of the random pause between RecordRoute points (ms)
    #[arg(long = "max-delay-ms", default_value = "1500")]
    pub max_delay_ms: u64,

    /// Only run the selected demos (repeatable)
    #[arg(long = "only", value_enum)]
    pub only: Vec<Demo>,
}

impl ClientArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be greater than 0".to_string());
        }

        if self.should_run(Demo::Record) && self.num_points == 0 {
            return Err("--num-points must be greater than 0".to_string());
        }

        Ok(())
    }

    pub fn should_run(&self, demo: Demo) -> bool {
        self.only.is_empty() || self.only.contains(&demo)
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
