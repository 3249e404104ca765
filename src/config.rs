use clap::{Parser, ValueEnum};

// Log output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "event-gateway")]
#[command(about = "First-party analytics event ingestion endpoint")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Deployment environment, only "production" logs accepted events
    #[arg(short, long, env = "APP_ENV", default_value = "development")]
    pub environment: String,

    // Largest request body read by the event endpoint
    #[arg(long, default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,

    // Seconds between rate limit registry sweeps (0 disables)
    #[arg(long, default_value_t = 300)]
    pub sweep_interval: u64,

    // Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
