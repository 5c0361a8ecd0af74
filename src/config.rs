use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Siren proximity alert server
#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
#[command(name = "siren-server", version, about = "Proximity alert dispatch server")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "SIREN_PORT", default_value = "5000")]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "SIREN_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Path to TOML config file
    #[arg(long, default_value = "./siren.toml")]
    pub config: String,

    /// Enable structured JSON logging (for Docker/production)
    #[arg(long, env = "SIREN_JSON_LOGS")]
    pub json_logs: bool,

    /// Output a commented TOML config template and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Alert radius in meters; receivers strictly closer than this are notified
    #[arg(long, env = "SIREN_ALERT_RADIUS_M", default_value = "200.0")]
    pub alert_radius_m: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "0.0.0.0".to_string(),
            config: "./siren.toml".to_string(),
            json_logs: false,
            generate_config: false,
            alert_radius_m: 200.0,
        }
    }
}

impl Config {
    /// Load config with layered precedence:
    /// built-in defaults < TOML file < env vars (SIREN_*) < CLI args
    pub fn load() -> Result<Self, figment::Error> {
        let cli = Config::parse();
        let config_path = cli.config.clone();

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("SIREN_"))
            .merge(Serialized::defaults(cli))
            .extract()
    }
}

/// Generate a commented TOML config template
pub fn generate_config_template() -> String {
    r#"# Siren Proximity Alert Server Configuration
# Place this file at ./siren.toml or specify with --config <path>
# All settings can be overridden via environment variables (SIREN_PORT, etc.)
# or CLI flags (--port, etc.)

# Server port (default: 5000)
# port = 5000

# Bind address (default: 0.0.0.0 — all interfaces)
# bind_address = "0.0.0.0"

# Enable structured JSON logging for Docker/production
# json_logs = false

# Alert radius in meters. When an emitter raises an alert, receivers strictly
# closer than this distance are notified (default: 200.0)
# alert_radius_m = 200.0
"#
    .to_string()
}
