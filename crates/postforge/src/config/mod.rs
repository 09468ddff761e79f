use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::quality::DEFAULT_VARIATION_COUNT;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub generation: GenerationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let default_variation_count = match env::var("APP_VARIATION_COUNT") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(count) if count > 0 => count,
                _ => return Err(ConfigError::InvalidVariationCount { value: raw }),
            },
            Err(_) => DEFAULT_VARIATION_COUNT,
        };

        let seed = env::var("APP_VARIATION_SEED")
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { value: raw })
            })
            .transpose()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            generation: GenerationConfig {
                default_variation_count,
                seed,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for variation generation and the randomness behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub default_variation_count: usize,
    /// Fixed seed for reproducible hooks and confidence values.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_variation_count: DEFAULT_VARIATION_COUNT,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidVariationCount { value: String },
    InvalidSeed { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidVariationCount { value } => write!(
                f,
                "APP_VARIATION_COUNT must be a positive integer (found '{value}')"
            ),
            ConfigError::InvalidSeed { value } => {
                write!(f, "APP_VARIATION_SEED must be a valid u64 (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidVariationCount { .. }
            | ConfigError::InvalidSeed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    const APP_VARS: [&str; 6] = [
        "APP_ENV",
        "APP_HOST",
        "APP_PORT",
        "APP_LOG_LEVEL",
        "APP_VARIATION_COUNT",
        "APP_VARIATION_SEED",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for var in APP_VARS {
            env::remove_var(var);
        }
    }

    /// Clears every `APP_*` override when dropped, including during a panic.
    struct EnvReset;

    impl Drop for EnvReset {
        fn drop(&mut self) {
            reset_env();
        }
    }

    /// Exclusive access to a clean environment. Field order drops the reset
    /// before releasing the lock.
    struct EnvScope {
        _reset: EnvReset,
        _lock: MutexGuard<'static, ()>,
    }

    fn isolated_env() -> EnvScope {
        let lock = env_guard()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        reset_env();
        EnvScope {
            _reset: EnvReset,
            _lock: lock,
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _env = isolated_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.generation, GenerationConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _env = isolated_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn reads_variation_seed_and_count() {
        let _env = isolated_env();
        env::set_var("APP_VARIATION_COUNT", "5");
        env::set_var("APP_VARIATION_SEED", "42");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.generation.default_variation_count, 5);
        assert_eq!(config.generation.seed, Some(42));
    }

    #[test]
    fn rejects_zero_variation_count() {
        let _env = isolated_env();
        env::set_var("APP_VARIATION_COUNT", "0");
        match AppConfig::load() {
            Err(ConfigError::InvalidVariationCount { value }) => assert_eq!(value, "0"),
            other => panic!("expected invalid variation count, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_seed() {
        let _env = isolated_env();
        env::set_var("APP_VARIATION_SEED", "not-a-number");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn overrides_are_cleared_when_a_test_panics() {
        let _env = isolated_env();
        let outcome = std::panic::catch_unwind(|| {
            let _reset = EnvReset;
            env::set_var("APP_VARIATION_SEED", "7");
            env::set_var("APP_VARIATION_COUNT", "4");
            panic!("assertion failed while overrides were set");
        });

        assert!(outcome.is_err());
        for var in APP_VARS {
            assert!(env::var(var).is_err(), "{var} leaked");
        }
        assert_eq!(
            AppConfig::load().expect("config loads").generation,
            GenerationConfig::default()
        );
    }
}
