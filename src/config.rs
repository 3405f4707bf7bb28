pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Verbose logging plus per-request tracing.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: true,
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_loopback_debug_server() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(config.debug);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn environment_does_not_move_the_server() {
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "8080");
        std::env::set_var("DEBUG", "maybe");

        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(config.debug);
    }
}
