use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use journey_flow::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Structured JSON lines
    Json,
    /// Human-readable output for development
    Pretty,
}

/// Server settings; every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "journey-server", version, about = "Hospitalization journey tool server")]
pub struct Config {
    /// Address the HTTP listener binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Narrative language used when a call names none or an unsupported one
    #[arg(long, env = "DEFAULT_LANGUAGE", default_value = "en", value_parser = parse_language)]
    pub default_language: Language,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code)
        .ok_or_else(|| format!("unsupported language `{code}` (expected en, fr or nl)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["journey-server"]).unwrap();
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "journey-server",
            "--bind",
            "127.0.0.1:8080",
            "--log-format",
            "pretty",
            "--default-language",
            "nl-BE",
        ])
        .unwrap();
        assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.default_language, Language::Nl);
    }

    #[test]
    fn unsupported_default_language_is_rejected() {
        assert!(Config::try_parse_from(["journey-server", "--default-language", "de"]).is_err());
    }
}
