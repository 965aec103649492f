use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DATABASE_PATH_DEFAULT: &str = "address_book.db";
const MAX_NAME_BYTES_DEFAULT: usize = 256;

#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) bind: SocketAddr,
    pub(crate) database_path: PathBuf,
    pub(crate) log_path: Option<PathBuf>,
    pub(crate) request_timeout_ms: u64,
    pub(crate) max_body_bytes: usize,
    pub(crate) max_concurrency: usize,
    pub(crate) max_name_bytes: usize,
}

impl AppConfig {
    pub(crate) fn from_env() -> Result<Self> {
        let bind = parse_socket_addr("GEOBOOK_BIND", "127.0.0.1:8080")?;
        let database_path = parse_path("GEOBOOK_DATABASE_PATH", DATABASE_PATH_DEFAULT)?;
        let log_path = parse_optional_path("GEOBOOK_LOG_PATH");
        let request_timeout_ms = parse_u64("GEOBOOK_REQUEST_TIMEOUT_MS", 2000)?;
        let max_body_bytes = parse_usize("GEOBOOK_MAX_BODY_BYTES", 65_536)?;
        let max_concurrency = parse_usize("GEOBOOK_MAX_CONCURRENCY", 256)?;
        let max_name_bytes = parse_usize("GEOBOOK_MAX_NAME_BYTES", MAX_NAME_BYTES_DEFAULT)?;

        if request_timeout_ms == 0 {
            anyhow::bail!("GEOBOOK_REQUEST_TIMEOUT_MS must be > 0");
        }
        if max_body_bytes == 0 {
            anyhow::bail!("GEOBOOK_MAX_BODY_BYTES must be > 0");
        }
        if max_concurrency == 0 {
            anyhow::bail!("GEOBOOK_MAX_CONCURRENCY must be > 0");
        }
        if max_name_bytes == 0 {
            anyhow::bail!("GEOBOOK_MAX_NAME_BYTES must be > 0");
        }

        Ok(Self {
            bind,
            database_path,
            log_path,
            request_timeout_ms,
            max_body_bytes,
            max_concurrency,
            max_name_bytes,
        })
    }
}

fn parse_socket_addr(key: &str, default: &str) -> Result<SocketAddr> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .with_context(|| format!("{key} must be a valid socket address, got '{raw}'"))
}

fn parse_usize(key: &str, default: usize) -> Result<usize> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .with_context(|| format!("{key} must be a positive integer, got '{raw}'"))
}

fn parse_u64(key: &str, default: u64) -> Result<u64> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .with_context(|| format!("{key} must be a positive integer, got '{raw}'"))
}

fn parse_path(key: &str, default: &str) -> Result<PathBuf> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    let path = PathBuf::from(raw);
    if path.as_os_str().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(path)
}

fn parse_optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from)
}
