//! Server runtime settings
//!
//! A flat JSON file consumed by the HTTP front end. Every key is required
//! and checked against its exact JSON type, stopping at the first problem.
//! Nothing here depends on the budget configuration; `sb_config_fpath` is
//! just a path the front end later hands to [`crate::config::Config`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::schema::Fields;
use crate::error::{SbError, SbResult};

/// Validated server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub server_addr: String,
    pub server_port: u16,
    pub server_root_dpath: String,
    pub server_home_fname: String,
    pub server_home_auth_fname: String,
    pub server_public_files: Vec<String>,

    /// Budget configuration file served by the front end
    pub sb_config_fpath: String,

    pub key_dpath: String,
    pub auth_key_fname: String,
    pub auth_jwt_key_fname: String,
    pub auth_special_user_fname: String,

    pub certs_enabled: bool,
    pub certs_dpath: String,
    pub certs_cert_fname: String,
    pub certs_key_fname: String,
}

impl ServerConfig {
    /// Read and validate the server configuration at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> SbResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SbError::Io(format!(
                "Failed to read server config {}: {}",
                path.display(),
                e
            ))
        })?;

        let document: Value = serde_json::from_str(&content).map_err(|e| {
            SbError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        let config = Self::from_value(&document)?;

        info!(path = %path.display(), addr = %config.socket_addr(), "loaded server configuration");
        Ok(config)
    }

    /// Validate an already-parsed JSON document
    ///
    /// Fields are checked in declaration order so the reported field is
    /// always the first bad one.
    pub fn from_value(document: &Value) -> SbResult<Self> {
        let f = Fields::root(document)?;

        Ok(Self {
            server_addr: f.require_str("server_addr")?.to_string(),
            server_port: parse_port(&f)?,
            server_root_dpath: f.require_str("server_root_dpath")?.to_string(),
            server_home_fname: f.require_str("server_home_fname")?.to_string(),
            server_home_auth_fname: f.require_str("server_home_auth_fname")?.to_string(),
            server_public_files: f.require_str_array("server_public_files")?,
            sb_config_fpath: f.require_str("sb_config_fpath")?.to_string(),
            key_dpath: f.require_str("key_dpath")?.to_string(),
            auth_key_fname: f.require_str("auth_key_fname")?.to_string(),
            auth_jwt_key_fname: f.require_str("auth_jwt_key_fname")?.to_string(),
            auth_special_user_fname: f.require_str("auth_special_user_fname")?.to_string(),
            certs_enabled: f.require_bool("certs_enabled")?,
            certs_dpath: f.require_str("certs_dpath")?.to_string(),
            certs_cert_fname: f.require_str("certs_cert_fname")?.to_string(),
            certs_key_fname: f.require_str("certs_key_fname")?.to_string(),
        })
    }

    /// `addr:port` string the server binds to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.server_addr, self.server_port)
    }

    /// Page served to anonymous visitors
    pub fn home_path(&self) -> PathBuf {
        Path::new(&self.server_root_dpath).join(&self.server_home_fname)
    }

    /// Page served to authenticated users
    pub fn home_auth_path(&self) -> PathBuf {
        Path::new(&self.server_root_dpath).join(&self.server_home_auth_fname)
    }

    /// Whether `fname` may be served without authentication
    pub fn is_public_file(&self, fname: &str) -> bool {
        self.server_public_files.iter().any(|f| f == fname)
    }

    pub fn auth_key_path(&self) -> PathBuf {
        Path::new(&self.key_dpath).join(&self.auth_key_fname)
    }

    pub fn auth_jwt_key_path(&self) -> PathBuf {
        Path::new(&self.key_dpath).join(&self.auth_jwt_key_fname)
    }

    pub fn auth_special_user_path(&self) -> PathBuf {
        Path::new(&self.key_dpath).join(&self.auth_special_user_fname)
    }

    /// TLS certificate, only when certificates are enabled
    pub fn cert_path(&self) -> Option<PathBuf> {
        self.certs_enabled
            .then(|| Path::new(&self.certs_dpath).join(&self.certs_cert_fname))
    }

    /// TLS private key, only when certificates are enabled
    pub fn cert_key_path(&self) -> Option<PathBuf> {
        self.certs_enabled
            .then(|| Path::new(&self.certs_dpath).join(&self.certs_key_fname))
    }
}

fn parse_port(fields: &Fields<'_>) -> SbResult<u16> {
    let port = fields.require_i64("server_port")?;
    u16::try_from(port).map_err(|_| SbError::Schema {
        location: fields.location("server_port"),
        reason: format!("port {} is outside 0-65535", port),
    })
}
