use crate::error::{QueueError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// An authenticated principal. Cached in the session slot for the duration
/// of a session, never persisted durably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// AuthConfig
// ---------------------------------------------------------------------------

/// A credential pair and the identity it resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub uid: String,
    pub email: String,
    pub password: String,
}

/// Injectable identity registry plus the administrator marker.
///
/// The administrator is whichever identity's email equals `admin_email`;
/// there are no roles or per-order permissions beyond that single bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    pub registry: Vec<RegistryEntry>,
    pub admin_email: String,
}

fn default_version() -> u32 {
    1
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            version: 1,
            registry: vec![
                RegistryEntry {
                    uid: "1".to_string(),
                    email: "admin@example.com".to_string(),
                    password: "adminpassword".to_string(),
                },
                RegistryEntry {
                    uid: "2".to_string(),
                    email: "user@example.com".to_string(),
                    password: "userpassword".to_string(),
                },
            ],
            admin_email: "admin@example.com".to_string(),
        }
    }
}

impl AuthConfig {
    /// Load the registry from `.printq/config.yaml`, falling back to the
    /// built-in fixtures when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: AuthConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Authenticator
// ---------------------------------------------------------------------------

/// Validates credential pairs against the fixed registry and classifies
/// identities as administrator or regular user.
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Exact-string match on both fields; no hashing, no case-folding.
    /// Pure lookup — the caller owns the session write.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Identity> {
        self.config
            .registry
            .iter()
            .find(|entry| entry.email == email && entry.password == password)
            .map(|entry| Identity {
                uid: entry.uid.clone(),
                email: entry.email.clone(),
            })
            .ok_or(QueueError::InvalidCredentials)
    }

    /// The sole authorization bit in the system.
    pub fn is_administrator(&self, identity: &Identity) -> bool {
        identity.email == self.config.admin_email
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
