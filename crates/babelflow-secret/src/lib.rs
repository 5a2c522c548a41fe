use std::env;
use std::sync::RwLock;

/// Storage interface for the bearer credential.
///
/// Callers fetch the secret once per request and never cache it beyond the
/// request's lifetime. An empty result means no secret is configured; there
/// is deliberately no bundled fallback credential.
pub trait SecretStore: Send + Sync {
    /// The stored secret, or `None` if nothing is configured.
    fn get(&self) -> Option<String>;

    /// Replace the stored secret.
    fn set(&self, secret: &str) -> Result<(), SecretError>;

    /// Remove the stored secret.
    fn clear(&self) -> Result<(), SecretError>;

    /// Whether the user has supplied their own secret (as opposed to one
    /// picked up from the environment).
    fn is_custom_set(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("secret store is read-only")]
    ReadOnly,
}

/// Read-only store backed by a named environment variable.
pub struct EnvSecretStore {
    var: String,
}

impl EnvSecretStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SecretStore for EnvSecretStore {
    fn get(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|v| !v.is_empty())
    }

    fn set(&self, _secret: &str) -> Result<(), SecretError> {
        Err(SecretError::ReadOnly)
    }

    fn clear(&self) -> Result<(), SecretError> {
        Err(SecretError::ReadOnly)
    }

    fn is_custom_set(&self) -> bool {
        false
    }
}

/// In-process store for user-supplied secrets, with an optional read-only
/// fallback consulted while no custom secret is set.
///
/// This is the keychain stand-in: `set` marks the secret as custom, `clear`
/// reverts to the fallback (if any).
pub struct MemorySecretStore {
    custom: RwLock<Option<String>>,
    fallback: Option<Box<dyn SecretStore>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self {
            custom: RwLock::new(None),
            fallback: None,
        }
    }

    pub fn with_fallback(fallback: Box<dyn SecretStore>) -> Self {
        Self {
            custom: RwLock::new(None),
            fallback: Some(fallback),
        }
    }
}

impl Default for MemorySecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for MemorySecretStore {
    fn get(&self) -> Option<String> {
        let custom = self.custom.read().expect("secret lock poisoned");
        match custom.as_ref() {
            Some(secret) => Some(secret.clone()),
            None => self.fallback.as_ref().and_then(|f| f.get()),
        }
    }

    fn set(&self, secret: &str) -> Result<(), SecretError> {
        let mut custom = self.custom.write().expect("secret lock poisoned");
        *custom = if secret.is_empty() {
            None
        } else {
            Some(secret.to_string())
        };
        Ok(())
    }

    fn clear(&self) -> Result<(), SecretError> {
        let mut custom = self.custom.write().expect("secret lock poisoned");
        *custom = None;
        Ok(())
    }

    fn is_custom_set(&self) -> bool {
        self.custom
            .read()
            .expect("secret lock poisoned")
            .is_some()
    }
}
