//! Where the bearer token comes from

use std::fmt;

/// Supplies the bearer token for each outbound call.
///
/// Returning `None` is a normal state; the gateway answers with the
/// missing-credential message and sends nothing.
pub trait CredentialSource: Send + Sync + fmt::Debug {
    /// Look up the token. Called once per outbound call.
    fn credential(&self) -> Option<String>;
}

/// Reads an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    /// Read from the variable named `var`
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn credential(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed token, e.g. from `--api-key`
#[derive(Clone)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    /// Always use `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    /// No credential at all
    pub fn none() -> Self {
        Self(None)
    }
}

impl fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the token itself
        let state = if self.0.is_some() { "<set>" } else { "<unset>" };
        f.debug_tuple("StaticCredential").field(&state).finish()
    }
}

impl CredentialSource for StaticCredential {
    fn credential(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.is_empty())
    }
}
