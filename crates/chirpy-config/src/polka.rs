use std::fmt;

/// API key that the Polka payment provider presents on its webhook calls.
#[derive(Clone)]
pub struct PolkaConfig {
    pub api_key: String,
}

impl PolkaConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(crate::required("POLKA_KEY")?))
    }
}

impl fmt::Debug for PolkaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolkaConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
