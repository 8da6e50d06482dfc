// Identifier value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque per-account API key. Sent as the basic-auth username; never printed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `None` for a missing or blank key.
    pub fn from_optional(value: Option<String>) -> Option<Self> {
        value
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_key() {
        let key = ApiKey::new("sk_live_123");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "sk_live_123");
    }

    #[test]
    fn blank_keys_are_treated_as_missing() {
        assert!(ApiKey::from_optional(Some("   ".to_string())).is_none());
        assert!(ApiKey::from_optional(None).is_none());
        let key = ApiKey::from_optional(Some(" sk_1 ".to_string())).expect("key");
        assert_eq!(key.expose(), "sk_1");
    }
}
