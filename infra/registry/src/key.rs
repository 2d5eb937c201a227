use crate::error::RegistryError;
use std::borrow::Cow;
use std::fmt;

/// Name of a container inside a [`ServiceRegistry`](crate::ServiceRegistry).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerKey(Cow<'static, str>);

impl ContainerKey {
    /// The container every registry starts with. Its entries seed new target containers.
    pub const DEFAULT: Self = Self(Cow::Borrowed("Default"));

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    fn validate(value: &str) -> Result<(), RegistryError> {
        if value.is_empty() {
            return Err(RegistryError::InvalidKey {
                message: "EMPTY".into(),
                context: Some("Container key cannot be empty".into()),
            });
        }

        if value.contains(['\n', '\r']) {
            return Err(RegistryError::InvalidKey {
                message: value.escape_debug().to_string().into(),
                context: Some("Container key must be a single line".into()),
            });
        }

        Ok(())
    }
}

impl Default for ContainerKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<&str> for ContainerKey {
    type Error = RegistryError;

    fn try_from(value: &str) -> Result<Self, RegistryError> {
        Self::validate(value)?;
        Ok(Self(Cow::Owned(value.to_owned())))
    }
}

impl TryFrom<String> for ContainerKey {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, RegistryError> {
        Self::validate(&value)?;
        Ok(Self(Cow::Owned(value)))
    }
}

impl AsRef<str> for ContainerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
