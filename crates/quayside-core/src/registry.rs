//! Registry naming collaborator.

/// Registry naming authority.
///
/// Owns the policy that maps the deployment's configured registry and
/// organizational group to the prefix under which all project images are
/// namespaced. Implementations must be cheap and side-effect-free; the
/// prefix is recomputed on every resolution call rather than cached.
pub trait ImageRegistry: Send + Sync {
    /// Returns the current `registry-host/group` qualifier.
    fn registry_with_group(&self) -> String;
}

/// Registry naming backed by static configuration.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    host: String,
    group: String,
}

impl StaticRegistry {
    /// Creates a registry qualifier from a host and group.
    #[must_use]
    pub fn new(host: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            group: group.into(),
        }
    }
}

impl ImageRegistry for StaticRegistry {
    fn registry_with_group(&self) -> String {
        format!("{}/{}", self.host, self.group)
    }
}
