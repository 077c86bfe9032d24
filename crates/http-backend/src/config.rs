/// Base URL used when nothing else is configured.
pub const FALLBACK_BASE_URL: &str = "http://localhost:8000";

/// Base URL baked in at build time through `PORTAL_API_URL`, if any.
pub const BUILD_BASE_URL: Option<&str> = option_env!("PORTAL_API_URL");

/// Builder for [`PortalConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PortalConfigBuilder {
    base_url: Option<String>,
}

impl PortalConfigBuilder {
    /// Creates a builder with no overrides.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the configuration.
    ///
    /// Without an explicit base URL, the build-time `PORTAL_API_URL` is
    /// used, then [`FALLBACK_BASE_URL`].
    #[inline]
    pub fn build(self) -> PortalConfig {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                BUILD_BASE_URL.unwrap_or(FALLBACK_BASE_URL).to_owned()
            });
        PortalConfig {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }
}

/// Configuration for [`crate::HttpBackend`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PortalConfig {
    pub(crate) base_url: String,
}

impl PortalConfig {
    /// Returns the base URL, without a trailing slash.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
