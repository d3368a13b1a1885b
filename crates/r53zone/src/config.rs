//! Generator configuration types.

use r53zone_core::DEFAULT_TTL;

/// Provider named in the advisory header when none is configured.
pub const DEFAULT_TARGET_PROVIDER: &str = "Cloudflare";

/// Options for zonefile generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// TTL for record sets without a positive TTL of their own
    pub default_ttl: u32,

    /// Destination provider quoted in the header comments
    pub target_provider: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            target_provider: DEFAULT_TARGET_PROVIDER.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Create the default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback TTL; zero keeps the built-in default
    #[must_use]
    pub fn default_ttl(mut self, ttl: u32) -> Self {
        self.default_ttl = if ttl == 0 { DEFAULT_TTL } else { ttl };
        self
    }

    /// Set the destination provider name; blank keeps the built-in default
    #[must_use]
    pub fn target_provider(mut self, provider: impl Into<String>) -> Self {
        let provider = provider.into();
        let provider = provider.trim();
        if !provider.is_empty() {
            self.target_provider = provider.to_string();
        }
        self
    }
}
