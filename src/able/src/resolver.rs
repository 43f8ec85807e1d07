//! Ability resolution
//!
//! [`resolve`] composes the pipeline: group expansion, value extraction,
//! then value application. [`AbilityResolver`] owns a definition and can
//! optionally memoize results.
//!
//! # Example
//!
//! ```rust
//! use able::{resolve, GroupDefinition};
//!
//! let definition = GroupDefinition::new().with_group("writer", "article:{articleId}:write");
//! let resolved = resolve(&definition, &["writer", "?articleId[]=4"]);
//!
//! assert_eq!(resolved, vec!["writer", "article:4:write"]);
//! ```

use crate::access::{get_missing_abilities, AccessCheck};
use crate::error::{AbleError, Result};
use crate::group::{flatten, GroupDefinition};
use crate::types::AbilitySet;
use crate::values::{apply_values, extract_values};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Flatten, extract and apply values in one step
///
/// Aliases stay in the result alongside their expansion; annotation tokens
/// are consumed; templates are substituted with the extracted values.
pub fn resolve<S: AsRef<str>>(definition: &GroupDefinition, abilities: &[S]) -> AbilitySet {
    let flattened = flatten(definition, abilities);
    let (values, remainder) = extract_values(&flattened);
    apply_values(&remainder, &values)
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Memoize resolved ability lists
    pub enable_cache: bool,

    /// Maximum number of memoized entries
    pub max_cache_size: usize,

    /// Entry time-to-live in seconds
    pub cache_ttl_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enable_cache: false,
            max_cache_size: 10_000,
            cache_ttl_secs: 60,
        }
    }
}

impl ResolverConfig {
    /// Parse a configuration from JSON; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.enable_cache && self.max_cache_size == 0 {
            return Err(AbleError::InvalidConfig(
                "max_cache_size must be positive when caching is enabled".to_string(),
            ));
        }
        if self.enable_cache && self.cache_ttl_secs == 0 {
            return Err(AbleError::InvalidConfig(
                "cache_ttl_secs must be positive when caching is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Entry time-to-live
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Memoized resolution result
#[derive(Debug, Clone)]
struct CachedResult {
    abilities: AbilitySet,
    cached_at: Instant,
}

impl CachedResult {
    fn new(abilities: AbilitySet) -> Self {
        Self {
            abilities,
            cached_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() > ttl
    }
}

/// Resolver bound to a group definition
///
/// Cheap to clone; clones share the definition and the cache. The cache is
/// keyed by the exact, ordered input list, since result order depends on
/// input order.
#[derive(Clone)]
pub struct AbilityResolver {
    definition: Arc<GroupDefinition>,
    config: ResolverConfig,
    cache: Arc<DashMap<Vec<String>, CachedResult>>,
}

impl AbilityResolver {
    /// Create a resolver with the default configuration (no cache)
    pub fn new(definition: GroupDefinition) -> Self {
        Self::build(definition, ResolverConfig::default())
    }

    /// Create a resolver with a custom configuration
    pub fn with_config(definition: GroupDefinition, config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(definition, config))
    }

    fn build(definition: GroupDefinition, config: ResolverConfig) -> Self {
        info!(
            "AbilityResolver initialized with {} group(s), cache={}",
            definition.len(),
            config.enable_cache
        );
        Self {
            definition: Arc::new(definition),
            config,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// The group definition
    pub fn definition(&self) -> &GroupDefinition {
        &self.definition
    }

    /// The active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a caller's granted abilities
    pub fn resolve<S: AsRef<str>>(&self, abilities: &[S]) -> AbilitySet {
        if !self.config.enable_cache {
            return resolve(&self.definition, abilities);
        }

        let key: Vec<String> = abilities.iter().map(|a| a.as_ref().to_string()).collect();
        let ttl = self.config.cache_ttl();

        if let Some(cached) = self.cache.get(&key) {
            if !cached.is_expired(ttl) {
                debug!("Resolution cache hit");
                return cached.abilities.clone();
            }
            drop(cached);
            self.cache.remove(&key);
        }

        debug!("Resolution cache miss");
        let resolved = resolve(&self.definition, &key);

        if self.cache.len() >= self.config.max_cache_size {
            self.cleanup_expired();
        }
        // Size check and insert are not atomic; concurrent misses may overshoot
        // the limit by a few entries
        if self.cache.len() < self.config.max_cache_size {
            self.cache.insert(key, CachedResult::new(resolved.clone()));
        }

        resolved
    }

    /// Required abilities not covered by the resolved grant
    pub fn missing_abilities<A, R>(&self, granted: &[A], required: &[R]) -> AbilitySet
    where
        A: AsRef<str>,
        R: AsRef<str>,
    {
        get_missing_abilities(&self.resolve(granted), required)
    }

    /// Resolve `granted` and check it against `required`
    pub fn check<A, R>(&self, granted: &[A], required: &[R]) -> AccessCheck
    where
        A: AsRef<str>,
        R: AsRef<str>,
    {
        AccessCheck::check(&self.resolve(granted), required)
    }

    /// Whether the resolved grant contains every required ability
    pub fn can_access<A, R>(&self, granted: &[A], required: &[R]) -> bool
    where
        A: AsRef<str>,
        R: AsRef<str>,
    {
        self.check(granted, required).is_allowed()
    }

    /// Drop all memoized results
    pub fn invalidate_cache(&self) {
        self.cache.clear();
        debug!("Resolution cache invalidated");
    }

    /// Remove expired entries from the cache
    pub fn cleanup_expired(&self) {
        let ttl = self.config.cache_ttl();
        self.cache.retain(|_, entry| !entry.is_expired(ttl));
    }

    /// Cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            max_size: self.config.max_cache_size,
            ttl_seconds: self.config.cache_ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Current cache size
    pub size: usize,
    /// Maximum cache size
    pub max_size: usize,
    /// Cache TTL in seconds
    pub ttl_seconds: u64,
}
