//! Per-run generation context.

use star_system::{GovType, Random, SystemPath};

use crate::config::GeneratorConfig;

/// Inputs every generation step needs about the system being built.
///
/// Groups the seed material and sector flags to reduce function parameter
/// counts.
#[derive(Debug, Clone, Copy)]
pub struct GenContext {
    pub path: SystemPath,
    pub config: GeneratorConfig,
    /// Home systems get a fixed human proximity
    pub is_home_system: bool,
    /// Government fixed by a custom definition
    pub gov_type: Option<GovType>,
}

impl GenContext {
    pub fn new(path: SystemPath, config: GeneratorConfig) -> Self {
        Self {
            path: path.system_only(),
            config,
            is_home_system: false,
            gov_type: None,
        }
    }

    pub fn universe_seed(&self) -> u32 {
        self.config.universe_seed
    }

    /// A fresh stream seeded with `[system_index, x, y, z, tail...]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use star_system::SystemPath;
    /// use system_generator::{GenContext, GeneratorConfig};
    ///
    /// let ctx = GenContext::new(SystemPath::new(1, 2, 3, 4), GeneratorConfig::default());
    /// let a = ctx.stream(&[7]).int32();
    /// let b = ctx.stream(&[7]).int32();
    /// assert_eq!(a, b);
    /// ```
    pub fn stream(&self, tail: &[u32]) -> Random {
        let mut words = self.path.seed_words().to_vec();
        words.extend_from_slice(tail);
        Random::new(&words)
    }
}
