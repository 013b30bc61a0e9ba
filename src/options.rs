// Per-container mount options read from `data-*` attributes.

use folio_core::{ConfigError, Preset, SceneConfig};

pub const SCENE_ATTR: &str = "data-scene";
pub const SEED_ATTR: &str = "data-seed";
pub const COUNT_ATTR: &str = "data-count";
pub const ENDPOINT_ATTR: &str = "data-endpoint";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountOptions {
    pub preset: Preset,
    pub seed: Option<u64>,
    pub count: Option<usize>,
}

impl MountOptions {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            seed: None,
            count: None,
        }
    }

    /// Read options through `attr`, which returns the raw attribute value.
    /// A missing or unknown scene name is an error; unparsable numbers are
    /// ignored with a warning.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let name = attr(SCENE_ATTR).unwrap_or_default();
        let preset: Preset = name.parse()?;
        Ok(Self::with_overrides(preset, attr))
    }

    /// `preset` with seed and count overrides read through `attr`.
    pub fn with_overrides(preset: Preset, attr: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            preset,
            seed: parse_attr(SEED_ATTR, attr(SEED_ATTR)),
            count: parse_attr(COUNT_ATTR, attr(COUNT_ATTR)),
        }
    }

    /// Preset configuration with overrides applied. `fallback_seed` is used
    /// when no seed attribute was given.
    pub fn config(&self, fallback_seed: u64) -> Result<SceneConfig, ConfigError> {
        let mut b = self
            .preset
            .config()
            .to_builder()
            .seed(self.seed.unwrap_or(fallback_seed));
        if let Some(n) = self.count {
            b = b.object_count(n);
        }
        b.build()
    }
}

fn parse_attr<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[host] ignoring {}={:?}", name, raw);
            None
        }
    }
}
