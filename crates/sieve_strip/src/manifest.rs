//! Variant Manifests
//!
//! Hosts that batch their work, or want to replay a build offline, can hand
//! the stripper a JSON manifest listing every (shader, pass, stage) unit and
//! its candidate variants by keyword name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sieve_core::{Result, ShaderKeyword};

use crate::unit::{AssetGuid, PassType, ShaderStage, ShaderUnit};
use crate::variant::{ShaderPlatform, ShaderVariant};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestVariant {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub platform: ShaderPlatform,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestUnit {
    pub shader: String,
    #[serde(default)]
    pub guid: Option<AssetGuid>,
    #[serde(default)]
    pub pass: PassType,
    #[serde(default)]
    pub pass_name: String,
    #[serde(default)]
    pub stage: ShaderStage,
    #[serde(default)]
    pub variants: Vec<ManifestVariant>,
}

impl ManifestUnit {
    #[must_use]
    pub fn unit(&self) -> ShaderUnit {
        let mut unit = ShaderUnit::new(&self.shader)
            .with_pass(self.pass, &self.pass_name)
            .with_stage(self.stage);
        unit.guid = self.guid;
        unit
    }

    /// Candidate list for this unit.
    ///
    /// With `warn_unknown`, keyword names outside the catalog are logged
    /// (once per unit and name); they are kept either way.
    #[must_use]
    pub fn candidates(&self, warn_unknown: bool) -> Vec<ShaderVariant> {
        if warn_unknown {
            let mut unknown: Vec<&str> = self
                .variants
                .iter()
                .flat_map(|v| v.keywords.iter().map(String::as_str))
                .filter(|name| ShaderKeyword::from_name(name).is_none())
                .collect();
            unknown.sort_unstable();
            unknown.dedup();
            for name in unknown {
                log::warn!("{}: keyword '{name}' is not in the strip catalog", self.shader);
            }
        }

        self.variants
            .iter()
            .map(|v| ShaderVariant::from_keyword_names(v.keywords.iter().map(String::as_str), v.platform))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantManifest {
    #[serde(default)]
    pub units: Vec<ManifestUnit>,
}

impl VariantManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Total candidate count over all units.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.units.iter().map(|u| u.variants.len()).sum()
    }
}
