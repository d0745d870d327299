//! Shader Catalog
//!
//! Some rules only apply to particular shaders (the screen-space shadow
//! resolve, the terrain shaders, post-processing shaders), and the reporting
//! path needs to know which shaders ship with the pipeline itself. The
//! [`ShaderCatalog`] answers both from three sources: exact interned names,
//! asset GUIDs, and name fragments matched by containment (so the terrain
//! add-pass and base-pass shaders classify like the terrain shader itself).
//! A unit is classified once per filtering call, never per variant.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use sieve_core::interner::{self, Symbol};

use crate::unit::{AssetGuid, ShaderUnit};

bitflags! {
    /// Categories a shader can belong to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ShaderClass: u8 {
        /// Resolves the main light shadow map into screen space.
        const SCREEN_SPACE_SHADOWS = 1 << 0;
        /// Built-in terrain shader; its alpha test implements terrain holes.
        const TERRAIN_LIT          = 1 << 1;
        /// Only needed when post-processing is part of the build.
        const POST_PROCESSING      = 1 << 2;
        /// Ships with the render pipeline.
        const PIPELINE             = 1 << 3;
    }
}

/// Name fragment shared by every shader that ships with the pipeline.
pub const PIPELINE_NAMESPACE: &str = "Universal Render Pipeline";

pub const SCREEN_SPACE_SHADOWS_SHADER: &str = "Hidden/Universal Render Pipeline/ScreenSpaceShadows";
pub const TERRAIN_LIT_SHADER: &str = "Universal Render Pipeline/Terrain/Lit";

/// Any shader whose name contains this fragment resolves screen-space shadows.
pub const SCREEN_SPACE_SHADOWS_FRAGMENT: &str = "ScreenSpaceShadows";

/// Covers the terrain shader and its hidden add-pass / base-pass companions.
pub const TERRAIN_LIT_FRAGMENT: &str = TERRAIN_LIT_SHADER;

/// Asset GUIDs of the pipeline's post-processing shaders.
pub const POST_PROCESSING_SHADER_GUIDS: [AssetGuid; 11] = [
    AssetGuid::from_hex("5f1864addb451f54bae8c86d230f736e"), // Bloom
    AssetGuid::from_hex("2aed67ad60045d54ba3a00c91e2d2631"), // BokehDepthOfField
    AssetGuid::from_hex("1edcd131364091c46a17cbff0b1de97a"), // CameraMotionBlur
    AssetGuid::from_hex("c49e63ed1bbcb334780a3bd19dfed403"), // FinalPost
    AssetGuid::from_hex("5e7134d6e63e0bc47a1dd2669cedb379"), // GaussianDepthOfField
    AssetGuid::from_hex("ec9fec698a3456d4fb18cf8bacb7a2bc"), // LutBuilderHdr
    AssetGuid::from_hex("65df88701913c224d95fc554db28381a"), // LutBuilderLdr
    AssetGuid::from_hex("a15b78cf8ca26ca4fb2090293153c62c"), // PaniniProjection
    AssetGuid::from_hex("1121bb4e615ca3c48b214e79e841e823"), // StopNaN
    AssetGuid::from_hex("63eaba0ebfb82cc43bde059b4a8c65f6"), // SubpixelMorphologicalAntialiasing
    AssetGuid::from_hex("e7857e9d0c934dc4f83f270f8447b006"), // UberPost
];

/// Identity → category lookup for shaders.
#[derive(Debug, Clone)]
pub struct ShaderCatalog {
    by_name: FxHashMap<Symbol, ShaderClass>,
    by_guid: FxHashMap<AssetGuid, ShaderClass>,
    by_fragment: Vec<(String, ShaderClass)>,
    namespace: String,
}

impl Default for ShaderCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ShaderCatalog {
    /// A catalog with no registered shaders.
    #[must_use]
    pub fn empty(namespace: impl Into<String>) -> Self {
        Self {
            by_name: FxHashMap::default(),
            by_guid: FxHashMap::default(),
            by_fragment: Vec::new(),
            namespace: namespace.into(),
        }
    }

    /// The pipeline's own shaders.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::empty(PIPELINE_NAMESPACE);
        catalog.register_fragment(SCREEN_SPACE_SHADOWS_FRAGMENT, ShaderClass::SCREEN_SPACE_SHADOWS);
        catalog.register_fragment(TERRAIN_LIT_FRAGMENT, ShaderClass::TERRAIN_LIT);
        for guid in POST_PROCESSING_SHADER_GUIDS {
            catalog.register_guid(guid, ShaderClass::POST_PROCESSING | ShaderClass::PIPELINE);
        }
        catalog
    }

    /// Adds categories to the shader with this name.
    pub fn register_name(&mut self, name: &str, class: ShaderClass) {
        *self.by_name.entry(interner::intern(name)).or_default() |= class;
    }

    /// Adds categories to every shader whose name contains `fragment`.
    pub fn register_fragment(&mut self, fragment: &str, class: ShaderClass) {
        match self.by_fragment.iter_mut().find(|(f, _)| f.as_str() == fragment) {
            Some((_, existing)) => *existing |= class,
            None => self.by_fragment.push((fragment.to_owned(), class)),
        }
    }

    /// Adds categories to the shader with this asset GUID.
    pub fn register_guid(&mut self, guid: AssetGuid, class: ShaderClass) {
        *self.by_guid.entry(guid).or_default() |= class;
    }

    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// GUIDs dropped when post-processing is excluded from the build.
    pub fn post_processing_guids(&self) -> impl Iterator<Item = AssetGuid> + '_ {
        self.by_guid
            .iter()
            .filter(|(_, class)| class.contains(ShaderClass::POST_PROCESSING))
            .map(|(&guid, _)| guid)
    }

    /// All categories the unit's shader belongs to.
    #[must_use]
    pub fn classify(&self, unit: &ShaderUnit) -> ShaderClass {
        let mut class = self.by_name.get(&unit.name).copied().unwrap_or_default();

        if let Some(guid) = unit.guid {
            class |= self.by_guid.get(&guid).copied().unwrap_or_default();
        }

        let name = unit.name_str();
        for (fragment, fragment_class) in &self.by_fragment {
            if name.contains(fragment.as_str()) {
                class |= *fragment_class;
            }
        }

        if !self.namespace.is_empty() && name.contains(self.namespace.as_str()) {
            class |= ShaderClass::PIPELINE;
        }

        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_named_shaders() {
        let catalog = ShaderCatalog::builtin();

        let ss = catalog.classify(&ShaderUnit::new(SCREEN_SPACE_SHADOWS_SHADER));
        assert!(ss.contains(ShaderClass::SCREEN_SPACE_SHADOWS | ShaderClass::PIPELINE));

        let terrain = catalog.classify(&ShaderUnit::new(TERRAIN_LIT_SHADER));
        assert!(terrain.contains(ShaderClass::TERRAIN_LIT | ShaderClass::PIPELINE));
        assert!(!terrain.contains(ShaderClass::POST_PROCESSING));
    }

    #[test]
    fn test_post_processing_by_guid() {
        let catalog = ShaderCatalog::builtin();
        let bloom = ShaderUnit::new("Hidden/Universal Render Pipeline/Bloom")
            .with_guid(POST_PROCESSING_SHADER_GUIDS[0]);
        assert!(catalog.classify(&bloom).contains(ShaderClass::POST_PROCESSING));

        // Same name, foreign asset: not the pipeline's bloom.
        let copy = ShaderUnit::new("Hidden/Universal Render Pipeline/Bloom")
            .with_guid(AssetGuid(42));
        assert!(!catalog.classify(&copy).contains(ShaderClass::POST_PROCESSING));

        assert_eq!(catalog.post_processing_guids().count(), 11);
    }

    #[test]
    fn test_namespace_containment() {
        let catalog = ShaderCatalog::builtin();
        let class_of = |name: &str| catalog.classify(&ShaderUnit::new(name));

        assert!(class_of("Universal Render Pipeline/Lit").contains(ShaderClass::PIPELINE));
        assert!(class_of("Hidden/Universal Render Pipeline/Blit").contains(ShaderClass::PIPELINE));
        assert!(class_of("Custom/Universal Render Pipeline/Toon").contains(ShaderClass::PIPELINE));
        assert!(!class_of("Custom/Toon").contains(ShaderClass::PIPELINE));
        assert_eq!(class_of("Custom/Toon"), ShaderClass::empty());
    }

    #[test]
    fn test_fragments_cover_companion_shaders() {
        let catalog = ShaderCatalog::builtin();
        let class_of = |name: &str| catalog.classify(&ShaderUnit::new(name));

        for name in [
            TERRAIN_LIT_SHADER,
            "Hidden/Universal Render Pipeline/Terrain/Lit (Add Pass)",
            "Hidden/Universal Render Pipeline/Terrain/Lit (Base Pass)",
        ] {
            assert!(class_of(name).contains(ShaderClass::TERRAIN_LIT), "{name}");
        }
        assert!(!class_of("Universal Render Pipeline/Lit").contains(ShaderClass::TERRAIN_LIT));

        for name in [SCREEN_SPACE_SHADOWS_SHADER, "Universal Render Pipeline/ScreenSpaceShadows"] {
            assert!(class_of(name).contains(ShaderClass::SCREEN_SPACE_SHADOWS), "{name}");
        }
    }

    #[test]
    fn test_register_user_shader() {
        let mut catalog = ShaderCatalog::empty("");
        catalog.register_name("Studio/ContactShadows", ShaderClass::SCREEN_SPACE_SHADOWS);
        catalog.register_name("Studio/ContactShadows", ShaderClass::PIPELINE);
        catalog.register_fragment("Studio/Terrain", ShaderClass::TERRAIN_LIT);

        let class = catalog.classify(&ShaderUnit::new("Studio/ContactShadows"));
        assert_eq!(class, ShaderClass::SCREEN_SPACE_SHADOWS | ShaderClass::PIPELINE);
        assert_eq!(catalog.post_processing_guids().count(), 0);

        let terrain = catalog.classify(&ShaderUnit::new("Studio/Terrain/Grass"));
        assert_eq!(terrain, ShaderClass::TERRAIN_LIT);
    }
}
