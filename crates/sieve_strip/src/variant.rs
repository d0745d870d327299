//! Candidate Variant Descriptors
//!
//! A [`ShaderVariant`] is what the compiler front end hands over for each
//! keyword combination it intends to compile: the enabled keywords and the
//! target platform. Rules only read it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sieve_core::interner::{self, Symbol};
use sieve_core::{KeywordSet, ShaderKeyword, SieveError};
use smallvec::SmallVec;

/// Target compiler / graphics API of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderPlatform {
    /// OpenGL ES 2.0; no cascaded shadow maps.
    Gles20,
    Gles3x,
    #[serde(rename = "opengl_core")]
    OpenGlCore,
    #[serde(rename = "d3d11")]
    D3D11,
    Metal,
    #[default]
    Vulkan,
    WebGpu,
    Other,
}

impl ShaderPlatform {
    /// Legacy APIs that cannot sample cascaded shadow maps.
    #[inline]
    #[must_use]
    pub const fn is_limited(self) -> bool {
        matches!(self, Self::Gles20)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gles20 => "gles20",
            Self::Gles3x => "gles3x",
            Self::OpenGlCore => "opengl_core",
            Self::D3D11 => "d3d11",
            Self::Metal => "metal",
            Self::Vulkan => "vulkan",
            Self::WebGpu => "web_gpu",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ShaderPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShaderPlatform {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gles20" => Ok(Self::Gles20),
            "gles3x" => Ok(Self::Gles3x),
            "opengl_core" => Ok(Self::OpenGlCore),
            "d3d11" => Ok(Self::D3D11),
            "metal" => Ok(Self::Metal),
            "vulkan" => Ok(Self::Vulkan),
            "web_gpu" => Ok(Self::WebGpu),
            "other" => Ok(Self::Other),
            other => Err(SieveError::UnknownPlatform(other.to_string())),
        }
    }
}

/// One candidate compiled variant.
///
/// `extra_keywords` holds enabled keywords outside the catalog (material
/// toggles and the like). They are carried through so the host gets back
/// exactly what it submitted, but no rule ever looks at them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ShaderVariant {
    pub keywords: KeywordSet,
    pub platform: ShaderPlatform,
    pub extra_keywords: SmallVec<[Symbol; 4]>,
}

impl ShaderVariant {
    #[must_use]
    pub fn new(keywords: KeywordSet, platform: ShaderPlatform) -> Self {
        Self {
            keywords,
            platform,
            extra_keywords: SmallVec::new(),
        }
    }

    /// Builds a variant from the keyword names the compiler reports.
    ///
    /// Catalog names become [`KeywordSet`] bits; everything else is interned
    /// into `extra_keywords`.
    pub fn from_keyword_names<'a, I>(names: I, platform: ShaderPlatform) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut variant = Self::new(KeywordSet::empty(), platform);
        for name in names {
            match ShaderKeyword::from_name(name) {
                Some(keyword) => variant.keywords.enable(keyword),
                None => {
                    let sym = interner::intern(name);
                    if !variant.extra_keywords.contains(&sym) {
                        variant.extra_keywords.push(sym);
                    }
                }
            }
        }
        variant
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self, keyword: ShaderKeyword) -> bool {
        self.keywords.is_enabled(keyword)
    }

    /// All enabled keyword names, catalog keywords first.
    pub fn keyword_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keywords
            .keywords()
            .map(ShaderKeyword::name)
            .chain(self.extra_keywords.iter().map(|&sym| interner::resolve(sym)))
    }
}
