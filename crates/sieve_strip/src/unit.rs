//! Shader Unit Identity
//!
//! A [`ShaderUnit`] names the (shader, pass, stage) triple one filtering call
//! operates on. It is shared read-only by every candidate variant of that
//! call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sieve_core::interner::{self, Symbol};
use sieve_core::SieveError;

// ─── PassType ─────────────────────────────────────────────────────────────────

/// Kind of rendering sub-program inside a shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassType {
    /// Regular lit / unlit pipeline pass.
    #[default]
    Forward,
    /// Default unlit fallback pass.
    Unlit,
    /// Renders depth into shadow maps.
    ShadowCaster,
    /// Depth-only prepass.
    DepthOnly,
    /// Motion vector output.
    MotionVectors,
    /// Lightmap / GI baking pass; only used by editor tooling.
    Meta,
}

impl PassType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Unlit => "unlit",
            Self::ShadowCaster => "shadow_caster",
            Self::DepthOnly => "depth_only",
            Self::MotionVectors => "motion_vectors",
            Self::Meta => "meta",
        }
    }
}

impl FromStr for PassType {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "unlit" => Ok(Self::Unlit),
            "shadow_caster" => Ok(Self::ShadowCaster),
            "depth_only" => Ok(Self::DepthOnly),
            "motion_vectors" => Ok(Self::MotionVectors),
            "meta" => Ok(Self::Meta),
            other => Err(SieveError::UnknownPassType(other.to_string())),
        }
    }
}

// ─── ShaderStage ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderStage {
    #[default]
    Vertex,
    Fragment,
    Geometry,
    Hull,
    Domain,
    Compute,
}

impl ShaderStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
            Self::Geometry => "geometry",
            Self::Hull => "hull",
            Self::Domain => "domain",
            Self::Compute => "compute",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShaderStage {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertex" => Ok(Self::Vertex),
            "fragment" => Ok(Self::Fragment),
            "geometry" => Ok(Self::Geometry),
            "hull" => Ok(Self::Hull),
            "domain" => Ok(Self::Domain),
            "compute" => Ok(Self::Compute),
            other => Err(SieveError::UnknownStage(other.to_string())),
        }
    }
}

// ─── AssetGuid ────────────────────────────────────────────────────────────────

/// 128-bit asset identifier, written as 32 hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetGuid(pub u128);

impl AssetGuid {
    /// Compile-time parse for catalog tables.
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`) on malformed input.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() == 32, "asset GUID must be 32 hex digits");
        let mut value = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            let digit = match bytes[i] {
                b @ b'0'..=b'9' => b - b'0',
                b @ b'a'..=b'f' => b - b'a' + 10,
                b @ b'A'..=b'F' => b - b'A' + 10,
                _ => panic!("asset GUID must be 32 hex digits"),
            };
            value = (value << 4) | digit as u128;
            i += 1;
        }
        Self(value)
    }
}

impl fmt::Display for AssetGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for AssetGuid {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SieveError::InvalidGuid(s.to_string()));
        }
        u128::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| SieveError::InvalidGuid(s.to_string()))
    }
}

impl TryFrom<String> for AssetGuid {
    type Error = SieveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetGuid> for String {
    fn from(guid: AssetGuid) -> Self {
        guid.to_string()
    }
}

// ─── ShaderUnit ───────────────────────────────────────────────────────────────

/// Identity of the (shader, pass, stage) a candidate list belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderUnit {
    pub name: Symbol,
    pub guid: Option<AssetGuid>,
    pub pass_type: PassType,
    pub pass_name: Symbol,
    pub stage: ShaderStage,
}

impl ShaderUnit {
    /// Creates a unit for a forward vertex program; adjust with the builders.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: interner::intern(name),
            guid: None,
            pass_type: PassType::Forward,
            pass_name: interner::intern(""),
            stage: ShaderStage::Vertex,
        }
    }

    #[must_use]
    pub fn with_guid(mut self, guid: AssetGuid) -> Self {
        self.guid = Some(guid);
        self
    }

    #[must_use]
    pub fn with_pass(mut self, pass_type: PassType, pass_name: &str) -> Self {
        self.pass_type = pass_type;
        self.pass_name = interner::intern(pass_name);
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: ShaderStage) -> Self {
        self.stage = stage;
        self
    }

    #[inline]
    #[must_use]
    pub fn name_str(&self) -> &'static str {
        interner::resolve(self.name)
    }

    #[inline]
    #[must_use]
    pub fn pass_name_str(&self) -> &'static str {
        interner::resolve(self.pass_name)
    }
}
