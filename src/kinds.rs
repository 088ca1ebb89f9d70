use std::fmt;

use bitflags::bitflags;
use num_traits::FromPrimitive;
use phf::phf_map;

/// The pipeline stage a shader model targets.
///
/// The discriminants are the DXIL shader kind numbers.
/// They are part of [crate::ProfileKey] and index [SHADER_KIND_NAMES],
/// so new kinds must go directly before [ShaderKind::Invalid].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
#[repr(u32)]
pub enum ShaderKind {
    Pixel = 0,
    Vertex,
    Geometry,
    Hull,
    Domain,
    Compute,
    Library,
    RayGeneration,
    Intersection,
    AnyHit,
    ClosestHit,
    Miss,
    Callable,
    Mesh,
    Amplification,
    Node,
    Invalid,
}

/// Short names, indexed by [ShaderKind] ordinal
const SHADER_KIND_NAMES: [&str; ShaderKind::COUNT] = [
    "ps",
    "vs",
    "gs",
    "hs",
    "ds",
    "cs",
    "lib",
    "raygeneration",
    "intersection",
    "anyhit",
    "closesthit",
    "miss",
    "callable",
    "ms",
    "as",
    "node",
    "invalid",
];

/// Attribute spellings, as used by `[shader("...")]`.
/// Library and Invalid deliberately have no entry.
const SHADER_KIND_FULL_NAMES: phf::Map<&'static str, ShaderKind> = phf_map! {
    "pixel" => ShaderKind::Pixel,
    "vertex" => ShaderKind::Vertex,
    "geometry" => ShaderKind::Geometry,
    "hull" => ShaderKind::Hull,
    "domain" => ShaderKind::Domain,
    "compute" => ShaderKind::Compute,
    "raygeneration" => ShaderKind::RayGeneration,
    "intersection" => ShaderKind::Intersection,
    "anyhit" => ShaderKind::AnyHit,
    "closesthit" => ShaderKind::ClosestHit,
    "miss" => ShaderKind::Miss,
    "callable" => ShaderKind::Callable,
    "mesh" => ShaderKind::Mesh,
    "amplification" => ShaderKind::Amplification,
    "node" => ShaderKind::Node,
};

impl ShaderKind {
    /// Number of kinds, including [ShaderKind::Invalid]
    pub const COUNT: usize = ShaderKind::Invalid as usize + 1;

    pub const ALL: [ShaderKind; ShaderKind::COUNT] = [
        ShaderKind::Pixel,
        ShaderKind::Vertex,
        ShaderKind::Geometry,
        ShaderKind::Hull,
        ShaderKind::Domain,
        ShaderKind::Compute,
        ShaderKind::Library,
        ShaderKind::RayGeneration,
        ShaderKind::Intersection,
        ShaderKind::AnyHit,
        ShaderKind::ClosestHit,
        ShaderKind::Miss,
        ShaderKind::Callable,
        ShaderKind::Mesh,
        ShaderKind::Amplification,
        ShaderKind::Node,
        ShaderKind::Invalid,
    ];

    /// Decode a raw kind number, e.g. from serialized metadata.
    /// Out-of-range values become [ShaderKind::Invalid].
    pub fn from_ordinal(value: u32) -> Self {
        Self::from_u32(value).unwrap_or(ShaderKind::Invalid)
    }

    /// The short name, e.g. "ps" or "lib"
    pub fn name(self) -> &'static str {
        SHADER_KIND_NAMES[self as usize]
    }

    /// The attribute-style name, e.g. "pixel" or "raygeneration".
    ///
    /// Library and Invalid return an empty string.
    pub fn full_name(self) -> &'static str {
        match self {
            ShaderKind::Pixel => "pixel",
            ShaderKind::Vertex => "vertex",
            ShaderKind::Geometry => "geometry",
            ShaderKind::Hull => "hull",
            ShaderKind::Domain => "domain",
            ShaderKind::Compute => "compute",
            // Library has no full name for use with the shader attribute
            ShaderKind::Library | ShaderKind::Invalid => "",
            ShaderKind::RayGeneration => "raygeneration",
            ShaderKind::Intersection => "intersection",
            ShaderKind::AnyHit => "anyhit",
            ShaderKind::ClosestHit => "closesthit",
            ShaderKind::Miss => "miss",
            ShaderKind::Callable => "callable",
            ShaderKind::Mesh => "mesh",
            ShaderKind::Amplification => "amplification",
            ShaderKind::Node => "node",
        }
    }

    /// Inverse of [ShaderKind::full_name]. Case-sensitive, unknown names give [ShaderKind::Invalid].
    pub fn from_full_name(name: &str) -> Self {
        SHADER_KIND_FULL_NAMES
            .get(name)
            .copied()
            .unwrap_or(ShaderKind::Invalid)
    }

    pub fn is_ray_tracing(self) -> bool {
        ShaderKindSet::RAY_TRACING.intersects(self.into())
    }
}
impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Arrays sized by the kind count have to move in lockstep with the enum.
const _: () = assert!(SHADER_KIND_NAMES.len() == ShaderKind::Invalid as usize + 1);
const _: () = assert!(NODE_LAUNCH_TYPE_NAMES.len() == NodeLaunchType::Thread as usize + 1);

bitflags! {
    /// A set of [ShaderKind]s, one bit per ordinal
    pub struct ShaderKindSet: u32 {
        const PIXEL = 1 << ShaderKind::Pixel as u32;
        const VERTEX = 1 << ShaderKind::Vertex as u32;
        const GEOMETRY = 1 << ShaderKind::Geometry as u32;
        const HULL = 1 << ShaderKind::Hull as u32;
        const DOMAIN = 1 << ShaderKind::Domain as u32;
        const COMPUTE = 1 << ShaderKind::Compute as u32;
        const LIBRARY = 1 << ShaderKind::Library as u32;
        const RAY_GENERATION = 1 << ShaderKind::RayGeneration as u32;
        const INTERSECTION = 1 << ShaderKind::Intersection as u32;
        const ANY_HIT = 1 << ShaderKind::AnyHit as u32;
        const CLOSEST_HIT = 1 << ShaderKind::ClosestHit as u32;
        const MISS = 1 << ShaderKind::Miss as u32;
        const CALLABLE = 1 << ShaderKind::Callable as u32;
        const MESH = 1 << ShaderKind::Mesh as u32;
        const AMPLIFICATION = 1 << ShaderKind::Amplification as u32;
        const NODE = 1 << ShaderKind::Node as u32;

        const RAY_TRACING = Self::RAY_GENERATION.bits | Self::INTERSECTION.bits | Self::ANY_HIT.bits
            | Self::CLOSEST_HIT.bits | Self::MISS.bits | Self::CALLABLE.bits;
        /// Stages that may always use derivative instructions
        const DERIVATIVES_ALWAYS = Self::PIXEL.bits | Self::LIBRARY.bits | Self::NODE.bits;
        /// Stages that gained derivative instructions in SM 6.6
        const DERIVATIVES_SM66 = Self::COMPUTE.bits | Self::AMPLIFICATION.bits | Self::MESH.bits;
    }
}
impl From<ShaderKind> for ShaderKindSet {
    fn from(kind: ShaderKind) -> Self {
        match kind {
            ShaderKind::Invalid => ShaderKindSet::empty(),
            _ => ShaderKindSet::from_bits_truncate(1 << kind as u32),
        }
    }
}

/// How a work-graph node is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
#[repr(u32)]
pub enum NodeLaunchType {
    Invalid = 0,
    Broadcasting,
    Coalescing,
    Thread,
}

const NODE_LAUNCH_TYPE_NAMES: [&str; NodeLaunchType::Thread as usize + 1] =
    ["invalid", "broadcasting", "coalescing", "thread"];

const NODE_LAUNCH_TYPES: phf::Map<&'static str, NodeLaunchType> = phf_map! {
    "broadcasting" => NodeLaunchType::Broadcasting,
    "coalescing" => NodeLaunchType::Coalescing,
    "thread" => NodeLaunchType::Thread,
};

impl NodeLaunchType {
    pub fn from_ordinal(value: u32) -> Self {
        Self::from_u32(value).unwrap_or(NodeLaunchType::Invalid)
    }

    pub fn name(self) -> &'static str {
        NODE_LAUNCH_TYPE_NAMES[self as usize]
    }

    /// Case-insensitive lookup, unknown names give [NodeLaunchType::Invalid]
    pub fn from_name(name: &str) -> Self {
        NODE_LAUNCH_TYPES
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(NodeLaunchType::Invalid)
    }
}
impl fmt::Display for NodeLaunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_dxil() {
        assert_eq!(ShaderKind::Library as u32, 6);
        assert_eq!(ShaderKind::Mesh as u32, 13);
        assert_eq!(ShaderKind::Amplification as u32, 14);
        assert_eq!(ShaderKind::Invalid as u32, 16);
        for (i, kind) in ShaderKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn kind_sets() {
        assert_eq!(ShaderKindSet::from(ShaderKind::Invalid), ShaderKindSet::empty());
        assert!(ShaderKindSet::DERIVATIVES_ALWAYS.contains(ShaderKind::Node.into()));
        assert!(!ShaderKindSet::DERIVATIVES_SM66.contains(ShaderKind::Pixel.into()));
        assert!(ShaderKind::Miss.is_ray_tracing());
        assert!(!ShaderKind::Mesh.is_ray_tracing());
        assert!(!ShaderKind::Invalid.is_ray_tracing());
    }
}
