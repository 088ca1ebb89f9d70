use std::fmt;

use crate::kinds::{ShaderKind, ShaderKindSet};

pub mod error;
pub mod grammar;
pub mod lookup;
mod table;

pub use error::ProfileError;
pub use lookup::ProfileKey;

/// The only major version that produces DXIL
pub const HIGHEST_MAJOR: u8 = 6;
/// The newest supported minor of [HIGHEST_MAJOR].
/// Offline libraries always target this.
pub const HIGHEST_MINOR: u8 = 8;
/// How [MinorVersion::Offline] is encoded in a [ProfileKey]
pub const OFFLINE_MINOR_CODE: u8 = 0xF;

/// The minor half of a shader model version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MinorVersion {
    Numeric(u8),
    /// `lib_6_x`: for offline linking only, with relaxed restrictions.
    /// Orders after every numeric minor.
    Offline,
}
impl MinorVersion {
    pub fn code(self) -> u8 {
        match self {
            MinorVersion::Numeric(n) => n,
            MinorVersion::Offline => OFFLINE_MINOR_CODE,
        }
    }
}
impl From<u8> for MinorVersion {
    fn from(n: u8) -> Self {
        Self::Numeric(n)
    }
}
impl fmt::Display for MinorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinorVersion::Numeric(n) => write!(f, "{}", n),
            MinorVersion::Offline => f.write_str("x"),
        }
    }
}

/// Upper bound on UAV slots a shader model can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UavRegisterCount {
    Fixed(u32),
    Unlimited,
}
impl fmt::Display for UavRegisterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UavRegisterCount::Fixed(n) => write!(f, "{}", n),
            UavRegisterCount::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// A plain `major.minor` pair, used for the DXIL and validator versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}
impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// One compilation target: a stage plus a version, with its resource limits.
///
/// Instances only exist inside the static table, so callers hold `&'static ShaderModel`.
/// Obtain them with [ShaderModel::get] or [ShaderModel::from_name].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderModel {
    kind: ShaderKind,
    major: u8,
    minor: MinorVersion,
    name: &'static str,
    input_registers: u32,
    output_registers: u32,
    supports_typed_uavs: bool,
    uav_registers: UavRegisterCount,
}

impl ShaderModel {
    const fn new(
        kind: ShaderKind,
        major: u8,
        minor: MinorVersion,
        name: &'static str,
        input_registers: u32,
        output_registers: u32,
        supports_typed_uavs: bool,
        uav_registers: UavRegisterCount,
    ) -> Self {
        Self {
            kind,
            major,
            minor,
            name,
            input_registers,
            output_registers,
            supports_typed_uavs,
            uav_registers,
        }
    }

    /// The sentinel returned for anything that doesn't resolve
    pub fn invalid() -> &'static ShaderModel {
        table::invalid()
    }

    /// Every real shader model, in ascending `(kind, major, minor)` order
    pub fn all() -> impl Iterator<Item = &'static ShaderModel> {
        table::entries().iter()
    }

    pub fn kind(&self) -> ShaderKind {
        self.kind
    }
    pub fn major(&self) -> u8 {
        self.major
    }
    pub fn minor(&self) -> MinorVersion {
        self.minor
    }
    /// The canonical profile string, e.g. "ps_6_5"
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
    pub fn input_registers(&self) -> u32 {
        self.input_registers
    }
    pub fn output_registers(&self) -> u32 {
        self.output_registers
    }
    pub fn supports_typed_uavs(&self) -> bool {
        self.supports_typed_uavs
    }
    pub fn uav_registers(&self) -> UavRegisterCount {
        self.uav_registers
    }
    /// Whether any UAV slot can be bound.
    /// Every profile that supports UAVs has a non-zero limit, so this is derived rather than stored.
    pub fn supports_uavs(&self) -> bool {
        self.uav_registers != UavRegisterCount::Fixed(0)
    }

    pub fn key(&self) -> ProfileKey {
        ProfileKey::new(self.kind, self.major, self.minor)
    }

    pub fn is_valid(&self) -> bool {
        self.kind != ShaderKind::Invalid
    }

    /// Whether this model compiles to DXIL.
    ///
    /// SM 4/5 entries are in the table for validating targets but never produce DXIL,
    /// and the offline minor is only meaningful for libraries.
    pub fn is_valid_for_dxil(&self) -> bool {
        if !self.is_valid() || self.major != HIGHEST_MAJOR {
            return false;
        }
        match self.minor {
            MinorVersion::Numeric(n) => n <= HIGHEST_MINOR,
            MinorVersion::Offline => self.kind == ShaderKind::Library,
        }
    }

    /// The DXIL version this model compiles to.
    ///
    /// Offline libraries are relinked before use, so they target the newest DXIL.
    pub fn dxil_version(&self) -> Version {
        debug_assert!(self.is_valid_for_dxil(), "invalid shader model {}", self.name);
        match self.minor {
            MinorVersion::Numeric(n) => Version::new(1, n.into()),
            MinorVersion::Offline => Version::new(1, HIGHEST_MINOR.into()),
        }
    }

    /// The oldest validator that accepts output for this model.
    ///
    /// Offline libraries are never validated on their own and report `0.0`.
    pub fn min_validator_version(&self) -> Version {
        debug_assert!(self.is_valid_for_dxil(), "invalid shader model {}", self.name);
        match self.minor {
            MinorVersion::Numeric(n) => Version::new(1, n.into()),
            MinorVersion::Offline => Version::new(0, 0),
        }
    }

    /// True if this model's version is `major.minor` or newer.
    /// The offline minor counts as newer than any numeric minor.
    pub fn is_sm_at_least(&self, major: u8, minor: u8) -> bool {
        (self.major, self.minor) >= (major, MinorVersion::Numeric(minor))
    }
    pub fn is_sm50_plus(&self) -> bool {
        self.is_sm_at_least(5, 0)
    }
    pub fn is_sm51_plus(&self) -> bool {
        self.is_sm_at_least(5, 1)
    }
    pub fn is_sm60_plus(&self) -> bool {
        self.is_sm_at_least(6, 0)
    }
    pub fn is_sm61_plus(&self) -> bool {
        self.is_sm_at_least(6, 1)
    }
    pub fn is_sm62_plus(&self) -> bool {
        self.is_sm_at_least(6, 2)
    }
    pub fn is_sm63_plus(&self) -> bool {
        self.is_sm_at_least(6, 3)
    }
    pub fn is_sm64_plus(&self) -> bool {
        self.is_sm_at_least(6, 4)
    }
    pub fn is_sm65_plus(&self) -> bool {
        self.is_sm_at_least(6, 5)
    }
    pub fn is_sm66_plus(&self) -> bool {
        self.is_sm_at_least(6, 6)
    }
    pub fn is_sm67_plus(&self) -> bool {
        self.is_sm_at_least(6, 7)
    }
    pub fn is_sm68_plus(&self) -> bool {
        self.is_sm_at_least(6, 8)
    }

    /// Whether a shader of stage `kind` compiled against this model may use derivative instructions.
    ///
    /// `kind` is passed separately because library targets host entry points of many stages.
    pub fn allow_derivatives(&self, kind: ShaderKind) -> bool {
        let kind: ShaderKindSet = kind.into();
        if ShaderKindSet::DERIVATIVES_ALWAYS.intersects(kind) {
            true
        } else if ShaderKindSet::DERIVATIVES_SM66.intersects(kind) {
            self.is_sm66_plus()
        } else {
            false
        }
    }

    pub fn is_ps(&self) -> bool {
        self.kind == ShaderKind::Pixel
    }
    pub fn is_vs(&self) -> bool {
        self.kind == ShaderKind::Vertex
    }
    pub fn is_gs(&self) -> bool {
        self.kind == ShaderKind::Geometry
    }
    pub fn is_hs(&self) -> bool {
        self.kind == ShaderKind::Hull
    }
    pub fn is_ds(&self) -> bool {
        self.kind == ShaderKind::Domain
    }
    pub fn is_cs(&self) -> bool {
        self.kind == ShaderKind::Compute
    }
    pub fn is_lib(&self) -> bool {
        self.kind == ShaderKind::Library
    }
    pub fn is_ms(&self) -> bool {
        self.kind == ShaderKind::Mesh
    }
    pub fn is_as(&self) -> bool {
        self.kind == ShaderKind::Amplification
    }
    pub fn is_ray(&self) -> bool {
        self.kind.is_ray_tracing()
    }
}
impl fmt::Display for ShaderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
