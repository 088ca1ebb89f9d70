//! A registry of DXIL shader models, the `<stage>_<major>_<minor>` targets a HLSL compiler accepts.
//!
//! Every supported profile lives in one static table, sorted by `(kind, major, minor)` and
//! terminated by an "invalid" sentinel. Lookups never fail - anything that doesn't resolve
//! returns the sentinel, so callers check [ShaderModel::is_valid] (or [ShaderModel::is_valid_for_dxil])
//! before using the result.
//!
//! - [ShaderModel::get] resolves a stage and version through a binary search over [ProfileKey]s.
//! - [ShaderModel::from_name] parses profile strings like `ps_6_5` or `lib_6_x`,
//!   with [ShaderModel::try_from_name] reporting a [ProfileError] instead.
//! - [ShaderModel::dxil_version], [ShaderModel::min_validator_version] and
//!   [ShaderModel::allow_derivatives] derive what code generation needs.
//! - [kinds] maps stage kinds and node launch types to and from their names.

#[macro_use]
extern crate num_derive;

pub mod kinds;
pub mod shader_model;

pub use kinds::{NodeLaunchType, ShaderKind, ShaderKindSet};
pub use shader_model::{
    MinorVersion, ProfileError, ProfileKey, ShaderModel, UavRegisterCount, Version,
    HIGHEST_MAJOR, HIGHEST_MINOR,
};
