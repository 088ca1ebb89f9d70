//! Parser for profile strings: `<stage>_<major>_<minor>`, e.g. `ps_6_5` or `lib_6_x`.

use nom::{
    bytes::complete::tag,
    character::complete::{anychar, char},
    combinator::eof,
};

use super::{
    error::{GrammarError, NomGrammarResult, ProfileError},
    MinorVersion, ShaderModel, HIGHEST_MAJOR, HIGHEST_MINOR,
};
use crate::kinds::ShaderKind;

pub struct StagePrefix {
    pub literal: &'static str,
    pub kind: ShaderKind,
}

/// Stages that can be named in a profile string, tried in order.
/// Ray tracing and node stages only exist inside libraries.
pub const STAGE_PREFIXES: [StagePrefix; 9] = [
    StagePrefix { literal: "ps", kind: ShaderKind::Pixel },
    StagePrefix { literal: "vs", kind: ShaderKind::Vertex },
    StagePrefix { literal: "gs", kind: ShaderKind::Geometry },
    StagePrefix { literal: "hs", kind: ShaderKind::Hull },
    StagePrefix { literal: "ds", kind: ShaderKind::Domain },
    StagePrefix { literal: "cs", kind: ShaderKind::Compute },
    StagePrefix { literal: "lib", kind: ShaderKind::Library },
    StagePrefix { literal: "ms", kind: ShaderKind::Mesh },
    StagePrefix { literal: "as", kind: ShaderKind::Amplification },
];

pub fn parse_stage(data: &str) -> NomGrammarResult<ShaderKind> {
    for prefix in STAGE_PREFIXES.iter() {
        if let Ok((data, _)) = tag::<_, _, GrammarError<&str>>(prefix.literal)(data) {
            return Ok((data, prefix.kind));
        }
    }
    Err(ProfileError::UnknownStage(data.to_owned()).into())
}

fn parse_separator(data: &str) -> NomGrammarResult<()> {
    match char::<_, GrammarError<&str>>('_')(data) {
        Ok((data, _)) => Ok((data, ())),
        Err(_) => Err(ProfileError::MissingSeparator(data.to_owned()).into()),
    }
}

/// A single digit, 4 through [HIGHEST_MAJOR]
pub fn parse_major(data: &str) -> NomGrammarResult<u8> {
    let (rest, c) = match anychar::<_, GrammarError<&str>>(data) {
        Ok(ok) => ok,
        Err(_) => return Err(ProfileError::BadMajor(String::new()).into()),
    };
    match c.to_digit(10) {
        Some(major @ 4..=6) => Ok((rest, major as u8)),
        _ => Err(ProfileError::BadMajor(c.to_string()).into()),
    }
}

/// A single character. `0` and `1` exist for every major, `2` and up only for SM6,
/// and `x` only for SM6 libraries.
pub fn parse_minor(data: &str, kind: ShaderKind, major: u8) -> NomGrammarResult<MinorVersion> {
    let (rest, c) = match anychar::<_, GrammarError<&str>>(data) {
        Ok(ok) => ok,
        Err(_) => {
            return Err(ProfileError::BadMinor {
                major,
                found: String::new(),
            }
            .into())
        }
    };
    let minor = match c {
        '0' | '1' => MinorVersion::Numeric(c as u8 - b'0'),
        '2'..='9' if major == HIGHEST_MAJOR && (c as u8 - b'0') <= HIGHEST_MINOR => {
            MinorVersion::Numeric(c as u8 - b'0')
        }
        'x' if kind == ShaderKind::Library && major == HIGHEST_MAJOR => MinorVersion::Offline,
        'x' => return Err(ProfileError::OfflineNotAllowed { kind, major }.into()),
        _ => {
            return Err(ProfileError::BadMinor {
                major,
                found: c.to_string(),
            }
            .into())
        }
    };
    Ok((rest, minor))
}

fn parse_end(data: &str) -> NomGrammarResult<()> {
    match eof::<_, GrammarError<&str>>(data) {
        Ok((data, _)) => Ok((data, ())),
        Err(_) => Err(ProfileError::Trailing(data.to_owned()).into()),
    }
}

/// Decode a whole profile string into its parts.
///
/// This only checks the syntax. The parts may still name a shader model that doesn't exist, e.g. `hs_4_0`.
pub fn parse_profile_name(data: &str) -> NomGrammarResult<(ShaderKind, u8, MinorVersion)> {
    if data.is_empty() {
        return Err(ProfileError::Empty.into());
    }
    let (data, kind) = parse_stage(data)?;
    let (data, _) = parse_separator(data)?;
    let (data, major) = parse_major(data)?;
    let (data, _) = parse_separator(data)?;
    let (data, minor) = parse_minor(data, kind, major)?;
    let (data, _) = parse_end(data)?;
    Ok((data, (kind, major, minor)))
}

impl ShaderModel {
    /// Resolve a profile string, reporting why it was rejected
    pub fn try_from_name(name: &str) -> Result<&'static ShaderModel, ProfileError> {
        let (_, (kind, major, minor)) = parse_profile_name(name)?;
        let sm = ShaderModel::get(kind, major, minor);
        if sm.is_valid() {
            Ok(sm)
        } else {
            Err(ProfileError::NotInTable { kind, major, minor })
        }
    }

    /// Resolve a profile string such as `ps_6_5`.
    ///
    /// Never fails: malformed or unknown names resolve to [ShaderModel::invalid].
    pub fn from_name(name: &str) -> &'static ShaderModel {
        match ShaderModel::try_from_name(name) {
            Ok(sm) => sm,
            Err(err) => {
                tracing::debug!(name, %err, "rejected shader model name");
                ShaderModel::invalid()
            }
        }
    }
}
