use nom::{
    error::{ErrorKind, ParseError},
    IResult,
};
use thiserror::Error;

use super::MinorVersion;
use crate::kinds::ShaderKind;

pub type NomGrammarResult<'a, T> = IResult<&'a str, T, GrammarError<&'a str>>;

#[derive(Debug, Error)]
pub enum GrammarError<I> {
    #[error("Internal Nom error: {1:?}")]
    Nom(I, ErrorKind),
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}
impl<I> ParseError<I> for GrammarError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        GrammarError::Nom(input, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Why a profile string didn't resolve to a shader model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("empty profile name")]
    Empty,
    #[error("unknown shader stage prefix in '{0}'")]
    UnknownStage(String),
    #[error("expected '_' at '{0}'")]
    MissingSeparator(String),
    #[error("bad major version '{0}', expected 4, 5 or 6")]
    BadMajor(String),
    #[error("bad minor version '{found}' for major version {major}")]
    BadMinor { major: u8, found: String },
    #[error("minor version 'x' is only allowed for lib_6_x, not {kind}_{major}")]
    OfflineNotAllowed { kind: ShaderKind, major: u8 },
    #[error("unexpected trailing characters '{0}'")]
    Trailing(String),
    #[error("no shader model {kind}_{major}_{minor}")]
    NotInTable {
        kind: ShaderKind,
        major: u8,
        minor: MinorVersion,
    },
    #[error("malformed profile name ({0:?})")]
    Malformed(ErrorKind),
}
impl<I> From<nom::Err<GrammarError<I>>> for ProfileError {
    fn from(value: nom::Err<GrammarError<I>>) -> Self {
        match value {
            // Every parser in the grammar is `complete`, so there is nothing more to wait for
            nom::Err::Incomplete(_) => ProfileError::Malformed(ErrorKind::Complete),
            nom::Err::Error(e) | nom::Err::Failure(e) => match e {
                GrammarError::Nom(_, kind) => ProfileError::Malformed(kind),
                GrammarError::Profile(p) => p,
            },
        }
    }
}
impl<I> From<ProfileError> for nom::Err<GrammarError<I>> {
    fn from(value: ProfileError) -> Self {
        nom::Err::Error(GrammarError::Profile(value))
    }
}
