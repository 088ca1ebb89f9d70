use std::fmt;

use bitutils::bits;
use lazy_static::lazy_static;

use super::{table, MinorVersion, ShaderModel, OFFLINE_MINOR_CODE};
use crate::kinds::ShaderKind;

/// The sort key of a shader model: `kind << 16 | major << 8 | minor`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileKey(u32);
impl ProfileKey {
    pub fn new(kind: ShaderKind, major: u8, minor: MinorVersion) -> Self {
        Self((kind as u32) << 16 | (major as u32) << 8 | minor.code() as u32)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn kind(self) -> ShaderKind {
        ShaderKind::from_ordinal(bits!(self.0, 16:23))
    }
    pub fn major(self) -> u8 {
        bits!(self.0, 8:15) as u8
    }
    pub fn minor(self) -> MinorVersion {
        match bits!(self.0, 0:7) as u8 {
            OFFLINE_MINOR_CODE => MinorVersion::Offline,
            n => MinorVersion::Numeric(n),
        }
    }
}
impl fmt::Debug for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProfileKey({:#x} = {}_{}_{})",
            self.0,
            self.kind(),
            self.major(),
            self.minor()
        )
    }
}

lazy_static! {
    /// `(key, table index)` for every real entry, ascending by key
    static ref KEY_INDEX: Vec<(ProfileKey, usize)> = {
        let index: Vec<(ProfileKey, usize)> = table::entries()
            .iter()
            .enumerate()
            .map(|(i, sm)| (sm.key(), i))
            .collect();
        debug_assert!(
            index.windows(2).all(|w| w[0].0 < w[1].0),
            "shader model table must be sorted by kind, then major, then minor"
        );
        index
    };
}

impl ShaderModel {
    /// Look up a shader model by stage and version.
    ///
    /// Never fails: anything not in the table resolves to [ShaderModel::invalid].
    pub fn get(kind: ShaderKind, major: u8, minor: MinorVersion) -> &'static ShaderModel {
        let key = ProfileKey::new(kind, major, minor);
        let pos = KEY_INDEX.partition_point(|(k, _)| *k < key);
        match KEY_INDEX.get(pos) {
            Some(&(found, idx)) if found == key => {
                let sm = &table::entries()[idx];
                // Numeric(15) encodes the same as Offline, so check the real fields too
                if sm.kind == kind && sm.major == major && sm.minor == minor {
                    sm
                } else {
                    table::invalid()
                }
            }
            _ => table::invalid(),
        }
    }
}
