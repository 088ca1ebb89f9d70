//! The static shader model table.

use crate::kinds::ShaderKind::*;

use super::MinorVersion::{Numeric as N, Offline};
use super::ShaderModel as SM;
use super::UavRegisterCount::{Fixed, Unlimited};

/// Number of entries, including the trailing invalid sentinel
pub const NUM_SHADER_MODELS: usize = 92;

#[rustfmt::skip]
static SHADER_MODELS: [SM; NUM_SHADER_MODELS] = [
    SM::new(Pixel, 4, N(0), "ps_4_0", 32, 8, false, Fixed(0)),
    SM::new(Pixel, 4, N(1), "ps_4_1", 32, 8, false, Fixed(0)),
    SM::new(Pixel, 5, N(0), "ps_5_0", 32, 8, true, Fixed(64)),
    SM::new(Pixel, 5, N(1), "ps_5_1", 32, 8, true, Fixed(64)),
    SM::new(Pixel, 6, N(0), "ps_6_0", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(1), "ps_6_1", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(2), "ps_6_2", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(3), "ps_6_3", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(4), "ps_6_4", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(5), "ps_6_5", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(6), "ps_6_6", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(7), "ps_6_7", 32, 8, true, Unlimited),
    SM::new(Pixel, 6, N(8), "ps_6_8", 32, 8, true, Unlimited),
    SM::new(Vertex, 4, N(0), "vs_4_0", 16, 16, false, Fixed(0)),
    SM::new(Vertex, 4, N(1), "vs_4_1", 32, 32, false, Fixed(0)),
    SM::new(Vertex, 5, N(0), "vs_5_0", 32, 32, true, Fixed(64)),
    SM::new(Vertex, 5, N(1), "vs_5_1", 32, 32, true, Fixed(64)),
    SM::new(Vertex, 6, N(0), "vs_6_0", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(1), "vs_6_1", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(2), "vs_6_2", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(3), "vs_6_3", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(4), "vs_6_4", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(5), "vs_6_5", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(6), "vs_6_6", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(7), "vs_6_7", 32, 32, true, Unlimited),
    SM::new(Vertex, 6, N(8), "vs_6_8", 32, 32, true, Unlimited),
    SM::new(Geometry, 4, N(0), "gs_4_0", 16, 32, false, Fixed(0)),
    SM::new(Geometry, 4, N(1), "gs_4_1", 32, 32, false, Fixed(0)),
    SM::new(Geometry, 5, N(0), "gs_5_0", 32, 32, true, Fixed(64)),
    SM::new(Geometry, 5, N(1), "gs_5_1", 32, 32, true, Fixed(64)),
    SM::new(Geometry, 6, N(0), "gs_6_0", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(1), "gs_6_1", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(2), "gs_6_2", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(3), "gs_6_3", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(4), "gs_6_4", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(5), "gs_6_5", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(6), "gs_6_6", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(7), "gs_6_7", 32, 32, true, Unlimited),
    SM::new(Geometry, 6, N(8), "gs_6_8", 32, 32, true, Unlimited),
    SM::new(Hull, 5, N(0), "hs_5_0", 32, 32, true, Fixed(64)),
    SM::new(Hull, 5, N(1), "hs_5_1", 32, 32, true, Fixed(64)),
    SM::new(Hull, 6, N(0), "hs_6_0", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(1), "hs_6_1", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(2), "hs_6_2", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(3), "hs_6_3", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(4), "hs_6_4", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(5), "hs_6_5", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(6), "hs_6_6", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(7), "hs_6_7", 32, 32, true, Unlimited),
    SM::new(Hull, 6, N(8), "hs_6_8", 32, 32, true, Unlimited),
    SM::new(Domain, 5, N(0), "ds_5_0", 32, 32, true, Fixed(64)),
    SM::new(Domain, 5, N(1), "ds_5_1", 32, 32, true, Fixed(64)),
    SM::new(Domain, 6, N(0), "ds_6_0", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(1), "ds_6_1", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(2), "ds_6_2", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(3), "ds_6_3", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(4), "ds_6_4", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(5), "ds_6_5", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(6), "ds_6_6", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(7), "ds_6_7", 32, 32, true, Unlimited),
    SM::new(Domain, 6, N(8), "ds_6_8", 32, 32, true, Unlimited),
    SM::new(Compute, 4, N(0), "cs_4_0", 0, 0, false, Fixed(0)),
    SM::new(Compute, 4, N(1), "cs_4_1", 0, 0, false, Fixed(0)),
    SM::new(Compute, 5, N(0), "cs_5_0", 0, 0, true, Fixed(64)),
    SM::new(Compute, 5, N(1), "cs_5_1", 0, 0, true, Fixed(64)),
    SM::new(Compute, 6, N(0), "cs_6_0", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(1), "cs_6_1", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(2), "cs_6_2", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(3), "cs_6_3", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(4), "cs_6_4", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(5), "cs_6_5", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(6), "cs_6_6", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(7), "cs_6_7", 0, 0, true, Unlimited),
    SM::new(Compute, 6, N(8), "cs_6_8", 0, 0, true, Unlimited),
    SM::new(Library, 6, N(1), "lib_6_1", 32, 32, true, Unlimited),
    SM::new(Library, 6, N(2), "lib_6_2", 32, 32, true, Unlimited),
    SM::new(Library, 6, N(3), "lib_6_3", 32, 32, true, Unlimited),
    SM::new(Library, 6, N(4), "lib_6_4", 32, 32, true, Unlimited),
    SM::new(Library, 6, N(5), "lib_6_5", 32, 32, true, Unlimited),
    SM::new(Library, 6, N(6), "lib_6_6", 32, 32, true, Unlimited),
    SM::new(Library, 6, N(7), "lib_6_7", 32, 32, true, Unlimited),
    SM::new(Library, 6, N(8), "lib_6_8", 32, 32, true, Unlimited),
    // lib_6_x is for offline linking only, and relaxes restrictions
    SM::new(Library, 6, Offline, "lib_6_x", 32, 32, true, Unlimited),
    SM::new(Mesh, 6, N(5), "ms_6_5", 0, 0, true, Unlimited),
    SM::new(Mesh, 6, N(6), "ms_6_6", 0, 0, true, Unlimited),
    SM::new(Mesh, 6, N(7), "ms_6_7", 0, 0, true, Unlimited),
    SM::new(Mesh, 6, N(8), "ms_6_8", 0, 0, true, Unlimited),
    SM::new(Amplification, 6, N(5), "as_6_5", 0, 0, true, Unlimited),
    SM::new(Amplification, 6, N(6), "as_6_6", 0, 0, true, Unlimited),
    SM::new(Amplification, 6, N(7), "as_6_7", 0, 0, true, Unlimited),
    SM::new(Amplification, 6, N(8), "as_6_8", 0, 0, true, Unlimited),
    // Values before Invalid must remain sorted by kind, then major, then minor.
    SM::new(Invalid, 0, N(0), "invalid", 0, 0, false, Fixed(0)),
];

/// Every real entry, without the sentinel
pub(super) fn entries() -> &'static [SM] {
    &SHADER_MODELS[..NUM_SHADER_MODELS - 1]
}

pub(super) fn invalid() -> &'static SM {
    &SHADER_MODELS[NUM_SHADER_MODELS - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::ShaderKind;

    #[test]
    fn sentinel_is_last_and_zeroed() {
        let sentinel = invalid();
        assert_eq!(sentinel.kind(), ShaderKind::Invalid);
        assert_eq!(sentinel.name(), "invalid");
        assert_eq!(sentinel.major(), 0);
        assert_eq!(sentinel.input_registers(), 0);
        assert_eq!(sentinel.output_registers(), 0);
        assert!(!sentinel.supports_typed_uavs());
        assert!(entries().iter().all(|sm| sm.kind() != ShaderKind::Invalid));
    }

    #[test]
    fn offline_minor_only_on_libraries() {
        for sm in entries() {
            if sm.minor() == Offline {
                assert_eq!(sm.kind(), ShaderKind::Library, "{}", sm.name());
            }
        }
    }

    #[test]
    fn names_match_fields() {
        for sm in entries() {
            let expected = format!("{}_{}_{}", sm.kind_name(), sm.major(), sm.minor());
            assert_eq!(sm.name(), expected);
        }
    }
}
