use dxil_shader_model::{
    MinorVersion, ProfileError, ShaderKind, ShaderModel, UavRegisterCount, Version, HIGHEST_MINOR,
};

fn sm(name: &str) -> &'static ShaderModel {
    let sm = ShaderModel::from_name(name);
    assert!(sm.is_valid(), "{} should resolve", name);
    sm
}

#[test]
fn test_get_round_trips_every_entry() {
    for expected in ShaderModel::all() {
        let actual = ShaderModel::get(expected.kind(), expected.major(), expected.minor());
        assert_eq!(actual, expected);
        assert!(std::ptr::eq(actual, expected));
    }
}

#[test]
fn test_get_missing_is_invalid() {
    let missing = [
        (ShaderKind::Hull, 4, MinorVersion::Numeric(0)),
        (ShaderKind::Library, 6, MinorVersion::Numeric(0)),
        (ShaderKind::Library, 5, MinorVersion::Offline),
        (ShaderKind::Pixel, 6, MinorVersion::Offline),
        (ShaderKind::Pixel, 6, MinorVersion::Numeric(9)),
        (ShaderKind::Pixel, 7, MinorVersion::Numeric(0)),
        (ShaderKind::Mesh, 6, MinorVersion::Numeric(4)),
        (ShaderKind::RayGeneration, 6, MinorVersion::Numeric(3)),
        (ShaderKind::Node, 6, MinorVersion::Numeric(8)),
        (ShaderKind::Invalid, 0, MinorVersion::Numeric(0)),
    ];
    for (kind, major, minor) in missing {
        let sm = ShaderModel::get(kind, major, minor);
        assert!(!sm.is_valid(), "{}_{}_{}", kind, major, minor);
        assert_eq!(sm, ShaderModel::invalid());
    }
}

#[test]
fn test_sentinel() {
    let invalid = ShaderModel::invalid();
    assert_eq!(invalid.kind(), ShaderKind::Invalid);
    assert_eq!(invalid.name(), "invalid");
    assert_eq!(invalid.uav_registers(), UavRegisterCount::Fixed(0));
    assert!(!invalid.is_valid());
    assert!(!invalid.is_valid_for_dxil());
}

#[test]
fn test_table_is_strictly_sorted() {
    let keys: Vec<_> = ShaderModel::all().map(|sm| sm.key()).collect();
    assert_eq!(keys.len(), 91);
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_from_name_round_trips_every_entry() {
    for expected in ShaderModel::all() {
        assert_eq!(ShaderModel::from_name(expected.name()), expected);
    }
    let offline = sm("lib_6_x");
    assert_eq!(offline.kind(), ShaderKind::Library);
    assert_eq!(offline.minor(), MinorVersion::Offline);
}

#[test]
fn test_from_name_rejects() {
    for name in [
        "", "ps_4", "vs_7_0", "xx_6_0", "ps_6_0_0", "lib_6_2x", "ps_6_9", "ps_5_2", "cs_6_x",
        "lib_5_x", "ps-6-0", "PS_6_0", "ps_6_", "lib6_1", "hs_4_0", "lib_6_0", "ms_6_4",
        " ps_6_0", "ps_6_0 ",
    ] {
        assert_eq!(ShaderModel::from_name(name), ShaderModel::invalid(), "'{}'", name);
    }
}

#[test]
fn test_try_from_name_reasons() {
    assert_eq!(ShaderModel::try_from_name(""), Err(ProfileError::Empty));
    assert_eq!(
        ShaderModel::try_from_name("xx_6_0"),
        Err(ProfileError::UnknownStage("xx_6_0".into()))
    );
    assert_eq!(
        ShaderModel::try_from_name("ps_4"),
        Err(ProfileError::MissingSeparator("".into()))
    );
    assert_eq!(
        ShaderModel::try_from_name("vs_7_0"),
        Err(ProfileError::BadMajor("7".into()))
    );
    assert_eq!(
        ShaderModel::try_from_name("ps_5_3"),
        Err(ProfileError::BadMinor {
            major: 5,
            found: "3".into()
        })
    );
    assert_eq!(
        ShaderModel::try_from_name("cs_6_x"),
        Err(ProfileError::OfflineNotAllowed {
            kind: ShaderKind::Compute,
            major: 6
        })
    );
    assert_eq!(
        ShaderModel::try_from_name("ps_6_0_0"),
        Err(ProfileError::Trailing("_0".into()))
    );
    assert_eq!(
        ShaderModel::try_from_name("lib_6_2x"),
        Err(ProfileError::Trailing("x".into()))
    );
    assert_eq!(
        ShaderModel::try_from_name("hs_4_1"),
        Err(ProfileError::NotInTable {
            kind: ShaderKind::Hull,
            major: 4,
            minor: MinorVersion::Numeric(1)
        })
    );
    assert_eq!(ShaderModel::try_from_name("as_6_7"), Ok(sm("as_6_7")));
}

#[test]
fn test_valid_for_dxil() {
    for sm in ShaderModel::all() {
        let expected = match (sm.major(), sm.minor()) {
            (6, MinorVersion::Numeric(n)) => n <= HIGHEST_MINOR,
            (6, MinorVersion::Offline) => sm.kind() == ShaderKind::Library,
            _ => false,
        };
        assert_eq!(sm.is_valid_for_dxil(), expected, "{}", sm);
    }
    assert!(!sm("ps_5_1").is_valid_for_dxil());
    assert!(!sm("cs_4_0").is_valid_for_dxil());
    assert!(sm("lib_6_x").is_valid_for_dxil());
}

#[test]
fn test_dxil_version() {
    assert_eq!(sm("ps_6_8").dxil_version(), Version::new(1, 8));
    assert_eq!(sm("vs_6_0").dxil_version(), Version::new(1, 0));
    assert_eq!(
        sm("lib_6_x").dxil_version(),
        Version::new(1, HIGHEST_MINOR.into())
    );
    for sm in ShaderModel::all().filter(|sm| sm.is_valid_for_dxil()) {
        if let MinorVersion::Numeric(n) = sm.minor() {
            assert_eq!(sm.dxil_version(), Version::new(1, n.into()));
        }
    }
}

#[test]
fn test_min_validator_version() {
    assert_eq!(sm("cs_6_3").min_validator_version(), Version::new(1, 3));
    assert_eq!(sm("ms_6_5").min_validator_version(), Version::new(1, 5));
    assert_eq!(sm("lib_6_x").min_validator_version(), Version::new(0, 0));
    // Offline libraries carry the newest DXIL but skip standalone validation
    assert_ne!(
        sm("lib_6_x").dxil_version(),
        sm("lib_6_x").min_validator_version()
    );
}

#[test]
fn test_derivatives() {
    for sm in ShaderModel::all().filter(|sm| sm.is_ps()) {
        assert!(sm.allow_derivatives(ShaderKind::Pixel), "{}", sm);
    }
    assert!(!sm("cs_6_5").allow_derivatives(ShaderKind::Compute));
    assert!(sm("cs_6_6").allow_derivatives(ShaderKind::Compute));
    assert!(!sm("ms_6_5").allow_derivatives(ShaderKind::Mesh));
    assert!(sm("as_6_8").allow_derivatives(ShaderKind::Amplification));
    assert!(sm("lib_6_1").allow_derivatives(ShaderKind::Node));
    assert!(sm("lib_6_3").allow_derivatives(ShaderKind::Library));
    assert!(sm("lib_6_x").allow_derivatives(ShaderKind::Compute));
    assert!(!sm("lib_6_5").allow_derivatives(ShaderKind::Compute));
    assert!(!sm("vs_6_8").allow_derivatives(ShaderKind::Vertex));
    assert!(!sm("lib_6_8").allow_derivatives(ShaderKind::RayGeneration));
    assert!(!sm("ps_6_8").allow_derivatives(ShaderKind::Invalid));
}

#[test]
fn test_version_predicates() {
    assert!(sm("ps_5_1").is_sm51_plus());
    assert!(!sm("ps_5_1").is_sm60_plus());
    assert!(sm("ps_6_6").is_sm66_plus());
    assert!(!sm("ps_6_5").is_sm66_plus());
    assert!(sm("lib_6_x").is_sm68_plus());
    assert!(sm("vs_4_0").is_sm_at_least(4, 0));
    assert!(!sm("vs_4_0").is_sm50_plus());
}

#[test]
fn test_resource_limits() {
    let vs40 = sm("vs_4_0");
    assert_eq!((vs40.input_registers(), vs40.output_registers()), (16, 16));
    assert_eq!(vs40.uav_registers(), UavRegisterCount::Fixed(0));
    assert!(!vs40.supports_typed_uavs());

    let gs40 = sm("gs_4_0");
    assert_eq!((gs40.input_registers(), gs40.output_registers()), (16, 32));

    let ps50 = sm("ps_5_0");
    assert_eq!((ps50.input_registers(), ps50.output_registers()), (32, 8));
    assert_eq!(ps50.uav_registers(), UavRegisterCount::Fixed(64));

    let cs66 = sm("cs_6_6");
    assert_eq!((cs66.input_registers(), cs66.output_registers()), (0, 0));
    assert_eq!(cs66.uav_registers(), UavRegisterCount::Unlimited);
    assert!(cs66.supports_typed_uavs());
}

#[test]
fn test_uav_support_matches_typed_uavs() {
    // Every profile that allows UAVs also allows typed UAVs
    for sm in ShaderModel::all() {
        assert_eq!(sm.supports_uavs(), sm.supports_typed_uavs(), "{}", sm);
    }
}

#[test]
fn test_stage_predicates() {
    assert!(sm("lib_6_3").is_lib());
    assert!(sm("ms_6_5").is_ms());
    assert!(sm("as_6_5").is_as());
    assert!(sm("hs_5_0").is_hs());
    assert!(!sm("ds_6_0").is_ray());
    assert_eq!(sm("lib_6_3").kind_name(), "lib");
    assert_eq!(sm("ps_6_1").to_string(), "ps_6_1");
}

#[test]
fn test_equality_is_by_content() {
    let a = sm("ps_6_0").clone();
    assert_eq!(&a, sm("ps_6_0"));
    assert_ne!(&a, sm("ps_6_1"));
}

#[test]
fn test_concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                ShaderModel::all()
                    .map(|sm| ShaderModel::from_name(sm.name()) == sm)
                    .all(|ok| ok)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
