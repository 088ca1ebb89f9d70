use std::process::ExitCode;

use clap::Parser;
use dxil_shader_model::{ShaderKind, ShaderModel};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Profile names to resolve, e.g. ps_6_5 or lib_6_x
    #[clap(value_parser)]
    profiles: Vec<String>,

    /// Print every known shader model
    #[clap(long, action)]
    list: bool,

    /// With --list, only print models of this stage (attribute spelling, e.g. "compute")
    #[clap(long, value_parser)]
    kind: Option<String>,
}

fn describe(sm: &ShaderModel) -> String {
    let versions = if sm.is_valid_for_dxil() {
        format!(
            "dxil {} validator {}",
            sm.dxil_version(),
            sm.min_validator_version()
        )
    } else {
        "no dxil".to_owned()
    };
    format!(
        "{:<8} in {:>2} out {:>2} uav {:<9} typed-uav {:<5} {}",
        sm.name(),
        sm.input_registers(),
        sm.output_registers(),
        sm.uav_registers().to_string(),
        sm.supports_typed_uavs(),
        versions
    )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.list {
        let filter = args.kind.as_deref().map(ShaderKind::from_full_name);
        if filter == Some(ShaderKind::Invalid) {
            eprintln!("unknown stage '{}'", args.kind.unwrap_or_default());
            return ExitCode::FAILURE;
        }
        for sm in ShaderModel::all().filter(|sm| filter.map_or(true, |k| sm.kind() == k)) {
            println!("{}", describe(sm));
        }
    }

    let mut all_valid = true;
    for name in &args.profiles {
        match ShaderModel::try_from_name(name) {
            Ok(sm) => println!("{}", describe(sm)),
            Err(err) => {
                all_valid = false;
                eprintln!("{}: {}", name, err);
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
