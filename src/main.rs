use std::ffi::OsString;

use clap::{Parser, ValueEnum};
use ecef_to_sez::{GroundStation, Sez, USAGE, parse_args, rotation};
use serde::Serialize;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Lines,
    Json,
}

#[derive(Parser)]
#[command(name = "ecef_to_sez")]
#[command(about = "Convert an ECEF position to SEZ coordinates relative to an ECEF observer")]
#[command(override_usage = "ecef_to_sez [OPTIONS] o_x_km o_y_km o_z_km x_km y_km z_km")]
#[command(version)]
struct Cli {
    /// Observer x, y, z then target x, y, z (km, ECEF)
    #[arg(value_name = "KM", num_args = 0..)]
    values: Vec<String>,

    /// Also print the observer's height above the ellipsoid
    #[arg(long)]
    hae: bool,

    /// Output format (json writes NaN and infinite values as null)
    #[arg(long, value_enum, default_value = "lines")]
    format: OutputFormat,

    /// Print observer geodetic details to stderr
    #[arg(short, long)]
    verbose: bool,
}

///serde_json has no NaN/Inf, so degenerate results serialize as `null`
#[derive(Serialize)]
struct JsonOutput {
    #[serde(flatten)]
    sez: Sez,
    #[serde(skip_serializing_if = "Option::is_none")]
    hae_km: Option<f64>,
}

///Moves every token that parses as a float behind `--`, keeping their order,
/// so clap never reads values like `-.5`, `-inf` or `-nan` as short flags.
fn escape_values<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut flags: Vec<OsString> = args.next().into_iter().collect();
    let mut values = vec![OsString::from("--")];
    for arg in args {
        if arg == "--" {
            continue;
        }
        if arg.to_str().is_some_and(|s| s.trim().parse::<f64>().is_ok()) {
            values.push(arg);
        } else {
            flags.push(arg);
        }
    }
    flags.extend(values);
    flags
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(escape_values(std::env::args_os()));

    let Some((observer, target)) = parse_args(cli.values.as_slice())? else {
        println!("{USAGE}");
        return Ok(());
    };

    let station = GroundStation::from_ecef(observer);
    if cli.verbose {
        eprintln!(
            "observer lat: {} deg, lon: {} deg, hae: {} km ({} iterations)",
            station.lat_rad.to_degrees(),
            station.lon_rad.to_degrees(),
            station.hae_km,
            station.iterations
        );
        eprintln!("displacement: {:?} km", target - observer);
    }
    let sez = rotation::to_sez(&station, target);
    let hae_km = cli.hae.then_some(station.hae_km);

    match cli.format {
        OutputFormat::Lines => {
            println!("{:?}", sez.s_km);
            println!("{:?}", sez.e_km);
            println!("{:?}", sez.z_km);
            if let Some(hae_km) = hae_km {
                println!("{hae_km:?}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&JsonOutput { sez, hae_km })?);
        }
    }
    Ok(())
}
