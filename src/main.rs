//! Command-line front end for the Gmsh to CalculiX mesh converter.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};

use gmsh2ccx::{convert_file, ConvertConfig};

struct Args {
    /// Gmsh `.inp` input file.
    input: PathBuf,
    /// CalculiX `.inp` output file.
    output: PathBuf,
    config: ConvertConfig,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} -g <gmsh.inp> -c <ccx.inp> [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -g, --gmsh <file>      Gmsh .inp input file (required)");
    eprintln!("  -c, --ccx <file>       CalculiX .inp output file (required)");
    eprintln!("  -e, --etype <type>     Target element type, e.g. S3, S4, CPS4 (default: S3)");
    eprintln!("  -ns, --nodesets <0|1>  Also write a node set per boundary group (default: 0)");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {program} -g square.inp -c ccx.inp -e S4 -ns 1");
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut input = None;
    let mut output = None;
    let mut config = ConvertConfig::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("Missing value for {flag}"))
        };
        match flag {
            "-g" | "--gmsh" => input = Some(PathBuf::from(value()?)),
            "-c" | "--ccx" => output = Some(PathBuf::from(value()?)),
            "-e" | "--etype" => config.target_type = value()?,
            "-ns" | "--nodesets" => {
                config.write_node_sets = match value()?.as_str() {
                    "0" => false,
                    "1" => true,
                    other => return Err(format!("Invalid --nodesets value: {other}")),
                }
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(Args {
        input: input.ok_or("Gmsh input file is required (-g)")?,
        output: output.ok_or("CalculiX output file is required (-c)")?,
        config,
    })
}

fn main() -> Result<()> {
    let argv: Vec<String> = env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            print_usage(&argv[0]);
            process::exit(2);
        }
    };

    let report = convert_file(&args.input, &args.output, &args.config)
        .with_context(|| format!("converting {}", args.input.display()))?;

    for (code, count) in &report.unrecognized_types {
        eprintln!("Warning: unrecognized element type {code} ({count} elements)");
    }
    if report.unmatched_segments > 0 {
        eprintln!(
            "Warning: {} boundary segments matched no element and were dropped",
            report.unmatched_segments
        );
    }
    println!(
        "Converted {} -> {}: {} nodes, {}/{} elements, {} surface groups",
        args.input.display(),
        args.output.display(),
        report.nodes,
        report.elements_retained,
        report.elements,
        report.groups
    );

    Ok(())
}
