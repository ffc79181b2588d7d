use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the default surface from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mesh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting NLM MeSH vocabulary data")
        .arg_required_else_help(true)
        .arg(
            Arg::new("desc")
                .help("Path to the gzip-compressed descriptor JSON-lines file")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("suppl")
                .help("Path to the gzip-compressed supplemental JSON-lines file")
                .required_unless_present("list-formats")
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Path to write the merged id-to-name JSON map")
                .required_unless_present("list-formats")
                .index(3)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mesh", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mesh", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mesh", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
