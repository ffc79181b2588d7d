// Command-line interface for mesh
//
// This binary converts NLM MeSH vocabulary files between formats and builds
// the merged id-to-name lookup map consumed by downstream tooling.
//
// The main role for the mesh program is the simple-map command: fold a
// descriptor file and a supplemental file (gzip-compressed JSON-lines) into
// one flat JSON object mapping every record id to its term name. It is also
// the default command, so the three paths can be passed without naming it.
// The core capabilities use the mesh-convert crate; this crate is only the
// shell interface over that library.
//
// Converting:
//
// The convert command needs a from and to pair. The from can be
// auto-detected from the file extension (a trailing .gz is ignored), while
// being overwrittable by an explicit --from flag.
// Usage:
//  mesh <desc> <suppl> <output>                - Build the id-to-name map (default)
//  mesh simple-map <desc> <suppl> <output>     - Same as above (explicit)
//  mesh convert <input> --to <format> [--from <format>] [--output <file>]
//  mesh --list-formats                         - List available formats
//
// Extra Parameters:
//
// Configuration keys can be overridden using --extra-<key> [value].
// The CLI layer strips the "extra-" prefix and applies the override on top
// of mesh.toml and the built-in defaults.
// Example:
//  mesh simple-map desc.gz supp.gz mesh.json --extra-pretty

use clap::{Arg, ArgAction, Command, ValueHint};
use mesh_config::{Loader, MeshConfig};
use mesh_convert::formats::TermMapFormat;
use mesh_convert::{io, simple_map, FormatRegistry, MapOptions};
use std::collections::HashMap;
use std::path::Path;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Found an extra-* argument
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with('-') && !next.starts_with("--")
            } else {
                false
            };

            if has_value {
                // Explicit value provided
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mesh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting NLM MeSH vocabulary data")
        .long_about(
            "mesh is a command-line tool for working with NLM MeSH vocabulary files.\n\n\
            Commands:\n  \
            - simple-map: Merge descriptor and supplemental records into one id-to-name map\n  \
            - convert:    Transform record files between formats (mesh-xml, jsonl, map)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mesh desc.ndjson.gz supp.ndjson.gz mesh.json    # Build the id-to-name map\n  \
            mesh simple-map desc.ndjson.gz supp.ndjson.gz mesh.json --extra-pretty\n  \
            mesh convert desc2026.xml.gz --to jsonl -o desc.ndjson.gz\n  \
            mesh convert desc.ndjson.gz --to map -o mesh.json",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mesh.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("simple-map")
                .about("Merge descriptor and supplemental records into an id-to-name map (default command)")
                .long_about(
                    "Build a single flat JSON object mapping record ids to term names.\n\n\
                    Both inputs are gzip-compressed JSON-lines files, one record per\n\
                    line with at least string 'id' and 'name' fields. The descriptor\n\
                    file is read first and the supplemental file second, so on a\n\
                    shared id the supplemental name wins.\n\n\
                    The output is written atomically: a failed run never leaves a\n\
                    truncated map behind, and any previous output stays untouched.\n\n\
                    Examples:\n  \
                    mesh simple-map desc.ndjson.gz supp.ndjson.gz mesh.json\n  \
                    mesh desc.ndjson.gz supp.ndjson.gz mesh.json     # same, default command\n  \
                    mesh simple-map desc.ndjson.gz supp.ndjson.gz mesh.json --extra-pretty",
                )
                .arg(
                    Arg::new("desc")
                        .help("Path to the gzip-compressed descriptor JSON-lines file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("suppl")
                        .help("Path to the gzip-compressed supplemental JSON-lines file")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .help("Path to write the merged id-to-name JSON map")
                        .required(true)
                        .index(3)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a record file between formats")
                .long_about(
                    "Convert MeSH record files between formats.\n\n\
                    Supported formats:\n  \
                    - mesh-xml: NLM distribution XML record sets (.xml, read only)\n  \
                    - jsonl:    JSON-lines records (.ndjson, .jsonl)\n  \
                    - map:      flat id-to-name JSON object (.json, write only)\n\n\
                    Inputs may be gzip-compressed regardless of format; compression\n\
                    is detected from the content. The source format is auto-detected\n\
                    from the file extension, ignoring a trailing .gz.\n\
                    Output goes to stdout by default, or use -o to specify a file;\n\
                    an output path ending in .gz is written gzip-compressed.\n\n\
                    Examples:\n  \
                    mesh convert desc2026.xml.gz --to jsonl -o desc.ndjson.gz\n  \
                    mesh convert supp2026.xml.gz --to jsonl -o supp.ndjson.gz\n  \
                    mesh convert desc.ndjson.gz --to map             # map to stdout",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .long_help(
                            "Source format to convert from.\n\n\
                            If not specified, the format is auto-detected from the file\n\
                            extension, ignoring a trailing .gz.\n\
                            Use this option to override auto-detection.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: jsonl, map\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .long_help(
                            "Path to write the converted output.\n\n\
                            If not specified, output is written to stdout.\n\
                            A path ending in .gz is written gzip-compressed.",
                        )
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "simple-map"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "simple-map"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                // Inject "simple-map" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "simple-map".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "simple-map" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject simple-map, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    // Every extra key maps to a configuration override; anything left over
    // is a typo, not a format parameter.
    if let Some(key) = extra_params.keys().next() {
        eprintln!("Unknown option --extra-{key}");
        eprintln!("Supported overrides: --extra-pretty, --extra-compression-level");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("simple-map", sub_matches)) => {
            let desc = sub_matches
                .get_one::<String>("desc")
                .expect("desc is required");
            let suppl = sub_matches
                .get_one::<String>("suppl")
                .expect("suppl is required");
            let output = sub_matches
                .get_one::<String>("output")
                .expect("output is required");
            handle_simple_map_command(desc, suppl, output, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_arg = sub_matches.get_one::<String>("from");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = if let Some(f) = from_arg {
                f.to_string()
            } else {
                let registry = FormatRegistry::default();
                match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the simple-map command (the default command)
///
/// Success is silent: the only observable effect is the written map.
fn handle_simple_map_command(desc: &str, suppl: &str, output: &str, config: &MeshConfig) {
    let options = MapOptions::from(&config.simple_map);

    simple_map::build(
        Path::new(desc),
        Path::new(suppl),
        Path::new(output),
        &options,
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    config: &MeshConfig,
) {
    let mut registry = FormatRegistry::default();
    // Swap in a map format carrying the configured serialization options
    registry.register(TermMapFormat::new(MapOptions::from(&config.simple_map)));

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Read input file, decompressing if the content is gzip
    let source = io::read_to_string(Path::new(input)).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    // Parse
    let records = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    // Serialize
    let result = registry.serialize(&records, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    // Output
    match output {
        Some(path) => {
            io::write_text(Path::new(path), &result, config.convert.compression_level)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
        }
        None => {
            print!("{result}");
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let format = registry.get(&name).expect("listed format exists");
        let capabilities = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "read/write",
            (true, false) => "read only",
            (false, true) => "write only",
            (false, false) => "unavailable",
        };
        println!("  {name:<10} {capabilities:<12} {}", format.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MeshConfig {
    let loader = Loader::new().with_optional_file("mesh.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MeshConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["pretty"]) {
        config.simple_map.pretty = parse_bool_arg("pretty", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["compression-level", "compressionlevel"]) {
        config.convert.compression_level = parse_u32_arg("compression-level", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_u32_arg(flag: &str, raw: &str) -> u32 {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid numeric value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
