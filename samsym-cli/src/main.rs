//! samsym CLI - generate KiCad symbol libraries for Atmel SAM D21 MCUs from
//! the command line.

use clap::{Parser, Subcommand, ValueEnum};
use samsym::{GenerateOptions, MissingPinout, SamSymCore};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "samsym")]
#[command(about = "KiCad symbol library generator for Atmel SAM D21 MCUs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .lib and .dcm files covering every known part number
    Generate {
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Base name of the generated .lib/.dcm pair
        #[arg(long, default_value = "atmel_samd21")]
        name: String,

        /// Fail instead of skipping parts whose package has no pinout table yet
        #[arg(long)]
        strict: bool,

        /// Output format for the run summary
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List all known part numbers
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print one part's symbol entry to stdout
    Show {
        /// Part number, e.g. SAMD21J18A-AU
        #[arg(value_name = "PART")]
        part: String,

        /// Print the .dcm documentation block instead of the symbol
        #[arg(long)]
        doc: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let exit_code = match Cli::parse().command {
        Commands::Generate {
            output,
            name,
            strict,
            format,
        } => handle_generate(&output, &name, strict, format),
        Commands::List { format } => handle_list(format),
        Commands::Show { part, doc } => handle_show(&part, doc),
    };

    process::exit(exit_code);
}

fn handle_generate(output: &Path, name: &str, strict: bool, format: OutputFormat) -> i32 {
    let options = GenerateOptions {
        on_missing_pinout: if strict {
            MissingPinout::Fail
        } else {
            MissingPinout::Skip
        },
        timestamp: None,
    };

    let library = match SamSymCore::generate_library(options) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match library.write_to(output, name) {
        Ok((lib_path, dcm_path)) => {
            match format {
                OutputFormat::Human => {
                    println!("Wrote {}", lib_path.display());
                    println!("Wrote {}", dcm_path.display());
                    println!(
                        "Parts: {}  Classes: {}  Symbols: {}  Skipped: {}",
                        library.stats.parts,
                        library.stats.classes,
                        library.stats.emitted,
                        library.stats.skipped
                    );
                }
                OutputFormat::Json => {
                    let summary = serde_json::json!({
                        "lib": lib_path.display().to_string(),
                        "dcm": dcm_path.display().to_string(),
                        "stats": library.stats,
                    });
                    println!("{}", serde_json::to_string_pretty(&summary).unwrap());
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_list(format: OutputFormat) -> i32 {
    let parts = samsym::known_parts();
    match format {
        OutputFormat::Human => {
            for part in &parts {
                println!("{}", part);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parts).unwrap());
        }
    }
    0
}

fn handle_show(part: &str, doc: bool) -> i32 {
    // a single explicitly-requested part should fail loudly, not skip
    let options = GenerateOptions {
        on_missing_pinout: MissingPinout::Fail,
        timestamp: None,
    };
    match SamSymCore::generate_part(part, options) {
        Ok(library) => {
            if doc {
                print!("{}", library.dcm);
            } else {
                print!("{}", library.lib);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
