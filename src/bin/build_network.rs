//! Infer a transcription factor regulatory network and print it to stdout.
//!
//! ```bash
//! tfnet-build --basetram basetram/ --genbank genbank/ \
//!     --hgnc hgnc_symbols.txt --matrices matrix.dat > network.txt
//! ```
//!
//! Log verbosity is controlled through `RUST_LOG` (default `tfnet=info`).

use clap::{value_parser, Arg, Command};
use std::path::PathBuf;
use tfnet::builder::{BuilderConfig, NetworkBuilder};
use tfnet::ProximityWindow;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("tfnet-build")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Infers a regulatory network from annotated contigs and predicted binding sites")
        .arg(
            Arg::new("basetram")
                .long("basetram")
                .value_name("DIR")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Binding site predictions, one sub-directory per annotation file"),
        )
        .arg(
            Arg::new("genbank")
                .long("genbank")
                .value_name("DIR")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory with the .gbk annotation files"),
        )
        .arg(
            Arg::new("hgnc")
                .long("hgnc")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("HGNC gene symbol table"),
        )
        .arg(
            Arg::new("matrices")
                .long("matrices")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("TRANSFAC matrix table"),
        )
        .arg(
            Arg::new("upstream")
                .long("upstream")
                .value_name("BASES")
                .value_parser(value_parser!(u32))
                .default_value("200")
                .help("Size of the zone upstream of a binding site"),
        )
        .arg(
            Arg::new("downstream")
                .long("downstream")
                .value_name("BASES")
                .value_parser(value_parser!(u32))
                .default_value("50")
                .help("Size of the zone downstream of a binding site"),
        )
        .arg(
            Arg::new("min-probability")
                .long("min-probability")
                .value_name("P")
                .value_parser(value_parser!(f64))
                .default_value("0")
                .help("Ignore binding sites with a lower probability"),
        )
        .arg(
            Arg::new("min-regulation")
                .long("min-regulation")
                .value_name("COUNT")
                .value_parser(value_parser!(u32))
                .default_value("1")
                .help("Only list genes regulated at least this many times"),
        )
        .arg(
            Arg::new("max-targets")
                .long("max-targets")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .help("Maximum number of distinct regulated genes (default: unbounded)"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tfnet=info")),
        )
        .init();

    // All arguments below are either required or have a default value.
    let path = |name: &str| matches.get_one::<PathBuf>(name).cloned().unwrap_or_default();
    let basetram = path("basetram");
    let genbank = path("genbank");
    for directory in [&basetram, &genbank] {
        if !directory.is_dir() {
            fail(&format!("`{}` is not a directory.", directory.display()));
        }
    }

    let config = BuilderConfig {
        window: ProximityWindow {
            upstream: matches.get_one::<u32>("upstream").cloned().unwrap_or(200),
            downstream: matches.get_one::<u32>("downstream").cloned().unwrap_or(50),
        },
        min_probability: matches
            .get_one::<f64>("min-probability")
            .cloned()
            .unwrap_or(0.0),
        min_regulation: matches.get_one::<u32>("min-regulation").cloned().unwrap_or(1),
        max_targets: matches
            .get_one::<usize>("max-targets")
            .cloned()
            .unwrap_or(usize::MAX),
    };

    let mut builder = NetworkBuilder::from_database_files(
        config,
        &basetram,
        &path("hgnc"),
        &path("matrices"),
    )
    .unwrap_or_else(|error| fail(&error.to_string()));
    if let Err(error) = builder.process_directory(&genbank) {
        fail(&error.to_string());
    }
    print!("{}", builder.to_network());
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
