//! Read a network produced by `tfnet-build` and print a randomly perturbed copy to stdout.
//!
//! ```bash
//! tfnet-perturb --model network.txt --operator edge-deletion --params 0.1 --seed 7
//! tfnet-perturb --model network.txt --operator help
//! ```

use clap::{value_parser, Arg, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::TryFrom;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tfnet::perturbation::PerturbationRegistry;
use tfnet::Network;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("tfnet-perturb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Randomly perturbs a regulatory network")
        .arg(
            Arg::new("model")
                .long("model")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Network to perturb"),
        )
        .arg(
            Arg::new("operator")
                .long("operator")
                .value_name("NAME")
                .required(true)
                .help("Perturbation operator, or `help` to list them"),
        )
        .arg(
            Arg::new("params")
                .long("params")
                .value_name("STRING")
                .default_value("")
                .help("Operator parameters"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Seed of the random generator (default: current time)"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tfnet=info")),
        )
        .init();

    let registry = PerturbationRegistry::with_defaults();
    let operator_name = matches
        .get_one::<String>("operator")
        .map(|it| it.as_str())
        .unwrap_or("help");
    if operator_name == "help" {
        println!("{}", registry.help());
        return;
    }
    let Some(operator) = registry.get(operator_name) else {
        fail(&format!(
            "Unknown operator `{}`.\n{}",
            operator_name,
            registry.help()
        ));
    };

    let Some(model) = matches.get_one::<PathBuf>("model") else {
        fail("Missing option: --model");
    };
    let network = std::fs::read_to_string(model)
        .map_err(|error| format!("Cannot read `{}`: {}", model.display(), error))
        .and_then(|content| Network::try_from(content.as_str()))
        .unwrap_or_else(|error| fail(&error));

    let seed = matches
        .get_one::<u64>("seed")
        .cloned()
        .unwrap_or_else(time_seed);
    tracing::debug!("Using seed {}.", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let parameters = matches
        .get_one::<String>("params")
        .map(|it| it.as_str())
        .unwrap_or("");
    match operator.perturb(&network, parameters, &mut rng) {
        Ok(perturbed) => print!("{}", perturbed),
        Err(error) => fail(&error),
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|it| it.as_secs())
        .unwrap_or(0)
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
