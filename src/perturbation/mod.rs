//! Randomized rewriting of a [Network] into null-model variants.
//!
//! Every operator implements [Perturbation] and reads its parameters from a free-form string
//! (a single number for all built-in operators). The [PerturbationRegistry] maps operator names
//! to operators, so that a front-end can select one by name:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::convert::TryFrom;
//! use tfnet::perturbation::PerturbationRegistry;
//! use tfnet::Network;
//!
//! let network = Network::try_from(
//!     "VERTICES\nVERTEX 1 TP53\nVERTEX 2 MYC\nENDVERTICES\nEDGES 1 (2 )\n",
//! ).unwrap();
//! let registry = PerturbationRegistry::with_defaults();
//! let deletion = registry.get("edge-deletion").unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! let perturbed = deletion.perturb(&network, "1", &mut rng).unwrap();
//! assert_eq!(0, perturbed.num_edges());
//! assert_eq!(2, perturbed.num_vertices());
//! ```
//!
//! Apart from label switching, the vertex section is never modified, and comment lines are
//! always passed through.

use crate::{Edge, HgncId, Network};
use fxhash::FxHashSet;
use rand::RngCore;
use std::collections::BTreeMap;

/// **(internal)** Name permutation.
mod _impl_label_switching;
/// **(internal)** Independent edge removal.
mod _impl_edge_deletion;
/// **(internal)** Addition of random edges.
mod _impl_edge_insertion;
/// **(internal)** Independent edge rewiring.
mod _impl_edge_replacement;
/// **(internal)** Uniform sampling of edges which are not in the network yet.
mod _impl_edge_sampler;
/// **(internal)** Operator lookup and the help listing.
mod _impl_registry;

/// A randomized network rewriting operator.
pub trait Perturbation {
    /// Name under which the operator is registered.
    fn name(&self) -> &'static str;

    /// Human-readable description of the accepted parameter string.
    fn parameters_help(&self) -> &'static str;

    /// Create a perturbed copy of `network`.
    ///
    /// Returns an error when `parameters` cannot be parsed or the network cannot be perturbed
    /// as requested. All randomness is drawn from `rng`.
    fn perturb(
        &self,
        network: &Network,
        parameters: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Network, String>;
}

/// Pools vertices with probability `p` (default `1`) and permutes the names of the pooled
/// vertices. Ids and edges stay in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelSwitching;

/// Keeps every edge independently with probability `1 - p`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDeletion;

/// Adds `round(edges * pct / 100)` random edges which are neither self-loops nor duplicates.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeInsertion;

/// Replaces every edge independently with probability `p` by a random new edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeReplacement;

/// Perturbation operators by name.
pub struct PerturbationRegistry {
    operators: BTreeMap<&'static str, Box<dyn Perturbation>>,
}

/// **(internal)** Draws uniformly distributed edges between distinct vertices which are not
/// `taken` yet, and marks them as taken.
struct EdgeSampler {
    vertices: Vec<HgncId>,
    taken: FxHashSet<Edge>,
    free: usize,
}

/// **(internal)** Parse a probability parameter, falling back to `default` for an empty string.
fn parse_probability(parameters: &str, default: Option<f64>) -> Result<f64, String> {
    let value = parse_number(parameters, default)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Probability `{}` is not in [0, 1].", value))
    }
}

/// **(internal)** Parse a non-negative percentage parameter.
fn parse_percentage(parameters: &str) -> Result<f64, String> {
    let value = parse_number(parameters, None)?;
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Percentage `{}` must be a non-negative number.", value))
    }
}

fn parse_number(parameters: &str, default: Option<f64>) -> Result<f64, String> {
    let parameters = parameters.trim();
    if parameters.is_empty() {
        return default.ok_or_else(|| "Missing operator parameter.".to_string());
    }
    parameters
        .parse::<f64>()
        .map_err(|_| format!("Invalid operator parameter `{}`.", parameters))
}
