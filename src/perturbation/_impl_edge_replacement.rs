use crate::perturbation::{parse_probability, EdgeReplacement, EdgeSampler, Perturbation};
use crate::Network;
use rand::{Rng, RngCore};

impl Perturbation for EdgeReplacement {
    fn name(&self) -> &'static str {
        "edge-replacement"
    }

    fn parameters_help(&self) -> &'static str {
        "p - probability in [0, 1] that an edge is replaced by a random new edge"
    }

    /// Replacement edges never coincide with an original edge (kept or not) or with
    /// another replacement, so the edge count is preserved.
    fn perturb(
        &self,
        network: &Network,
        parameters: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Network, String> {
        let p = parse_probability(parameters, None)?;
        let mut sampler = EdgeSampler::new(network);
        let mut edges = Vec::with_capacity(network.num_edges());
        for edge in network.edges() {
            if rng.gen_bool(p) {
                edges.push(sampler.sample(rng)?);
            } else {
                edges.push(edge);
            }
        }
        Ok(network.with_edge_groups(Network::collate(edges)))
    }
}
