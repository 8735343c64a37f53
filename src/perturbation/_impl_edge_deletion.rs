use crate::perturbation::{parse_probability, EdgeDeletion, Perturbation};
use crate::{EdgeGroup, Network};
use rand::{Rng, RngCore};

impl Perturbation for EdgeDeletion {
    fn name(&self) -> &'static str {
        "edge-deletion"
    }

    fn parameters_help(&self) -> &'static str {
        "p - probability in [0, 1] that an edge is deleted"
    }

    fn perturb(
        &self,
        network: &Network,
        parameters: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Network, String> {
        let p = parse_probability(parameters, None)?;
        let groups = network
            .edge_groups()
            .iter()
            .map(|group| {
                let regulators = group
                    .get_regulators()
                    .iter()
                    .filter(|_| !rng.gen_bool(p))
                    .cloned()
                    .collect();
                EdgeGroup::new(group.get_target(), regulators)
            })
            .collect();
        // Targets which lost all edges remain vertices, but have no `EDGES` line.
        Ok(network.with_edge_groups(groups))
    }
}
