use crate::perturbation::{parse_probability, LabelSwitching, Perturbation};
use crate::{Network, Vertex};
use rand::{Rng, RngCore};

impl Perturbation for LabelSwitching {
    fn name(&self) -> &'static str {
        "label-switching"
    }

    fn parameters_help(&self) -> &'static str {
        "[p] - probability in [0, 1] that a vertex takes part in the name shuffle (default 1)"
    }

    fn perturb(
        &self,
        network: &Network,
        parameters: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Network, String> {
        let p = parse_probability(parameters, Some(1.0))?;

        let pooled = network
            .vertices()
            .iter()
            .map(|_| rng.gen_bool(p))
            .collect::<Vec<_>>();

        // Pooled names ordered by a random key.
        let mut names = network
            .vertices()
            .iter()
            .zip(&pooled)
            .filter(|(_, is_pooled)| **is_pooled)
            .map(|(vertex, _)| (rng.next_u32(), vertex.get_name()))
            .collect::<Vec<_>>();
        names.sort_by_key(|(key, _)| *key);

        let mut names = names.into_iter().map(|(_, name)| name);
        let vertices = network
            .vertices()
            .iter()
            .zip(&pooled)
            .map(|(vertex, is_pooled)| {
                let name = if *is_pooled { names.next() } else { None };
                match name {
                    Some(name) => Vertex::new(vertex.get_id(), name),
                    None => vertex.clone(),
                }
            })
            .collect();
        Ok(network.with_vertices(vertices))
    }
}
