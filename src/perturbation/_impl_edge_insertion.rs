use crate::perturbation::{parse_percentage, EdgeInsertion, EdgeSampler, Perturbation};
use crate::Network;
use rand::RngCore;

impl Perturbation for EdgeInsertion {
    fn name(&self) -> &'static str {
        "edge-insertion"
    }

    fn parameters_help(&self) -> &'static str {
        "pct - number of edges to add, as a percentage of the current edge count"
    }

    fn perturb(
        &self,
        network: &Network,
        parameters: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Network, String> {
        let percentage = parse_percentage(parameters)?;
        let count = (network.num_edges() as f64 * percentage / 100.0).round() as usize;

        let mut sampler = EdgeSampler::new(network);
        if count > sampler.num_free() {
            return Err(format!(
                "Cannot insert {} edges, only {} vertex pairs are free.",
                count,
                sampler.num_free()
            ));
        }
        let mut edges = network.edges().collect::<Vec<_>>();
        for _ in 0..count {
            edges.push(sampler.sample(rng)?);
        }
        Ok(network.with_edge_groups(Network::collate(edges)))
    }
}

#[cfg(test)]
mod tests {
    use crate::perturbation::{EdgeInsertion, Perturbation};
    use crate::Network;
    use fxhash::FxHashSet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::convert::TryFrom;

    const MODEL: &str = "VERTICES
VERTEX 1 TP53
VERTEX 2 MYC
VERTEX 3 GATA1
VERTEX 4 SP1
VERTEX 5 HNF4A
ENDVERTICES
EDGES 3 (2 1 )
EDGES 1 (2 )
EDGES 5 (4 )
# 4 edges
";

    #[test]
    fn insert_half() {
        let network = Network::try_from(MODEL).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let perturbed = EdgeInsertion.perturb(&network, "50", &mut rng).unwrap();

        assert_eq!(6, perturbed.num_edges());
        let edges = perturbed.edges().collect::<Vec<_>>();
        let unique = edges.iter().cloned().collect::<FxHashSet<_>>();
        assert_eq!(edges.len(), unique.len());
        assert!(edges.iter().all(|it| !it.is_self_loop()));
        assert!(network.edges().all(|it| unique.contains(&it)));
        assert_eq!(network.vertices(), perturbed.vertices());
        assert_eq!(network.comments(), perturbed.comments());

        // Groups are collated by target and keep the original regulators first.
        let targets = perturbed
            .edge_groups()
            .iter()
            .map(|it| it.get_target())
            .collect::<Vec<_>>();
        let mut sorted = targets.clone();
        sorted.sort();
        assert_eq!(sorted, targets);
        let group = perturbed
            .edge_groups()
            .iter()
            .find(|it| u32::from(it.get_target()) == 3)
            .unwrap();
        assert_eq!(&network.edge_groups()[0].get_regulators()[..], &group.get_regulators()[..2]);
    }

    #[test]
    fn rounding() {
        let network = Network::try_from(MODEL).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        // 4 * 10% = 0.4 edges, rounded to zero.
        let perturbed = EdgeInsertion.perturb(&network, "10", &mut rng).unwrap();
        assert_eq!(4, perturbed.num_edges());
        // 4 * 40% = 1.6 edges, rounded to two.
        let perturbed = EdgeInsertion.perturb(&network, "40", &mut rng).unwrap();
        assert_eq!(6, perturbed.num_edges());
    }

    #[test]
    fn complete_graph() {
        let network = Network::try_from(MODEL).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        // 20 ordered pairs of distinct vertices, 4 of them taken.
        let perturbed = EdgeInsertion.perturb(&network, "400", &mut rng).unwrap();
        assert_eq!(20, perturbed.num_edges());
        assert!(EdgeInsertion.perturb(&network, "425", &mut rng).is_err());
    }
}
