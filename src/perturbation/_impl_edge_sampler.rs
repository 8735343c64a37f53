use crate::perturbation::EdgeSampler;
use crate::{Edge, HgncId, Network};
use fxhash::FxHashSet;
use rand::{Rng, RngCore};
use std::collections::BTreeSet;

impl EdgeSampler {
    /// Sampler over the vertices of `network`, with all of its edges already taken.
    pub fn new(network: &Network) -> EdgeSampler {
        let vertices = network
            .vertices()
            .iter()
            .map(|it| it.get_id())
            .collect::<BTreeSet<_>>();
        let taken = network.edges().collect::<FxHashSet<_>>();
        let occupied = taken
            .iter()
            .filter(|it| {
                !it.is_self_loop()
                    && vertices.contains(&it.get_regulated())
                    && vertices.contains(&it.get_regulator())
            })
            .count();
        let vertices = vertices.into_iter().collect::<Vec<HgncId>>();
        let capacity = vertices.len() * vertices.len().saturating_sub(1);
        EdgeSampler {
            vertices,
            taken,
            free: capacity - occupied,
        }
    }

    /// The number of edges which can still be sampled.
    pub fn num_free(&self) -> usize {
        self.free
    }

    /// Draw a new edge. Fails once every pair of distinct vertices is taken.
    pub fn sample(&mut self, rng: &mut dyn RngCore) -> Result<Edge, String> {
        if self.free == 0 {
            return Err(format!(
                "No new edge can be added between {} vertices.",
                self.vertices.len()
            ));
        }
        let count = self.vertices.len();
        loop {
            let regulated = rng.gen_range(0..count);
            let regulator = rng.gen_range(0..count);
            if regulated == regulator {
                continue;
            }
            let edge = Edge::new(self.vertices[regulated], self.vertices[regulator]);
            if self.taken.insert(edge) {
                self.free -= 1;
                return Ok(edge);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::perturbation::EdgeSampler;
    use crate::{HgncId, Network, Vertex};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::convert::TryFrom;

    #[test]
    fn sample_until_complete() {
        let network = Network::try_from(
            "VERTICES\nVERTEX 1 A\nVERTEX 2 B\nVERTEX 3 C\nENDVERTICES\nEDGES 1 (2 1 9 )\n",
        )
        .unwrap();
        let mut sampler = EdgeSampler::new(&network);
        // Self-loops and edges to unlisted vertices do not occupy a free pair.
        assert_eq!(5, sampler.num_free());

        let mut rng = StdRng::seed_from_u64(7);
        let mut sampled = Vec::new();
        for _ in 0..5 {
            let edge = sampler.sample(&mut rng).unwrap();
            assert!(!edge.is_self_loop());
            assert!(network.edges().all(|it| it != edge));
            assert!(!sampled.contains(&edge));
            sampled.push(edge);
        }
        assert!(sampler.sample(&mut rng).is_err());
    }

    #[test]
    fn too_few_vertices() {
        let network = Network::new(vec![Vertex::new(HgncId::from(1), "A")], Vec::new(), Vec::new());
        let mut sampler = EdgeSampler::new(&network);
        assert_eq!(0, sampler.num_free());
        assert!(sampler.sample(&mut StdRng::seed_from_u64(1)).is_err());
    }
}
