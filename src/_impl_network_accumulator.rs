use crate::{
    ContigGenes, Edge, EdgeGroup, HgncId, HgncNameIndex, Network, NetworkAccumulator,
    ProximityWindow, TfbsOccurrence, TfbsStatistics, TransfacMap, Vertex,
};
use std::collections::BTreeMap;

impl NetworkAccumulator {
    /// Tally assigned to every regulator, so that regulators pass any regulation threshold.
    pub const REGULATOR_TALLY: u32 = u32::MAX;

    /// Create an empty accumulator which accepts at most `max_targets` distinct regulated
    /// vertices.
    pub fn new(max_targets: usize) -> NetworkAccumulator {
        NetworkAccumulator {
            tally: Default::default(),
            targets: Default::default(),
            edges: Default::default(),
            max_targets,
            statistics: TfbsStatistics::default(),
        }
    }

    /// Try to add the edges implied by a binding site of matrix `accession` near `target`.
    ///
    /// Each call counts as one edge inference. The call is rejected when the accession has
    /// no known regulators, or when `target` was not regulated so far and the limit of
    /// distinct regulated vertices has been reached. Otherwise the tally of `target` is
    /// incremented and every regulator of the matrix gets an edge to `target`.
    pub fn try_add_edge(
        &mut self,
        matrices: &TransfacMap,
        accession: &str,
        target: HgncId,
    ) -> bool {
        self.statistics.inference_calls += 1;
        let regulators = matrices.regulators(accession);
        if regulators.is_empty() {
            return false;
        }
        if !self.targets.contains(&target) {
            if self.targets.len() >= self.max_targets {
                return false;
            }
            self.targets.insert(target);
        }

        let tally = self.tally.entry(target).or_insert(0);
        *tally = tally.saturating_add(1);
        for regulator in regulators {
            self.tally.insert(*regulator, Self::REGULATOR_TALLY);
            self.edges.insert(Edge::new(target, *regulator));
        }
        true
    }

    /// Attach one binding site to all genes in its proximity.
    ///
    /// Sites with a probability below `min_probability` (or a `NaN` probability) are dropped
    /// without being counted. Returns `true` when at least one edge was accepted for this site.
    pub fn process_site(
        &mut self,
        site: &TfbsOccurrence,
        genes: &ContigGenes,
        window: ProximityWindow,
        matrices: &TransfacMap,
        min_probability: f64,
    ) -> bool {
        let probability = site.get_probability();
        if probability.is_nan() || probability < min_probability {
            return false;
        }
        self.statistics.processed += 1;

        let mut used = false;
        for target in genes.candidate_targets(site, window) {
            // Every candidate is one inference, even after the first success.
            used |= self.try_add_edge(matrices, site.get_accession(), target);
        }

        if used {
            self.statistics.used += 1;
            self.statistics.used_probability += site.get_probability();
        } else {
            self.statistics.unused += 1;
            self.statistics.unused_probability += site.get_probability();
        }
        used
    }

    /// Current regulation tally of `id` (zero for unknown vertices).
    pub fn get_tally(&self, id: HgncId) -> u32 {
        self.tally.get(&id).cloned().unwrap_or(0)
    }

    /// The number of distinct regulated vertices accepted so far.
    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    /// The number of distinct accepted edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn statistics(&self) -> &TfbsStatistics {
        &self.statistics
    }

    /// Build the output network.
    ///
    /// Vertices with a tally of at least `min_regulation` are listed in increasing id order,
    /// named by `names` (empty name if the id has no approved symbol). Edges are grouped by
    /// their regulated vertex, and only groups of listed vertices are kept. The run
    /// statistics are appended as comments.
    pub fn to_network(&self, names: &HgncNameIndex, min_regulation: u32) -> Network {
        let listed = self
            .tally
            .iter()
            .filter(|(_, tally)| **tally >= min_regulation)
            .map(|(id, _)| (*id, names.get_name(*id).unwrap_or("").to_string()))
            .collect::<BTreeMap<_, _>>();

        let mut groups: Vec<EdgeGroup> = Vec::new();
        for edge in &self.edges {
            if !listed.contains_key(&edge.regulated) {
                continue;
            }
            match groups.last_mut() {
                Some(group) if group.target == edge.regulated => {
                    group.regulators.push(edge.regulator);
                }
                _ => groups.push(EdgeGroup::new(edge.regulated, vec![edge.regulator])),
            }
        }

        let statistics = &self.statistics;
        let comments = vec![
            format!(
                "# {} transcription factor binding sites processed.",
                statistics.processed
            ),
            format!("# {} edge inference calls.", statistics.inference_calls),
            format!("# There are {} edges", self.edges.len()),
            format!(
                "# {} used TFBSs with average probability {}",
                statistics.used,
                statistics.average_used_probability()
            ),
            format!(
                "# {} unused TFBSs with average probability {}",
                statistics.unused,
                statistics.average_unused_probability()
            ),
        ];

        Network::new(
            listed
                .into_iter()
                .map(|(id, name)| Vertex::new(id, &name))
                .collect(),
            groups,
            comments,
        )
    }
}

impl TfbsStatistics {
    /// Binding sites that passed the probability filter.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn inference_calls(&self) -> u64 {
        self.inference_calls
    }

    /// Binding sites which contributed at least one edge.
    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn unused(&self) -> u64 {
        self.unused
    }

    /// Mean probability of the used sites; `NaN` when there are none.
    pub fn average_used_probability(&self) -> f64 {
        average(self.used_probability, self.used)
    }

    /// Mean probability of the unused sites; `NaN` when there are none.
    pub fn average_unused_probability(&self) -> f64 {
        average(self.unused_probability, self.unused)
    }
}

fn average(sum: f64, count: u64) -> f64 {
    if count == 0 {
        f64::NAN
    } else {
        sum / (count as f64)
    }
}
