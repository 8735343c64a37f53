use crate::{ContigGenes, GenePosition, HgncId, ProximityWindow, TfbsOccurrence};

impl GenePosition {
    pub fn new(offset: u32, gene: HgncId) -> GenePosition {
        GenePosition { offset, gene }
    }

    pub fn get_offset(&self) -> u32 {
        self.offset
    }

    pub fn get_gene(&self) -> HgncId {
        self.gene
    }
}

impl TfbsOccurrence {
    pub fn new(
        start: u32,
        end: u32,
        is_complement: bool,
        accession: &str,
        probability: f64,
    ) -> TfbsOccurrence {
        TfbsOccurrence {
            start,
            end,
            is_complement,
            accession: accession.to_string(),
            probability,
        }
    }

    pub fn get_start(&self) -> u32 {
        self.start
    }

    pub fn get_end(&self) -> u32 {
        self.end
    }

    pub fn is_complement(&self) -> bool {
        self.is_complement
    }

    pub fn get_accession(&self) -> &str {
        self.accession.as_str()
    }

    pub fn get_probability(&self) -> f64 {
        self.probability
    }
}

impl Default for ProximityWindow {
    fn default() -> Self {
        ProximityWindow {
            upstream: 200,
            downstream: 50,
        }
    }
}

impl ProximityWindow {
    /// The inclusive range of gene offsets associated with a binding site at `start`.
    ///
    /// On the forward strand, the window reaches `upstream` bases to the right of the site
    /// (genes starting after the site) and `downstream` bases to the left. On the complement
    /// strand the direction of transcription is reversed and so are the zones.
    pub fn range(&self, start: u32, is_complement: bool) -> (u32, u32) {
        let (below, above) = if is_complement {
            (self.upstream, self.downstream)
        } else {
            (self.downstream, self.upstream)
        };
        (start.saturating_sub(below), start.saturating_add(above))
    }
}

impl ContigGenes {
    pub fn new() -> ContigGenes {
        ContigGenes::default()
    }

    /// Add a gene spanning `start..end`. Forward genes are anchored at `start`,
    /// complement genes at `end`.
    pub fn push_gene(&mut self, start: u32, end: u32, is_complement: bool, gene: HgncId) {
        if is_complement {
            self.complement.push(GenePosition::new(end, gene));
        } else {
            self.forward.push(GenePosition::new(start, gene));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.complement.is_empty()
    }

    pub fn num_genes(&self) -> usize {
        self.forward.len() + self.complement.len()
    }

    /// Sort both strands by offset. Must be called before [ContigGenes::candidate_targets].
    pub fn sort(&mut self) {
        self.forward.sort_by_key(|it| it.offset);
        self.complement.sort_by_key(|it| it.offset);
    }

    /// Genes of the binding site's strand whose anchor lies within the proximity `window`
    /// of the site start.
    ///
    /// The rightmost gene inside the window is found by binary search, the rest by walking
    /// towards the lower bound, so genes are returned in decreasing offset order.
    pub fn candidate_targets(&self, site: &TfbsOccurrence, window: ProximityWindow) -> Vec<HgncId> {
        let genes = if site.is_complement {
            &self.complement
        } else {
            &self.forward
        };
        let (lower, upper) = window.range(site.start, site.is_complement);
        let end = genes.partition_point(|it| it.offset <= upper);
        genes[..end]
            .iter()
            .rev()
            .take_while(|it| it.offset >= lower)
            .map(|it| it.gene)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ContigGenes, HgncId, ProximityWindow, TfbsOccurrence};

    fn contig() -> ContigGenes {
        let mut genes = ContigGenes::new();
        // Forward genes anchored at 100, 250, 251, 400, 1000.
        genes.push_gene(1000, 1200, false, HgncId::from(5));
        genes.push_gene(100, 200, false, HgncId::from(1));
        genes.push_gene(251, 300, false, HgncId::from(3));
        genes.push_gene(250, 300, false, HgncId::from(2));
        genes.push_gene(400, 500, false, HgncId::from(4));
        // Complement genes anchored at their end: 200, 600.
        genes.push_gene(500, 600, true, HgncId::from(11));
        genes.push_gene(10, 200, true, HgncId::from(10));
        genes.sort();
        genes
    }

    fn ids(values: &[u32]) -> Vec<HgncId> {
        values.iter().map(|it| HgncId::from(*it)).collect()
    }

    #[test]
    fn window_ranges() {
        let window = ProximityWindow::default();
        assert_eq!((0, 250), window.range(50, false));
        assert_eq!((0, 100), window.range(50, true));
        assert_eq!((950, 1200), window.range(1000, false));
        assert_eq!((800, 1050), window.range(1000, true));
        assert_eq!((u32::MAX - 50, u32::MAX), window.range(u32::MAX, false));
    }

    #[test]
    fn forward_site() {
        let genes = contig();
        let window = ProximityWindow::default();
        let site = TfbsOccurrence::new(50, 60, false, "M1", 0.9);
        assert_eq!(ids(&[2, 1]), genes.candidate_targets(&site, window));

        let site = TfbsOccurrence::new(300, 310, false, "M1", 0.9);
        assert_eq!(ids(&[4, 3, 2]), genes.candidate_targets(&site, window));

        let site = TfbsOccurrence::new(2000, 2010, false, "M1", 0.9);
        assert!(genes.candidate_targets(&site, window).is_empty());
    }

    #[test]
    fn complement_site() {
        let genes = contig();
        let window = ProximityWindow::default();
        // Window [200, 450]: only the complement gene ending at 200.
        let site = TfbsOccurrence::new(400, 410, true, "M1", 0.9);
        assert_eq!(ids(&[10]), genes.candidate_targets(&site, window));

        // Window [450, 700].
        let site = TfbsOccurrence::new(650, 660, true, "M1", 0.9);
        assert_eq!(ids(&[11]), genes.candidate_targets(&site, window));

        // Window [0, 200].
        let site = TfbsOccurrence::new(150, 160, true, "M1", 0.9);
        assert_eq!(ids(&[10]), genes.candidate_targets(&site, window));
    }

    #[test]
    fn window_matches_brute_force() {
        let genes = contig();
        let window = ProximityWindow {
            upstream: 120,
            downstream: 70,
        };
        for start in (0..1400).step_by(7) {
            for is_complement in [false, true] {
                let site = TfbsOccurrence::new(start, start + 10, is_complement, "M1", 1.0);
                let (lower, upper) = window.range(start, is_complement);
                let list = if is_complement {
                    &genes.complement
                } else {
                    &genes.forward
                };
                let mut expected = list
                    .iter()
                    .filter(|it| it.offset >= lower && it.offset <= upper)
                    .map(|it| it.gene)
                    .collect::<Vec<_>>();
                let mut actual = genes.candidate_targets(&site, window);
                expected.sort();
                actual.sort();
                assert_eq!(expected, actual, "site {} complement {}", start, is_complement);
            }
        }
    }

    #[test]
    fn empty_contig() {
        let genes = ContigGenes::new();
        assert!(genes.is_empty());
        let site = TfbsOccurrence::new(10, 20, false, "M1", 1.0);
        assert!(genes
            .candidate_targets(&site, ProximityWindow::default())
            .is_empty());
    }
}
