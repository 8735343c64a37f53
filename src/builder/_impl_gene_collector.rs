use crate::annotation::{AnnotationSink, FeatureLocation};
use crate::{ContigGenes, HgncId};
use std::convert::TryFrom;

/// Collects HGNC-annotated genes of a contig and hands them to `on_contig` once the next
/// `LOCUS` begins (or [GeneCollector::finish] is called).
pub struct GeneCollector<F: FnMut(&str, ContigGenes)> {
    on_contig: F,
    contig: Option<String>,
    genes: ContigGenes,
    location: Option<FeatureLocation>,
    in_gene: bool,
}

impl<F: FnMut(&str, ContigGenes)> GeneCollector<F> {
    pub fn new(on_contig: F) -> GeneCollector<F> {
        GeneCollector {
            on_contig,
            contig: None,
            genes: ContigGenes::new(),
            location: None,
            in_gene: false,
        }
    }

    /// Hand over the last contig.
    pub fn finish(mut self) {
        self.finish_contig();
    }

    fn finish_contig(&mut self) {
        let genes = std::mem::take(&mut self.genes);
        match self.contig.take() {
            Some(contig) => (self.on_contig)(&contig, genes),
            None if !genes.is_empty() => {
                tracing::debug!("Dropping {} genes outside of a LOCUS.", genes.num_genes());
            }
            None => (),
        }
    }
}

impl<F: FnMut(&str, ContigGenes)> AnnotationSink for GeneCollector<F> {
    fn open_keyword(&mut self, name: &str, value: &str) {
        if name == "LOCUS" {
            self.finish_contig();
            self.contig = value.split_whitespace().next().map(|it| it.to_string());
        }
    }

    fn open_feature(&mut self, name: &str, location: &str) {
        self.in_gene = name == "gene";
        self.location = None;
        if self.in_gene {
            match FeatureLocation::try_from(location) {
                Ok(location) => self.location = Some(location),
                Err(message) => tracing::debug!("Skipping gene: {}", message),
            }
        }
    }

    fn close_feature(&mut self) {
        self.in_gene = false;
        self.location = None;
    }

    fn qualifier(&mut self, name: &str, value: &str) {
        if !self.in_gene || name != "db_xref" || !value.starts_with("HGNC:") {
            return;
        }
        let (Some(location), Ok(id)) = (self.location, value.parse::<HgncId>()) else {
            return;
        };
        if !id.is_unknown() {
            self.genes.push_gene(
                location.get_start(),
                location.get_end(),
                location.is_complement(),
                id,
            );
        }
    }
}
