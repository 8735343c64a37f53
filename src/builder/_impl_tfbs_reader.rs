use crate::annotation::{AnnotationSink, FeatureLocation};
use crate::builder::BuilderConfig;
use crate::{ContigGenes, NetworkAccumulator, TfbsOccurrence, TransfacMap};
use std::convert::TryFrom;

/// Reads the `TFBS` features of one contig's predictions and attaches each site to the
/// genes of that contig.
pub struct TfbsReader<'a> {
    genes: &'a ContigGenes,
    config: &'a BuilderConfig,
    matrices: &'a TransfacMap,
    accumulator: &'a mut NetworkAccumulator,
    location: Option<FeatureLocation>,
    accession: String,
    probability: f64,
    in_tfbs: bool,
}

impl<'a> TfbsReader<'a> {
    pub fn new(
        genes: &'a ContigGenes,
        config: &'a BuilderConfig,
        matrices: &'a TransfacMap,
        accumulator: &'a mut NetworkAccumulator,
    ) -> TfbsReader<'a> {
        TfbsReader {
            genes,
            config,
            matrices,
            accumulator,
            location: None,
            accession: String::new(),
            probability: 0.0,
            in_tfbs: false,
        }
    }
}

impl AnnotationSink for TfbsReader<'_> {
    fn open_feature(&mut self, name: &str, location: &str) {
        self.in_tfbs = name == "TFBS";
        self.location = None;
        self.accession.clear();
        self.probability = 0.0;
        if self.in_tfbs {
            match FeatureLocation::try_from(location) {
                Ok(location) => self.location = Some(location),
                Err(message) => tracing::debug!("Skipping binding site: {}", message),
            }
        }
    }

    fn qualifier(&mut self, name: &str, value: &str) {
        if !self.in_tfbs {
            return;
        }
        if name == "probability" {
            // Anything but a probability in [0, 1] (including `nan`) counts as zero.
            self.probability = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|it| (0.0..=1.0).contains(it))
                .unwrap_or(0.0);
        } else if name == "db_xref" {
            if let Some(accession) = value.strip_prefix("TRANSFAC:") {
                self.accession = accession.trim().to_string();
            }
        }
    }

    fn close_feature(&mut self) {
        if !self.in_tfbs {
            return;
        }
        self.in_tfbs = false;
        if let Some(location) = self.location.take() {
            let site = TfbsOccurrence::new(
                location.get_start(),
                location.get_end(),
                location.is_complement(),
                &self.accession,
                self.probability,
            );
            self.accumulator.process_site(
                &site,
                self.genes,
                self.config.window,
                self.matrices,
                self.config.min_probability,
            );
        }
    }
}
