//! Inference of a regulatory network from annotated contigs and binding site predictions.
//!
//! Every annotation file is read twice over: the genes of each `LOCUS` are collected first,
//! and once the contig is complete, the BaSeTraM predictions for the same contig are read
//! and every predicted binding site is attached to the genes in its proximity. The
//! [NetworkBuilder] owns all shared state and hands it to the two annotation sinks in turn,
//! so the sinks never need to know about each other.

use crate::{HgncNameIndex, NetworkAccumulator, ProximityWindow, TransfacMap};
use std::path::PathBuf;
use thiserror::Error;

/// **(internal)** Sink collecting the genes of each contig.
mod _impl_gene_collector;
/// **(internal)** Sink feeding binding sites of one contig to the accumulator.
mod _impl_tfbs_reader;
/// **(internal)** The file-level driver.
mod _impl_network_builder;

/// Extension of the annotation files picked up by [NetworkBuilder::process_directory].
pub const ANNOTATION_EXTENSION: &str = "gbk";

/// Tunable parameters of the network inference.
#[derive(Clone, Debug, PartialEq)]
pub struct BuilderConfig {
    /// Window around a binding site in which genes count as its targets.
    pub window: ProximityWindow,
    /// Binding sites with a lower probability are ignored entirely.
    pub min_probability: f64,
    /// Minimum number of inferred regulations for a regulated gene to be part of the output.
    pub min_regulation: u32,
    /// Maximum number of distinct regulated genes.
    pub max_targets: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            window: ProximityWindow::default(),
            min_probability: 0.0,
            min_regulation: 1,
            max_targets: usize::MAX,
        }
    }
}

/// Failure to process one input file.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse `{}`: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Builds one network from any number of annotation files.
///
/// The name index and the matrix map are created once and only read afterwards.
pub struct NetworkBuilder {
    config: BuilderConfig,
    tfbs_directory: PathBuf,
    names: HgncNameIndex,
    matrices: TransfacMap,
    accumulator: NetworkAccumulator,
}
