//! Infer transcription-factor regulatory networks from annotated genomes and produce
//! randomized variants of such networks.
//!
//! The crate has two halves. The [builder] streams GenBank-like annotation files, places
//! predicted transcription factor binding sites next to the genes they most likely regulate
//! and accumulates the result in a [NetworkAccumulator]. The [perturbation] operators read
//! the resulting [Network] back and rewrite it randomly (label switching, edge deletion,
//! insertion and replacement) to obtain null models.

use fxhash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

pub mod annotation;
pub mod builder;
pub mod perturbation;

/// **(internal)** Utility methods for `HgncId`.
mod _impl_hgnc_id;
/// **(internal)** Alias normalization and fuzzy symbol resolution.
mod _impl_hgnc_name_index;
/// **(internal)** Reading of the TRANSFAC matrix table.
mod _impl_transfac_map;
/// **(internal)** Strand-aware proximity search over gene positions.
mod _impl_contig_genes;
/// **(internal)** Thresholded edge accumulation and run statistics.
mod _impl_network_accumulator;
/// **(internal)** Utility methods for `Network`, `Vertex`, `EdgeGroup` and `Edge`.
mod _impl_network;
/// **(internal)** `Network` to its text format.
mod _impl_network_display;
/// **(internal)** `Network` from its text format.
mod _impl_network_parser;

/// Canonical numeric identifier of a gene, as assigned by the HGNC.
///
/// Every vertex of a [Network] is identified by an `HgncId`. The value `0` is reserved
/// and never refers to a real gene (see [HgncId::UNKNOWN]).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HgncId(u32);

/// The anchor coordinate of one gene on one strand of a contig.
///
/// Forward genes are anchored at their start coordinate, complement genes at their end
/// coordinate, so that the anchor is always the transcription start.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenePosition {
    offset: u32,
    gene: HgncId,
}

/// One predicted transcription factor binding site.
#[derive(Clone, Debug, PartialEq)]
pub struct TfbsOccurrence {
    start: u32,
    end: u32,
    is_complement: bool,
    accession: String,
    probability: f64,
}

/// Forward and complement gene positions of a single contig, sorted by offset.
///
/// See [ContigGenes::candidate_targets] for the proximity search.
#[derive(Clone, Debug, Default)]
pub struct ContigGenes {
    forward: Vec<GenePosition>,
    complement: Vec<GenePosition>,
}

/// Size of the window around a binding site in which genes are considered regulated by it.
///
/// Zones are given relative to the direction of transcription, hence their meaning swaps
/// between the forward and the complement strand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProximityWindow {
    pub upstream: u32,
    pub downstream: u32,
}

/// Index of normalized gene symbols and aliases to canonical `HgncId`s.
///
/// Names are normalized by converting them to upper case and removing all dashes. Each
/// normalized name maps to exactly one id: an *override* (approved symbol) insertion replaces
/// whatever was stored before, while a plain alias never replaces an existing entry.
#[derive(Clone, Debug, Default)]
pub struct HgncNameIndex {
    ids: FxHashMap<String, HgncId>,
    names: FxHashMap<HgncId, String>,
}

/// Multimap from TRANSFAC matrix accessions to the genes encoding the bound factors.
#[derive(Clone, Debug, Default)]
pub struct TransfacMap {
    regulators: FxHashMap<String, Vec<HgncId>>,
}

/// A directed edge of the regulatory network, stored regulated-first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    regulated: HgncId,
    regulator: HgncId,
}

/// Running counters describing how selective the binding site to edge pipeline was.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TfbsStatistics {
    processed: u64,
    inference_calls: u64,
    used: u64,
    used_probability: f64,
    unused: u64,
    unused_probability: f64,
}

/// Collects inferred edges together with per-vertex regulation tallies.
///
/// A vertex becomes part of the output network once its tally reaches the minimum
/// regulation threshold. Regulators are always included: their tally is forced to
/// [NetworkAccumulator::REGULATOR_TALLY].
#[derive(Clone, Debug)]
pub struct NetworkAccumulator {
    tally: FxHashMap<HgncId, u32>,
    targets: FxHashSet<HgncId>,
    edges: BTreeSet<Edge>,
    max_targets: usize,
    statistics: TfbsStatistics,
}

/// A named vertex of a serialized [Network].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vertex {
    id: HgncId,
    name: String,
}

/// All regulators of one regulated vertex, in the order in which they are listed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeGroup {
    target: HgncId,
    regulators: Vec<HgncId>,
}

/// A regulatory network in the form in which it is exchanged between the builder and the
/// perturbation operators.
///
/// The text format looks as follows:
///
/// ```text
/// VERTICES
/// VERTEX 1 TP53
/// VERTEX 2 MYC
/// ENDVERTICES
/// EDGES 1 (2 )
/// # 1 transcription factor binding sites processed.
/// ```
///
/// Each `EDGES` line lists all regulators of one target. Any other line (comments as well
/// as lines that are not recognized at all) is kept together with its position and written
/// back unchanged at the same place.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Network {
    vertices: Vec<Vertex>,
    edges: Vec<EdgeGroup>,
    comments: Vec<(LinePlacement, String)>,
}

/// **(internal)** Where a passthrough line of a [Network] is written.
///
/// `Vertex(i)` and `Edge(i)` place the line right before the `i`-th vertex or edge group
/// (or at the end of that section if there is no such item). `Trailing` lines follow the
/// edge section. A network keeps its lines sorted by placement.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum LinePlacement {
    Vertex(usize),
    Edge(usize),
    Trailing,
}
