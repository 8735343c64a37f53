use crate::annotation::parse_annotations;
use crate::builder::_impl_gene_collector::GeneCollector;
use crate::builder::_impl_tfbs_reader::TfbsReader;
use crate::builder::{BuildError, BuilderConfig, NetworkBuilder, ANNOTATION_EXTENSION};
use crate::{ContigGenes, HgncNameIndex, Network, NetworkAccumulator, TransfacMap};
use std::path::{Path, PathBuf};

impl NetworkBuilder {
    /// Create a builder which reads binding site predictions from `tfbs_directory`.
    ///
    /// Predictions for contig `C` of annotation file `F.gbk` are expected in
    /// `tfbs_directory/F/C`.
    pub fn new(
        config: BuilderConfig,
        tfbs_directory: &Path,
        names: HgncNameIndex,
        matrices: TransfacMap,
    ) -> NetworkBuilder {
        NetworkBuilder {
            accumulator: NetworkAccumulator::new(config.max_targets),
            config,
            tfbs_directory: tfbs_directory.to_path_buf(),
            names,
            matrices,
        }
    }

    /// Same as [NetworkBuilder::new], but reads the HGNC symbol table and the TRANSFAC
    /// matrix table from the given files.
    pub fn from_database_files(
        config: BuilderConfig,
        tfbs_directory: &Path,
        hgnc_path: &Path,
        matrices_path: &Path,
    ) -> Result<NetworkBuilder, BuildError> {
        let names = HgncNameIndex::from_hgnc_table(&read_file(hgnc_path)?);
        tracing::info!(
            "Indexed {} gene names from `{}`.",
            names.num_aliases(),
            hgnc_path.display()
        );
        let matrices = TransfacMap::from_matrix_table(&read_file(matrices_path)?, &names);
        tracing::info!(
            "Resolved regulators of {} matrices from `{}`.",
            matrices.num_accessions(),
            matrices_path.display()
        );
        Ok(NetworkBuilder::new(config, tfbs_directory, names, matrices))
    }

    /// Process every annotation file (`*.gbk`) of `directory`, in file name order.
    ///
    /// A file which cannot be read or parsed is logged and skipped; whatever it contributed
    /// before the failure stays in the network. Returns the number of files processed
    /// without error.
    pub fn process_directory(&mut self, directory: &Path) -> Result<usize, BuildError> {
        let io_error = |source| BuildError::Io {
            path: directory.to_path_buf(),
            source,
        };
        let mut files = Vec::new();
        for entry in std::fs::read_dir(directory).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            let is_annotation = path
                .extension()
                .map(|it| it == ANNOTATION_EXTENSION)
                .unwrap_or(false);
            if is_annotation && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        let mut processed = 0;
        for file in &files {
            if cfg!(feature = "print-progress") {
                eprintln!("Processing annotation file {}.", file.display());
            }
            match self.process_annotation_file(file) {
                Ok(()) => processed += 1,
                Err(error) => tracing::warn!("{}", error),
            }
        }
        tracing::info!(
            "Processed {}/{} annotation files, {} edges so far.",
            processed,
            files.len(),
            self.accumulator.num_edges()
        );
        Ok(processed)
    }

    /// Read the genes of one annotation file and attach the predicted binding sites of each
    /// of its contigs.
    ///
    /// On a parse error, the contigs read so far (including the incomplete last one) are
    /// still processed before the error is returned.
    pub fn process_annotation_file(&mut self, path: &Path) -> Result<(), BuildError> {
        let content = read_file(path)?;
        let stem = path.file_stem().unwrap_or_default();
        let contig_directory = self.tfbs_directory.join(stem);

        let NetworkBuilder {
            config,
            matrices,
            accumulator,
            ..
        } = self;
        let mut collector = GeneCollector::new(|contig: &str, genes: ContigGenes| {
            process_contig(&contig_directory.join(contig), genes, config, matrices, accumulator);
        });
        let result = parse_annotations(&content, &mut collector);
        collector.finish();

        result.map_err(|message| BuildError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn names(&self) -> &HgncNameIndex {
        &self.names
    }

    pub fn matrices(&self) -> &TransfacMap {
        &self.matrices
    }

    pub fn accumulator(&self) -> &NetworkAccumulator {
        &self.accumulator
    }

    /// The network inferred so far, thresholded by the configured minimum regulation.
    pub fn to_network(&self) -> Network {
        self.accumulator
            .to_network(&self.names, self.config.min_regulation)
    }
}

/// **(internal)** Attach the binding sites predicted in `tfbs_file` to `genes`.
///
/// Failures only affect this contig and are logged.
fn process_contig(
    tfbs_file: &Path,
    mut genes: ContigGenes,
    config: &BuilderConfig,
    matrices: &TransfacMap,
    accumulator: &mut NetworkAccumulator,
) {
    if genes.is_empty() {
        return;
    }
    genes.sort();

    let predictions = match read_file(tfbs_file) {
        Ok(predictions) => predictions,
        Err(error) => {
            tracing::warn!("Skipping contig with {} genes: {}", genes.num_genes(), error);
            return;
        }
    };
    let mut reader = TfbsReader::new(&genes, config, matrices, accumulator);
    if let Err(message) = parse_annotations(&predictions, &mut reader) {
        let error = BuildError::Parse {
            path: tfbs_file.to_path_buf(),
            message,
        };
        tracing::warn!("{}", error);
    }
}

fn read_file(path: &Path) -> Result<String, BuildError> {
    std::fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: PathBuf::from(path),
        source,
    })
}
