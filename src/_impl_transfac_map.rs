use crate::_impl_hgnc_name_index::normalize_name;
use crate::{HgncId, HgncNameIndex, TransfacMap};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    /// `AC  M00001`: accession of the current matrix.
    static ref ACCESSION: Regex = Regex::new("^AC[ \\t]+(.*)$").unwrap();

    /// `BF  T00526 MyoD; Species: mouse, Mus musculus.`: a bound factor.
    static ref BOUND_FACTOR: Regex = Regex::new("^BF[ \\t]+[^ ]+ ([^;]*);.*$").unwrap();

    /// `NA  MyoD`: name of the matrix.
    static ref MATRIX_NAME: Regex = Regex::new("^NA[ \\t]+([^ ]+).*$").unwrap();
}

impl TransfacMap {
    pub fn new() -> TransfacMap {
        TransfacMap::default()
    }

    /// Read the TRANSFAC matrix table and resolve the factors bound by each matrix against
    /// the given name index.
    ///
    /// Records are terminated by a `//` line. Every `BF` factor name and every `NA` matrix
    /// name is a candidate alias of a regulator; each alias that resolves adds one regulator
    /// for the record's `AC` accession. Lines which match none of the fields are ignored,
    /// as is a final record without the terminating `//`.
    pub fn from_matrix_table(table: &str, names: &HgncNameIndex) -> TransfacMap {
        let mut map = TransfacMap::new();
        let mut accession: Option<String> = None;
        let mut aliases: BTreeSet<String> = BTreeSet::new();

        for line in table.lines() {
            let line = line.trim_end_matches('\r');
            if line == "//" {
                if let Some(accession) = accession.take() {
                    for alias in &aliases {
                        if let Some(id) = names.resolve(alias) {
                            map.insert(&accession, id);
                        }
                    }
                }
                aliases.clear();
            } else if let Some(captures) = ACCESSION.captures(line) {
                accession = Some(captures[1].trim().to_string());
            } else if let Some(captures) = BOUND_FACTOR.captures(line) {
                aliases.insert(normalize_name(&captures[1]));
            } else if let Some(captures) = MATRIX_NAME.captures(line) {
                aliases.insert(normalize_name(&captures[1]));
            }
        }

        map
    }

    /// Add `regulator` to the factors binding `accession`. Duplicates are ignored.
    pub fn insert(&mut self, accession: &str, regulator: HgncId) {
        let regulators = self.regulators.entry(accession.to_string()).or_default();
        if !regulators.contains(&regulator) {
            regulators.push(regulator);
        }
    }

    /// All regulators known to bind the matrix `accession` (empty if the accession is unknown).
    pub fn regulators(&self, accession: &str) -> &[HgncId] {
        self.regulators
            .get(accession)
            .map(|it| it.as_slice())
            .unwrap_or(&[])
    }

    /// The number of accessions with at least one regulator.
    pub fn num_accessions(&self) -> usize {
        self.regulators.len()
    }
}
