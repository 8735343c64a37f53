use crate::{HgncId, HgncNameIndex};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Separates the entries of the HGNC alias columns.
    static ref ALIAS_SEPARATOR: Regex = Regex::new("[, ]+").unwrap();

    /// Splits a symbol into a prefix and a trailing numeric or greek-letter suffix,
    /// optionally separated by a dash (`HNF-4`, `RXRalpha`, `AP2`).
    static ref SYMBOL_SUFFIX: Regex = Regex::new("(?i)^(.+?)-?([0-9]+|alpha|beta)$").unwrap();
}

/// Normalize a gene symbol for lookup: upper case, no dashes.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase().replace('-', "")
}

/// Suffixes which TRANSFAC writes differently than the HGNC nomenclature.
fn suffix_substitute(suffix: &str) -> Option<&'static str> {
    match suffix.to_uppercase().as_str() {
        "ALPHA" => Some("A"),
        "BETA" => Some("B"),
        "1" => Some("I"),
        "2" => Some("II"),
        _ => None,
    }
}

impl HgncNameIndex {
    pub fn new() -> HgncNameIndex {
        HgncNameIndex::default()
    }

    /// Build the index from the tab-separated HGNC symbol table.
    ///
    /// The first line is a header. Only rows with at least six columns and the status
    /// `Approved` are used: column `1` is the approved symbol (inserted as an override and
    /// used as the display name), column `2` the full name, and columns `4` and `5` comma
    /// or space separated alias lists. Rows with an unreadable id are skipped.
    pub fn from_hgnc_table(table: &str) -> HgncNameIndex {
        let mut index = HgncNameIndex::new();
        for (line_no, line) in table.lines().enumerate().skip(1) {
            let columns = line.split('\t').collect::<Vec<_>>();
            if columns.len() < 6 || columns[3] != "Approved" {
                continue;
            }
            let id = match columns[0].parse::<HgncId>() {
                Ok(id) if !id.is_unknown() => id,
                _ => {
                    tracing::debug!(
                        "Skipping HGNC row {}: invalid id `{}`.",
                        line_no + 1,
                        columns[0]
                    );
                    continue;
                }
            };

            index.insert(columns[1], id, true);
            index.insert(columns[2], id, false);
            for aliases in &columns[4..6] {
                for alias in ALIAS_SEPARATOR.split(aliases) {
                    index.insert(alias, id, false);
                }
            }
        }
        index
    }

    /// Register `alias` as a name of the gene `id`.
    ///
    /// With `is_override` set, the alias replaces any previous mapping of the same
    /// normalized name and also becomes the display name of `id` (unless it already has one).
    /// Otherwise, the alias is only stored when the normalized name is still free.
    pub fn insert(&mut self, alias: &str, id: HgncId, is_override: bool) {
        let key = normalize_name(alias);
        if key.is_empty() {
            return;
        }
        if is_override {
            self.names
                .entry(id)
                .or_insert_with(|| alias.trim().to_string());
            self.ids.insert(key, id);
        } else {
            self.ids.entry(key).or_insert(id);
        }
    }

    /// Resolve a (possibly stylized) gene symbol to its canonical id.
    ///
    /// Apart from the exact normalized name, this tries, in order: the name without a trailing
    /// number (or with a recognized suffix such as `alpha` or `2` rewritten to `A` or `II`), the
    /// name with `1` appended, the name with `A` appended, and finally the whole sequence again
    /// for the name with `ALPHA` rewritten to `A`.
    pub fn resolve(&self, name: &str) -> Option<HgncId> {
        self.resolve_fuzzy(name, true)
    }

    /// Exact lookup of an already normalized name.
    pub fn find(&self, normalized: &str) -> Option<HgncId> {
        self.ids.get(normalized).cloned()
    }

    /// Display name (approved symbol) of the given gene, if known.
    pub fn get_name(&self, id: HgncId) -> Option<&str> {
        self.names.get(&id).map(|it| it.as_str())
    }

    /// The number of distinct normalized names in this index.
    pub fn num_aliases(&self) -> usize {
        self.ids.len()
    }

    /// **(internal)** `rewrite_alpha` is cleared on the recursive call, so the recursion
    /// depth is at most one.
    fn resolve_fuzzy(&self, name: &str, rewrite_alpha: bool) -> Option<HgncId> {
        let normalized = normalize_name(name);
        if let Some(id) = self.find(&normalized) {
            return Some(id);
        }

        if let Some(captures) = SYMBOL_SUFFIX.captures(name.trim()) {
            let prefix = normalize_name(&captures[1]);
            let retry = match suffix_substitute(&captures[2]) {
                Some(substitute) => format!("{}{}", prefix, substitute),
                None => prefix,
            };
            if let Some(id) = self.find(&retry) {
                return Some(id);
            }
        }

        if let Some(id) = self.find(&format!("{}1", normalized)) {
            return Some(id);
        }
        if let Some(id) = self.find(&format!("{}A", normalized)) {
            return Some(id);
        }

        if rewrite_alpha {
            let rewritten = normalized.replace("ALPHA", "A");
            if rewritten != normalized {
                return self.resolve_fuzzy(&rewritten, false);
            }
        }

        None
    }
}
