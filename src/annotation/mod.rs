//! A minimal push parser for GenBank-like flat files.
//!
//! The parser does not build any representation of the record. Instead, it reports what it
//! reads to an [AnnotationSink], which picks out the parts it cares about. Both the genome
//! annotations and the BaSeTraM binding site predictions are read this way.
//!
//! The supported subset of the format:
//!
//! ```text
//! LOCUS       NT_011512              1000 bp    DNA
//! DEFINITION  Homo sapiens chromosome 21 genomic contig,
//!             reference assembly.
//! FEATURES             Location/Qualifiers
//!      gene            complement(100..200)
//!                      /gene="TP53"
//!                      /db_xref="HGNC:11998"
//! ORIGIN
//!         1 gatcctccat atacaacggt atctccacct caggtttaga tctcaacaac
//! //
//! ```

use lazy_static::lazy_static;
use regex::Regex;

/// **(internal)** The line-driven parser state machine.
mod _impl_parser;
/// **(internal)** Parsing of `start..end` and `complement(start..end)` locations.
mod _impl_feature_location;

pub use _impl_parser::parse_annotations;

lazy_static! {
    /// A keyword line: an upper-case word in the first column, followed by the value.
    static ref KEYWORD_LINE: Regex = Regex::new("^([A-Z][A-Z0-9_]*)(?:\\s+(.*))?$").unwrap();

    /// A feature line: the feature key starts in the sixth column.
    static ref FEATURE_LINE: Regex = Regex::new("^ {5}(\\S+)(?:\\s+(.*))?$").unwrap();

    /// A qualifier line: `/name` or `/name=value` after the feature table indentation.
    static ref QUALIFIER_LINE: Regex = Regex::new("^ {6,}/([^=\\s]+)(?:=(.*))?$").unwrap();

    /// Simple or complemented span location: `12..140` or `complement(12..140)`.
    static ref SPAN_LOCATION: Regex =
        Regex::new("^(complement\\()?<?([0-9]+)\\.\\.>?([0-9]+)(\\))?$").unwrap();
}

/// Receiver of the events produced by [parse_annotations].
///
/// Events of one record arrive in strict nesting order: a keyword is opened, all features
/// listed under it (each with its qualifiers) are opened and closed, and then the keyword
/// is closed. Sequence lines following `ORIGIN` are reported as coding data. All methods do
/// nothing by default.
pub trait AnnotationSink {
    fn open_keyword(&mut self, _name: &str, _value: &str) {}
    fn close_keyword(&mut self) {}
    fn open_feature(&mut self, _name: &str, _location: &str) {}
    fn close_feature(&mut self) {}
    fn qualifier(&mut self, _name: &str, _value: &str) {}
    fn coding_data(&mut self, _data: &str) {}
}

/// A continuous span of a contig, optionally on the complement strand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeatureLocation {
    start: u32,
    end: u32,
    is_complement: bool,
}
