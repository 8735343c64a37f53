use crate::HgncId;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

impl HgncId {
    /// Reserved id which does not belong to any gene.
    pub const UNKNOWN: HgncId = HgncId(0);

    pub fn is_unknown(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for HgncId {
    fn from(val: u32) -> Self {
        HgncId(val)
    }
}

impl From<HgncId> for u32 {
    fn from(value: HgncId) -> Self {
        value.0
    }
}

/// Accepts both the bare number and the `HGNC:<number>` cross-reference form.
impl FromStr for HgncId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let digits = value.strip_prefix("HGNC:").unwrap_or(value);
        digits
            .parse::<u32>()
            .map(HgncId)
            .map_err(|_| format!("`{}` is not a valid HGNC id.", value))
    }
}

impl Display for HgncId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}
