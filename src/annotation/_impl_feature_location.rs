use crate::annotation::{FeatureLocation, SPAN_LOCATION};
use std::convert::TryFrom;

impl FeatureLocation {
    pub fn new(start: u32, end: u32, is_complement: bool) -> FeatureLocation {
        FeatureLocation {
            start,
            end,
            is_complement,
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
}

impl TryFrom<&str> for FeatureLocation {
    type Error = String;

    /// Partial-end markers (`<12..>140`) are accepted and ignored. Joins, orders and single
    /// base locations are not supported.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || format!("Unsupported feature location `{}`.", value);
        let captures = SPAN_LOCATION.captures(value.trim()).ok_or_else(invalid)?;
        let is_complement = captures.get(1).is_some();
        if is_complement != captures.get(4).is_some() {
            return Err(invalid());
        }
        let start = captures[2].parse::<u32>().map_err(|_| invalid())?;
        let end = captures[3].parse::<u32>().map_err(|_| invalid())?;
        Ok(FeatureLocation::new(start, end, is_complement))
    }
}
