use crate::config::{MAX_YEAR, MIN_YEAR};
use crate::error::FitError;

use super::model::ClimateDataset;

// ---------------------------------------------------------------------------
// Query: the inclusive year range a user asked for
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i64,
    pub end: i64,
}

impl YearRange {
    /// Parse and validate the two text inputs.
    ///
    /// Every failure (not an integer, `start` below [`MIN_YEAR`], `end` above
    /// [`MAX_YEAR`], `start >= end`) maps to the same [`FitError::InvalidInput`].
    pub fn parse(start_text: &str, end_text: &str) -> Result<Self, FitError> {
        let start = start_text
            .trim()
            .parse::<i64>()
            .map_err(|_| FitError::InvalidInput)?;
        let end = end_text
            .trim()
            .parse::<i64>()
            .map_err(|_| FitError::InvalidInput)?;

        if start < MIN_YEAR || end > MAX_YEAR || start >= end {
            return Err(FitError::InvalidInput);
        }
        Ok(YearRange { start, end })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, year: i64) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// Return indices of records whose year falls in `range`, in dataset order.
pub fn filtered_indices(dataset: &ClimateDataset, range: &YearRange) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.year))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset(years: &[i64]) -> ClimateDataset {
        ClimateDataset::from_records(
            years
                .iter()
                .map(|&year| Record {
                    year,
                    temperature: 0.0,
                    rainfall: 0.0,
                    humidity: 0.0,
                })
                .collect(),
        )
    }

    fn range(start: i64, end: i64) -> YearRange {
        YearRange { start, end }
    }

    #[test]
    fn parse_accepts_valid_range() {
        assert_eq!(YearRange::parse("2000", "2002"), Ok(range(2000, 2002)));
        assert_eq!(YearRange::parse(" 1990 ", "2025\n"), Ok(range(1990, 2025)));
    }

    #[test]
    fn parse_rejects_out_of_bounds() {
        assert_eq!(YearRange::parse("1980", "2000"), Err(FitError::InvalidInput));
        assert_eq!(YearRange::parse("2000", "2026"), Err(FitError::InvalidInput));
    }

    #[test]
    fn parse_rejects_equal_or_reversed() {
        assert_eq!(YearRange::parse("2010", "2010"), Err(FitError::InvalidInput));
        assert_eq!(YearRange::parse("2010", "2005"), Err(FitError::InvalidInput));
    }

    #[test]
    fn parse_rejects_non_integers() {
        for (s, e) in [("", "2000"), ("abc", "2000"), ("2000.0", "2001"), ("2000", "2e3")] {
            assert_eq!(YearRange::parse(s, e), Err(FitError::InvalidInput), "{s:?} {e:?}");
        }
    }

    #[test]
    fn filter_is_inclusive_and_ordered() {
        let ds = dataset(&[2003, 1999, 2000, 2002, 2005, 2001]);
        assert_eq!(filtered_indices(&ds, &range(2000, 2003)), vec![0, 2, 3, 5]);
    }

    #[test]
    fn filter_can_be_empty() {
        let ds = dataset(&[2000, 2001]);
        assert!(filtered_indices(&ds, &range(1990, 1995)).is_empty());
    }
}
