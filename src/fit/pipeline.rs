//! Filter-and-fit: the only computation behind a "Plot Data" click.
//!
//! ```text
//! start/end text ─► YearRange::parse ─► filtered_indices ─► fit_line × 3 ─► FitOutcome
//! ```
//!
//! Everything here is pure and GUI-free; the UI only renders a
//! [`FitOutcome`] or shows the [`FitError`] message.

use crate::data::filter::{YearRange, filtered_indices};
use crate::data::model::{ClimateDataset, Variable};
use crate::error::FitError;

use super::regression::{LinearFit, fit_line};

/// Actual and in-sample predicted values for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSeries {
    pub variable: Variable,
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
    pub fit: LinearFit,
}

/// Result of one successful query.
///
/// `years` and every series' `actual`/`predicted` have the same length and
/// follow dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub range: YearRange,
    pub years: Vec<i64>,
    pub series: Vec<VariableSeries>,
}

impl FitOutcome {
    pub fn series_for(&self, variable: Variable) -> Option<&VariableSeries> {
        self.series.iter().find(|s| s.variable == variable)
    }
}

/// Validate the raw inputs, filter, and fit every variable.
pub fn compute_fit(
    dataset: &ClimateDataset,
    start_text: &str,
    end_text: &str,
) -> Result<FitOutcome, FitError> {
    let range = YearRange::parse(start_text, end_text)?;
    fit_range(dataset, range)
}

/// Filter and fit for an already validated range.
pub fn fit_range(dataset: &ClimateDataset, range: YearRange) -> Result<FitOutcome, FitError> {
    let indices = filtered_indices(dataset, &range);
    if indices.is_empty() {
        return Err(FitError::NoData {
            start: range.start,
            end: range.end,
        });
    }

    let rows: Vec<_> = indices.iter().map(|&i| &dataset.records[i]).collect();
    let years: Vec<i64> = rows.iter().map(|r| r.year).collect();
    let xs: Vec<f64> = years.iter().map(|&y| y as f64).collect();

    let series = Variable::ALL
        .iter()
        .map(|&variable| -> Result<VariableSeries, FitError> {
            let actual: Vec<f64> = rows.iter().map(|r| variable.value(r)).collect();
            let fit = fit_line(&xs, &actual)?;
            let predicted = xs.iter().map(|&x| fit.predict(x)).collect();
            log::debug!(
                "{variable} {}–{}: slope={:.6} intercept={:.6} r²={:.4}",
                range.start,
                range.end,
                fit.slope,
                fit.intercept,
                fit.r_squared
            );
            Ok(VariableSeries {
                variable,
                actual,
                predicted,
                fit,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FitOutcome {
        range,
        years,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(year: i64, temperature: f64, rainfall: f64, humidity: f64) -> Record {
        Record {
            year,
            temperature,
            rainfall,
            humidity,
        }
    }

    fn small_dataset() -> ClimateDataset {
        ClimateDataset::from_records(vec![
            rec(2000, 15.0, 100.0, 50.0),
            rec(2001, 16.0, 110.0, 52.0),
            rec(2002, 17.0, 120.0, 54.0),
        ])
    }

    fn decades_dataset() -> ClimateDataset {
        let records = (1990..=2025)
            .filter(|y| *y != 2020 && *y != 2021)
            .map(|y| {
                let t = (y - 1990) as f64;
                rec(y, 14.0 + 0.03 * t, 900.0 - 2.0 * t + (t % 3.0), 60.0 + (t % 5.0))
            })
            .collect();
        ClimateDataset::from_records(records)
    }

    #[test]
    fn temperature_scenario_is_exact() {
        let out = compute_fit(&small_dataset(), "2000", "2002").unwrap();
        assert_eq!(out.years, vec![2000, 2001, 2002]);

        let temp = out.series_for(Variable::Temperature).unwrap();
        assert_eq!(temp.fit.slope, 1.0);
        assert_eq!(temp.fit.intercept, -1985.0);
        assert_eq!(temp.predicted, vec![15.0, 16.0, 17.0]);
        assert_eq!(temp.actual, vec![15.0, 16.0, 17.0]);
    }

    #[test]
    fn series_are_aligned_with_years() {
        let ds = decades_dataset();
        for (start, end) in [("1990", "2025"), ("2000", "2010"), ("2019", "2022")] {
            let out = compute_fit(&ds, start, end).unwrap();
            assert_eq!(out.series.len(), 3);
            for s in &out.series {
                assert_eq!(s.actual.len(), out.years.len());
                assert_eq!(s.predicted.len(), out.years.len());
            }
            assert!(out.years.iter().all(|y| out.range.contains(*y)));
        }
    }

    #[test]
    fn out_of_bounds_is_invalid_input() {
        let ds = small_dataset();
        assert_eq!(compute_fit(&ds, "1980", "2000"), Err(FitError::InvalidInput));
        assert_eq!(compute_fit(&ds, "2010", "2005"), Err(FitError::InvalidInput));
        assert_eq!(compute_fit(&ds, "2005", "2000"), Err(FitError::InvalidInput));
        assert_eq!(compute_fit(&ds, "2000", "2000"), Err(FitError::InvalidInput));
        assert_eq!(compute_fit(&ds, "two thousand", "2002"), Err(FitError::InvalidInput));
    }

    #[test]
    fn empty_range_is_no_data() {
        let err = compute_fit(&small_dataset(), "1990", "1995").unwrap_err();
        assert_eq!(
            err,
            FitError::NoData {
                start: 1990,
                end: 1995
            }
        );
        assert!(err.to_string().contains("1990 to 1995"));
    }

    #[test]
    fn gap_in_dataset_is_no_data() {
        let err = compute_fit(&decades_dataset(), "2020", "2021").unwrap_err();
        assert_eq!(
            err,
            FitError::NoData {
                start: 2020,
                end: 2021
            }
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let ds = decades_dataset();
        let a = compute_fit(&ds, "1995", "2015").unwrap();
        let b = compute_fit(&ds, "1995", "2015").unwrap();
        for (sa, sb) in a.series.iter().zip(&b.series) {
            assert_eq!(sa.fit.slope.to_bits(), sb.fit.slope.to_bits());
            assert_eq!(sa.fit.intercept.to_bits(), sb.fit.intercept.to_bits());
            let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
            assert_eq!(bits(&sa.predicted), bits(&sb.predicted));
        }
    }

    #[test]
    fn single_distinct_year_predicts_constant() {
        // Range spans two years but only one is present in the data.
        let ds = ClimateDataset::from_records(vec![
            rec(2000, 15.0, 100.0, 50.0),
            rec(2010, 18.0, 90.0, 40.0),
        ]);
        let out = compute_fit(&ds, "1999", "2001").unwrap();
        assert_eq!(out.years, vec![2000]);
        for s in &out.series {
            assert_eq!(s.fit.slope, 0.0);
            assert_eq!(s.predicted, s.actual);
        }
    }

    #[test]
    fn duplicate_years_are_kept() {
        let ds = ClimateDataset::from_records(vec![
            rec(2000, 10.0, 100.0, 50.0),
            rec(2000, 20.0, 120.0, 54.0),
        ]);
        let out = compute_fit(&ds, "2000", "2001").unwrap();
        assert_eq!(out.years, vec![2000, 2000]);
        let temp = out.series_for(Variable::Temperature).unwrap();
        assert_eq!(temp.predicted, vec![15.0, 15.0]);
    }

    #[test]
    fn failed_query_leaves_dataset_untouched() {
        let ds = small_dataset();
        let before = ds.records.clone();
        let _ = compute_fit(&ds, "1990", "1995");
        let _ = compute_fit(&ds, "bad", "input");
        assert_eq!(ds.records, before);
    }
}
