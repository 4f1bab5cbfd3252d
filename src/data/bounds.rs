use std::collections::BTreeMap;

use super::model::LaunchRecord;

/// Minimum and maximum payload mass over a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// `None` for an empty slice.
    pub fn of(records: &[LaunchRecord]) -> Option<Self> {
        let mut iter = records.iter().map(|r| r.payload_mass);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(PayloadBounds { min, max })
    }

    /// Tick marks for the range control, position → label.
    ///
    /// The five marks sit at `min`, then 25 %, 50 %, 75 % and 100 % of `max`
    /// (fractions of the maximum, not of the span), each truncated to an
    /// integer. Coinciding positions collapse into a single mark.
    pub fn marks(&self) -> BTreeMap<i64, String> {
        let positions = [
            self.min,
            self.max / 4.0,
            self.max / 2.0,
            3.0 * self.max / 4.0,
            self.max,
        ];
        positions
            .into_iter()
            .map(|v| {
                let pos = v.floor() as i64;
                (pos, pos.to_string())
            })
            .collect()
    }

    /// Full range as `[low, high]`, the control's initial value.
    pub fn full_range(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn rec(payload: f64) -> LaunchRecord {
        LaunchRecord::new("CCAFS LC-40", payload, "FT", Outcome::Success)
    }

    #[test]
    fn bounds_of_records() {
        let b = PayloadBounds::of(&[rec(2500.0), rec(0.0), rec(9600.0)]).unwrap();
        assert_eq!(b.min, 0.0);
        assert_eq!(b.max, 9600.0);
        assert!(PayloadBounds::of(&[]).is_none());
    }

    #[test]
    fn marks_are_fractions_of_max_not_span() {
        let b = PayloadBounds {
            min: 1000.0,
            max: 9999.0,
        };
        let marks = b.marks();
        let labels: Vec<&str> = marks.values().map(String::as_str).collect();
        assert_eq!(labels, ["1000", "2499", "4999", "7499", "9999"]);
    }

    #[test]
    fn coinciding_marks_collapse() {
        let b = PayloadBounds {
            min: 2500.0,
            max: 10000.0,
        };
        let marks = b.marks();
        assert_eq!(marks.len(), 4);
        assert_eq!(marks.get(&2500).map(String::as_str), Some("2500"));
    }
}
