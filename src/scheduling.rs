//! Time-of-day interval logic for operating hours.
//!
//! Boundary semantics are half-open: two ranges that touch at a shared
//! instant (one closes at 17:00, the other opens at 17:00) do not overlap.

use crate::types::error::AppError;
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, AppError> {
        if start >= end {
            return Err(AppError::Validation(
                "closing_time must be after opening_time".to_string(),
            ));
        }
        Ok(TimeRange { start, end })
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// No stored interval means nothing to conflict with.
pub fn conflicts(candidate: &TimeRange, existing: Option<&TimeRange>) -> bool {
    match existing {
        None => false,
        Some(range) => candidate.overlaps(range),
    }
}

pub fn conflicts_with_any<'a, I>(candidate: &TimeRange, existing: I) -> bool
where
    I: IntoIterator<Item = &'a TimeRange>,
{
    existing
        .into_iter()
        .any(|range| conflicts(candidate, Some(range)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> TimeRange {
        TimeRange::new(t(start.0, start.1), t(end.0, end.1)).unwrap()
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let morning = range((9, 0), (17, 0));
        let evening = range((18, 0), (22, 0));
        assert!(!morning.overlaps(&evening));
    }

    #[test]
    fn intersecting_ranges_overlap() {
        let a = range((9, 0), (17, 0));
        let b = range((16, 0), (20, 0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn touching_boundary_is_not_an_overlap() {
        let a = range((9, 0), (17, 0));
        let b = range((17, 0), (22, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn equal_starts_with_overlap_conflict() {
        let a = range((9, 0), (12, 0));
        let b = range((9, 0), (10, 0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let samples = [
            (range((9, 0), (17, 0)), range((18, 0), (22, 0))),
            (range((9, 0), (17, 0)), range((16, 0), (20, 0))),
            (range((9, 0), (17, 0)), range((17, 0), (20, 0))),
            (range((8, 30), (9, 30)), range((9, 0), (12, 0))),
            (range((0, 0), (23, 59)), range((12, 0), (13, 0))),
        ];
        for (a, b) in samples {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn missing_existing_interval_never_conflicts() {
        let candidate = range((9, 0), (17, 0));
        assert!(!conflicts(&candidate, None));
    }

    #[test]
    fn conflicts_with_any_scans_all_ranges() {
        let candidate = range((11, 0), (13, 0));
        let stored = vec![range((9, 0), (10, 0)), range((12, 0), (14, 0))];
        assert!(conflicts_with_any(&candidate, &stored));

        let free = range((10, 0), (11, 30));
        assert!(!conflicts_with_any(&free, &stored));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(TimeRange::new(t(17, 0), t(9, 0)).is_err());
        assert!(TimeRange::new(t(9, 0), t(9, 0)).is_err());
    }
}
