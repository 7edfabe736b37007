use crate::{GregorianDate, prelude::*};

/// An inclusive span of Gregorian days.
/// The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: GregorianDate, end: GregorianDate },
}

impl DateRange {
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Callers guarantee `start <= end`.
    pub(crate) const fn from_ordered(start: GregorianDate, end: GregorianDate) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days covered, counting both ends.
    pub const fn len(&self) -> usize {
        (self.end.days_since(&self.start) + 1).unsigned_abs() as usize
    }

    /// Always false: a range holds at least its start day.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates every day from start to end.
    pub const fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = GregorianDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<GregorianDate>,
    end:  GregorianDate,
}

impl Iterator for Days {
    type Item = GregorianDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .filter(|d| *d <= self.end)
            .map_or(0, |d| DateRange::from_ordered(d, self.end).len());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          (u16, u8, u8),
            end:            (u16, u8, u8),
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          (1999, 2, 16),
                end:            (2000, 2, 4),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          (2000, 2, 4),
                end:            (1999, 2, 16),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          (2000, 2, 5),
                end:            (2000, 2, 5),
                should_succeed: true,
                description:    "single day (start == end)",
            },
        ];

        for case in &cases {
            let range = DateRange::new(
                date(case.start.0, case.start.1, case.start.2),
                date(case.end.0, case.end.1, case.end.2),
            );
            assert_eq!(range.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(1999, 2, 16), date(2000, 2, 4)).expect("failed to construct range");

        assert!(range.contains(&date(1999, 2, 16)));
        assert!(range.contains(&date(2000, 2, 4)));
        assert!(range.contains(&date(1999, 12, 31)));
        assert!(!range.contains(&date(1999, 2, 15)));
        assert!(!range.contains(&date(2000, 2, 5)));
    }

    #[test]
    fn test_len_and_iter_agree() {
        let range = DateRange::new(date(1999, 2, 16), date(2000, 2, 4)).expect("failed to construct range");
        assert_eq!(range.len(), 354);

        let days: Vec<_> = range.iter().collect();
        assert_eq!(days.len(), 354);
        assert_eq!(days.first(), Some(&date(1999, 2, 16)));
        assert_eq!(days.last(), Some(&date(2000, 2, 4)));
        assert!(days.windows(2).all(|w| w[1].days_since(&w[0]) == 1));
    }

    #[test]
    fn test_iter_size_hint_shrinks() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 1)).expect("failed to construct range");
        let mut days = range.iter();
        assert_eq!(days.len(), 4);
        days.next();
        assert_eq!(days.len(), 3);
        assert_eq!(days.next(), Some(date(2024, 2, 28)));
        assert_eq!(days.next(), Some(date(2024, 2, 29)));
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn test_iter_stops_at_calendar_end() {
        let range = DateRange::new(date(9999, 12, 30), date(9999, 12, 31)).expect("failed to construct range");
        assert_eq!(range.into_iter().count(), 2);
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(1999, 2, 16), date(2100, 12, 31)).expect("failed to construct range");
        assert_eq!(range.to_string(), "1999-02-16/2100-12-31");
    }
}
