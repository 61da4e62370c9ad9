use std::fmt;

/// Runtime split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeSplit {
    pub hours: u32,
    pub minutes: u32,
}

impl RuntimeSplit {
    pub fn from_total_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    pub fn is_zero(&self) -> bool {
        self.total_minutes() == 0
    }
}

impl fmt::Display for RuntimeSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_hours_and_minutes() {
        let split = RuntimeSplit::from_total_minutes(125);
        assert_eq!(split, RuntimeSplit { hours: 2, minutes: 5 });
        assert_eq!(split.to_string(), "2h 5m");
    }

    #[test]
    fn split_recombines_to_total() {
        for total in (0..2_000).chain([u32::MAX / 61]) {
            let split = RuntimeSplit::from_total_minutes(total);
            assert!(split.minutes < 60);
            assert_eq!(split.total_minutes(), total);
        }
    }

    #[test]
    fn zero_runtime() {
        assert!(RuntimeSplit::from_total_minutes(0).is_zero());
        assert!(!RuntimeSplit::from_total_minutes(59).is_zero());
    }
}
