//! Presentation helpers derived from the provider's vote average.

/// Provider vote averages live on a 0..=10 scale.
pub const VOTE_AVERAGE_MAX: f32 = 10.0;

/// Vote averages strictly above this select the high badge.
pub const HIGH_BADGE_THRESHOLD: f32 = 5.0;

/// `round(vote_average * 10)`, kept inside 0..=100 even if the provider
/// sends something outside its documented range.
pub fn rating_percent(vote_average: f32) -> u8 {
    if !vote_average.is_finite() {
        return 0;
    }
    let clamped = vote_average.clamp(0.0, VOTE_AVERAGE_MAX);
    (clamped * 10.0).round() as u8
}

/// Which of the two rating badge images to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RatingBadge {
    High,
    Low,
}

impl RatingBadge {
    pub fn for_vote_average(vote_average: f32) -> Self {
        if vote_average > HIGH_BADGE_THRESHOLD {
            RatingBadge::High
        } else {
            RatingBadge::Low
        }
    }
}

/// The "Average Rating" line: one decimal place.
pub fn format_average(vote_average: f32) -> String {
    format!("{vote_average:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest_integer() {
        assert_eq!(rating_percent(7.3), 73);
        assert_eq!(rating_percent(7.25), 73);
        assert_eq!(rating_percent(0.0), 0);
        assert_eq!(rating_percent(10.0), 100);
        assert_eq!(rating_percent(8.449), 84);
    }

    #[test]
    fn percent_stays_in_range_over_the_whole_scale() {
        for step in 0..=1000 {
            let vote = step as f32 / 100.0;
            let percent = rating_percent(vote);
            assert!(percent <= 100);
            assert_eq!(percent, (vote * 10.0).round() as u8);
        }
    }

    #[test]
    fn out_of_range_votes_are_clamped() {
        assert_eq!(rating_percent(-1.0), 0);
        assert_eq!(rating_percent(12.0), 100);
        assert_eq!(rating_percent(f32::NAN), 0);
    }

    #[test]
    fn badge_threshold_is_strict() {
        assert_eq!(RatingBadge::for_vote_average(7.3), RatingBadge::High);
        assert_eq!(RatingBadge::for_vote_average(5.0), RatingBadge::Low);
        assert_eq!(RatingBadge::for_vote_average(5.01), RatingBadge::High);
        assert_eq!(RatingBadge::for_vote_average(0.0), RatingBadge::Low);
    }

    #[test]
    fn average_uses_one_decimal() {
        assert_eq!(format_average(7.345), "7.3");
        assert_eq!(format_average(8.0), "8.0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn badge_serializes_lowercase() {
        let json = serde_json::to_string(&RatingBadge::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
