use crate::domain::common::DomainError;

/// Stars shown by the rating widget, one per score point
pub const RATING_SLOTS: u8 = 10;

/// Score a user gives a dish, 0..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RatingScore(u8);

impl RatingScore {
    pub const MAX: u8 = 10;

    pub fn new(value: i32) -> Result<Self, DomainError> {
        if !(0..=Self::MAX as i32).contains(&value) {
            return Err(DomainError::invalid_argument(format!(
                "rating score must be between 0 and {}, got {}",
                Self::MAX,
                value
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Filled stars of a displayed rating: whole stars plus an optional half
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarFill {
    pub full: u8,
    pub half: bool,
}

impl StarFill {
    /// `rating` is clamped to 0..=10; a half star is shown when the fraction
    /// is at least 0.5.
    pub fn from_rating(rating: Option<f64>) -> Self {
        let rating = rating
            .filter(|r| r.is_finite())
            .unwrap_or(0.0)
            .clamp(0.0, RATING_SLOTS as f64);
        let full = rating.floor();
        let half = full < RATING_SLOTS as f64 && rating - full >= 0.5;
        Self {
            full: full as u8,
            half,
        }
    }

    /// Whether the star with 1-based position `star` is lit (fully or half)
    pub fn lights(&self, star: u8) -> bool {
        star <= self.full || (self.half && star == self.full + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert_eq!(RatingScore::new(0).unwrap().value(), 0);
        assert_eq!(RatingScore::new(10).unwrap().value(), 10);
        assert!(matches!(
            RatingScore::new(11),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(RatingScore::new(-1).is_err());
    }

    #[test]
    fn test_star_fill() {
        assert_eq!(StarFill::from_rating(Some(7.5)), StarFill { full: 7, half: true });
        assert_eq!(StarFill::from_rating(Some(7.49)), StarFill { full: 7, half: false });
        assert_eq!(StarFill::from_rating(None), StarFill { full: 0, half: false });
        assert_eq!(StarFill::from_rating(Some(12.0)), StarFill { full: 10, half: false });
        assert_eq!(StarFill::from_rating(Some(f64::NAN)), StarFill { full: 0, half: false });
    }

    #[test]
    fn test_lit_stars() {
        let fill = StarFill::from_rating(Some(2.5));
        assert!(fill.lights(1));
        assert!(fill.lights(2));
        assert!(fill.lights(3));
        assert!(!fill.lights(4));
    }
}
