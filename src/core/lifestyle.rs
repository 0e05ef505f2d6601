use crate::models::{LifestyleScales, ScaleKind};

/// Upper bound of `habit_closeness`: five primary scales at 5 points each.
pub const MAX_HABIT_CLOSENESS: u8 = 25;

/// Closeness of two answers on one 1-5 scale: 5 for identical answers,
/// one point less per step of difference, floor at zero.
#[inline]
pub fn scale_closeness(a: u8, b: u8) -> u8 {
    5u8.saturating_sub(a.abs_diff(b))
}

/// Summed closeness over the five primary scales. Unanswered scales
/// compare at the midpoint, so sparse profiles still score.
#[inline]
pub fn habit_closeness(a: &LifestyleScales, b: &LifestyleScales) -> u8 {
    ScaleKind::PRIMARY
        .iter()
        .map(|&kind| scale_closeness(a.get(kind), b.get(kind)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scales(cleaning: u8, visitors: u8, pets: u8, schedule: u8, interaction: u8) -> LifestyleScales {
        LifestyleScales {
            cleaning: Some(cleaning),
            visitors: Some(visitors),
            pets: Some(pets),
            schedule: Some(schedule),
            interaction: Some(interaction),
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_answers_score_max() {
        let a = scales(2, 4, 1, 5, 3);
        assert_eq!(habit_closeness(&a, &a), MAX_HABIT_CLOSENESS);
    }

    #[test]
    fn test_opposite_answers_score_min() {
        let a = scales(1, 1, 1, 1, 1);
        let b = scales(5, 5, 5, 5, 5);
        // Each axis differs by 4, leaving 1 point per axis.
        assert_eq!(habit_closeness(&a, &b), 5);
    }

    #[test]
    fn test_per_axis_closeness() {
        assert_eq!(scale_closeness(3, 3), 5);
        assert_eq!(scale_closeness(1, 5), 1);
        assert_eq!(scale_closeness(2, 4), 3);
    }

    #[test]
    fn test_unanswered_scales_compare_at_midpoint() {
        let answered = scales(3, 3, 3, 3, 3);
        let sparse = LifestyleScales::default();
        assert_eq!(habit_closeness(&answered, &sparse), MAX_HABIT_CLOSENESS);
    }

    #[test]
    fn test_noise_and_bathroom_excluded() {
        let a = scales(3, 3, 3, 3, 3);
        let mut b = scales(3, 3, 3, 3, 3);
        b.noise_sensitivity = Some(1);
        b.bathroom = Some(5);
        assert_eq!(habit_closeness(&a, &b), MAX_HABIT_CLOSENESS);
    }
}
