//! Quality bounds shared by every standard item category.

/// Raw quality score of an item.
pub type Quality = i32;

/// Lowest quality any item may reach.
pub const MIN_QUALITY: Quality = 0;

/// Highest quality a non-legendary item may reach.
pub const MAX_QUALITY: Quality = 50;

/// Clamp a quality score into `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp(quality: Quality) -> Quality {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Apply a signed delta and clamp the result.
///
/// Saturating so that absurd inputs (e.g. `i32::MAX`) still land in range.
pub fn adjust(quality: Quality, delta: Quality) -> Quality {
    clamp(quality.saturating_add(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn adjust_caps_at_maximum() {
        assert_eq!(adjust(49, 2), 50);
        assert_eq!(adjust(50, 1), 50);
    }

    #[test]
    fn adjust_floors_at_minimum() {
        assert_eq!(adjust(1, -2), 0);
        assert_eq!(adjust(0, -1), 0);
    }

    #[test]
    fn clamp_pulls_out_of_range_values_back() {
        assert_eq!(clamp(80), 50);
        assert_eq!(clamp(-7), 0);
        assert_eq!(clamp(23), 23);
    }

    proptest! {
        #[test]
        fn adjust_always_lands_in_bounds(q in any::<i32>(), delta in -4i32..=4) {
            let out = adjust(q, delta);
            prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&out));
        }
    }
}
