//! Index arithmetic and control resolution.

/// Index to show first: `default_index` when it names a slide, else 0.
pub fn starting_index(count: usize, default_index: Option<usize>) -> usize {
    match default_index {
        Some(index) if index < count => index,
        _ => 0,
    }
}

/// Next slide, or `None` when there is nowhere to go.
pub fn next_index(index: usize, count: usize, infinite: bool) -> Option<usize> {
    if count < 2 || (!infinite && index + 1 >= count) {
        return None;
    }
    Some((index + 1) % count)
}

/// Previous slide, or `None` when there is nowhere to go.
pub fn previous_index(index: usize, count: usize, infinite: bool) -> Option<usize> {
    if count < 2 || (!infinite && index == 0) {
        return None;
    }
    Some(if index == 0 { count - 1 } else { index - 1 })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Resolve an arrow from its `data-type` attribute. Only `"prev"` goes back.
    pub fn from_data_type(data_type: Option<&str>) -> Self {
        match data_type {
            Some("prev") => Direction::Previous,
            _ => Direction::Next,
        }
    }

    pub fn data_type(self) -> &'static str {
        match self {
            Direction::Previous => "prev",
            Direction::Next => "next",
        }
    }
}

/// Resolve an indicator dot from its `data-key` attribute.
///
/// Missing or non-numeric keys resolve to nothing. Negative keys name no
/// slide and resolve to `usize::MAX`, which the transition engine coerces
/// to the first slide like any other out-of-range target.
pub fn indicator_target(data_key: Option<&str>) -> Option<usize> {
    let key: i64 = data_key?.trim().parse().ok()?;
    Some(usize::try_from(key).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_index_falls_back_to_zero() {
        assert_eq!(starting_index(3, None), 0);
        assert_eq!(starting_index(3, Some(2)), 2);
        assert_eq!(starting_index(3, Some(3)), 0);
        assert_eq!(starting_index(0, Some(0)), 0);
        for count in 1..6 {
            for default in 0..count {
                assert_eq!(starting_index(count, Some(default)), default);
            }
        }
    }

    #[test]
    fn next_wraps_only_when_infinite() {
        assert_eq!(next_index(0, 3, false), Some(1));
        assert_eq!(next_index(2, 3, false), None);
        assert_eq!(next_index(2, 3, true), Some(0));
    }

    #[test]
    fn previous_wraps_only_when_infinite() {
        assert_eq!(previous_index(1, 3, false), Some(0));
        assert_eq!(previous_index(0, 3, false), None);
        assert_eq!(previous_index(0, 3, true), Some(2));
    }

    #[test]
    fn single_or_empty_sets_do_not_move() {
        assert_eq!(next_index(0, 1, true), None);
        assert_eq!(previous_index(0, 1, true), None);
        assert_eq!(next_index(0, 0, true), None);
    }

    #[test]
    fn arrows_resolve_from_data_type() {
        assert_eq!(Direction::from_data_type(Some("prev")), Direction::Previous);
        assert_eq!(Direction::from_data_type(Some("next")), Direction::Next);
        assert_eq!(Direction::from_data_type(None), Direction::Next);
    }

    #[test]
    fn indicators_resolve_from_data_key() {
        assert_eq!(indicator_target(Some("2")), Some(2));
        assert_eq!(indicator_target(Some("")), None);
        assert_eq!(indicator_target(Some("-1")), Some(usize::MAX));
        assert_eq!(indicator_target(Some("two")), None);
        assert_eq!(indicator_target(None), None);
    }
}
