// vertical offset, in css pixels, past which the navigation bar leaves its hero overlay look
pub const SCROLL_THRESHOLD: f64 = 50.0;

// whether the viewport has scrolled past the threshold
//
// this is the only way to build one, so the flag can never drift from the offset it came from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        ScrollState {
            scrolled: is_scrolled(offset),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

// strictly greater than, so sitting exactly on the threshold still counts as the top of the page.
// NaN (which some browsers report mid-navigation) compares false and is treated the same way
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn odd_offsets() {
        assert!(!is_scrolled(-120.0));
        assert!(!is_scrolled(f64::NAN));
        assert!(is_scrolled(f64::INFINITY));
    }

    #[test]
    fn state_matches_threshold() {
        for offset in [-1.0, 0.0, 25.0, 49.9, 50.0, 50.01, 51.0, 300.0] {
            assert_eq!(ScrollState::from_offset(offset).is_scrolled(), offset > 50.0);
        }
    }

    #[test]
    fn same_offset_same_state() {
        assert_eq!(ScrollState::from_offset(72.0), ScrollState::from_offset(72.0));
        assert_eq!(ScrollState::from_offset(10.0), ScrollState::default());
    }
}
