/// Fraction of the page scrolled, always within `[0, 1]`.
///
/// A page shorter than the viewport cannot scroll and reports `0.0`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Snapshot of the window's scroll geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn progress(&self) -> f64 {
        scroll_progress(self.scroll_y, self.scroll_height, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_top_and_bottom() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert!((scroll_progress(500.0, 3000.0, 1000.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_progress_stays_in_unit_interval_across_page() {
        let (height, viewport) = (4321.0, 777.0);
        let mut y = 0.0;
        while y <= height {
            let p = scroll_progress(y, height, viewport);
            assert!((0.0..=1.0).contains(&p), "progress {} at scroll {}", p, y);
            y += 13.0;
        }
    }

    #[test]
    fn test_overscroll_is_clamped() {
        // Elastic scrolling can report positions past either end
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_unscrollable_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn test_metrics_progress() {
        let m = ScrollMetrics {
            scroll_y: 150.0,
            scroll_height: 1300.0,
            viewport_height: 1000.0,
        };
        assert!((m.progress() - 0.5).abs() < 1e-12);
    }
}
