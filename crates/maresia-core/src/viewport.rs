//! Geometry helpers for scrolling and visibility checks.

/// Bounding box as reported by `getBoundingClientRect`, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Inner size of the browser viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `rect` lies fully inside the viewport, with `offset` pixels of
/// vertical slack on both edges.
pub fn is_in_viewport(rect: Rect, viewport: Viewport, offset: f64) -> bool {
    rect.top >= -offset
        && rect.left >= 0.0
        && rect.bottom <= viewport.height + offset
        && rect.right <= viewport.width
}

/// Share of `rect`'s area inside the viewport, with the viewport's bottom edge
/// pulled in by `bottom_inset` px. Same measure as an IntersectionObserver's
/// `intersectionRatio` for a negative bottom root margin.
pub fn visible_ratio(rect: Rect, viewport: Viewport, bottom_inset: f64) -> f64 {
    let width = rect.right - rect.left;
    let height = rect.bottom - rect.top;
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    let visible_width = (rect.right.min(viewport.width) - rect.left.max(0.0)).max(0.0);
    let visible_height =
        (rect.bottom.min(viewport.height - bottom_inset) - rect.top.max(0.0)).max(0.0);
    (visible_width * visible_height) / (width * height)
}

/// Absolute scroll position that puts an element `offset` pixels below the
/// top of the viewport.
pub fn scroll_target(element_top: f64, page_y_offset: f64, offset: f64) -> f64 {
    element_top + page_y_offset - offset
}

/// Fragment id of an in-page link (`#menu` -> `menu`), or `None` for anything
/// that navigates away.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 720.0 };

    #[test]
    fn test_fully_visible_rect() {
        let rect = Rect { top: 10.0, left: 0.0, bottom: 300.0, right: 640.0 };
        assert!(is_in_viewport(rect, VIEWPORT, 0.0));
    }

    #[test]
    fn test_offset_extends_vertical_bounds() {
        let rect = Rect { top: -20.0, left: 0.0, bottom: 740.0, right: 640.0 };
        assert!(!is_in_viewport(rect, VIEWPORT, 0.0));
        assert!(is_in_viewport(rect, VIEWPORT, 20.0));
    }

    #[test]
    fn test_horizontal_overflow_is_never_visible() {
        let rect = Rect { top: 0.0, left: -1.0, bottom: 100.0, right: 100.0 };
        assert!(!is_in_viewport(rect, VIEWPORT, 500.0));
        let rect = Rect { top: 0.0, left: 0.0, bottom: 100.0, right: 1281.0 };
        assert!(!is_in_viewport(rect, VIEWPORT, 500.0));
    }

    #[test]
    fn test_visible_ratio_counts_partial_overlap() {
        let below = Rect { top: 800.0, left: 0.0, bottom: 1000.0, right: 640.0 };
        assert_eq!(visible_ratio(below, VIEWPORT, 0.0), 0.0);

        let half = Rect { top: 620.0, left: 0.0, bottom: 820.0, right: 640.0 };
        assert_eq!(visible_ratio(half, VIEWPORT, 0.0), 0.5);
        assert_eq!(visible_ratio(half, VIEWPORT, 50.0), 0.25);
    }

    #[test]
    fn test_tall_item_is_partly_visible() {
        let tall = Rect { top: 100.0, left: 0.0, bottom: 2100.0, right: 640.0 };
        assert!(!is_in_viewport(tall, VIEWPORT, 0.0));
        let ratio = visible_ratio(tall, VIEWPORT, 50.0);
        assert!((ratio - 0.285).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_target_accounts_for_navbar() {
        assert_eq!(scroll_target(400.0, 1200.0, 80.0), 1520.0);
        assert_eq!(scroll_target(-300.0, 1200.0, 80.0), 820.0);
    }

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#cardapio"), Some("cardapio"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#x"), None);
    }
}
