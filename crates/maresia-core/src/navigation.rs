//! Mobile menu state, navbar appearance and scroll-spy.

pub const OPEN_MENU_LABEL: &str = "Abrir menu de navegação";
pub const CLOSE_MENU_LABEL: &str = "Fechar menu de navegação";

/// Attribute values to apply to the toggle button after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuUpdate {
    pub open: bool,
    pub aria_expanded: &'static str,
    pub aria_label: &'static str,
}

impl MenuUpdate {
    fn for_state(open: bool) -> Self {
        Self {
            open,
            aria_expanded: if open { "true" } else { "false" },
            aria_label: if open { CLOSE_MENU_LABEL } else { OPEN_MENU_LABEL },
        }
    }
}

#[derive(Debug, Default)]
pub struct NavigationState {
    menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle(&mut self) -> MenuUpdate {
        self.menu_open = !self.menu_open;
        MenuUpdate::for_state(self.menu_open)
    }

    /// Returns the update only if the menu was open.
    pub fn close(&mut self) -> Option<MenuUpdate> {
        if !self.menu_open {
            return None;
        }
        self.menu_open = false;
        Some(MenuUpdate::for_state(false))
    }
}

/// Inline style written to `.navbar` on scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub const SCROLLED: Self = Self {
        background: "rgba(255, 255, 255, 0.98)",
        box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
    };
    pub const TOP: Self = Self {
        background: "rgba(255, 255, 255, 0.95)",
        box_shadow: "0 2px 4px rgba(0, 0, 0, 0.1)",
    };

    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::SCROLLED
        } else {
            Self::TOP
        }
    }
}

/// A `section[id]` and its current distance from the viewport top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset<'a> {
    pub id: &'a str,
    pub top: f64,
}

/// Id of the last section (document order) whose top has crossed `threshold`.
pub fn active_section<'a>(sections: &[SectionOffset<'a>], threshold: f64) -> Option<&'a str> {
    sections.iter().rev().find(|s| s.top <= threshold).map(|s| s.id)
}

/// Whether a nav link's href points at the given section.
pub fn link_targets(href: &str, section: Option<&str>) -> bool {
    match section {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_aria_state() {
        let mut nav = NavigationState::new();
        let opened = nav.toggle();
        assert!(opened.open);
        assert_eq!(opened.aria_expanded, "true");
        assert_eq!(opened.aria_label, CLOSE_MENU_LABEL);

        let closed = nav.toggle();
        assert!(!closed.open);
        assert_eq!(closed.aria_expanded, "false");
        assert_eq!(closed.aria_label, OPEN_MENU_LABEL);
    }

    #[test]
    fn test_close_when_already_closed() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.close(), None);
        nav.toggle();
        assert!(nav.close().is_some());
        assert!(!nav.is_open());
    }

    #[test]
    fn test_navbar_style_threshold_is_exclusive() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 100.0), NavbarStyle::TOP);
        assert_eq!(NavbarStyle::for_scroll(100.0, 100.0), NavbarStyle::TOP);
        assert_eq!(NavbarStyle::for_scroll(100.5, 100.0), NavbarStyle::SCROLLED);
    }

    #[test]
    fn test_active_section_picks_last_crossed() {
        let sections = [
            SectionOffset { id: "inicio", top: -900.0 },
            SectionOffset { id: "sobre", top: -120.0 },
            SectionOffset { id: "cardapio", top: 80.0 },
            SectionOffset { id: "galeria", top: 700.0 },
        ];
        assert_eq!(active_section(&sections, 100.0), Some("cardapio"));
    }

    #[test]
    fn test_active_section_none_above_first() {
        let sections = [SectionOffset { id: "inicio", top: 150.0 }];
        assert_eq!(active_section(&sections, 100.0), None);
    }

    #[test]
    fn test_link_targets() {
        assert!(link_targets("#galeria", Some("galeria")));
        assert!(!link_targets("#galeria", Some("contato")));
        assert!(!link_targets("#", None));
        assert!(!link_targets("galeria", Some("galeria")));
    }
}
