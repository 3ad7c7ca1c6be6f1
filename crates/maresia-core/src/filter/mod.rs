//! Category filters for the menu (`.cardapio`) and gallery (`.galeria`).
//!
//! A [`FilterGroup`] owns the button set and the category of every item in
//! its section. Applying a filter yields a [`FilterPlan`] describing which
//! items end up shown and when each style write happens; the browser layer
//! executes it with timers. Plans are numbered so that delayed writes from a
//! superseded plan can be dropped.


use crate::error::ComponentError;

/// Sentinel filter value that shows every item.
pub const ALL: &str = "all";

/// Which section a group belongs to; decides transforms and ARIA behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Menu,
    Gallery,
}

impl FilterKind {
    pub fn component_name(self) -> &'static str {
        match self {
            FilterKind::Menu => "MenuFilter",
            FilterKind::Gallery => "GalleryFilter",
        }
    }

    pub fn shown_transform(self) -> &'static str {
        match self {
            FilterKind::Menu => "translateY(0)",
            FilterKind::Gallery => "scale(1)",
        }
    }

    pub fn hidden_transform(self) -> &'static str {
        match self {
            FilterKind::Menu => "translateY(20px)",
            FilterKind::Gallery => "scale(0.8)",
        }
    }

    /// Menu items carry `aria-hidden`, menu buttons `aria-selected`, and
    /// every change is announced to screen readers.
    pub fn is_accessible(self) -> bool {
        matches!(self, FilterKind::Menu)
    }
}

/// A filter button as read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    /// `data-filter` value
    pub filter: String,
    /// Visible button text, used in announcements
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTiming {
    pub stagger_step: u32,
    pub hide_delay: u32,
}

/// Whether an item with `category` is visible under `filter`.
pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

/// Outcome for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTransition {
    pub index: usize,
    pub visible: bool,
    /// For shown items: delay before the reveal style is written.
    /// For hidden items: delay before `display: none` is written.
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub generation: u64,
    pub filter: String,
    pub active_button: usize,
    pub items: Vec<ItemTransition>,
    pub visible_count: usize,
    /// Live-region text, for groups that announce changes.
    pub announcement: Option<String>,
}

#[derive(Debug)]
pub struct FilterGroup {
    kind: FilterKind,
    buttons: Vec<FilterButton>,
    categories: Vec<Option<String>>,
    timing: FilterTiming,
    active: Option<usize>,
    generation: u64,
}

impl FilterGroup {
    pub fn new(
        kind: FilterKind,
        buttons: Vec<FilterButton>,
        categories: Vec<Option<String>>,
        timing: FilterTiming,
    ) -> Self {
        Self { kind, buttons, categories, timing, active: None, generation: 0 }
    }

    /// Marks the button the markup ships as active. Out-of-range is ignored.
    pub fn with_active(mut self, index: Option<usize>) -> Self {
        self.active = index.filter(|i| *i < self.buttons.len());
        self
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    /// True while no newer plan has been produced.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Click on the button at `index`.
    pub fn select(&mut self, index: usize) -> Result<FilterPlan, ComponentError> {
        if index >= self.buttons.len() {
            return Err(ComponentError::OutOfRange {
                component: self.kind.component_name().to_string(),
                index,
                len: self.buttons.len(),
            });
        }
        Ok(self.plan(index))
    }

    /// Apply a filter by category value. `None` when no button carries it.
    pub fn apply_filter(&mut self, filter: &str) -> Option<FilterPlan> {
        let index = self.buttons.iter().position(|b| b.filter == filter)?;
        Some(self.plan(index))
    }

    fn plan(&mut self, button: usize) -> FilterPlan {
        self.active = Some(button);
        self.generation = self.generation.wrapping_add(1);

        let filter = self.buttons[button].filter.clone();
        let items: Vec<ItemTransition> = self
            .categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let visible = matches(&filter, category.as_deref());
                let delay_ms = if visible {
                    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(self.timing.stagger_step)
                } else {
                    self.timing.hide_delay
                };
                ItemTransition { index, visible, delay_ms }
            })
            .collect();
        let visible_count = items.iter().filter(|t| t.visible).count();

        let announcement = self.kind.is_accessible().then(|| {
            format!(
                "Filtro aplicado: {}. {} itens visíveis.",
                self.buttons[button].label.trim(),
                visible_count
            )
        });

        tracing::debug!(
            component = self.kind.component_name(),
            filter = %filter,
            visible = visible_count,
            "filter applied"
        );

        FilterPlan {
            generation: self.generation,
            filter,
            active_button: button,
            items,
            visible_count,
            announcement,
        }
    }
}
