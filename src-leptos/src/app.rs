//! Startup orchestration: configuration, document readiness and component
//! construction.

use maresia_core::filter::FilterKind;
use maresia_core::startup::{start_components, ComponentKind};
use maresia_core::SiteConfig;

use crate::components::{
    Announcer, CategoryFilter, LazyLoading, Lightbox, Navigation, Newsletter,
    PerformanceOptimizer, ScrollAnimations, WhatsAppIntegration,
};
use crate::dom;
use crate::utils::BodyScrollLock;

const CONFIG_SCRIPT_ID: &str = "site-config";

/// A constructed component. Features whose markup is absent are `Skipped`.
pub enum Component {
    Navigation(Navigation),
    MenuFilter(CategoryFilter),
    GalleryFilter(CategoryFilter),
    Lightbox(Lightbox),
    WhatsApp(WhatsAppIntegration),
    ScrollAnimations(ScrollAnimations),
    LazyLoading(LazyLoading),
    Newsletter(Newsletter),
    PerformanceOptimizer(PerformanceOptimizer),
    Skipped,
}

/// Owns every component for the lifetime of the page.
pub struct App {
    components: Vec<(ComponentKind, Component)>,
}

impl App {
    /// Build every component now, or once `DOMContentLoaded` fires if the
    /// document is still parsing.
    pub fn start(config: SiteConfig) -> maresia_core::Result<()> {
        let document = dom::document()?;
        if document.ready_state() == "loading" {
            let mut config = Some(config);
            dom::listen(&document, "DOMContentLoaded", move |_| {
                if let Some(config) = config.take() {
                    Self::launch(config);
                }
            })?;
            Ok(())
        } else {
            Self::launch(config);
            Ok(())
        }
    }

    fn launch(config: SiteConfig) {
        let app = Self::initialize_components(config);
        log::debug!("{} components active", app.components.len());
        // listeners hold their own handles; the app itself lives as long as the page
        std::mem::forget(app);
    }

    pub fn initialize_components(config: SiteConfig) -> Self {
        let scroll_lock = BodyScrollLock::new();
        let announcer = Announcer::mount(config.announce_duration);

        let report = start_components(|kind| {
            let component = match kind {
                ComponentKind::Navigation => Navigation::new(&config, scroll_lock.clone())?
                    .map_or(Component::Skipped, Component::Navigation),
                ComponentKind::MenuFilter => Component::MenuFilter(CategoryFilter::new(
                    FilterKind::Menu,
                    &config,
                    announcer.clone(),
                )?),
                ComponentKind::GalleryFilter => Component::GalleryFilter(CategoryFilter::new(
                    FilterKind::Gallery,
                    &config,
                    None,
                )?),
                ComponentKind::Lightbox => Lightbox::new(&config, scroll_lock.clone())?
                    .map_or(Component::Skipped, Component::Lightbox),
                ComponentKind::WhatsApp => Component::WhatsApp(WhatsAppIntegration::new(&config)?),
                ComponentKind::ScrollAnimations => {
                    Component::ScrollAnimations(ScrollAnimations::new(&config)?)
                }
                ComponentKind::LazyLoading => Component::LazyLoading(LazyLoading::new(&config)?),
                ComponentKind::Newsletter => {
                    Newsletter::new(&config)?.map_or(Component::Skipped, Component::Newsletter)
                }
                ComponentKind::PerformanceOptimizer => {
                    Component::PerformanceOptimizer(PerformanceOptimizer::new(&config)?)
                }
            };
            Ok(component)
        });

        match &report.failure {
            None => log::info!("🌊 Maresia Restaurant - Site carregado com sucesso!"),
            Some((kind, e)) => {
                log::error!("Erro ao inicializar componentes: {kind}: {e}");
                log::warn!("not started: {:?}", report.skipped());
            }
        }

        Self { components: report.built }
    }
}

/// Read the optional `<script id="site-config" type="application/json">`.
pub fn load_config() -> maresia_core::Result<SiteConfig> {
    let json = dom::by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content());
    SiteConfig::from_embedded(json.as_deref())
}
