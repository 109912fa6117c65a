//! Site content and settings.
//!
//! Everything the sections render comes from `content/site.toml`, embedded at
//! build time. A file that fails to parse or validate is reported and the
//! built-in defaults are used instead.

use nav_overlay::NavigationLink;
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Raw site content, embedded into the bundle.
pub const SITE_TOML: &str = include_str!("../content/site.toml");

/// Root content structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub features: FeaturesContent,
    pub product: ProductContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
    pub analytics: AnalyticsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub logo: Option<String>,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Lumen Studio".into(),
            tagline: String::new(),
            logo: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavContent {
    /// Label reported with `nav_open`/`nav_close` events
    pub menu_label: String,
    pub links: Vec<NavigationLink>,
    pub cta: Option<NavigationLink>,
}

impl Default for NavContent {
    fn default() -> Self {
        Self {
            menu_label: nav_overlay::controller::DEFAULT_LABEL.into(),
            links: Vec::new(),
            cta: None,
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub description: String,
    pub primary: Option<NavigationLink>,
    pub secondary: Option<NavigationLink>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FeaturesContent {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProductContent {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub rows: Vec<SpecRow>,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub title: String,
    pub description: String,
    /// Form `action`, usually a `mailto:` address
    pub action: String,
    pub submit_label: String,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            title: "Contact".into(),
            description: String::new(),
            action: String::new(),
            submit_label: "Send".into(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub copyright: String,
    pub links: Vec<NavigationLink>,
}

/// Analytics delivery settings
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Beacon endpoint; `None` disables the sink entirely.
    pub endpoint: Option<String>,
}

/// Console logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingSettings {
    /// Parsed max level; unknown values fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.trim().parse().unwrap_or(LevelFilter::INFO)
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("brand name must not be empty")]
    MissingBrand,
    #[error("{section} link #{index} has an empty label")]
    EmptyLabel { section: &'static str, index: usize },
    #[error("{section} link '{label}' has an invalid destination '{destination}'")]
    InvalidDestination {
        section: &'static str,
        label: String,
        destination: String,
    },
}

impl SiteContent {
    /// Parse and validate content from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// The embedded `site.toml`.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(SITE_TOML)
    }

    /// Check the invariants the sections and the overlay rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::MissingBrand);
        }

        check_links("nav", self.nav.links.iter().chain(&self.nav.cta))?;
        check_links("hero", self.hero.primary.iter().chain(&self.hero.secondary))?;
        check_links("footer", &self.footer.links)?;
        Ok(())
    }
}

fn check_links<'a>(
    section: &'static str,
    links: impl IntoIterator<Item = &'a NavigationLink>,
) -> Result<(), ContentError> {
    for (index, link) in links.into_iter().enumerate() {
        if link.label.trim().is_empty() {
            return Err(ContentError::EmptyLabel { section, index });
        }
        if !link.has_valid_destination() {
            return Err(ContentError::InvalidDestination {
                section,
                label: link.label.clone(),
                destination: link.destination.clone(),
            });
        }
    }
    Ok(())
}
