//! Copy and plan data for the page, loaded from `content/site.json`.
//!
//! The file is embedded at compile time and checked once at startup; the
//! sections only ever see a validated [`SiteContent`].

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Result, SiteError};

const EMBEDDED: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavItem>,
    pub hero: HeroContent,
    pub clients: Vec<String>,
    pub services: ServicesContent,
    pub work: WorkContent,
    pub pricing: PricingContent,
    pub faq: FaqContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Brand {
    pub lead: String,
    pub accent: String,
    pub mission: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavItem {
    pub name: String,
    pub id: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub background_image: String,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: f64,
    pub suffix: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Layout,
    TrendingUp,
    Shield,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Layout => "▦",
            Icon::TrendingUp => "📈",
            Icon::Shield => "🛡",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServicesContent {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceCard {
    pub title: String,
    pub icon: Icon,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    pub background_image: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PreviewKind {
    Interior,
    Salon,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WorkContent {
    pub title: String,
    pub subtitle: String,
    pub cases: Vec<CaseStudy>,
    pub previews: Vec<SitePreview>,
    pub preview_bullets: Vec<String>,
}

impl WorkContent {
    pub fn preview(&self, kind: PreviewKind) -> Option<&SitePreview> {
        self.previews.iter().find(|p| p.kind == kind)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CaseStudy {
    pub preview: PreviewKind,
    pub title: String,
    pub summary_before: String,
    pub highlight: String,
    pub summary_after: String,
    pub tags: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SitePreview {
    pub kind: PreviewKind,
    pub domain: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    pub theme: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PricingContent {
    pub title: String,
    pub subtitle: String,
    pub tabs: Vec<PricingTab>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PricingTab {
    pub id: String,
    pub label: String,
    pub plans: Vec<Plan>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub highlight: bool,
}

impl Plan {
    /// Open-ended prices ("8,000+") are quotes, not one-time fees.
    pub fn period_label(&self) -> &'static str {
        if self.price.contains('+') {
            ""
        } else {
            "/ one-time"
        }
    }

    pub fn badge(&self) -> &'static str {
        if self.highlight {
            "Recommended"
        } else {
            "Standard"
        }
    }

    pub fn cta(&self) -> &'static str {
        if self.highlight {
            "Start with Apex"
        } else {
            "Select Plan"
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    pub background_image: String,
    pub email: String,
    pub phone_display: String,
    pub phone_href: String,
    pub address: String,
    pub hours: String,
    pub error_message: String,
    pub fields: Vec<FormField>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl InputKind {
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text | InputKind::TextArea => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: InputKind,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FormField {
    pub fn placeholder(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| format!("Enter your {}", self.label.to_lowercase()))
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FooterContent {
    pub sections: Vec<String>,
    pub services: Vec<String>,
    pub social: Vec<String>,
}

impl SiteContent {
    /// The content shipped with the site.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.nav.is_empty() {
            return Err(invalid("navigation is empty"));
        }
        unique(self.nav.iter().map(|n| n.id.as_str()), "navigation id")?;

        if self.hero.stats.is_empty() {
            return Err(invalid("hero has no stats"));
        }
        if self.clients.is_empty() {
            return Err(invalid("client list is empty"));
        }
        if self.services.cards.is_empty() {
            return Err(invalid("no service cards"));
        }

        for case in &self.work.cases {
            if self.work.preview(case.preview).is_none() {
                return Err(invalid(&format!("case '{}' has no preview", case.title)));
            }
        }

        if self.pricing.tabs.is_empty() {
            return Err(invalid("no pricing tabs"));
        }
        unique(self.pricing.tabs.iter().map(|t| t.id.as_str()), "pricing tab")?;
        for tab in &self.pricing.tabs {
            let highlighted = tab.plans.iter().filter(|p| p.highlight).count();
            if tab.plans.is_empty() || highlighted != 1 {
                return Err(invalid(&format!(
                    "pricing tab '{}' needs plans with exactly one highlighted, found {}",
                    tab.id, highlighted
                )));
            }
        }

        if self.faq.items.is_empty() {
            return Err(invalid("no FAQ entries"));
        }

        if self.contact.fields.is_empty() {
            return Err(invalid("contact form has no fields"));
        }
        unique(self.contact.fields.iter().map(|f| f.name.as_str()), "form field")?;

        Ok(())
    }

    pub fn pricing_tab(&self, id: &str) -> Option<&PricingTab> {
        self.pricing.tabs.iter().find(|t| t.id == id)
    }
}

fn invalid(reason: &str) -> SiteError {
    SiteError::InvalidContent(reason.to_string())
}

fn unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(invalid(&format!("empty {}", what)));
        }
        if !seen.insert(id) {
            return Err(invalid(&format!("duplicate {} '{}'", what, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped() -> SiteContent {
        SiteContent::embedded().expect("embedded content is valid")
    }

    #[test]
    fn embedded_content_loads() {
        let content = shipped();
        assert_eq!(content.nav.len(), 4);
        assert_eq!(content.hero.stats.len(), 3);
        assert_eq!(content.services.cards.len(), 3);
        assert_eq!(content.faq.items.len(), 4);
        assert_eq!(content.pricing_tab("web").map(|t| t.plans.len()), Some(3));
        assert_eq!(content.pricing_tab("seo").map(|t| t.plans.len()), Some(3));
        assert!(content.work.preview(PreviewKind::Salon).is_some());
    }

    #[test]
    fn duplicate_nav_ids_are_rejected() {
        let mut content = shipped();
        content.nav[1].id = content.nav[0].id.clone();
        assert!(matches!(content.validate(), Err(SiteError::InvalidContent(_))));
    }

    #[test]
    fn pricing_tab_needs_exactly_one_highlight() {
        let mut content = shipped();
        content.pricing.tabs[0].plans[0].highlight = true;
        assert!(content.validate().is_err());

        let mut content = shipped();
        content.pricing.tabs[1].plans.iter_mut().for_each(|p| p.highlight = false);
        assert!(content.validate().is_err());
    }

    #[test]
    fn case_without_preview_is_rejected() {
        let mut content = shipped();
        content.work.previews.retain(|p| p.kind != PreviewKind::Interior);
        assert!(content.validate().is_err());
    }

    #[test]
    fn duplicate_form_fields_are_rejected() {
        let mut content = shipped();
        content.contact.fields[2].name = "name".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(SiteContent::from_json("{"), Err(SiteError::Json(_))));
    }

    #[test]
    fn open_ended_prices_have_no_period() {
        let content = shipped();
        let web = content.pricing_tab("web").unwrap();
        assert_eq!(web.plans[0].period_label(), "/ one-time");
        assert_eq!(web.plans[2].period_label(), "");
        assert_eq!(web.plans[1].badge(), "Recommended");
        assert_eq!(web.plans[0].cta(), "Select Plan");
    }

    #[test]
    fn placeholders_default_from_labels() {
        let content = shipped();
        let fields = &content.contact.fields;
        assert_eq!(fields[1].placeholder(), "Enter your work email");
        assert_eq!(fields[3].kind.html_type(), "tel");
        assert!(fields[4].placeholder().starts_with("I'm looking"));
    }

    #[test]
    fn rating_stat_is_fractional() {
        let content = shipped();
        let rating = &content.hero.stats[1];
        assert_eq!(rating.value, 4.9);
        assert_eq!(rating.suffix, "/5");
    }
}
