use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

/// Parsed once per process. A broken document yields empty content.
pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().unwrap_or_else(|e| {
        log::error!("{e}");
        Portfolio::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub brand: Brand,
    pub backdrop: String,
    pub hero: Hero,
    pub work: Vec<Media>,
    pub experience: Vec<Employer>,
    pub contact: Contact,
    #[serde(default)]
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub nickname: String,
    pub description: String,
}

/// A gallery tile: either a poster linking out, or an embedded player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Media {
    Link { href: String, poster: String },
    Embed { src: String, title: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employer {
    pub name: String,
    pub roles: Vec<Role>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Role {
    pub fn period(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %Y"),
            self.end.format("%b %Y")
        )
    }

    pub fn heading(&self) -> String {
        format!("{} | {}", self.period(), self.title)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub phone_uri: String,
    pub profile_url: String,
    pub profile_label: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_uri)
    }
}

/// Tuning for the page animations. Any omitted field keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Height of the fixed navbar, subtracted from section jumps.
    pub nav_offset: f64,
    /// Fraction of the viewport height a tile's top must rise past to reveal.
    pub reveal_threshold: f64,
    /// Seconds between consecutive tiles of one registry.
    pub stagger: f64,
    pub parallax_factor: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            nav_offset: 80.0,
            reveal_threshold: 0.8,
            stagger: 0.1,
            parallax_factor: 0.3,
        }
    }
}

impl Portfolio {
    pub fn from_json(file: &str, data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|source| ContentError::Parse {
            file: file.to_string(),
            source,
        })
    }

    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::from_json(PORTFOLIO_FILE, &file.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_portfolio_parses() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert_eq!(portfolio.work.len(), 12);
        let links = portfolio
            .work
            .iter()
            .filter(|m| matches!(m, Media::Link { .. }))
            .count();
        assert_eq!(links, 2);
        assert_eq!(portfolio.experience.len(), 5);
        assert_eq!(portfolio.motion, MotionConfig::default());
    }

    #[test]
    fn role_heading_formats_month_and_year() {
        let role = Role {
            title: "FX Artist".to_string(),
            start: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
        };
        assert_eq!(role.period(), "Feb 2023 - Sep 2023");
        assert_eq!(role.heading(), "Feb 2023 - Sep 2023 | FX Artist");
    }

    #[test]
    fn contact_links_use_uri_schemes() {
        let portfolio = Portfolio::load().unwrap();
        assert_eq!(portfolio.contact.mailto(), "mailto:filmvideomaker@gmail.com");
        assert_eq!(portfolio.contact.tel(), "tel:+660840227272");
    }

    #[test]
    fn motion_fields_default_when_omitted() {
        let json = br#"{
            "brand": {"name": "a", "tag": "b"},
            "backdrop": "",
            "hero": {"title": "", "nickname": "", "description": ""},
            "work": [],
            "experience": [],
            "contact": {"intro": "", "email": "", "phone": "", "phone_uri": "", "profile_url": "", "profile_label": ""},
            "motion": {"stagger": 0.25}
        }"#;
        let portfolio = Portfolio::from_json("inline", json).unwrap();
        assert_eq!(portfolio.motion.stagger, 0.25);
        assert_eq!(portfolio.motion.nav_offset, 80.0);
    }

    #[test]
    fn malformed_content_reports_the_file() {
        let err = Portfolio::from_json("broken.json", b"{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref file, .. } if file == "broken.json"));
        assert!(err.to_string().starts_with("couldn't parse broken.json"));
    }
}
