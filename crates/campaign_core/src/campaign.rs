//! Mock campaign data: filter keywords, publisher allow-list and the static
//! advertiser profile.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub text: String,
    pub active: bool,
}

impl Keyword {
    pub fn active(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    pub name: String,
    pub verified: bool,
    pub enabled: bool,
    pub reach: u64,
}

impl Publisher {
    pub fn verified(name: impl Into<String>, reach: u64) -> Self {
        Self {
            name: name.into(),
            verified: true,
            enabled: true,
            reach,
        }
    }
}

/// Displayed as trusted, already-verified data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignProfile {
    pub advertiser_domain: String,
    pub license_id: String,
    pub service_zip: String,
    pub ad_headline: String,
    pub ad_body: String,
}

impl Default for CampaignProfile {
    fn default() -> Self {
        Self {
            advertiser_domain: "joesplumbing-chicago.com".to_string(),
            license_id: "#IL-50552".to_string(),
            service_zip: "60614".to_string(),
            ad_headline: "Emergency Plumbing - 24/7 Licensed Pros".to_string(),
            ad_body: "Verified, bonded and insured. Serving zip 60614.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Desktop,
    Mobile,
}

pub fn default_keywords() -> Vec<Keyword> {
    ["DIY", "Free", "Intern", "Trainee", "Salary"]
        .into_iter()
        .map(Keyword::active)
        .collect()
}

pub fn default_publishers() -> Vec<Publisher> {
    vec![
        Publisher::verified("CNN Weather (Local)", 2_500_000),
        Publisher::verified("BobVila.com / Home", 1_800_000),
        Publisher::verified("Yahoo! Real Estate", 3_200_000),
        Publisher::verified("Architectural Digest", 2_100_000),
        Publisher::verified("SF Gate (Home Section)", 2_900_000),
    ]
}

/// Flips the keyword named `text`. Returns its new state, or `None` if unknown.
pub fn toggle_keyword(keywords: &mut [Keyword], text: &str) -> Option<bool> {
    let keyword = keywords.iter_mut().find(|k| k.text == text)?;
    keyword.active = !keyword.active;
    Some(keyword.active)
}

/// Flips the publisher named `name`. Returns its new state, or `None` if unknown.
pub fn toggle_publisher(publishers: &mut [Publisher], name: &str) -> Option<bool> {
    let publisher = publishers.iter_mut().find(|p| p.name == name)?;
    publisher.enabled = !publisher.enabled;
    Some(publisher.enabled)
}
