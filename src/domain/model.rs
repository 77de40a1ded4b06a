use serde::{Deserialize, Serialize};

/// One skip-hire option as returned by the by-location API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSkipRecord {
    pub id: u64,
    pub size: u32,
    pub hire_period_days: u32,
    pub transport_cost: Option<f64>,
    pub per_tonne_cost: Option<f64>,
    pub price_before_vat: f64,
    pub vat: f64,
    pub postcode: String,
    pub area: Option<String>,
    pub forbidden: bool,
    pub created_at: String,
    pub updated_at: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

/// A raw record enriched with the fields the skip cards display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSkipRecord {
    #[serde(flatten)]
    pub raw: RawSkipRecord,
    pub name: String,
    pub description: String,
    pub capacity: String,
    pub image: String,
    #[serde(rename = "isPopular")]
    pub is_popular: bool,
}

impl ViewSkipRecord {
    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn size(&self) -> u32 {
        self.raw.size
    }

    pub fn price_including_vat(&self) -> f64 {
        self.raw.price_before_vat + self.raw.price_before_vat * self.raw.vat / 100.0
    }
}

/// Location parameters for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub postcode: String,
    pub area: Option<String>,
}

impl LocationQuery {
    pub fn new(postcode: impl Into<String>, area: Option<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area,
        }
    }

    /// "LE10, Hinckley" or just "LE10".
    pub fn label(&self) -> String {
        match self.area.as_deref().filter(|a| !a.is_empty()) {
            Some(area) => format!("{}, {}", self.postcode, area),
            None => self.postcode.clone(),
        }
    }
}
