use serde::{Deserialize, Serialize};

/// Pricing record as served by the skip API for one location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkipQuote {
    pub id: i64,
    /// Nominal capacity in cubic yards.
    pub size: u32,
    pub hire_period_days: u32,
    #[serde(default)]
    pub transport_cost: Option<f64>,
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,
    pub price_before_vat: f64,
    #[serde(rename = "vat")]
    pub vat_percent: f64,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub forbidden: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

/// Outer dimensions of a skip in feet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(length: u32, width: u32, height: u32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Formats as `12L × 4W × 4H ft`.
    pub fn label(&self) -> String {
        format!("{}L × {}W × {}H ft", self.length, self.width, self.height)
    }
}

/// Display-ready skip option. Built once per fetch and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Skip {
    pub id: String,
    pub size_label: String,
    pub capacity_label: String,
    /// VAT-inclusive price, rounded to whole currency units.
    pub total_price: i64,
    pub hire_period_days: u32,
    pub description: Option<String>,
    pub dimensions: Dimensions,
    pub suitable_for: Vec<String>,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    pub price_before_vat: f64,
    pub vat_percent: f64,
}

/// Postcode and area pair the catalog is priced for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}
