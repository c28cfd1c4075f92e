//! Built-in skip options shown when live pricing is unavailable.

use super::entities::{Dimensions, Skip};
use super::pricing::{capacity_label, size_label};

pub const FALLBACK_HIRE_DAYS: u32 = 7;

/// Label of the option pre-selected whenever the fallback catalog is installed.
pub const FALLBACK_DEFAULT_LABEL: &str = "8 Yard Skip";

struct FallbackEntry {
    id: &'static str,
    size: u32,
    price: i64,
    description: &'static str,
    dimensions: Dimensions,
    suitable_for: &'static [&'static str],
}

const FALLBACK_ENTRIES: [FallbackEntry; 6] = [
    FallbackEntry {
        id: "1",
        size: 4,
        price: 195,
        description: "Perfect for small home projects",
        dimensions: Dimensions::new(8, 4, 3),
        suitable_for: &["Garden waste", "Small renovations", "General household waste"],
    },
    FallbackEntry {
        id: "2",
        size: 6,
        price: 245,
        description: "Great for medium-sized projects",
        dimensions: Dimensions::new(10, 4, 4),
        suitable_for: &["Kitchen renovation", "Bathroom refits", "Garden clearance"],
    },
    FallbackEntry {
        id: "3",
        size: 8,
        price: 325,
        description: "Ideal for larger home projects",
        dimensions: Dimensions::new(12, 4, 4),
        suitable_for: &[
            "Home renovations",
            "Construction waste",
            "Large garden projects",
            "House clearance",
        ],
    },
    FallbackEntry {
        id: "4",
        size: 12,
        price: 395,
        description: "Perfect for big commercial projects",
        dimensions: Dimensions::new(14, 6, 4),
        suitable_for: &[
            "Construction projects",
            "Commercial waste",
            "Large house clearance",
        ],
    },
    FallbackEntry {
        id: "5",
        size: 16,
        price: 485,
        description: "For the largest projects",
        dimensions: Dimensions::new(16, 6, 5),
        suitable_for: &[
            "Major construction",
            "Industrial waste",
            "Large commercial projects",
        ],
    },
    FallbackEntry {
        id: "6",
        size: 20,
        price: 595,
        description: "Maximum capacity for industrial use",
        dimensions: Dimensions::new(18, 6, 6),
        suitable_for: &[
            "Industrial projects",
            "Major construction",
            "Large scale clearance",
        ],
    },
];

/// The six hand-priced options. Net price and VAT are unknown and reported as zero.
pub fn fallback_catalog() -> Vec<Skip> {
    FALLBACK_ENTRIES
        .iter()
        .map(|entry| Skip {
            id: entry.id.to_string(),
            size_label: size_label(entry.size),
            capacity_label: capacity_label(entry.size),
            total_price: entry.price,
            hire_period_days: FALLBACK_HIRE_DAYS,
            description: Some(entry.description.to_string()),
            dimensions: entry.dimensions,
            suitable_for: entry.suitable_for.iter().map(|s| s.to_string()).collect(),
            allowed_on_road: false,
            allows_heavy_waste: false,
            price_before_vat: 0.0,
            vat_percent: 0.0,
        })
        .collect()
}
