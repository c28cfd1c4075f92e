//! Turns raw pricing records into display-ready skip options.
//!
//! Everything in here is pure: no I/O, no failure path. Records are assumed to have
//! passed shape validation in the API client already.

use super::entities::{Dimensions, Skip, SkipQuote};

/// Used for any size missing from [`DIMENSION_TABLE`].
pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions::new(10, 5, 4);

const DIMENSION_TABLE: [(u32, Dimensions); 6] = [
    (4, Dimensions::new(8, 4, 3)),
    (6, Dimensions::new(10, 4, 4)),
    (8, Dimensions::new(12, 4, 4)),
    (12, Dimensions::new(14, 6, 4)),
    (16, Dimensions::new(16, 6, 5)),
    (20, Dimensions::new(18, 6, 6)),
];

/// Inclusive upper bounds in ascending order; the first band that fits wins.
const SUITABILITY_BANDS: [(u32, &[&str]); 4] = [
    (
        4,
        &["Garden waste", "Small renovations", "General household waste"],
    ),
    (
        6,
        &[
            "Kitchen renovation",
            "Bathroom refits",
            "Garden clearance",
            "Small building projects",
        ],
    ),
    (
        8,
        &[
            "Home renovations",
            "Construction waste",
            "Large garden projects",
            "House clearance",
        ],
    ),
    (
        12,
        &[
            "Construction projects",
            "Commercial waste",
            "Large house clearance",
            "Building work",
        ],
    ),
];

const LARGEST_BAND: &[&str] = &[
    "Major construction",
    "Industrial waste",
    "Large commercial projects",
    "Heavy building work",
];

const ROAD_PLACEMENT_PHRASE: &str = "road placement allowed";
const HEAVY_WASTE_PHRASE: &str = "heavy waste accepted";

impl From<SkipQuote> for Skip {
    fn from(quote: SkipQuote) -> Self {
        to_skip(&quote)
    }
}

/// Builds the presentation record for one quote.
pub fn to_skip(quote: &SkipQuote) -> Skip {
    Skip {
        id: quote.id.to_string(),
        size_label: size_label(quote.size),
        capacity_label: capacity_label(quote.size),
        total_price: total_price(quote.price_before_vat, quote.vat_percent),
        hire_period_days: quote.hire_period_days,
        description: describe_features(quote.allowed_on_road, quote.allows_heavy_waste),
        dimensions: dimensions_for_size(quote.size),
        suitable_for: suitable_for(quote.size)
            .iter()
            .map(|tag| tag.to_string())
            .collect(),
        allowed_on_road: quote.allowed_on_road,
        allows_heavy_waste: quote.allows_heavy_waste,
        price_before_vat: quote.price_before_vat,
        vat_percent: quote.vat_percent,
    }
}

pub fn to_skips(quotes: &[SkipQuote]) -> Vec<Skip> {
    quotes.iter().map(to_skip).collect()
}

pub fn size_label(size: u32) -> String {
    format!("{size} Yard Skip")
}

pub fn capacity_label(size: u32) -> String {
    format!("{size} cubic yards")
}

/// VAT-inclusive price rounded to the nearest whole unit, halves rounding up.
///
/// Zero and negative inputs are not special-cased.
pub fn total_price(price_before_vat: f64, vat_percent: f64) -> i64 {
    round_half_up(price_before_vat * (1.0 + vat_percent / 100.0)) as i64
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn dimensions_for_size(size: u32) -> Dimensions {
    DIMENSION_TABLE
        .iter()
        .find(|(known, _)| *known == size)
        .map(|(_, dimensions)| *dimensions)
        .unwrap_or(DEFAULT_DIMENSIONS)
}

pub fn suitable_for(size: u32) -> &'static [&'static str] {
    SUITABILITY_BANDS
        .iter()
        .find(|(upper, _)| size <= *upper)
        .map(|(_, tags)| *tags)
        .unwrap_or(LARGEST_BAND)
}

/// Sentence listing the placement features a skip supports, if it has any.
pub fn describe_features(allowed_on_road: bool, allows_heavy_waste: bool) -> Option<String> {
    let mut features = Vec::with_capacity(2);
    if allowed_on_road {
        features.push(ROAD_PLACEMENT_PHRASE);
    }
    if allows_heavy_waste {
        features.push(HEAVY_WASTE_PHRASE);
    }

    if features.is_empty() {
        None
    } else {
        Some(format!("Perfect for projects where {}", features.join(" and ")))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn quote(id: i64, size: u32, price_before_vat: f64, vat_percent: f64) -> SkipQuote {
        SkipQuote {
            id,
            size,
            hire_period_days: 14,
            transport_cost: None,
            per_tonne_cost: None,
            price_before_vat,
            vat_percent,
            postcode: Some("NR32".to_string()),
            area: Some("Lowestoft".to_string()),
            forbidden: false,
            created_at: Some("2025-04-03T13:51:46.897146".to_string()),
            updated_at: Some("2025-04-07T13:16:52.813".to_string()),
            allowed_on_road: true,
            allows_heavy_waste: false,
        }
    }

    #[test]
    fn test_eight_yard_scenario() {
        let record = SkipQuote {
            hire_period_days: 7,
            allowed_on_road: false,
            allows_heavy_waste: true,
            ..quote(42, 8, 300.0, 20.0)
        };

        let skip = to_skip(&record);

        assert_eq!(skip.id, "42");
        assert_eq!(skip.size_label, "8 Yard Skip");
        assert_eq!(skip.capacity_label, "8 cubic yards");
        assert_eq!(skip.total_price, 360);
        assert_eq!(skip.hire_period_days, 7);
        assert_eq!(skip.dimensions, Dimensions::new(12, 4, 4));
        assert_eq!(
            skip.suitable_for,
            vec![
                "Home renovations",
                "Construction waste",
                "Large garden projects",
                "House clearance"
            ]
        );
        assert_eq!(
            skip.description.as_deref(),
            Some("Perfect for projects where heavy waste accepted")
        );
        assert!(!skip.allowed_on_road);
        assert!(skip.allows_heavy_waste);
        assert_eq!(skip.price_before_vat, 300.0);
        assert_eq!(skip.vat_percent, 20.0);
    }

    #[test]
    fn test_total_price_matches_rounded_gross() {
        let cases: [(f64, f64); 6] = [
            (278.0, 20.0),
            (375.0, 20.0),
            (0.0, 20.0),
            (199.99, 0.0),
            (1.25, 100.0),
            (811.0, 17.5),
        ];
        for (net, vat) in cases {
            let expected = (net * (1.0 + vat / 100.0)).round() as i64;
            assert_eq!(total_price(net, vat), expected, "net {net} vat {vat}");
        }
    }

    #[test]
    fn test_total_price_rounds_halves_up() {
        assert_eq!(total_price(2.5, 0.0), 3);
        assert_eq!(total_price(2.49, 0.0), 2);
        assert_eq!(total_price(-2.5, 0.0), -2);
        assert_eq!(total_price(-2.6, 0.0), -3);
    }

    #[test]
    fn test_negative_price_passes_through() {
        let skip = to_skip(&quote(1, 6, -100.0, 20.0));
        assert_eq!(skip.total_price, -120);
        assert_eq!(skip.price_before_vat, -100.0);
    }

    #[test]
    fn test_dimension_table_for_known_sizes() {
        assert_eq!(dimensions_for_size(4), Dimensions::new(8, 4, 3));
        assert_eq!(dimensions_for_size(6), Dimensions::new(10, 4, 4));
        assert_eq!(dimensions_for_size(8), Dimensions::new(12, 4, 4));
        assert_eq!(dimensions_for_size(12), Dimensions::new(14, 6, 4));
        assert_eq!(dimensions_for_size(16), Dimensions::new(16, 6, 5));
        assert_eq!(dimensions_for_size(20), Dimensions::new(18, 6, 6));
    }

    #[test]
    fn test_unknown_size_uses_default_dimensions() {
        for size in [1, 5, 10, 14, 40] {
            assert_eq!(dimensions_for_size(size), DEFAULT_DIMENSIONS);
        }
        assert_eq!(to_skip(&quote(9, 14, 500.0, 20.0)).dimensions, Dimensions::new(10, 5, 4));
    }

    #[test]
    fn test_suitability_bands_pick_smallest_fitting_bound() {
        assert_eq!(
            suitable_for(1),
            ["Garden waste", "Small renovations", "General household waste"]
        );
        assert_eq!(
            suitable_for(5),
            [
                "Kitchen renovation",
                "Bathroom refits",
                "Garden clearance",
                "Small building projects"
            ]
        );
        assert_eq!(
            suitable_for(7),
            [
                "Home renovations",
                "Construction waste",
                "Large garden projects",
                "House clearance"
            ]
        );
        assert_eq!(
            suitable_for(10),
            [
                "Construction projects",
                "Commercial waste",
                "Large house clearance",
                "Building work"
            ]
        );
        assert_eq!(
            suitable_for(15),
            [
                "Major construction",
                "Industrial waste",
                "Large commercial projects",
                "Heavy building work"
            ]
        );
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        assert_eq!(suitable_for(4), suitable_for(1));
        assert_eq!(suitable_for(6), suitable_for(5));
        assert_eq!(suitable_for(8), suitable_for(7));
        assert_eq!(suitable_for(12), suitable_for(10));
        assert_eq!(suitable_for(13), suitable_for(15));
    }

    #[test]
    fn test_description_variants() {
        assert_eq!(describe_features(false, false), None);
        assert_eq!(
            describe_features(true, false).as_deref(),
            Some("Perfect for projects where road placement allowed")
        );
        assert_eq!(
            describe_features(true, true).as_deref(),
            Some("Perfect for projects where road placement allowed and heavy waste accepted")
        );
    }

    #[test]
    fn test_id_is_stringified() {
        for id in [0, 7, 17933, -3] {
            assert_eq!(to_skip(&quote(id, 4, 10.0, 20.0)).id, id.to_string());
        }
    }

    #[test]
    fn test_from_impl_matches_to_skip() {
        let record = quote(11, 20, 992.0, 20.0);
        assert_eq!(Skip::from(record.clone()), to_skip(&record));
    }
}
