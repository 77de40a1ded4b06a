use crate::domain::catalog::SkipCatalog;
use crate::domain::model::{RawSkipRecord, ViewSkipRecord};

/// Turns API records into card-ready records.
#[derive(Debug, Clone, Copy)]
pub struct SkipTransformer<'a> {
    catalog: &'a SkipCatalog,
}

impl Default for SkipTransformer<'static> {
    fn default() -> Self {
        Self::new(SkipCatalog::builtin())
    }
}

impl<'a> SkipTransformer<'a> {
    pub fn new(catalog: &'a SkipCatalog) -> Self {
        Self { catalog }
    }

    /// Drops forbidden records, enriches the rest and sorts them by size.
    /// The sort is stable, so equal sizes keep their input order.
    pub fn transform(&self, records: Vec<RawSkipRecord>) -> Vec<ViewSkipRecord> {
        let total = records.len();

        let mut skips: Vec<ViewSkipRecord> = records
            .into_iter()
            .filter(|record| !record.forbidden)
            .map(|record| self.enrich(record))
            .collect();

        skips.sort_by_key(|skip| skip.raw.size);

        tracing::debug!(
            "Transformed {} skip records ({} forbidden dropped)",
            skips.len(),
            total - skips.len()
        );
        skips
    }

    pub fn enrich(&self, raw: RawSkipRecord) -> ViewSkipRecord {
        let size = raw.size;
        ViewSkipRecord {
            name: format!("{} Yard Skip", size),
            description: self
                .catalog
                .description(size, raw.allows_heavy_waste, raw.allowed_on_road),
            capacity: self.catalog.capacity(size),
            image: self.catalog.image(size).to_string(),
            is_popular: self.catalog.is_popular(size),
            raw,
        }
    }
}

/// Transforms with the built-in catalog.
pub fn transform_skips(records: Vec<RawSkipRecord>) -> Vec<ViewSkipRecord> {
    SkipTransformer::default().transform(records)
}

#[cfg(test)]
pub(crate) fn raw_skip(id: u64, size: u32, forbidden: bool, heavy: bool, road: bool) -> RawSkipRecord {
    RawSkipRecord {
        id,
        size,
        hire_period_days: 14,
        transport_cost: None,
        per_tonne_cost: None,
        price_before_vat: 100.0 + f64::from(size) * 10.0,
        vat: 20.0,
        postcode: "LE10".to_string(),
        area: Some("Hinckley".to_string()),
        forbidden,
        created_at: "2025-04-03T13:51:46.897146".to_string(),
        updated_at: "2025-04-07T13:16:52.813".to_string(),
        allowed_on_road: road,
        allows_heavy_waste: heavy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{HEAVY_WASTE_SUFFIX, PRIVATE_PLACEMENT_SUFFIX};

    #[test]
    fn test_transform_scenario_filters_enriches_and_sorts() {
        let input = vec![
            raw_skip(1, 8, false, true, true),
            raw_skip(2, 4, true, false, true),
            raw_skip(3, 6, false, false, false),
        ];

        let output = transform_skips(input);

        assert_eq!(output.len(), 2);
        assert_eq!(output[0].size(), 6);
        assert!(output[0].is_popular);
        assert_eq!(output[1].size(), 8);
        assert!(output[1].is_popular);
        assert!(output[1].description.ends_with("Accepts heavy materials."));
        assert!(output.iter().all(|s| s.id() != 2));
    }

    #[test]
    fn test_deficit_equals_forbidden_count() {
        let input: Vec<RawSkipRecord> = (0..10)
            .map(|i| raw_skip(i, (i as u32 % 5) * 4 + 4, i % 3 == 0, false, true))
            .collect();
        let forbidden = input.iter().filter(|r| r.forbidden).count();

        let output = transform_skips(input.clone());

        assert_eq!(input.len() - output.len(), forbidden);
    }

    #[test]
    fn test_sort_is_stable_for_equal_sizes() {
        let input = vec![
            raw_skip(10, 8, false, false, true),
            raw_skip(11, 4, false, false, true),
            raw_skip(12, 8, false, true, true),
            raw_skip(13, 4, false, false, false),
            raw_skip(14, 8, false, false, false),
        ];

        let ids: Vec<u64> = transform_skips(input).iter().map(|s| s.id()).collect();

        assert_eq!(ids, vec![11, 13, 10, 12, 14]);
    }

    #[test]
    fn test_output_is_non_decreasing_by_size() {
        let sizes = [40, 4, 20, 6, 16, 8, 14, 10, 12, 30];
        let input = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| raw_skip(i as u64, *size, false, false, true))
            .collect();

        let output = transform_skips(input);

        assert!(output.windows(2).all(|w| w[0].size() <= w[1].size()));
        for skip in &output {
            assert_eq!(skip.is_popular, skip.size() == 6 || skip.size() == 8);
            assert_eq!(skip.name, format!("{} Yard Skip", skip.size()));
        }
    }

    #[test]
    fn test_transform_is_idempotent_on_its_own_output() {
        let input = vec![
            raw_skip(1, 12, false, true, false),
            raw_skip(2, 4, false, false, true),
            raw_skip(3, 8, false, true, true),
        ];

        let first = transform_skips(input);
        let again = transform_skips(first.iter().map(|s| s.raw.clone()).collect());

        assert_eq!(first, again);
    }

    #[test]
    fn test_both_suffixes_in_order() {
        let output = transform_skips(vec![raw_skip(1, 10, false, true, false)]);
        let expected_tail = format!("{}{}", HEAVY_WASTE_SUFFIX, PRIVATE_PLACEMENT_SUFFIX);
        assert!(output[0].description.ends_with(&expected_tail));
    }

    #[test]
    fn test_unknown_size_uses_generated_fields() {
        let output = transform_skips(vec![raw_skip(7, 30, false, false, true)]);
        let skip = &output[0];

        assert_eq!(skip.description, "30 yard skip for your waste disposal needs.");
        assert_eq!(skip.capacity, "225-255 bin bags");
        assert_eq!(skip.image, SkipCatalog::builtin().image(8));
        assert!(!skip.is_popular);
    }

    #[test]
    fn test_empty_input() {
        assert!(transform_skips(Vec::new()).is_empty());
    }

    #[test]
    fn test_all_forbidden_input() {
        let input = vec![raw_skip(1, 4, true, false, true), raw_skip(2, 6, true, true, true)];
        assert!(transform_skips(input).is_empty());
    }

    #[test]
    fn test_raw_fields_pass_through() {
        let raw = raw_skip(42, 14, false, true, true);
        let output = transform_skips(vec![raw.clone()]);
        assert_eq!(output[0].raw, raw);
        assert_eq!(output[0].capacity, "105-115 bin bags");
    }
}
