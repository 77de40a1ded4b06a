//! Size-keyed presentation tables for skip cards.
//!
//! Every lookup is total: a size missing from a table falls back to a
//! generated value (descriptions, capacities) or to the 8-yard entry (images).

use crate::utils::error::{Result, SkipError};

/// Size whose image stands in for sizes without their own picture.
pub const FALLBACK_IMAGE_SIZE: u32 = 8;

/// Sizes flagged "Most Popular" on the cards.
pub const POPULAR_SIZES: [u32; 2] = [6, 8];

pub const HEAVY_WASTE_SUFFIX: &str = " Accepts heavy materials.";
pub const PRIVATE_PLACEMENT_SUFFIX: &str = " Requires private property placement.";

const IMAGE_8_YARD: &str =
    "https://images.pexels.com/photos/8961497/pexels-photo-8961497.jpeg?auto=compress&cs=tinysrgb&w=800";

pub const SKIP_DESCRIPTIONS: &[(u32, &str)] = &[
    (4, "Great for small clearouts & garden waste. Perfect for household decluttering."),
    (6, "Ideal for kitchen or bathroom refits. Popular choice for home renovations."),
    (8, "Perfect for larger home projects and office clearouts. Great capacity for mixed waste."),
    (10, "Excellent for major renovations and construction projects. High capacity option."),
    (12, "Ideal for large-scale clearouts and commercial projects. Substantial waste capacity."),
    (14, "Perfect for major construction and demolition work. Professional-grade capacity."),
    (16, "Excellent for large commercial projects and major renovations. Heavy-duty option."),
    (20, "Industrial-grade skip for major construction and commercial projects."),
    (40, "Maximum capacity for large-scale industrial and commercial waste disposal."),
];

pub const SKIP_CAPACITIES: &[(u32, &str)] = &[
    (4, "30-40 bin bags"),
    (6, "45-55 bin bags"),
    (8, "60-70 bin bags"),
    (10, "75-85 bin bags"),
    (12, "90-100 bin bags"),
    (14, "105-115 bin bags"),
    (16, "120-130 bin bags"),
    (20, "150-160 bin bags"),
    (40, "300+ bin bags"),
];

pub const SKIP_IMAGES: &[(u32, &str)] = &[
    (4, "https://images.pexels.com/photos/8961503/pexels-photo-8961503.jpeg?auto=compress&cs=tinysrgb&w=800"),
    (6, "https://images.pexels.com/photos/8961423/pexels-photo-8961423.jpeg?auto=compress&cs=tinysrgb&w=800"),
    (8, IMAGE_8_YARD),
    (10, "https://images.pexels.com/photos/8961501/pexels-photo-8961501.jpeg?auto=compress&cs=tinysrgb&w=800"),
    (12, "https://images.pexels.com/photos/8961499/pexels-photo-8961499.jpeg?auto=compress&cs=tinysrgb&w=800"),
    (14, "https://images.pexels.com/photos/8961495/pexels-photo-8961495.jpeg?auto=compress&cs=tinysrgb&w=800"),
    (16, "https://images.pexels.com/photos/8961493/pexels-photo-8961493.jpeg?auto=compress&cs=tinysrgb&w=800"),
    (20, "https://images.pexels.com/photos/8961491/pexels-photo-8961491.jpeg?auto=compress&cs=tinysrgb&w=800"),
    (40, "https://images.pexels.com/photos/8961489/pexels-photo-8961489.jpeg?auto=compress&cs=tinysrgb&w=800"),
];

pub static BUILTIN_CATALOG: SkipCatalog = SkipCatalog {
    descriptions: SKIP_DESCRIPTIONS,
    capacities: SKIP_CAPACITIES,
    images: SKIP_IMAGES,
    fallback_image: IMAGE_8_YARD,
};

type SizeTable = &'static [(u32, &'static str)];

#[derive(Debug, Clone)]
pub struct SkipCatalog {
    descriptions: SizeTable,
    capacities: SizeTable,
    images: SizeTable,
    fallback_image: &'static str,
}

fn lookup(table: SizeTable, size: u32) -> Option<&'static str> {
    table.iter().find(|(s, _)| *s == size).map(|(_, v)| *v)
}

impl SkipCatalog {
    /// Builds a catalog from custom tables. The image table must contain the
    /// 8-yard entry, otherwise the image fallback would have nothing to use.
    pub fn new(descriptions: SizeTable, capacities: SizeTable, images: SizeTable) -> Result<Self> {
        let fallback_image =
            lookup(images, FALLBACK_IMAGE_SIZE).ok_or_else(|| SkipError::ConfigError {
                message: format!(
                    "image table has no entry for the {}-yard fallback size",
                    FALLBACK_IMAGE_SIZE
                ),
            })?;

        Ok(Self {
            descriptions,
            capacities,
            images,
            fallback_image,
        })
    }

    pub fn builtin() -> &'static SkipCatalog {
        &BUILTIN_CATALOG
    }

    /// Base description plus the heavy-waste clause, then the placement clause.
    pub fn description(&self, size: u32, allows_heavy_waste: bool, allowed_on_road: bool) -> String {
        let mut description = match lookup(self.descriptions, size) {
            Some(text) => text.to_string(),
            None => format!("{} yard skip for your waste disposal needs.", size),
        };

        if allows_heavy_waste {
            description.push_str(HEAVY_WASTE_SUFFIX);
        }
        if !allowed_on_road {
            description.push_str(PRIVATE_PLACEMENT_SUFFIX);
        }

        description
    }

    pub fn capacity(&self, size: u32) -> String {
        match lookup(self.capacities, size) {
            Some(text) => text.to_string(),
            None => {
                let size = f64::from(size);
                format!("{}-{} bin bags", size * 7.5, size * 8.5)
            }
        }
    }

    pub fn image(&self, size: u32) -> &'static str {
        lookup(self.images, size).unwrap_or(self.fallback_image)
    }

    pub fn is_popular(&self, size: u32) -> bool {
        POPULAR_SIZES.contains(&size)
    }
}
