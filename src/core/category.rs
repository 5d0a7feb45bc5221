use indexmap::IndexSet;

use crate::core::record::{CategoryKey, Dataset};
use crate::render::Color;

/// Tableau 10 qualitative palette.
pub const TABLEAU10: [Color; 10] = [
    Color::from_rgb_hex(0x4e79a7),
    Color::from_rgb_hex(0xf28e2c),
    Color::from_rgb_hex(0xe15759),
    Color::from_rgb_hex(0x76b7b2),
    Color::from_rgb_hex(0x59a14f),
    Color::from_rgb_hex(0xedc949),
    Color::from_rgb_hex(0xaf7aa1),
    Color::from_rgb_hex(0xff9da7),
    Color::from_rgb_hex(0x9c755f),
    Color::from_rgb_hex(0xbab0ab),
];

/// Fill used for records whose category value is missing.
pub const UNCATEGORIZED_COLOR: Color = Color::from_rgb_hex(0x808080);

/// Distinct values of the color field, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySet {
    categories: IndexSet<CategoryKey>,
}

impl CategorySet {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, field: &str) -> Self {
        let categories = dataset
            .records()
            .iter()
            .filter_map(|record| record.category(field))
            .collect();
        Self { categories }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn position(&self, category: &CategoryKey) -> Option<usize> {
        self.categories.get_index_of(category)
    }

    #[must_use]
    pub fn contains(&self, category: &CategoryKey) -> bool {
        self.categories.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryKey> {
        self.categories.iter()
    }
}

/// Category to palette mapping; wraps around after the last palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    categories: CategorySet,
    palette: Vec<Color>,
}

impl OrdinalColorScale {
    #[must_use]
    pub fn new(categories: CategorySet) -> Self {
        Self::with_palette(categories, TABLEAU10.to_vec())
    }

    /// An empty palette falls back to [`TABLEAU10`].
    #[must_use]
    pub fn with_palette(categories: CategorySet, palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            TABLEAU10.to_vec()
        } else {
            palette
        };
        Self {
            categories,
            palette,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    #[must_use]
    pub fn color(&self, category: &CategoryKey) -> Color {
        self.categories
            .position(category)
            .map_or(UNCATEGORIZED_COLOR, |i| self.palette[i % self.palette.len()])
    }
}
