//! Product entity - an immutable furniture catalog record.
//!
//! Products are loaded once from the catalog file and never mutated. The optional
//! facet attributes are only present for some products and are only consulted by
//! the filter engine when a matching facet filter is active.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of furniture categories
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Sofas, coffee tables, TV stands
    #[serde(rename = "Living Room")]
    LivingRoom,
    /// Dining tables, chairs, bar stools
    #[serde(rename = "Kitchen & Dining")]
    KitchenDining,
    /// Beds, wardrobes, nightstands
    #[serde(rename = "Bedroom")]
    Bedroom,
    /// Desks, office chairs, bookshelves
    #[serde(rename = "Office")]
    Office,
    /// Console tables, benches, coat racks
    #[serde(rename = "Entryway")]
    Entryway,
    /// Cribs, kids beds, kids desks
    #[serde(rename = "Baby & Kids")]
    BabyKids,
}

impl Category {
    /// Every category in menu order
    pub const ALL: [Self; 6] = [
        Self::LivingRoom,
        Self::KitchenDining,
        Self::Bedroom,
        Self::Office,
        Self::Entryway,
        Self::BabyKids,
    ];

    /// Display name, as it appears in the catalog file and in routes
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::KitchenDining => "Kitchen & Dining",
            Self::Bedroom => "Bedroom",
            Self::Office => "Office",
            Self::Entryway => "Entryway",
            Self::BabyKids => "Baby & Kids",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = crate::errors::Error;

    /// Case-insensitive match against the display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| crate::errors::Error::UnknownCategory {
                name: wanted.to_string(),
            })
    }
}

/// Secondary filterable product attributes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    /// Reads `colors`
    Color,
    /// Reads `materials`
    Material,
    /// Reads `size`
    Size,
    /// Reads `style`
    Style,
    /// Reads `assembly`
    Assembly,
    /// Reads `tv_size_range`
    TvSizeRange,
}

impl Facet {
    /// Every facet in sidebar order
    pub const ALL: [Self; 6] = [
        Self::Color,
        Self::Material,
        Self::Size,
        Self::Style,
        Self::Assembly,
        Self::TvSizeRange,
    ];

    /// Short lowercase name used by the shell
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Material => "material",
            Self::Size => "size",
            Self::Style => "style",
            Self::Assembly => "assembly",
            Self::TvSizeRange => "tv-size",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facet {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" | "colors" | "colour" => Ok(Self::Color),
            "material" | "materials" => Ok(Self::Material),
            "size" | "sizes" => Ok(Self::Size),
            "style" | "styles" => Ok(Self::Style),
            "assembly" => Ok(Self::Assembly),
            "tv-size" | "tv_size" | "tvsize" => Ok(Self::TvSizeRange),
            other => Err(crate::errors::Error::InvalidCommand {
                message: format!("unknown facet '{other}'"),
            }),
        }
    }
}

/// A single catalog product
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique positive identifier
    pub id: u32,
    /// Display name (e.g., "Executive Leather Sofa")
    pub name: String,
    /// Top-level category
    pub category: Category,
    /// Grouping within the category; only unique together with `category`
    pub subcategory: String,
    /// Marketing description
    #[serde(default)]
    pub description: String,
    /// Free-text dimensions (e.g., "220cm × 95cm × 85cm")
    #[serde(default)]
    pub dimensions: String,
    /// Materials in display order
    #[serde(default)]
    pub materials: Vec<String>,
    /// Available finishes in display order
    #[serde(default)]
    pub finishes: Vec<String>,
    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,
    /// Formatted price label (e.g., "From TZS 2,500,000")
    pub price_range: String,
    /// Lower price bound in TZS, used for range filtering and sorting
    pub price_value: u64,
    /// Image references; the first is the cover image
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Color facet values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Size facet value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Style facet value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Assembly facet value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
    /// TV size range facet value, for media furniture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_size_range: Option<String>,
}

impl Product {
    /// Returns the product's values for a facet, or `None` if the product
    /// does not carry that attribute at all.
    #[must_use]
    pub fn facet_values(&self, facet: Facet) -> Option<Vec<&str>> {
        match facet {
            Facet::Color => self
                .colors
                .as_ref()
                .map(|colors| colors.iter().map(String::as_str).collect()),
            Facet::Material => {
                if self.materials.is_empty() {
                    None
                } else {
                    Some(self.materials.iter().map(String::as_str).collect())
                }
            }
            Facet::Size => self.size.as_deref().map(|v| vec![v]),
            Facet::Style => self.style.as_deref().map(|v| vec![v]),
            Facet::Assembly => self.assembly.as_deref().map(|v| vec![v]),
            Facet::TvSizeRange => self.tv_size_range.as_deref().map(|v| vec![v]),
        }
    }

    /// Parses the leading amount out of `price_range`
    /// ("From TZS 2,500,000" gives `Some(2_500_000)`).
    #[must_use]
    pub fn parsed_price_floor(&self) -> Option<u64> {
        let digits: String = self
            .price_range
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit() || *c == ',')
            .filter(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}
