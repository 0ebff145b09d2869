use serde::{Deserialize, Serialize};
use std::fmt;

/// Grocery categories offered by the filter dropdown.
///
/// `All` is the sentinel meaning "no category filter applied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Produce,
    Dairy,
    Dessert,
}

/// All categories in dropdown order.
pub const ALL_CATEGORIES: &[Category] = &[
    Category::All,
    Category::Produce,
    Category::Dairy,
    Category::Dessert,
];

impl Category {
    /// Value carried by the `<option>` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Dessert => "Dessert",
        }
    }

    /// Text shown to the user for this option.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Filter by category",
            other => other.as_str(),
        }
    }

    /// Parse an option value. Matching is exact; unknown values are `None`.
    pub fn from_value(s: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.as_str() == s)
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the category dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The fixed four-entry list: `All` (labelled as the placeholder), then
    /// `Produce`, `Dairy`, `Dessert`.
    pub fn defaults() -> Vec<Self> {
        ALL_CATEGORIES.iter().copied().map(Self::from).collect()
    }
}

impl From<Category> for CategoryOption {
    fn from(category: Category) -> Self {
        Self::new(category.as_str(), category.label())
    }
}
