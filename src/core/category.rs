//! Statistic categories and the per-invocation category filter

use std::fmt;

/// Wildcard that enables every category, recognised or not
pub const ALL: &str = "all";

/// A named section of the statistics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Geometry,
    BoundingBox,
    Area,
    Camera,
    Cache,
    Time,
}

impl Category {
    pub const VALUES: [Category; 6] = [
        Category::Geometry,
        Category::BoundingBox,
        Category::Area,
        Category::Camera,
        Category::Cache,
        Category::Time,
    ];

    /// Name as it appears in a category request and as a document key
    pub fn name(&self) -> &'static str {
        match self {
            Category::Geometry => "geometry",
            Category::BoundingBox => "bounding_box",
            Category::Area => "area",
            Category::Camera => "camera",
            Category::Cache => "cache",
            Category::Time => "time",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decides which categories a report invocation asked for.
///
/// Matching is exact: no prefix or glob matching and no case folding.
/// Unknown names are kept but never match a recognised category, and are
/// never reported as invalid.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    all: bool,
    requested: Vec<String>,
}

impl CategoryFilter {
    pub fn new<I, S>(requested: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requested: Vec<String> = requested.into_iter().map(Into::into).collect();
        let all = requested.iter().any(|name| name == ALL);
        Self { all, requested }
    }

    /// A filter that enables nothing
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.all || self.requested.iter().any(|requested| requested == name)
    }

    pub fn enables(&self, category: Category) -> bool {
        self.is_enabled(category.name())
    }

    pub fn requested(&self) -> &[String] {
        &self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_match() {
        let filter = CategoryFilter::new(["geometry", "bounding_box"]);
        assert!(filter.enables(Category::Geometry));
        assert!(filter.enables(Category::BoundingBox));
        assert!(!filter.enables(Category::Camera));
        assert!(!filter.is_enabled("geo"));
        assert!(!filter.is_enabled("Geometry"));
    }

    #[test]
    fn test_empty_request_disables_everything() {
        let filter = CategoryFilter::none();
        for category in Category::VALUES {
            assert!(!filter.enables(category));
        }
    }

    #[test]
    fn test_unknown_names_are_inert() {
        let filter = CategoryFilter::new(["bogus", "camera"]);
        assert!(filter.enables(Category::Camera));
        assert!(!filter.enables(Category::Cache));
        assert_eq!(filter.requested(), ["bogus", "camera"]);
    }

    #[test]
    fn test_category_names() {
        let names: Vec<_> = Category::VALUES.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            ["geometry", "bounding_box", "area", "camera", "cache", "time"]
        );
    }

    proptest! {
        #[test]
        fn all_enables_any_name(mut names in proptest::collection::vec("[a-z_]{0,12}", 0..6), name in ".*") {
            names.push(ALL.to_string());
            let filter = CategoryFilter::new(names);
            prop_assert!(filter.is_enabled(&name));
        }
    }
}
