use crate::domain::model::{Part, PartCategory};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PartCategory),
}

impl FromStr for CategoryFilter {
    type Err = crate::domain::model::UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

/// Parts-browser filter: model compatibility, category, then name search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartsFilter {
    pub model: Option<String>,
    pub category: CategoryFilter,
    pub search: String,
}

impl PartsFilter {
    pub fn matches(&self, part: &Part) -> bool {
        if let Some(model) = self.model.as_deref().filter(|m| !m.is_empty()) {
            if !part.fits(model) {
                return false;
            }
        }

        match self.category {
            CategoryFilter::All => {}
            // Picking "Engine" lists every compatible part that is NOT an engine
            // part. Product has not confirmed this, keep it until they do.
            CategoryFilter::Only(PartCategory::Engine) => {
                if part.category == PartCategory::Engine {
                    return false;
                }
            }
            CategoryFilter::Only(category) => {
                if part.category != category {
                    return false;
                }
            }
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !part.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, parts: &'a [Part]) -> Vec<&'a Part> {
        parts.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PartId, PerformanceModifiers};

    fn part(id: u32, name: &str, category: PartCategory, models: &[&str]) -> Part {
        Part {
            id: PartId(id),
            name: name.to_string(),
            category,
            price: 100.0,
            weight: 1.0,
            compatible: models.iter().map(|m| m.to_string()).collect(),
            modifiers: PerformanceModifiers::default(),
        }
    }

    fn catalog() -> Vec<Part> {
        vec![
            part(1, "Akrapovic Slip-On", PartCategory::Exhaust, &["R15", "MT-15"]),
            part(2, "LED Headlamp Kit", PartCategory::Lights, &["R15"]),
            part(3, "Big Bore Kit", PartCategory::Engine, &["R15"]),
            part(4, "Carbon Exhaust Shield", PartCategory::Exhaust, &["MT-15"]),
        ]
    }

    fn ids(parts: Vec<&Part>) -> Vec<u32> {
        parts.into_iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn default_filter_shows_everything() {
        let parts = catalog();
        assert_eq!(ids(PartsFilter::default().apply(&parts)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn model_restricts_to_compatible_parts() {
        let parts = catalog();
        let filter = PartsFilter {
            model: Some("MT-15".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&parts)), vec![1, 4]);
    }

    #[test]
    fn engine_category_excludes_engine_parts() {
        let parts = catalog();
        let filter = PartsFilter {
            model: Some("R15".to_string()),
            category: CategoryFilter::Only(PartCategory::Engine),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&parts)), vec![1, 2]);
    }

    #[test]
    fn other_categories_are_inclusive() {
        let parts = catalog();
        let filter = PartsFilter {
            category: CategoryFilter::Only(PartCategory::Exhaust),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&parts)), vec![1, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let parts = catalog();
        let filter = PartsFilter {
            search: "EXHAUST".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&parts)), vec![4]);
    }

    #[test]
    fn category_filter_parses_all_and_names() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Air Filter".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(PartCategory::AirFilter))
        );
        assert!("Wings".parse::<CategoryFilter>().is_err());
    }
}
