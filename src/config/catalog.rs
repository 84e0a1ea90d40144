use crate::domain::model::{BaseSpecification, Part};
use crate::domain::ports::{PartsCatalog, SpecificationTable};
use crate::utils::error::{CustomizerError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_non_negative, validate_positive, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub brands: Vec<BrandEntry>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    #[serde(default)]
    pub engines: Vec<String>,
    pub spec: Option<BaseSpecification>,
}

impl Catalog {
    /// The lineup shipped with the binary.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_toml_str(BUILTIN_CATALOG)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::info!("Loaded catalog file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let catalog: Catalog = toml::from_str(&processed_content)?;
        tracing::debug!(
            brands = catalog.brands.len(),
            parts = catalog.parts.len(),
            "Parsed catalog"
        );
        Ok(catalog)
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown names as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CustomizerError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn model_entries(&self) -> impl Iterator<Item = &ModelEntry> {
        self.brands.iter().flat_map(|b| b.models.iter())
    }

    fn model_entry(&self, model: &str) -> Option<&ModelEntry> {
        self.model_entries().find(|m| m.name == model)
    }

    pub fn validate_catalog(&self) -> Result<()> {
        let mut model_names = HashSet::new();
        for brand in &self.brands {
            validate_non_empty_string("brands.name", &brand.name)?;
            for model in &brand.models {
                validate_non_empty_string("brands.models.name", &model.name)?;
                if !model_names.insert(model.name.as_str()) {
                    return Err(CustomizerError::InvalidConfigValueError {
                        field: "brands.models.name".to_string(),
                        value: model.name.clone(),
                        reason: "Model listed more than once".to_string(),
                    });
                }

                let field = format!("models.{}.spec", model.name);
                let spec = model
                    .spec
                    .as_ref()
                    .ok_or_else(|| CustomizerError::MissingConfigError {
                        field: field.clone(),
                    })?;
                validate_positive(&format!("{}.power", field), spec.power)?;
                validate_positive(&format!("{}.torque", field), spec.torque)?;
                validate_positive(&format!("{}.mileage", field), spec.mileage)?;
                validate_positive(&format!("{}.top_speed", field), spec.top_speed)?;
            }
        }

        let mut part_ids = HashSet::new();
        for part in &self.parts {
            let field = format!("parts.{}", part.id);
            if !part_ids.insert(part.id) {
                return Err(CustomizerError::InvalidConfigValueError {
                    field: "parts.id".to_string(),
                    value: part.id.to_string(),
                    reason: "Part id must be unique".to_string(),
                });
            }
            validate_non_empty_string(&format!("{}.name", field), &part.name)?;
            validate_non_negative(&format!("{}.price", field), part.price)?;
            validate_non_negative(&format!("{}.weight", field), part.weight)?;

            let m = &part.modifiers;
            validate_finite(&format!("{}.power_boost", field), m.power_boost)?;
            validate_finite(&format!("{}.weight_reduction", field), m.weight_reduction)?;
            validate_finite(&format!("{}.mileage_impact", field), m.mileage_impact)?;
            validate_finite(&format!("{}.speed_boost", field), m.speed_boost)?;
            validate_finite(&format!("{}.torque_boost", field), m.torque_boost)?;

            if let Some(unknown) = part
                .compatible
                .iter()
                .find(|model| !model_names.contains(model.as_str()))
            {
                return Err(CustomizerError::InvalidConfigValueError {
                    field: format!("{}.compatible", field),
                    value: unknown.clone(),
                    reason: "Part references a model that is not in the catalog".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl PartsCatalog for Catalog {
    fn parts(&self) -> &[Part] {
        &self.parts
    }

    fn brands(&self) -> Vec<String> {
        self.brands.iter().map(|b| b.name.clone()).collect()
    }

    fn models(&self, brand: &str) -> Vec<String> {
        self.brands
            .iter()
            .find(|b| b.name == brand)
            .map(|b| b.models.iter().map(|m| m.name.clone()).collect())
            .unwrap_or_default()
    }

    fn engines(&self, model: &str) -> Vec<String> {
        self.model_entry(model)
            .map(|m| m.engines.clone())
            .unwrap_or_default()
    }
}

impl SpecificationTable for Catalog {
    fn base_spec(&self, model: &str) -> Option<BaseSpecification> {
        self.model_entry(model).and_then(|m| m.spec)
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        self.validate_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PartCategory, PartId};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL: &str = r#"
[[brands]]
name = "Yamaha"

[[brands.models]]
name = "R15"
engines = ["155cc VVA"]
spec = { power = 18.4, torque = 14.2, mileage = 45, top_speed = 136 }

[[parts]]
id = 1
name = "Slip-on Exhaust"
category = "Exhaust"
price = 18000
weight = 2.5
compatible = ["R15"]
power_boost = 1.2
mileage_impact = -1.5
"#;

    #[test]
    fn test_parse_small_catalog() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        assert!(catalog.validate().is_ok());

        assert_eq!(catalog.brands(), vec!["Yamaha".to_string()]);
        assert_eq!(catalog.models("Yamaha"), vec!["R15".to_string()]);
        assert!(catalog.models("Honda").is_empty());
        assert_eq!(catalog.engines("R15"), vec!["155cc VVA".to_string()]);

        let part = catalog.part(PartId(1)).unwrap();
        assert_eq!(part.category, PartCategory::Exhaust);
        assert_eq!(part.price, 18000.0);
        assert_eq!(part.modifiers.mileage_impact, Some(-1.5));
        assert_eq!(part.modifiers.speed_boost, None);

        let spec = catalog.base_spec("R15").unwrap();
        assert_eq!(spec.top_speed, 136.0);
        assert_eq!(spec.weight(), 185.0);
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.parts().is_empty());
        for brand in catalog.brands() {
            for model in catalog.models(&brand) {
                assert!(catalog.base_spec(&model).is_some(), "{} lacks a spec", model);
            }
        }
    }

    #[test]
    fn test_duplicate_part_id_rejected() {
        let doubled = format!(
            "{}\n[[parts]]\nid = 1\nname = \"Other\"\ncategory = \"Seat\"\nprice = 1\nweight = 1\n",
            SMALL
        );
        let catalog = Catalog::from_toml_str(&doubled).unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_unknown_compatible_model_rejected() {
        let bad = SMALL.replace("compatible = [\"R15\"]", "compatible = [\"R1\"]");
        let catalog = Catalog::from_toml_str(&bad).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(CustomizerError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_missing_spec_rejected() {
        let bad = SMALL.replace(
            "spec = { power = 18.4, torque = 14.2, mileage = 45, top_speed = 136 }",
            "",
        );
        let catalog = Catalog::from_toml_str(&bad).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(CustomizerError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let bad = SMALL.replace("price = 18000", "price = -5");
        let catalog = Catalog::from_toml_str(&bad).unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let bad = SMALL.replace("category = \"Exhaust\"", "category = \"Spoiler\"");
        assert!(matches!(
            Catalog::from_toml_str(&bad),
            Err(CustomizerError::TomlError(_))
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MOTO_TEST_BRAND", "Kawasaki");
        let content = SMALL.replace("name = \"Yamaha\"", "name = \"${MOTO_TEST_BRAND}\"");
        let catalog = Catalog::from_toml_str(&content).unwrap();
        assert_eq!(catalog.brands(), vec!["Kawasaki".to_string()]);
        std::env::remove_var("MOTO_TEST_BRAND");
    }

    #[test]
    fn test_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SMALL.as_bytes()).unwrap();

        let catalog = Catalog::from_file(temp_file.path()).unwrap();
        assert_eq!(catalog.parts().len(), 1);
    }
}
