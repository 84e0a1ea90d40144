use crate::core::filter::{CategoryFilter, PartsFilter};
use crate::core::placement::default_placement;
use crate::core::store::CustomizationStore;
use crate::domain::model::{AttachedPart, Part, PartCategory, PartId, BASE_PRICE, BASE_WEIGHT_KG};
use crate::domain::ports::{PartsCatalog, SpecificationTable};
use crate::utils::error::{CustomizerError, Result};
use crate::utils::validation::validate_one_of;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Unchanged,
}

impl Trend {
    fn between(base: f64, value: f64) -> Self {
        if value > base {
            Trend::Up
        } else if value < base {
            Trend::Down
        } else {
            Trend::Unchanged
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricReading {
    pub base: f64,
    pub value: f64,
    pub trend: Trend,
}

impl MetricReading {
    fn new(base: f64, value: f64) -> Self {
        Self {
            base,
            value,
            trend: Trend::between(base, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub model: String,
    pub engine: Option<String>,
    pub weight: MetricReading,
    pub power: MetricReading,
    pub torque: MetricReading,
    pub mileage: MetricReading,
    pub top_speed: MetricReading,
    pub price: MetricReading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomLine {
    pub id: PartId,
    pub name: String,
    pub category: PartCategory,
    pub price: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillOfMaterials {
    pub lines: Vec<BomLine>,
    pub total_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartListing<'a> {
    pub part: &'a Part,
    pub attached: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub generated_at: DateTime<Utc>,
    pub brand: Option<String>,
    pub selected_part_id: Option<PartId>,
    pub performance: Option<PerformanceReport>,
    pub bill_of_materials: BillOfMaterials,
}

/// One user's customization workflow: bike selection, the parts browser
/// filter, and the store holding what is mounted.
pub struct EditingSession<'a, C> {
    catalog: &'a C,
    store: CustomizationStore,
    brand: Option<String>,
    model: Option<String>,
    engine: Option<String>,
    category: CategoryFilter,
    search: String,
}

impl<'a, C> EditingSession<'a, C>
where
    C: PartsCatalog + SpecificationTable,
{
    pub fn new(catalog: &'a C) -> Self {
        tracing::info!("Starting editing session");
        Self {
            catalog,
            store: CustomizationStore::new(),
            brand: None,
            model: None,
            engine: None,
            category: CategoryFilter::All,
            search: String::new(),
        }
    }

    pub fn store(&self) -> &CustomizationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CustomizationStore {
        &mut self.store
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn select_brand(&mut self, brand: &str) -> Result<()> {
        validate_one_of("brand", brand, &self.catalog.brands())?;
        tracing::info!(brand, "Brand selected");
        self.brand = Some(brand.to_string());
        self.model = None;
        self.engine = None;
        Ok(())
    }

    pub fn select_model(&mut self, model: &str) -> Result<()> {
        let brand = self.brand.as_deref().unwrap_or_default();
        let models = self.catalog.models(brand);
        if !models.iter().any(|m| m == model) && self.catalog.base_spec(model).is_none() {
            return Err(CustomizerError::UnknownModel(model.to_string()));
        }
        validate_one_of("model", model, &models)?;
        tracing::info!(model, "Model selected");
        self.model = Some(model.to_string());
        self.engine = None;
        Ok(())
    }

    pub fn select_engine(&mut self, engine: &str) -> Result<()> {
        let model = self.model.as_deref().ok_or(CustomizerError::NoModelSelected)?;
        validate_one_of("engine", engine, &self.catalog.engines(model))?;
        self.engine = Some(engine.to_string());
        Ok(())
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn parts_filter(&self) -> PartsFilter {
        PartsFilter {
            model: self.model.clone(),
            category: self.category,
            search: self.search.clone(),
        }
    }

    pub fn visible_parts(&self) -> Vec<&'a Part> {
        self.parts_filter().apply(self.catalog.parts())
    }

    /// Parts-browser rows: the visible parts with their attached and
    /// selected status.
    pub fn part_listings(&self) -> Vec<PartListing<'a>> {
        let selected = self.store.selected_part_id();
        self.visible_parts()
            .into_iter()
            .map(|part| PartListing {
                part,
                attached: self.store.is_attached(part.id),
                selected: selected == Some(part.id),
            })
            .collect()
    }

    /// Mounts a catalog part at its default placement and highlights it.
    /// With a model selected, the part must fit that model.
    pub fn attach_from_catalog(&mut self, id: PartId) -> Result<()> {
        let part = self
            .catalog
            .part(id)
            .ok_or(CustomizerError::UnknownPart(id))?;
        if let Some(model) = self.model.as_deref() {
            if !part.fits(model) {
                return Err(CustomizerError::IncompatiblePart {
                    id,
                    model: model.to_string(),
                });
            }
        }
        let placement = default_placement(part.category);
        self.store.attach(AttachedPart::new(part.clone(), placement));
        self.store.select(Some(id));
        Ok(())
    }

    pub fn remove(&mut self, id: PartId) {
        self.store.remove(id);
    }

    /// Part-card click: select, or deselect when already selected.
    pub fn toggle_selection(&mut self, id: PartId) {
        if self.store.selected_part_id() == Some(id) {
            self.store.select(None);
        } else {
            self.store.select(Some(id));
        }
    }

    pub fn performance(&self) -> Option<PerformanceReport> {
        let model = self.model.as_deref()?;
        let base = self.catalog.base_spec(model)?;
        let store = &self.store;

        Some(PerformanceReport {
            model: model.to_string(),
            engine: self.engine.clone(),
            weight: MetricReading::new(BASE_WEIGHT_KG, store.total_weight()),
            power: MetricReading::new(base.power, store.calculated_power(base.power)),
            torque: MetricReading::new(base.torque, store.calculated_torque(base.torque)),
            mileage: MetricReading::new(base.mileage, store.calculated_mileage(base.mileage)),
            top_speed: MetricReading::new(
                base.top_speed,
                store.calculated_top_speed(base.top_speed),
            ),
            price: MetricReading::new(BASE_PRICE, store.total_price()),
        })
    }

    pub fn bill_of_materials(&self) -> BillOfMaterials {
        let lines = self
            .store
            .attached_parts()
            .iter()
            .map(|a| BomLine {
                id: a.id(),
                name: a.part.name.clone(),
                category: a.part.category,
                price: a.part.price,
                weight: a.part.weight,
            })
            .collect();

        BillOfMaterials {
            lines,
            total_price: self.store.total_price(),
        }
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            generated_at: Utc::now(),
            brand: self.brand.clone(),
            selected_part_id: self.store.selected_part_id(),
            performance: self.performance(),
            bill_of_materials: self.bill_of_materials(),
        }
    }
}
