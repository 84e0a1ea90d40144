use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Curb weight of every bike before parts are added, in kg.
pub const BASE_WEIGHT_KG: f64 = 185.0;

/// Price of the stock bike before parts are added.
pub const BASE_PRICE: f64 = 250_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub u32);

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PartId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PartId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    Exhaust,
    Lights,
    Headlight,
    #[serde(rename = "Tail Light")]
    TailLight,
    #[serde(rename = "Turn Signals")]
    TurnSignals,
    #[serde(rename = "Air Filter")]
    AirFilter,
    Brakes,
    #[serde(rename = "Brake Pads")]
    BrakePads,
    #[serde(rename = "Disc Brakes")]
    DiscBrakes,
    Mirrors,
    Engine,
    Suspension,
    Tyres,
    Wheels,
    Handlebars,
    Seat,
    #[serde(rename = "Fuel Tank")]
    FuelTank,
    #[serde(rename = "Chain & Sprockets")]
    ChainAndSprockets,
    Clutch,
    Gearbox,
    Radiator,
    Battery,
    #[serde(rename = "Spark Plugs")]
    SparkPlugs,
    #[serde(rename = "Oil Filter")]
    OilFilter,
    Speedometer,
    Footpegs,
    Grips,
    Levers,
    Cables,
    Fenders,
}

impl PartCategory {
    pub const ALL: [PartCategory; 30] = [
        PartCategory::Exhaust,
        PartCategory::Lights,
        PartCategory::Headlight,
        PartCategory::TailLight,
        PartCategory::TurnSignals,
        PartCategory::AirFilter,
        PartCategory::Brakes,
        PartCategory::BrakePads,
        PartCategory::DiscBrakes,
        PartCategory::Mirrors,
        PartCategory::Engine,
        PartCategory::Suspension,
        PartCategory::Tyres,
        PartCategory::Wheels,
        PartCategory::Handlebars,
        PartCategory::Seat,
        PartCategory::FuelTank,
        PartCategory::ChainAndSprockets,
        PartCategory::Clutch,
        PartCategory::Gearbox,
        PartCategory::Radiator,
        PartCategory::Battery,
        PartCategory::SparkPlugs,
        PartCategory::OilFilter,
        PartCategory::Speedometer,
        PartCategory::Footpegs,
        PartCategory::Grips,
        PartCategory::Levers,
        PartCategory::Cables,
        PartCategory::Fenders,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            PartCategory::Exhaust => "Exhaust",
            PartCategory::Lights => "Lights",
            PartCategory::Headlight => "Headlight",
            PartCategory::TailLight => "Tail Light",
            PartCategory::TurnSignals => "Turn Signals",
            PartCategory::AirFilter => "Air Filter",
            PartCategory::Brakes => "Brakes",
            PartCategory::BrakePads => "Brake Pads",
            PartCategory::DiscBrakes => "Disc Brakes",
            PartCategory::Mirrors => "Mirrors",
            PartCategory::Engine => "Engine",
            PartCategory::Suspension => "Suspension",
            PartCategory::Tyres => "Tyres",
            PartCategory::Wheels => "Wheels",
            PartCategory::Handlebars => "Handlebars",
            PartCategory::Seat => "Seat",
            PartCategory::FuelTank => "Fuel Tank",
            PartCategory::ChainAndSprockets => "Chain & Sprockets",
            PartCategory::Clutch => "Clutch",
            PartCategory::Gearbox => "Gearbox",
            PartCategory::Radiator => "Radiator",
            PartCategory::Battery => "Battery",
            PartCategory::SparkPlugs => "Spark Plugs",
            PartCategory::OilFilter => "Oil Filter",
            PartCategory::Speedometer => "Speedometer",
            PartCategory::Footpegs => "Footpegs",
            PartCategory::Grips => "Grips",
            PartCategory::Levers => "Levers",
            PartCategory::Cables => "Cables",
            PartCategory::Fenders => "Fenders",
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown part category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for PartCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartCategory::ALL
            .into_iter()
            .find(|c| c.display_name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Shifts applied to the derived performance numbers. An absent field has no
/// effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceModifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_boost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_reduction: Option<f64>,
    /// Signed: negative values cost fuel economy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_impact: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_boost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torque_boost: Option<f64>,
}

impl PerformanceModifiers {
    pub fn power_boost(&self) -> f64 {
        self.power_boost.unwrap_or(0.0)
    }

    pub fn weight_reduction(&self) -> f64 {
        self.weight_reduction.unwrap_or(0.0)
    }

    pub fn mileage_impact(&self) -> f64 {
        self.mileage_impact.unwrap_or(0.0)
    }

    pub fn speed_boost(&self) -> f64 {
        self.speed_boost.unwrap_or(0.0)
    }

    pub fn torque_boost(&self) -> f64 {
        self.torque_boost.unwrap_or(0.0)
    }
}

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub category: PartCategory,
    pub price: f64,
    pub weight: f64,
    /// Model names this part fits.
    #[serde(default)]
    pub compatible: Vec<String>,
    #[serde(flatten)]
    pub modifiers: PerformanceModifiers,
}

impl Part {
    pub fn fits(&self, model: &str) -> bool {
        self.compatible.iter().any(|m| m == model)
    }
}

pub type Vec3 = [f64; 3];

pub const IDENTITY_ROTATION: Vec3 = [0.0, 0.0, 0.0];
pub const IDENTITY_SCALE: Vec3 = [1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

impl Placement {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: None,
            scale: None,
        }
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation.unwrap_or(IDENTITY_ROTATION)
    }

    pub fn scale(&self) -> Vec3 {
        self.scale.unwrap_or(IDENTITY_SCALE)
    }
}

/// A catalog part currently mounted on the bike. Its identity is the part id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachedPart {
    #[serde(flatten)]
    pub part: Part,
    pub placement: Placement,
}

impl AttachedPart {
    pub fn new(part: Part, placement: Placement) -> Self {
        Self { part, placement }
    }

    pub fn id(&self) -> PartId {
        self.part.id
    }

    pub fn modifiers(&self) -> &PerformanceModifiers {
        &self.part.modifiers
    }
}

/// Stock figures for one model. Weight is not per-model; see [`BASE_WEIGHT_KG`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseSpecification {
    pub power: f64,
    pub torque: f64,
    pub mileage: f64,
    pub top_speed: f64,
}

impl BaseSpecification {
    pub fn weight(&self) -> f64 {
        BASE_WEIGHT_KG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip_through_from_str() {
        for category in PartCategory::ALL {
            assert_eq!(category.display_name().parse::<PartCategory>(), Ok(category));
        }
        assert!("exhaust".parse::<PartCategory>().is_err());
    }

    #[test]
    fn category_serializes_as_display_name() {
        let json = serde_json::to_string(&PartCategory::ChainAndSprockets).unwrap();
        assert_eq!(json, "\"Chain & Sprockets\"");
    }

    #[test]
    fn absent_modifiers_read_as_zero() {
        let modifiers = PerformanceModifiers {
            mileage_impact: Some(-4.0),
            ..Default::default()
        };
        assert_eq!(modifiers.power_boost(), 0.0);
        assert_eq!(modifiers.weight_reduction(), 0.0);
        assert_eq!(modifiers.mileage_impact(), -4.0);
    }

    #[test]
    fn placement_defaults_to_identity() {
        let placement = Placement::at([1.0, 2.0, 3.0]);
        assert_eq!(placement.rotation(), IDENTITY_ROTATION);
        assert_eq!(placement.scale(), IDENTITY_SCALE);
    }

    #[test]
    fn part_deserializes_with_flattened_modifiers() {
        let part: Part = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Slip-on Exhaust",
            "category": "Exhaust",
            "price": 18000.0,
            "weight": 2.5,
            "compatible": ["R15"],
            "power_boost": 1.5
        }))
        .unwrap();
        assert_eq!(part.id, PartId(7));
        assert_eq!(part.modifiers.power_boost, Some(1.5));
        assert_eq!(part.modifiers.torque_boost, None);
        assert!(part.fits("R15"));
        assert!(!part.fits("MT-15"));
    }
}
