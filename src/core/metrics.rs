//! Derived performance numbers.
//!
//! Every calculator is a pure function of the attached parts and, where the
//! figure is per-model, a base value. Results are clamped to a floor instead of
//! going degenerate when modifiers pile up.

use crate::domain::model::{AttachedPart, PerformanceModifiers, BASE_PRICE, BASE_WEIGHT_KG};

pub const WEIGHT_FLOOR_KG: f64 = 100.0;
pub const MILEAGE_FLOOR: f64 = 10.0;
pub const TOP_SPEED_FLOOR: f64 = 50.0;
pub const TORQUE_FLOOR: f64 = 10.0;
pub const POWER_FLOOR: f64 = 10.0;

fn sum_modifier(parts: &[AttachedPart], field: fn(&PerformanceModifiers) -> f64) -> f64 {
    parts.iter().map(|p| field(p.modifiers())).sum()
}

pub fn total_weight(parts: &[AttachedPart]) -> f64 {
    let added: f64 = parts.iter().map(|p| p.part.weight).sum();
    let reduction = sum_modifier(parts, PerformanceModifiers::weight_reduction);
    (BASE_WEIGHT_KG + added - reduction).max(WEIGHT_FLOOR_KG)
}

pub fn total_price(parts: &[AttachedPart]) -> f64 {
    parts.iter().fold(BASE_PRICE, |total, p| total + p.part.price)
}

pub fn calculated_mileage(parts: &[AttachedPart], base_mileage: f64) -> f64 {
    (base_mileage + sum_modifier(parts, PerformanceModifiers::mileage_impact)).max(MILEAGE_FLOOR)
}

pub fn calculated_top_speed(parts: &[AttachedPart], base_speed: f64) -> f64 {
    (base_speed + sum_modifier(parts, PerformanceModifiers::speed_boost)).max(TOP_SPEED_FLOOR)
}

pub fn calculated_torque(parts: &[AttachedPart], base_torque: f64) -> f64 {
    (base_torque + sum_modifier(parts, PerformanceModifiers::torque_boost)).max(TORQUE_FLOOR)
}

pub fn calculated_power(parts: &[AttachedPart], base_power: f64) -> f64 {
    (base_power + sum_modifier(parts, PerformanceModifiers::power_boost)).max(POWER_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Part, PartCategory, PartId, Placement};

    fn attached(id: u32, weight: f64, modifiers: PerformanceModifiers) -> AttachedPart {
        AttachedPart::new(
            Part {
                id: PartId(id),
                name: format!("Part {}", id),
                category: PartCategory::Exhaust,
                price: 1000.0,
                weight,
                compatible: vec![],
                modifiers,
            },
            Placement::at([0.0, 0.0, 0.0]),
        )
    }

    #[test]
    fn empty_bike_reports_stock_figures() {
        assert_eq!(total_weight(&[]), 185.0);
        assert_eq!(total_price(&[]), 250_000.0);
        assert_eq!(calculated_power(&[], 15.0), 15.0);
        assert_eq!(calculated_mileage(&[], 45.0), 45.0);
    }

    #[test]
    fn weight_subtracts_reductions_and_clamps() {
        let light = attached(
            1,
            2.0,
            PerformanceModifiers {
                weight_reduction: Some(7.0),
                ..Default::default()
            },
        );
        assert_eq!(total_weight(std::slice::from_ref(&light)), 180.0);

        let absurd = attached(
            2,
            1.0,
            PerformanceModifiers {
                weight_reduction: Some(500.0),
                ..Default::default()
            },
        );
        assert_eq!(total_weight(&[light, absurd]), WEIGHT_FLOOR_KG);
    }

    #[test]
    fn negative_sums_clamp_to_each_floor() {
        let drag = attached(
            1,
            0.0,
            PerformanceModifiers {
                power_boost: Some(-1000.0),
                mileage_impact: Some(-1000.0),
                speed_boost: Some(-1000.0),
                torque_boost: Some(-1000.0),
                weight_reduction: None,
            },
        );
        let parts = [drag];
        assert_eq!(calculated_power(&parts, 20.0), POWER_FLOOR);
        assert_eq!(calculated_torque(&parts, 20.0), TORQUE_FLOOR);
        assert_eq!(calculated_mileage(&parts, 20.0), MILEAGE_FLOOR);
        assert_eq!(calculated_top_speed(&parts, 140.0), TOP_SPEED_FLOOR);
    }

    #[test]
    fn modifiers_add_across_parts() {
        let a = attached(
            1,
            0.0,
            PerformanceModifiers {
                speed_boost: Some(3.0),
                mileage_impact: Some(-2.0),
                ..Default::default()
            },
        );
        let b = attached(
            2,
            0.0,
            PerformanceModifiers {
                speed_boost: Some(4.0),
                mileage_impact: Some(1.0),
                ..Default::default()
            },
        );
        let parts = [a, b];
        assert_eq!(calculated_top_speed(&parts, 130.0), 137.0);
        assert_eq!(calculated_mileage(&parts, 40.0), 39.0);
        assert_eq!(total_price(&parts), 252_000.0);
    }
}
