use crate::domain::model::{PartCategory, Placement, Vec3, IDENTITY_ROTATION, IDENTITY_SCALE};

/// Where a freshly attached part sits on the bike model.
pub fn part_position(category: PartCategory) -> Vec3 {
    match category {
        PartCategory::Exhaust => [-0.8, 0.2, -0.7],
        PartCategory::Lights => [1.3, 0.8, 0.0],
        PartCategory::Mirrors => [0.8, 1.3, 0.4],
        PartCategory::AirFilter => [0.2, 0.7, 0.0],
        PartCategory::Brakes => [1.2, 0.0, 0.3],
        _ => [0.0, 1.2, 0.0],
    }
}

pub fn default_placement(category: PartCategory) -> Placement {
    Placement {
        position: part_position(category),
        rotation: Some(IDENTITY_ROTATION),
        scale: Some(IDENTITY_SCALE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_dedicated_positions() {
        assert_eq!(part_position(PartCategory::Exhaust), [-0.8, 0.2, -0.7]);
        assert_eq!(part_position(PartCategory::Brakes), [1.2, 0.0, 0.3]);
    }

    #[test]
    fn other_categories_share_fallback() {
        assert_eq!(part_position(PartCategory::Seat), [0.0, 1.2, 0.0]);
        assert_eq!(part_position(PartCategory::Headlight), [0.0, 1.2, 0.0]);
        assert_eq!(part_position(PartCategory::BrakePads), [0.0, 1.2, 0.0]);
    }
}
