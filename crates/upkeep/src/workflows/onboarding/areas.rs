//! Deterministic expansion of declared room counts into concrete area plans.

use super::domain::{
    icon_for_tag, AreaType, PropertyArea, PropertyProfile, PropertyType, RoomCount,
};

/// Expand a property profile into the full onboarding area plan.
///
/// The plan always leads with the essential kitchen and living room, follows
/// with one area per declared bedroom and whole bathroom (plus a single half
/// bathroom when the count is fractional), and closes with the optional tail
/// for the property type.
pub fn generate_from_profile(profile: &PropertyProfile) -> Vec<PropertyArea> {
    let mut areas = vec![
        typed_area("kitchen", AreaType::Kitchen.label(), AreaType::Kitchen, true),
        typed_area(
            "living_room",
            AreaType::LivingRoom.label(),
            AreaType::LivingRoom,
            true,
        ),
    ];

    push_declared_rooms(&mut areas, profile);

    for (id, name, area_type) in optional_area_table(profile.property_type) {
        areas.push(typed_area(*id, *name, *area_type, false));
    }

    areas
}

/// Expand an explicit, caller-ordered room count request.
///
/// Unlike [`generate_from_profile`], no essential areas are injected; the
/// caller owns the full shape of the plan. Bedroom and bathroom counts from
/// `profile` are still honored when provided.
pub fn generate_from_counts(
    profile: Option<&PropertyProfile>,
    counts: &[RoomCount],
) -> Vec<PropertyArea> {
    let mut areas = Vec::new();

    if let Some(profile) = profile {
        push_declared_rooms(&mut areas, profile);
    }

    for entry in counts {
        let known = AreaType::from_tag(&entry.room_type);
        for index in 0..entry.count {
            let name = match known {
                Some(area_type) => area_type.label().to_string(),
                None if index == 0 => "Room".to_string(),
                None => format!("Room {}", index + 1),
            };
            areas.push(PropertyArea::new(
                format!("{}{}", entry.room_type, index + 1),
                name,
                known.unwrap_or(AreaType::Other),
                icon_for_tag(&entry.room_type),
                false,
            ));
        }
    }

    areas
}

fn typed_area(
    id: impl Into<String>,
    name: impl Into<String>,
    area_type: AreaType,
    is_default: bool,
) -> PropertyArea {
    PropertyArea::new(id, name, area_type, area_type.icon(), is_default)
}

/// Bedroom and bathroom expansion shared by both generator entry points.
fn push_declared_rooms(areas: &mut Vec<PropertyArea>, profile: &PropertyProfile) {
    push_counted_rooms(areas, AreaType::Bedroom, "bedroom", profile.bedrooms);

    let bathrooms = profile.bathrooms.max(0.0);
    push_counted_rooms(areas, AreaType::Bathroom, "bathroom", bathrooms.trunc() as u32);
    if bathrooms.fract() > 0.0 {
        areas.push(typed_area(
            "half-bathroom",
            "Half Bathroom",
            AreaType::Bathroom,
            true,
        ));
    }
}

fn push_counted_rooms(
    areas: &mut Vec<PropertyArea>,
    area_type: AreaType,
    id_stem: &str,
    count: u32,
) {
    for index in 0..count {
        areas.push(typed_area(
            format!("{id_stem}{}", index + 1),
            counted_room_name(area_type.label(), index, count),
            area_type,
            true,
        ));
    }
}

/// Singular / "Master" / ordinal naming shared by bedrooms and bathrooms.
fn counted_room_name(label: &str, index: u32, total: u32) -> String {
    if total == 1 {
        label.to_string()
    } else if index == 0 {
        format!("Master {label}")
    } else {
        format!("{label} {}", index + 1)
    }
}

fn optional_area_table(
    property_type: PropertyType,
) -> &'static [(&'static str, &'static str, AreaType)] {
    match property_type {
        PropertyType::Apartment | PropertyType::Condo => &[
            ("balcony", "Balcony/Patio", AreaType::Outdoor),
            ("laundry", "Laundry Room", AreaType::Laundry),
            ("storage", "Storage Closet", AreaType::Other),
        ],
        PropertyType::House | PropertyType::Other => &[
            ("garage", "Garage", AreaType::Garage),
            ("yard", "Yard", AreaType::Outdoor),
            ("basement", "Basement", AreaType::Other),
            ("laundry", "Laundry Room", AreaType::Laundry),
        ],
    }
}
