use serde::{Deserialize, Serialize};

/// Zone categories tracked for inventory and condition reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaType {
    Kitchen,
    LivingRoom,
    Bedroom,
    Bathroom,
    Garage,
    Outdoor,
    Laundry,
    Other,
}

impl AreaType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::LivingRoom => "Living Room",
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Garage => "Garage",
            Self::Outdoor => "Outdoor",
            Self::Laundry => "Laundry",
            Self::Other => "Other",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Kitchen => "restaurant",
            Self::LivingRoom => "tv",
            Self::Bedroom => "bed",
            Self::Bathroom => "water",
            Self::Garage => "car",
            Self::Outdoor => "leaf",
            Self::Laundry => "shirt",
            Self::Other => "cube",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::LivingRoom => "living_room",
            Self::Bedroom => "bedroom",
            Self::Bathroom => "bathroom",
            Self::Garage => "garage",
            Self::Outdoor => "outdoor",
            Self::Laundry => "laundry",
            Self::Other => "other",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "kitchen" => Some(Self::Kitchen),
            "living_room" => Some(Self::LivingRoom),
            "bedroom" => Some(Self::Bedroom),
            "bathroom" => Some(Self::Bathroom),
            "garage" => Some(Self::Garage),
            "outdoor" => Some(Self::Outdoor),
            "laundry" => Some(Self::Laundry),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Display label for an arbitrary room tag, falling back for unrecognized tags.
pub fn label_for_tag(tag: &str) -> &'static str {
    AreaType::from_tag(tag).map_or("Other", AreaType::label)
}

/// Icon tag for an arbitrary room tag, falling back for unrecognized tags.
pub fn icon_for_tag(tag: &str) -> &'static str {
    AreaType::from_tag(tag).map_or("home", AreaType::icon)
}

/// Recorded state of an area, refined later by inspections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl AreaCondition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Dwelling categories that shape the optional-area tail of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Other,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Condo => "Condo",
            Self::Other => "Other",
        }
    }
}

/// Declared room counts captured while onboarding a property.
///
/// A fractional bathroom count signals a half bath; only the fractional
/// presence matters, not its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub property_type: PropertyType,
}

/// One entry of a caller-ordered custom room request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCount {
    pub room_type: String,
    pub count: u32,
}

/// One physical room or zone of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyArea {
    pub id: String,
    pub name: String,
    pub area_type: AreaType,
    pub icon: String,
    pub is_default: bool,
    pub condition: AreaCondition,
    pub photos: Vec<String>,
    pub inventory_complete: bool,
    pub assets: Vec<serde_json::Value>,
}

impl PropertyArea {
    /// Fresh area record as produced during onboarding: nothing photographed,
    /// nothing inventoried, condition assumed good.
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        area_type: AreaType,
        icon: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            area_type,
            icon: icon.into(),
            is_default,
            condition: AreaCondition::Good,
            photos: Vec::new(),
            inventory_complete: false,
            assets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [AreaType; 8] = [
        AreaType::Kitchen,
        AreaType::LivingRoom,
        AreaType::Bedroom,
        AreaType::Bathroom,
        AreaType::Garage,
        AreaType::Outdoor,
        AreaType::Laundry,
        AreaType::Other,
    ];

    #[test]
    fn tags_round_trip_through_parsing() {
        for area_type in ALL_TYPES {
            assert_eq!(AreaType::from_tag(area_type.tag()), Some(area_type));
        }
    }

    #[test]
    fn tag_lookups_cover_known_types() {
        assert_eq!(label_for_tag("living_room"), "Living Room");
        assert_eq!(icon_for_tag("bathroom"), "water");
    }

    #[test]
    fn unknown_tags_use_fallbacks() {
        assert_eq!(AreaType::from_tag("wine_cellar"), None);
        assert_eq!(label_for_tag("wine_cellar"), "Other");
        assert_eq!(icon_for_tag("wine_cellar"), "home");
    }

    #[test]
    fn condition_defaults_to_good() {
        assert_eq!(AreaCondition::default(), AreaCondition::Good);
    }
}
