//! Property onboarding workflows: area planning and tenant invite acceptance.

pub mod areas;
pub mod domain;
pub mod invite;
pub mod linking;

pub use areas::{generate_from_counts, generate_from_profile};
pub use domain::{
    icon_for_tag, label_for_tag, AreaCondition, AreaType, PropertyArea, PropertyProfile,
    PropertyType, RoomCount,
};
pub use invite::{parse_invite_url, share_invite_url, InvalidInvite, InviteReference};
