//! Tenant-property linking driven by accepted invites.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AcceptanceOutcome, AcceptanceReceipt, ExternalUserId, ProfileId, PropertyId, TenantProfile,
    TenantPropertyLink,
};
pub use repository::{LinkInsertion, LinkRepository, ProfileRepository, RepositoryError};
pub use router::invite_router;
pub use service::{InviteAcceptanceError, InviteAcceptanceService};
