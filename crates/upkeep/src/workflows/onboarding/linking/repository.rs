use super::domain::{ExternalUserId, ProfileId, PropertyId, TenantProfile, TenantPropertyLink};

/// Storage abstraction over the hosted profile table so the acceptance
/// workflow can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> Result<Option<TenantProfile>, RepositoryError>;
    fn create(&self, external_id: &ExternalUserId) -> Result<TenantProfile, RepositoryError>;
}

/// Storage abstraction over tenant-property link rows.
pub trait LinkRepository: Send + Sync {
    fn has_active_link(
        &self,
        tenant_id: &ProfileId,
        property_id: &PropertyId,
    ) -> Result<bool, RepositoryError>;
    fn insert(&self, link: TenantPropertyLink) -> Result<LinkInsertion, RepositoryError>;
}

/// Outcome of a link insertion attempt.
///
/// Adapters translate their backend's duplicate-key signal into
/// `AlreadyLinked` so callers never branch on error codes. Concurrent inserts
/// for the same pair therefore both succeed, with a single row materializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkInsertion {
    Created,
    AlreadyLinked,
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("write rejected: {0}")]
    Rejected(String),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
