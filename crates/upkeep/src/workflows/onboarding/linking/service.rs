use std::sync::Arc;

use super::domain::{
    AcceptanceOutcome, AcceptanceReceipt, ExternalUserId, PropertyId, TenantProfile,
    TenantPropertyLink,
};
use super::repository::{LinkInsertion, LinkRepository, ProfileRepository, RepositoryError};
use crate::workflows::onboarding::invite::InviteReference;

/// Service sequencing profile resolution, duplicate detection, and link
/// insertion against the persistence collaborators.
pub struct InviteAcceptanceService<P, L> {
    profiles: Arc<P>,
    links: Arc<L>,
}

impl<P, L> InviteAcceptanceService<P, L>
where
    P: ProfileRepository + 'static,
    L: LinkRepository + 'static,
{
    pub fn new(profiles: Arc<P>, links: Arc<L>) -> Self {
        Self { profiles, links }
    }

    /// Accept an invite on behalf of the authenticated caller.
    ///
    /// A duplicate link is reported as `AlreadyLinked`, never as an error, so
    /// near-simultaneous acceptances of the same invite both conclude
    /// successfully while only one row materializes.
    pub fn accept(
        &self,
        caller: &ExternalUserId,
        invite: &InviteReference,
    ) -> Result<AcceptanceReceipt, InviteAcceptanceError> {
        let profile = self.resolve_profile(caller)?;
        let property_id = PropertyId::from(invite);

        // Cheap precheck only; the insert below settles races on its own.
        if matches!(
            self.links.has_active_link(&profile.id, &property_id),
            Ok(true)
        ) {
            return Ok(AcceptanceReceipt {
                outcome: AcceptanceOutcome::AlreadyLinked,
                tenant_id: profile.id,
                property_id,
            });
        }

        let link = TenantPropertyLink {
            tenant_id: profile.id.clone(),
            property_id: property_id.clone(),
            active: true,
        };

        let outcome = match self.links.insert(link) {
            Ok(LinkInsertion::Created) => AcceptanceOutcome::Created,
            Ok(LinkInsertion::AlreadyLinked) => AcceptanceOutcome::AlreadyLinked,
            Err(err) => return Err(InviteAcceptanceError::LinkPersistence(err)),
        };

        Ok(AcceptanceReceipt {
            outcome,
            tenant_id: profile.id,
            property_id,
        })
    }

    /// Look up the caller's profile, creating it on first contact. A failed
    /// lookup is treated like a missing row; the create settles it either way.
    fn resolve_profile(
        &self,
        caller: &ExternalUserId,
    ) -> Result<TenantProfile, InviteAcceptanceError> {
        if let Ok(Some(profile)) = self.profiles.find_by_external_id(caller) {
            return Ok(profile);
        }

        self.profiles
            .create(caller)
            .map_err(InviteAcceptanceError::ProfileUnavailable)
    }
}

/// Error raised by the acceptance workflow.
#[derive(Debug, thiserror::Error)]
pub enum InviteAcceptanceError {
    #[error("profile lookup and creation failed: {0}")]
    ProfileUnavailable(#[source] RepositoryError),
    #[error("link insertion failed: {0}")]
    LinkPersistence(#[source] RepositoryError),
}
