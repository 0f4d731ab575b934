use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::onboarding::linking::domain::{
    ExternalUserId, ProfileId, PropertyId, TenantProfile, TenantPropertyLink,
};
use crate::workflows::onboarding::linking::repository::{
    LinkInsertion, LinkRepository, ProfileRepository, RepositoryError,
};
use crate::workflows::onboarding::linking::InviteAcceptanceService;

pub(super) fn caller() -> ExternalUserId {
    ExternalUserId("auth0|tenant-17".to_string())
}

pub(super) fn build_service() -> (
    InviteAcceptanceService<MemoryProfiles, MemoryLinks>,
    Arc<MemoryProfiles>,
    Arc<MemoryLinks>,
) {
    let profiles = Arc::new(MemoryProfiles::default());
    let links = Arc::new(MemoryLinks::default());
    let service = InviteAcceptanceService::new(profiles.clone(), links.clone());
    (service, profiles, links)
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    rows: Arc<Mutex<HashMap<ExternalUserId, TenantProfile>>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryProfiles {
    pub(super) fn len(&self) -> usize {
        self.rows.lock().expect("profile mutex poisoned").len()
    }

    pub(super) fn seed(&self, profile: TenantProfile) {
        self.rows
            .lock()
            .expect("profile mutex poisoned")
            .insert(profile.external_id.clone(), profile);
    }
}

impl ProfileRepository for MemoryProfiles {
    fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> Result<Option<TenantProfile>, RepositoryError> {
        let guard = self.rows.lock().expect("profile mutex poisoned");
        Ok(guard.get(external_id).cloned())
    }

    fn create(&self, external_id: &ExternalUserId) -> Result<TenantProfile, RepositoryError> {
        let mut guard = self.rows.lock().expect("profile mutex poisoned");
        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let profile = TenantProfile {
            id: ProfileId(format!("profile-{next:04}")),
            external_id: external_id.clone(),
        };
        guard.insert(external_id.clone(), profile.clone());
        Ok(profile)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLinks {
    rows: Arc<Mutex<HashMap<(ProfileId, PropertyId), TenantPropertyLink>>>,
}

impl MemoryLinks {
    pub(super) fn len(&self) -> usize {
        self.rows.lock().expect("link mutex poisoned").len()
    }
}

impl LinkRepository for MemoryLinks {
    fn has_active_link(
        &self,
        tenant_id: &ProfileId,
        property_id: &PropertyId,
    ) -> Result<bool, RepositoryError> {
        let guard = self.rows.lock().expect("link mutex poisoned");
        Ok(guard
            .get(&(tenant_id.clone(), property_id.clone()))
            .is_some_and(|link| link.active))
    }

    fn insert(&self, link: TenantPropertyLink) -> Result<LinkInsertion, RepositoryError> {
        let key = (link.tenant_id.clone(), link.property_id.clone());
        let mut guard = self.rows.lock().expect("link mutex poisoned");
        if guard.contains_key(&key) {
            return Ok(LinkInsertion::AlreadyLinked);
        }
        guard.insert(key, link);
        Ok(LinkInsertion::Created)
    }
}

/// Link store whose precheck never sees existing rows, forcing the insert
/// path to settle duplicates the way the uniqueness constraint would.
#[derive(Default, Clone)]
pub(super) struct BlindLinks {
    pub(super) inner: MemoryLinks,
}

impl LinkRepository for BlindLinks {
    fn has_active_link(
        &self,
        _tenant_id: &ProfileId,
        _property_id: &PropertyId,
    ) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn insert(&self, link: TenantPropertyLink) -> Result<LinkInsertion, RepositoryError> {
        self.inner.insert(link)
    }
}

pub(super) struct UnavailableProfiles;

impl ProfileRepository for UnavailableProfiles {
    fn find_by_external_id(
        &self,
        _external_id: &ExternalUserId,
    ) -> Result<Option<TenantProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn create(&self, _external_id: &ExternalUserId) -> Result<TenantProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Profile store whose lookups always fail while creation still works.
#[derive(Default, Clone)]
pub(super) struct FlakyProfiles {
    pub(super) inner: MemoryProfiles,
}

impl ProfileRepository for FlakyProfiles {
    fn find_by_external_id(
        &self,
        _external_id: &ExternalUserId,
    ) -> Result<Option<TenantProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("read replica down".to_string()))
    }

    fn create(&self, external_id: &ExternalUserId) -> Result<TenantProfile, RepositoryError> {
        self.inner.create(external_id)
    }
}

pub(super) struct UnavailableLinks;

impl LinkRepository for UnavailableLinks {
    fn has_active_link(
        &self,
        _tenant_id: &ProfileId,
        _property_id: &PropertyId,
    ) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _link: TenantPropertyLink) -> Result<LinkInsertion, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Link store that rejects every write, standing in for constraint failures
/// other than the duplicate key (e.g. a dangling property reference).
pub(super) struct RejectingLinks;

impl LinkRepository for RejectingLinks {
    fn has_active_link(
        &self,
        _tenant_id: &ProfileId,
        _property_id: &PropertyId,
    ) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn insert(&self, _link: TenantPropertyLink) -> Result<LinkInsertion, RepositoryError> {
        Err(RepositoryError::Rejected(
            "property reference does not exist".to_string(),
        ))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
