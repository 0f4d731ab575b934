use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use upkeep::workflows::onboarding::linking::{
    ExternalUserId, LinkInsertion, LinkRepository, ProfileId, ProfileRepository, PropertyId,
    RepositoryError, TenantProfile, TenantPropertyLink,
};
use upkeep::workflows::onboarding::PropertyType;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Profile store backing local serving and demos. Rows are keyed by the
/// external identity so repeated sign-ins resolve to the same profile.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    rows: Arc<Mutex<HashMap<ExternalUserId, TenantProfile>>>,
    sequence: Arc<AtomicU64>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> Result<Option<TenantProfile>, RepositoryError> {
        let guard = self.rows.lock().expect("profile mutex poisoned");
        Ok(guard.get(external_id).cloned())
    }

    fn create(&self, external_id: &ExternalUserId) -> Result<TenantProfile, RepositoryError> {
        let mut guard = self.rows.lock().expect("profile mutex poisoned");
        if let Some(existing) = guard.get(external_id) {
            return Ok(existing.clone());
        }
        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let profile = TenantProfile {
            id: ProfileId(format!("profile-{next:06}")),
            external_id: external_id.clone(),
        };
        guard.insert(external_id.clone(), profile.clone());
        Ok(profile)
    }
}

/// Link store enforcing the one-active-row-per-pair constraint the hosted
/// database expresses with a unique index.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLinkRepository {
    rows: Arc<Mutex<HashMap<(ProfileId, PropertyId), TenantPropertyLink>>>,
}

impl InMemoryLinkRepository {
    pub(crate) fn links(&self) -> Vec<TenantPropertyLink> {
        self.rows.lock().expect("link mutex poisoned").values().cloned().collect()
    }
}

impl LinkRepository for InMemoryLinkRepository {
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

pub(crate) fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "house" => Ok(PropertyType::House),
        "apartment" => Ok(PropertyType::Apartment),
        "condo" => Ok(PropertyType::Condo),
        "other" => Ok(PropertyType::Other),
        other => Err(format!(
            "unknown property type '{other}' (expected house, apartment, condo, or other)"
        )),
    }
}
