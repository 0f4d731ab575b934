use serde::{Deserialize, Serialize};

use crate::workflows::onboarding::invite::InviteReference;

/// Identifier issued by the external identity provider for an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalUserId(pub String);

/// Identifier of an internal tenant profile row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

/// Identifier of a property row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl From<&InviteReference> for PropertyId {
    fn from(reference: &InviteReference) -> Self {
        Self(reference.0.clone())
    }
}

/// Internal user record keyed by the external identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub id: ProfileId,
    pub external_id: ExternalUserId,
}

/// Association granting a tenant access to a property's data.
///
/// The persistence layer enforces at most one active row per
/// (tenant, property) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantPropertyLink {
    pub tenant_id: ProfileId,
    pub property_id: PropertyId,
    pub active: bool,
}

/// How an acceptance attempt concluded. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceOutcome {
    Created,
    AlreadyLinked,
}

impl AcceptanceOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyLinked => "already_linked",
        }
    }
}

/// Result handed back to the caller after a successful acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptanceReceipt {
    pub outcome: AcceptanceOutcome,
    pub tenant_id: ProfileId,
    pub property_id: PropertyId,
}
