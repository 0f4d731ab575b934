//! Shareable invite links carrying a property reference.

use serde::{Deserialize, Serialize};
use url::Url;

use super::linking::domain::PropertyId;

/// Query parameter naming the property inside an invite link.
pub const INVITE_PROPERTY_PARAM: &str = "property";

/// Opaque property reference extracted from an invite link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InviteReference(pub String);

/// Rejection reasons for invite links the app cannot act on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInvite {
    #[error("invite link is not a valid url")]
    MalformedUrl(#[from] url::ParseError),
    #[error("invite link does not name a property")]
    MissingReference,
}

/// Extract the property reference from an invite link.
///
/// Accepts any well-formed URL whose query carries a non-empty `property`
/// parameter; everything else about the link (host, path, extra parameters)
/// is ignored. Whether the reference denotes a real property is left to the
/// acceptance workflow.
pub fn parse_invite_url(raw: &str) -> Result<InviteReference, InvalidInvite> {
    let url = Url::parse(raw)?;
    url.query_pairs()
        .find_map(|(key, value)| (key == INVITE_PROPERTY_PARAM).then(|| value.into_owned()))
        .filter(|value| !value.is_empty())
        .map(InviteReference)
        .ok_or(InvalidInvite::MissingReference)
}

/// Compose the canonical shareable link for a property.
///
/// Inverse of [`parse_invite_url`]: the produced link always round-trips.
pub fn share_invite_url(host: &str, property_id: &PropertyId) -> Result<String, InvalidInvite> {
    let mut url = Url::parse(&format!("https://{host}/invite"))?;
    url.query_pairs_mut()
        .append_pair(INVITE_PROPERTY_PARAM, &property_id.0);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_property_reference() {
        let reference =
            parse_invite_url("https://upkeep.example/invite?property=abc123").expect("valid link");
        assert_eq!(reference, InviteReference("abc123".to_string()));
    }

    #[test]
    fn ignores_unrelated_query_parameters() {
        let reference =
            parse_invite_url("https://upkeep.example/invite?utm_source=sms&property=prop-9&lang=en")
                .expect("valid link");
        assert_eq!(reference.0, "prop-9");
    }

    #[test]
    fn decodes_percent_encoded_references() {
        let reference = parse_invite_url("https://upkeep.example/invite?property=prop%2F204")
            .expect("valid link");
        assert_eq!(reference.0, "prop/204");
    }

    #[test]
    fn missing_parameter_is_rejected() {
        assert_eq!(
            parse_invite_url("https://upkeep.example/invite"),
            Err(InvalidInvite::MissingReference)
        );
    }

    #[test]
    fn empty_parameter_is_rejected() {
        assert_eq!(
            parse_invite_url("https://upkeep.example/invite?property="),
            Err(InvalidInvite::MissingReference)
        );
    }

    #[test]
    fn malformed_link_is_rejected() {
        assert!(matches!(
            parse_invite_url("not a url"),
            Err(InvalidInvite::MalformedUrl(_))
        ));
    }

    #[test]
    fn parsing_is_repeatable() {
        let raw = "https://upkeep.example/invite?property=abc123";
        assert_eq!(parse_invite_url(raw), parse_invite_url(raw));
    }

    #[test]
    fn composed_links_round_trip() {
        let property_id = PropertyId("prop 204/a".to_string());
        let link = share_invite_url("upkeep.example", &property_id).expect("composable");
        let reference = parse_invite_url(&link).expect("round trip");
        assert_eq!(reference.0, property_id.0);
    }

    #[test]
    fn bad_share_host_is_rejected() {
        let property_id = PropertyId("prop-204".to_string());
        assert!(matches!(
            share_invite_url("not a host", &property_id),
            Err(InvalidInvite::MalformedUrl(_))
        ));
    }
}
