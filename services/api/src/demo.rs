use crate::infra::{parse_property_type, InMemoryLinkRepository, InMemoryProfileRepository};
use clap::Args;
use std::sync::Arc;
use upkeep::error::AppError;
use upkeep::workflows::onboarding::linking::{
    ExternalUserId, InviteAcceptanceService, PropertyId,
};
use upkeep::workflows::onboarding::{
    generate_from_profile, parse_invite_url, share_invite_url, PropertyArea, PropertyProfile,
    PropertyType,
};

#[derive(Args, Debug)]
pub(crate) struct AreaPlanArgs {
    /// Declared bedroom count
    #[arg(long, default_value_t = 2)]
    pub(crate) bedrooms: u32,
    /// Declared bathroom count; a fractional part adds a half bathroom
    #[arg(long, default_value_t = 1.5)]
    pub(crate) bathrooms: f64,
    /// Property type: house, apartment, condo, or other
    #[arg(long, value_parser = parse_property_type, default_value = "house")]
    pub(crate) property_type: PropertyType,
    /// Emit the plan as JSON instead of a human-readable listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Declared bedroom count for the demo property
    #[arg(long, default_value_t = 2)]
    pub(crate) bedrooms: u32,
    /// Declared bathroom count for the demo property
    #[arg(long, default_value_t = 1.5)]
    pub(crate) bathrooms: f64,
    /// Property type: house, apartment, condo, or other
    #[arg(long, value_parser = parse_property_type, default_value = "apartment")]
    pub(crate) property_type: PropertyType,
    /// Host used when composing the demo invite link
    #[arg(long, default_value = "upkeep.example")]
    pub(crate) invite_host: String,
    /// Skip the invite acceptance portion of the demo
    #[arg(long)]
    pub(crate) skip_invite: bool,
}

pub(crate) fn run_area_plan(args: AreaPlanArgs) -> Result<(), AppError> {
    let AreaPlanArgs {
        bedrooms,
        bathrooms,
        property_type,
        json,
    } = args;

    let profile = PropertyProfile {
        bedrooms,
        bathrooms,
        property_type,
    };
    let areas = generate_from_profile(&profile);

    if json {
        match serde_json::to_string_pretty(&areas) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("area plan unavailable: {err}"),
        }
        return Ok(());
    }

    render_area_plan(&profile, &areas);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        bedrooms,
        bathrooms,
        property_type,
        invite_host,
        skip_invite,
    } = args;

    println!("Property onboarding demo");
    let profile = PropertyProfile {
        bedrooms,
        bathrooms,
        property_type,
    };
    let areas = generate_from_profile(&profile);
    render_area_plan(&profile, &areas);

    if skip_invite {
        return Ok(());
    }

    println!("\nInvite acceptance demo");
    let property_id = PropertyId("prop-204".to_string());
    let link = share_invite_url(&invite_host, &property_id)?;
    println!("Shareable link: {link}");

    let reference = parse_invite_url(&link)?;
    let profiles = Arc::new(InMemoryProfileRepository::default());
    let links = Arc::new(InMemoryLinkRepository::default());
    let service = InviteAcceptanceService::new(profiles, links.clone());

    let caller = ExternalUserId("auth0|demo-tenant".to_string());
    for attempt in 1..=2 {
        match service.accept(&caller, &reference) {
            Ok(receipt) => println!(
                "- Attempt {attempt}: outcome {} (tenant {}, property {})",
                receipt.outcome.label(),
                receipt.tenant_id.0,
                receipt.property_id.0
            ),
            Err(err) => {
                println!("- Attempt {attempt}: acceptance unavailable: {err}");
                return Ok(());
            }
        }
    }

    println!("Persisted link rows: {}", links.links().len());
    Ok(())
}

fn render_area_plan(profile: &PropertyProfile, areas: &[PropertyArea]) {
    println!(
        "Profile: {} | {} bedrooms | {} bathrooms",
        profile.property_type.label(),
        profile.bedrooms,
        profile.bathrooms
    );
    println!("Generated areas ({})", areas.len());
    for area in areas {
        let marker = if area.is_default { "*" } else { " " };
        println!(
            "{marker} {} [{}] icon={} condition={}",
            area.name,
            area.area_type.tag(),
            area.icon,
            area.condition.label()
        );
    }
    println!("(* = pre-selected)");
}
