use serde::Serialize;

use crate::claim_type::ClaimType;

/// Static text and assets used to render a claim.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimUIAssets {
    /// Long form description of the claim creation process.
    pub description: &'static str,
    /// Short form display text of the claim.
    pub display: &'static str,
    /// Name of the icon component shown next to the claim.
    pub icon: &'static str,
    /// Route of the creation UI for the claim.
    pub route: &'static str,
    pub route_description: &'static str,
    /// How the claim is proven.
    pub proof: &'static str,
    pub title: &'static str,
    /// Category of the claim displayed to the user.
    #[serde(rename = "type")]
    pub category: &'static str,
}

pub const BASIC_DISPLAY: ClaimUIAssets = ClaimUIAssets {
    description: "This process is used to generate some basic profile information about yourself by filling in an alias, description, and logo for your profile.",
    display: "Basic Profile Information",
    icon: "PersonOutlined",
    route: "/basic-profile",
    route_description: "Basic Profile Information",
    proof: "Self-Attestation",
    title: "Basic Profile",
    category: "Basic Profile",
};

pub const TWITTER_DISPLAY: ClaimUIAssets = ClaimUIAssets {
    description: "This process is used to link your Twitter account to your Tezos account by signing a message using your private key, entering your Twitter handle, and finally, tweeting that message.",
    display: "Twitter Account Verification",
    icon: "TwitterIcon",
    route: "/twitter",
    route_description: "Twitter Account Information",
    proof: "Tweet",
    title: "Twitter Verification",
    category: "Social Media",
};

pub fn new_display(claim_type: ClaimType) -> &'static ClaimUIAssets {
    match claim_type {
        ClaimType::Basic => &BASIC_DISPLAY,
        ClaimType::Twitter => &TWITTER_DISPLAY,
    }
}
