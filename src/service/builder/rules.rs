//! Server rules embeds.

use serenity::all::{CreateEmbed, Mentionable, RoleId};

use crate::config::{brand, colors};
use crate::service::builder::brand_author;

/// Thumbnail file for the community guidelines embed, relative to the assets dir.
pub const COMMUNITY_ICON: &str = "icon_community.png";
/// Thumbnail file for the moderation policy embed, relative to the assets dir.
pub const MODERATOR_ICON: &str = "icon_moderator.png";

/// URL referencing a file attached to the same message.
pub fn attachment_url(filename: &str) -> String {
    format!("attachment://{filename}")
}

/// Builds the three rules embeds in posting order.
///
/// # Arguments
/// - `moderator` - Role mentioned in the moderation policy
/// - `community_thumbnail` - Thumbnail URL for the guidelines embed, if available
/// - `moderator_thumbnail` - Thumbnail URL for the moderation embed, if available
pub fn rules_embeds(
    moderator: RoleId,
    community_thumbnail: Option<String>,
    moderator_thumbnail: Option<String>,
) -> Vec<CreateEmbed> {
    let rules = CreateEmbed::new()
        .title("Rules & Regulations")
        .description(
            "These rules have been put in place to ensure a safe environment for the CodeX \
             community, and encourage healthy discussions. Moderation actions are taken \
             on members accordingly.\n\n\
             **1.** Treat everyone with respect, and express yourself in a constructive manner.\n\
             **2.** Always follow the [Discord Terms of Service](https://dis.gd/terms) and \
             [Community Guidelines](https://dis.gd/guidelines).\n\
             **3.** Don't post NSFW/NSFL content, or content which is illegal or generally \
             unsuitable for a development-type server.\n\
             **4.** All channels have dedicated topics. Respect ongoing discussions in the \
             channel and remain on-topic.",
        )
        .color(colors::GREEN)
        .thumbnail(brand::ICON_URL)
        .author(brand_author());

    let mut community = CreateEmbed::new()
        .title("Community Guidelines")
        .description(
            "**1.** Don't spam messages or post emotes, which may cause issues for people \
             with epilepsy.\n\
             **2.** Discriminating or harassing other members is not allowed for any reason. \
             Do not send members of the community unsolicited DMs and/or friend requests.\n\
             **3.** Media considered as violent or threatening that could cause \
             discomfort (or worse) are prohibited.\n\
             **4.** Impersonation of staff members is not allowed, under any circumstance.",
        )
        .color(colors::GREEN);
    if let Some(url) = community_thumbnail {
        community = community.thumbnail(url);
    }

    let mut moderation = CreateEmbed::new()
        .title("Moderation Policy")
        .description(format!(
            "**1.** Please ping individual online staff members if there is an issue. Only ping \
             {} when the situation is extreme (raids, spam, etc.).\n\
             **2.** Staff members support this community in their own free time, when they can. \
             We cannot always respond right away, but will refer the user to another staff \
             member who is available to help.\n\
             **3.** Moderation actions may be taken at the discretion of the moderation team, \
             for both explicit rule violations and in cases where a user's behaviour violates \
             the spirit of the rules.",
            moderator.mention()
        ))
        .color(colors::GREEN);
    if let Some(url) = moderator_thumbnail {
        moderation = moderation.thumbnail(url);
    }

    vec![rules, community, moderation]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_three_green_embeds_in_order() {
        let embeds = rules_embeds(RoleId::new(55), None, None);
        let titles: Vec<String> = embeds
            .iter()
            .map(|e| serde_json::to_value(e).unwrap()["title"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(
            titles,
            vec!["Rules & Regulations", "Community Guidelines", "Moderation Policy"]
        );
        for embed in &embeds {
            assert_eq!(serde_json::to_value(embed).unwrap()["color"], colors::GREEN);
        }
    }

    #[test]
    fn moderation_policy_mentions_moderators() {
        let embeds = rules_embeds(RoleId::new(55), None, None);
        let json = serde_json::to_value(&embeds[2]).unwrap();
        assert!(json["description"].as_str().unwrap().contains("<@&55>"));
    }

    #[test]
    fn thumbnails_are_optional() {
        let embeds = rules_embeds(
            RoleId::new(55),
            Some(attachment_url(COMMUNITY_ICON)),
            None,
        );
        let community = serde_json::to_value(&embeds[1]).unwrap();
        let moderation = serde_json::to_value(&embeds[2]).unwrap();

        assert_eq!(community["thumbnail"]["url"], "attachment://icon_community.png");
        assert!(moderation["thumbnail"].is_null());
    }
}
