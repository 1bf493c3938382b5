//! Registration panel buttons and modal submissions.
//!
//! Button presses are resolved through `ButtonOutcome::resolve`, then the outcome's
//! role change and reply are carried out here. When a guest presses Register the
//! modal is sent first and the guest role is removed afterwards.

use serenity::all::{
    ActionRowComponent, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, GuildId, ModalInteraction, RoleId, UserId,
};

use crate::error::{command::CommandError, AppError};
use crate::model::registration::{ButtonOutcome, MemberState, PanelButton, RegistrationSubmission};
use crate::service::builder::{now_timestamp, registration};
use crate::state::BotState;

const REASON_REGISTERED: &str = "Member registered";
const REASON_GUEST_JOINED: &str = "Joined as guest";
const REASON_GUEST_LEFT: &str = "Left guest role";

pub struct RegistrationService<'a> {
    ctx: &'a Context,
    state: &'a BotState,
}

impl<'a> RegistrationService<'a> {
    pub fn new(ctx: &'a Context, state: &'a BotState) -> Self {
        Self { ctx, state }
    }

    /// Handles a press of one of the registration panel buttons.
    ///
    /// # Returns
    /// - `Ok(ButtonOutcome)` - The transition that was carried out
    /// - `Err(AppError::CommandErr(NotInGuild))` - Pressed outside a guild
    /// - `Err(AppError::DiscordErr)` - Role change or response failed
    pub async fn handle_button(
        &self,
        interaction: &ComponentInteraction,
        button: PanelButton,
    ) -> Result<ButtonOutcome, AppError> {
        let guild_id = interaction.guild_id.ok_or(CommandError::NotInGuild)?;
        let member = interaction
            .member
            .as_ref()
            .ok_or(CommandError::NotInGuild)?;
        let user_id = interaction.user.id;
        let roles = &self.state.config.roles;

        let member_state = MemberState::from_roles(
            &member.roles,
            roles.guest,
            roles.member,
            &self.state.config.departments,
        );
        let outcome =
            ButtonOutcome::resolve(member_state, button, self.state.registration_open());

        tracing::debug!(
            "Panel button {:?} by {} in state {:?} -> {:?}",
            button,
            user_id,
            member_state,
            outcome
        );

        match outcome {
            ButtonOutcome::AlreadyRegistered => {
                self.reply(interaction, registration::ALREADY_REGISTERED)
                    .await?
            }
            ButtonOutcome::RegistrationClosed => {
                self.reply(interaction, registration::REGISTRATION_CLOSED)
                    .await?
            }
            ButtonOutcome::OpenModal { strip_guest } => {
                interaction
                    .create_response(
                        &self.ctx.http,
                        CreateInteractionResponse::Modal(registration::registration_modal()),
                    )
                    .await?;

                if strip_guest {
                    self.remove_role(guild_id, user_id, roles.guest, REASON_GUEST_LEFT)
                        .await?;
                }
            }
            ButtonOutcome::GuestAdded => {
                self.ctx
                    .http
                    .add_member_role(guild_id, user_id, roles.guest, Some(REASON_GUEST_JOINED))
                    .await?;
                self.reply(interaction, registration::GUEST_ADDED).await?;
            }
            ButtonOutcome::GuestRemoved => {
                self.remove_role(guild_id, user_id, roles.guest, REASON_GUEST_LEFT)
                    .await?;
                self.reply(interaction, registration::GUEST_REMOVED).await?;
            }
        }

        Ok(outcome)
    }

    /// Handles a submitted registration modal.
    ///
    /// Always grants the member role, even on resubmission, and posts an audit
    /// embed of the submitted values to the member-info channel.
    pub async fn handle_submission(&self, interaction: &ModalInteraction) -> Result<(), AppError> {
        let guild_id = interaction.guild_id.ok_or(CommandError::NotInGuild)?;

        self.ctx
            .http
            .add_member_role(
                guild_id,
                interaction.user.id,
                self.state.config.roles.member,
                Some(REASON_REGISTERED),
            )
            .await?;

        interaction
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(registration::REGISTERED)
                        .ephemeral(true),
                ),
            )
            .await?;

        let submission = submission_from_modal(interaction);
        let embed =
            registration::registration_audit_embed(&interaction.user, &submission, now_timestamp()?);

        self.state
            .config
            .channels
            .member_info
            .send_message(&self.ctx.http, CreateMessage::new().embed(embed))
            .await?;

        tracing::info!(
            "Registered {} ({}) in guild {}",
            interaction.user.name,
            interaction.user.id,
            guild_id
        );

        Ok(())
    }

    async fn reply(&self, interaction: &ComponentInteraction, content: &str) -> Result<(), AppError> {
        interaction
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(content)
                        .ephemeral(true),
                ),
            )
            .await?;

        Ok(())
    }

    async fn remove_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), AppError> {
        self.ctx
            .http
            .remove_member_role(guild_id, user_id, role_id, Some(reason))
            .await?;

        Ok(())
    }
}

/// Collects every text input of the modal in the order they were shown.
fn submission_from_modal(interaction: &ModalInteraction) -> RegistrationSubmission {
    let inputs = interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => {
                Some((input.custom_id.clone(), input.value.clone()))
            }
            _ => None,
        });

    RegistrationSubmission::from_inputs(inputs)
}
