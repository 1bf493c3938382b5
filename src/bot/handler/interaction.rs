//! Interaction dispatch for slash commands, message components and modals.
//!
//! Components and modals are matched by custom ID; anything the bot doesn't own is
//! ignored so other applications' components in the same guild are unaffected.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, Interaction, ModalInteraction,
};

use crate::error::AppError;
use crate::model::command::DEPARTMENTS_COMMAND;
use crate::model::registration::{ComponentId, REGISTRATION_MODAL_ID};
use crate::service::department::DepartmentService;
use crate::service::registration::RegistrationService;
use crate::state::BotState;

/// Handles the interaction_create event
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    let (kind, id, result) = match &interaction {
        Interaction::Command(command) => (
            "command",
            command.data.name.clone(),
            handle_command(state, &ctx, command).await,
        ),
        Interaction::Component(component) => (
            "component",
            component.data.custom_id.clone(),
            handle_component(state, &ctx, component).await,
        ),
        Interaction::Modal(modal) => (
            "modal",
            modal.data.custom_id.clone(),
            handle_modal(state, &ctx, modal).await,
        ),
        _ => return,
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle {} {}: {}", kind, id, e);
    }
}

async fn handle_command(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        DEPARTMENTS_COMMAND => {
            let service = DepartmentService::new(ctx, state);

            match service.prompt(command).await {
                Err(AppError::CommandErr(e)) => {
                    if service.reply_to_gate_error(command, &e).await? {
                        tracing::debug!("Rejected /{} from {}: {}", DEPARTMENTS_COMMAND, command.user.id, e);
                        Ok(())
                    } else {
                        Err(e.into())
                    }
                }
                result => result,
            }
        }
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    }
}

async fn handle_component(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(component_id) = ComponentId::parse(&component.data.custom_id) else {
        return Ok(());
    };

    match component_id {
        ComponentId::Panel(button) => {
            RegistrationService::new(ctx, state)
                .handle_button(component, button)
                .await?;
        }
        ComponentId::DepartmentSelect => {
            DepartmentService::new(ctx, state)
                .apply_selection(component)
                .await?;
        }
    }

    Ok(())
}

async fn handle_modal(
    state: &BotState,
    ctx: &Context,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    if modal.data.custom_id != REGISTRATION_MODAL_ID {
        return Ok(());
    }

    RegistrationService::new(ctx, state)
        .handle_submission(modal)
        .await
}
