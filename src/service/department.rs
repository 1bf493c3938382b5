//! `/departments` command and department select handling.
//!
//! A new selection replaces the member's departments. The member's full role list
//! is written in a single edit: every department role is dropped and exactly the
//! selected ones are added, so the latest submission always wins.

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, EditMember,
    RoleId,
};

use crate::error::{command::CommandError, internal::InternalError, AppError};
use crate::model::command::CommandName;
use crate::model::department::{Department, DepartmentCatalog, MAX_DEPARTMENTS};
use crate::service::builder::{department, now_timestamp};
use crate::service::guard;
use crate::state::BotState;

const REASON_SELECTED: &str = "Department selection changed";

/// Outcome of one department selection.
#[derive(Debug, PartialEq, Eq)]
pub struct DepartmentChange<'a> {
    /// Departments the member held before selecting.
    pub previous: Vec<&'a Department>,
    /// Departments the member holds afterwards.
    pub selected: Vec<&'a Department>,
    /// The member's complete role list after the change.
    pub roles: Vec<RoleId>,
}

impl<'a> DepartmentChange<'a> {
    /// Resolves a select submission against the catalog.
    ///
    /// # Arguments
    /// - `catalog` - Configured departments
    /// - `held_roles` - The member's current roles
    /// - `values` - Select menu values (department role IDs)
    ///
    /// # Returns
    /// - `Ok(DepartmentChange)` - 1 to 3 known departments selected
    /// - `Err(AppError::InvalidSelection)` - No known department, or more than 3
    pub fn plan(
        catalog: &'a DepartmentCatalog,
        held_roles: &[RoleId],
        values: &[String],
    ) -> Result<Self, AppError> {
        let selected = catalog.resolve_values(values);

        if selected.is_empty() {
            return Err(AppError::InvalidSelection(format!(
                "none of {values:?} is a configured department"
            )));
        }
        if selected.len() > MAX_DEPARTMENTS {
            return Err(AppError::InvalidSelection(format!(
                "{} departments selected, at most {MAX_DEPARTMENTS} allowed",
                selected.len()
            )));
        }

        let mut roles: Vec<RoleId> = held_roles
            .iter()
            .copied()
            .filter(|role| !catalog.iter().any(|d| d.role_id == *role))
            .collect();
        roles.extend(selected.iter().map(|d| d.role_id));

        Ok(Self {
            previous: catalog.held_by(held_roles),
            selected,
            roles,
        })
    }
}

pub struct DepartmentService<'a> {
    ctx: &'a Context,
    state: &'a BotState,
}

impl<'a> DepartmentService<'a> {
    pub fn new(ctx: &'a Context, state: &'a BotState) -> Self {
        Self { ctx, state }
    }

    /// Runs `/departments`: gates on the member role and the 12-hour cooldown,
    /// then replies with the department select menu.
    ///
    /// # Returns
    /// - `Ok(())` - Select menu sent
    /// - `Err(AppError::CommandErr)` - Not a member, on cooldown, or not in a guild
    /// - `Err(AppError::DiscordErr)` - Response failed
    pub async fn prompt(&self, command: &CommandInteraction) -> Result<(), AppError> {
        let member = command.member.as_ref().ok_or(CommandError::NotInGuild)?;

        guard::check_command(
            &self.state.cooldowns,
            CommandName::Departments,
            command.user.id,
            &member.roles,
            self.state.config.roles.member,
        )
        .await?;

        let catalog = &self.state.config.departments;
        let response = CreateInteractionResponseMessage::new()
            .embed(department::selection_prompt_embed(
                catalog.max_selectable(),
                now_timestamp()?,
            ))
            .components(vec![department::department_select(catalog)])
            .ephemeral(true);

        command
            .create_response(&self.ctx.http, CreateInteractionResponse::Message(response))
            .await?;

        Ok(())
    }

    /// Replies to a gate failure of `/departments` with a friendly embed.
    ///
    /// # Returns
    /// - `Ok(true)` - A reply was sent
    /// - `Ok(false)` - The error has no friendly reply and should be propagated
    pub async fn reply_to_gate_error(
        &self,
        command: &CommandInteraction,
        error: &CommandError,
    ) -> Result<bool, AppError> {
        let Some(embed) = department::command_error_embed(error, now_timestamp()?) else {
            return Ok(false);
        };

        command
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .embed(embed)
                        .ephemeral(true),
                ),
            )
            .await?;

        Ok(true)
    }

    /// Applies a department select submission.
    pub async fn apply_selection(&self, interaction: &ComponentInteraction) -> Result<(), AppError> {
        let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
            return Err(InternalError::MalformedInteraction {
                custom_id: interaction.data.custom_id.clone(),
                what: "string select values",
            }
            .into());
        };
        let guild_id = interaction.guild_id.ok_or(CommandError::NotInGuild)?;
        let member = interaction
            .member
            .as_ref()
            .ok_or(CommandError::NotInGuild)?;
        let user_id = interaction.user.id;

        let change =
            DepartmentChange::plan(&self.state.config.departments, &member.roles, values)?;

        guild_id
            .edit_member(
                &self.ctx.http,
                user_id,
                EditMember::new()
                    .roles(change.roles.iter().copied())
                    .audit_log_reason(REASON_SELECTED),
            )
            .await?;

        interaction
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(department::enrolled_message(&change.selected))
                        .ephemeral(true),
                ),
            )
            .await?;

        let embed = department::department_audit_embed(
            &interaction.user,
            &change.previous,
            &change.selected,
            now_timestamp()?,
        );
        self.state
            .config
            .channels
            .member_info
            .send_message(&self.ctx.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}
