//! Registration state machine and form definitions.
//!
//! A member's registration state is never stored; it is derived from the roles
//! they hold each time they press a panel button.

use serenity::all::RoleId;

use crate::model::department::DepartmentCatalog;

/// Custom ID of the "Register" panel button.
pub const REGISTER_BUTTON_ID: &str = "reg_button";
/// Custom ID of the "Join as Guest" panel button.
pub const GUEST_BUTTON_ID: &str = "reg_guest";
/// Custom ID of the registration modal.
pub const REGISTRATION_MODAL_ID: &str = "reg_modal";
/// Custom ID of the department select menu.
pub const DEPARTMENT_SELECT_ID: &str = "reg_dept_select";

/// Registration progress derived from a member's roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberState {
    Unregistered,
    Guest,
    Member,
    MemberWithDepartments,
}

impl MemberState {
    /// Derives the state from a member's role list.
    ///
    /// The member role wins over the guest role if both are somehow held.
    pub fn from_roles(
        roles: &[RoleId],
        guest_role: RoleId,
        member_role: RoleId,
        departments: &DepartmentCatalog,
    ) -> Self {
        if roles.contains(&member_role) {
            if departments.held_by(roles).is_empty() {
                Self::Member
            } else {
                Self::MemberWithDepartments
            }
        } else if roles.contains(&guest_role) {
            Self::Guest
        } else {
            Self::Unregistered
        }
    }
}

/// Buttons on the registration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    Register,
    JoinAsGuest,
}

/// Message components the bot listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentId {
    Panel(PanelButton),
    DepartmentSelect,
}

impl ComponentId {
    pub fn parse(custom_id: &str) -> Option<Self> {
        match custom_id {
            REGISTER_BUTTON_ID => Some(Self::Panel(PanelButton::Register)),
            GUEST_BUTTON_ID => Some(Self::Panel(PanelButton::JoinAsGuest)),
            DEPARTMENT_SELECT_ID => Some(Self::DepartmentSelect),
            _ => None,
        }
    }
}

/// What pressing a panel button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonOutcome {
    /// Member already registered; reply with a notice only.
    AlreadyRegistered,
    /// Registrations are closed; reply with a notice only.
    RegistrationClosed,
    /// Show the registration modal, then drop the guest role if `strip_guest`.
    OpenModal { strip_guest: bool },
    /// Grant the guest role.
    GuestAdded,
    /// Revoke the guest role.
    GuestRemoved,
}

impl ButtonOutcome {
    /// Transition table for the registration panel.
    pub fn resolve(state: MemberState, button: PanelButton, registration_open: bool) -> Self {
        match (state, button) {
            (MemberState::Member | MemberState::MemberWithDepartments, _) => {
                Self::AlreadyRegistered
            }
            (_, PanelButton::Register) if !registration_open => Self::RegistrationClosed,
            (MemberState::Unregistered, PanelButton::Register) => {
                Self::OpenModal { strip_guest: false }
            }
            (MemberState::Guest, PanelButton::Register) => Self::OpenModal { strip_guest: true },
            (MemberState::Unregistered, PanelButton::JoinAsGuest) => Self::GuestAdded,
            (MemberState::Guest, PanelButton::JoinAsGuest) => Self::GuestRemoved,
        }
    }

    /// Role list after this outcome's role mutations are applied.
    #[cfg(test)]
    pub fn apply(&self, roles: &[RoleId], guest_role: RoleId) -> Vec<RoleId> {
        let mut roles = roles.to_vec();
        match self {
            Self::GuestAdded => roles.push(guest_role),
            Self::GuestRemoved | Self::OpenModal { strip_guest: true } => {
                roles.retain(|r| *r != guest_role)
            }
            _ => {}
        }
        roles
    }
}

/// One text input on the registration modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationField {
    /// Input custom ID.
    pub custom_id: &'static str,
    /// Field name used in the audit embed.
    pub name: &'static str,
    /// Label shown above the input.
    pub label: &'static str,
    pub placeholder: &'static str,
    pub max_length: u16,
}

/// Inputs of the registration modal, in display order.
pub const REGISTRATION_FIELDS: [RegistrationField; 4] = [
    RegistrationField {
        custom_id: "full_name",
        name: "Full Name",
        label: "Full Name",
        placeholder: "The Great Rochak Saini",
        max_length: 50,
    },
    RegistrationField {
        custom_id: "registration_number",
        name: "Registration Number",
        label: "Registration Number (Starts with 22...)",
        placeholder: "1234567890",
        max_length: 12,
    },
    RegistrationField {
        custom_id: "email",
        name: "Learner's Email Address",
        label: "Learner's Email Address",
        placeholder: "butternaan@learner.manipal.edu",
        max_length: 50,
    },
    RegistrationField {
        custom_id: "phone",
        name: "Phone Number",
        label: "Phone Number (For logging purposes)",
        placeholder: "1234567890",
        max_length: 10,
    },
];

/// Values submitted through the registration modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSubmission {
    /// `(field name, value)` pairs in the order they were submitted.
    pub entries: Vec<(String, String)>,
}

impl RegistrationSubmission {
    /// Builds a submission from `(custom_id, value)` pairs.
    ///
    /// Known inputs are renamed to their audit field name; unknown ones keep their
    /// custom ID. Missing values become an empty string.
    pub fn from_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        let entries = inputs
            .into_iter()
            .map(|(custom_id, value)| {
                let name = REGISTRATION_FIELDS
                    .iter()
                    .find(|f| f.custom_id == custom_id)
                    .map(|f| f.name.to_string())
                    .unwrap_or(custom_id);
                (name, value.unwrap_or_default())
            })
            .collect();

        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::department::Department;

    const GUEST: RoleId = RoleId::new(1);
    const MEMBER: RoleId = RoleId::new(2);
    const DEPT: RoleId = RoleId::new(3);

    fn catalog() -> DepartmentCatalog {
        DepartmentCatalog::new(vec![Department {
            code: "cxsd".to_string(),
            role_id: DEPT,
            label: "CXSD - Software Development".to_string(),
            emoji: "\u{1F4BB}".to_string(),
        }])
    }

    fn state(roles: &[RoleId]) -> MemberState {
        MemberState::from_roles(roles, GUEST, MEMBER, &catalog())
    }

    #[test]
    fn derives_state_from_roles() {
        assert_eq!(state(&[]), MemberState::Unregistered);
        assert_eq!(state(&[GUEST]), MemberState::Guest);
        assert_eq!(state(&[MEMBER]), MemberState::Member);
        assert_eq!(state(&[MEMBER, DEPT]), MemberState::MemberWithDepartments);
        assert_eq!(state(&[GUEST, MEMBER]), MemberState::Member);
    }

    /// Non-members pressing Register always get the modal.
    #[test]
    fn register_opens_modal_for_non_members() {
        assert_eq!(
            ButtonOutcome::resolve(MemberState::Unregistered, PanelButton::Register, true),
            ButtonOutcome::OpenModal { strip_guest: false }
        );
        assert_eq!(
            ButtonOutcome::resolve(MemberState::Guest, PanelButton::Register, true),
            ButtonOutcome::OpenModal { strip_guest: true }
        );
    }

    #[test]
    fn members_are_told_they_are_registered() {
        for member_state in [MemberState::Member, MemberState::MemberWithDepartments] {
            for button in [PanelButton::Register, PanelButton::JoinAsGuest] {
                for open in [true, false] {
                    assert_eq!(
                        ButtonOutcome::resolve(member_state, button, open),
                        ButtonOutcome::AlreadyRegistered
                    );
                }
            }
        }
    }

    #[test]
    fn closed_registration_still_allows_guests() {
        assert_eq!(
            ButtonOutcome::resolve(MemberState::Unregistered, PanelButton::Register, false),
            ButtonOutcome::RegistrationClosed
        );
        assert_eq!(
            ButtonOutcome::resolve(MemberState::Unregistered, PanelButton::JoinAsGuest, false),
            ButtonOutcome::GuestAdded
        );
    }

    /// Pressing "Join as Guest" twice restores the original roles.
    #[test]
    fn guest_toggle_is_an_involution() {
        for start in [vec![], vec![GUEST], vec![MEMBER], vec![MEMBER, DEPT]] {
            let mut roles = start.clone();
            for _ in 0..2 {
                let outcome = ButtonOutcome::resolve(state(&roles), PanelButton::JoinAsGuest, true);
                roles = outcome.apply(&roles, GUEST);
            }
            assert_eq!(roles, start);
        }
    }

    #[test]
    fn parses_component_ids() {
        assert_eq!(
            ComponentId::parse("reg_button"),
            Some(ComponentId::Panel(PanelButton::Register))
        );
        assert_eq!(
            ComponentId::parse("reg_guest"),
            Some(ComponentId::Panel(PanelButton::JoinAsGuest))
        );
        assert_eq!(
            ComponentId::parse("reg_dept_select"),
            Some(ComponentId::DepartmentSelect)
        );
        assert_eq!(ComponentId::parse("something_else"), None);
    }

    #[test]
    fn submission_uses_audit_names() {
        let submission = RegistrationSubmission::from_inputs(vec![
            ("full_name".to_string(), Some("A".to_string())),
            ("registration_number".to_string(), Some("123".to_string())),
            ("email".to_string(), Some("a@b.edu".to_string())),
            ("phone".to_string(), None),
            ("extra".to_string(), Some("x".to_string())),
        ]);

        assert_eq!(
            submission.entries,
            vec![
                ("Full Name".to_string(), "A".to_string()),
                ("Registration Number".to_string(), "123".to_string()),
                ("Learner's Email Address".to_string(), "a@b.edu".to_string()),
                ("Phone Number".to_string(), String::new()),
                ("extra".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn field_caps_match_form_limits() {
        let caps: Vec<u16> = REGISTRATION_FIELDS.iter().map(|f| f.max_length).collect();
        assert_eq!(caps, vec![50, 12, 50, 10]);
    }
}
