//! Interactive session
//!
//! ```text
//! RoleSelect ─┬─ 1 ─> CustomerFlow ─┐
//!             ├─ 2 ─> ManagerFlow  ─┼─> Terminated
//!             ├─ 3 ─> StaffFlow    ─┤
//!             └─ * ─> "invalid" ────┘
//! ```
//!
//! Every branch ends the session; nothing returns to role selection.

mod console;
mod customer;

pub use console::{Console, parse_number};

use crate::core::{Config, FlowError, FlowResult};
use crate::restaurant::Restaurant;
use shared::error::DiningError;
use shared::models::StaffRole;
use std::io::{BufRead, Write};

/// Role picked at the start of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Manager,
    Staff,
}

impl Role {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Customer),
            2 => Some(Self::Manager),
            3 => Some(Self::Staff),
            _ => None,
        }
    }
}

/// Event planned with a table booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventKind {
    BirthdayParty,
    Anniversary,
    #[default]
    NoEvent,
}

impl EventKind {
    /// 1 and 2 pick an event, anything else means none
    pub fn from_choice(choice: Option<i64>) -> Self {
        match choice {
            Some(1) => Self::BirthdayParty,
            Some(2) => Self::Anniversary,
            _ => Self::NoEvent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BirthdayParty => "Birthday Party",
            Self::Anniversary => "Anniversary",
            Self::NoEvent => "No Event",
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The chosen role's flow ran to the end
    Completed(Role),
    /// Invalid role or table selection ended the session early
    Aborted(DiningError),
    /// Input reached EOF at a prompt
    InputClosed,
}

/// One run of the interactive flow
pub struct Session<R, W> {
    restaurant: Restaurant,
    console: Console<R, W>,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(restaurant: Restaurant, input: R, output: W, config: Config) -> Self {
        Self {
            restaurant,
            console: Console::new(input, output),
            config,
        }
    }

    /// Run the session to termination
    pub fn run(&mut self) -> FlowResult<SessionOutcome> {
        let outcome = match self.select_role() {
            Err(FlowError::InputClosed) => {
                tracing::info!("Input closed before the session finished");
                Ok(SessionOutcome::InputClosed)
            }
            other => other,
        };
        self.console.out().flush()?;
        outcome
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Consume the session, returning the restaurant state and the output sink
    pub fn into_parts(self) -> (Restaurant, W) {
        (self.restaurant, self.console.into_output())
    }

    fn select_role(&mut self) -> FlowResult<SessionOutcome> {
        self.console.say("Welcome to Our Restaurant")?;
        self.console.say("Select Role: 1-Customer, 2-Manager, 3-Staff")?;

        let choice = self.console.read_number()?;
        let Some(role) = choice.ok().and_then(Role::from_choice) else {
            self.console.say("Invalid role selection.")?;
            tracing::warn!("Invalid role selection");
            return Ok(SessionOutcome::Aborted(DiningError::selection(
                "Invalid role selection.",
            )));
        };

        tracing::info!(?role, "Role selected");
        match role {
            Role::Customer => self.customer_flow(),
            Role::Manager => self.manager_flow(),
            Role::Staff => self.staff_flow(),
        }
    }

    fn manager_flow(&mut self) -> FlowResult<SessionOutcome> {
        self.console.say("")?;
        self.console.say("Manager Dashboard:")?;
        self.console
            .say(format!("Manager: {}", self.restaurant.manager.name()))?;
        self.restaurant.manager.display_staff(self.console.out())?;
        Ok(SessionOutcome::Completed(Role::Manager))
    }

    /// The entered name is read but not matched: the first staff member
    /// with a recognized role answers. Cooks are addressed as
    /// "You are assigned task", everyone else as "Your assigned task".
    fn staff_flow(&mut self) -> FlowResult<SessionOutcome> {
        self.console.say("")?;
        self.console.say("Enter your name: ")?;
        let name = self.console.read_line()?;
        tracing::debug!(%name, "Staff lookup");

        match self.restaurant.manager.roster().first_task_holder() {
            Ok(staff) => {
                let lead = match staff.role {
                    StaffRole::Cook => "You are assigned task",
                    _ => "Your assigned task",
                };
                self.console.say(format!("{}: {}", lead, staff.task()))?;
            }
            Err(e) => self.console.say(e)?,
        }
        Ok(SessionOutcome::Completed(Role::Staff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_map_from_choices() {
        assert_eq!(Role::from_choice(1), Some(Role::Customer));
        assert_eq!(Role::from_choice(2), Some(Role::Manager));
        assert_eq!(Role::from_choice(3), Some(Role::Staff));
        assert_eq!(Role::from_choice(0), None);
        assert_eq!(Role::from_choice(4), None);
    }

    #[test]
    fn events_default_to_none() {
        assert_eq!(EventKind::from_choice(Some(1)), EventKind::BirthdayParty);
        assert_eq!(EventKind::from_choice(Some(2)), EventKind::Anniversary);
        assert_eq!(EventKind::from_choice(Some(3)), EventKind::NoEvent);
        assert_eq!(EventKind::from_choice(Some(7)), EventKind::NoEvent);
        assert_eq!(EventKind::from_choice(None), EventKind::NoEvent);
        assert_eq!(EventKind::default().label(), "No Event");
    }
}
