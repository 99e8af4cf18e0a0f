//! Staff roster and manager console

use crate::kitchen::KitchenHandler;
use shared::error::{DiningError, DiningResult};
use shared::models::Staff;
use shared::order::OrderLine;
use std::io::{self, Write};

/// Staff members in insertion order
#[derive(Debug, Clone, Default)]
pub struct StaffRoster {
    members: Vec<Staff>,
}

impl StaffRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, staff: Staff) {
        self.members.push(staff);
    }

    pub fn members(&self) -> &[Staff] {
        &self.members
    }

    /// Give every recognized role its standing task
    ///
    /// Idempotent. Unrecognized roles keep whatever task they hold.
    pub fn assign_tasks(&mut self) {
        for staff in &mut self.members {
            if let Some(task) = staff.role.standing_task() {
                staff.assign_task(task);
            }
        }
    }

    /// First member holding a recognized role (Cook, Waiter or Sweeper)
    pub fn first_task_holder(&self) -> DiningResult<&Staff> {
        self.members
            .iter()
            .find(|s| s.role.is_recognized())
            .ok_or(DiningError::StaffNotFound)
    }
}

/// Manager console: task assignment and kitchen dispatch
#[derive(Debug, Clone)]
pub struct ManagerConsole {
    name: String,
    roster: StaffRoster,
}

impl ManagerConsole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: StaffRoster::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_staff(&mut self, staff: Staff) {
        self.roster.add(staff);
    }

    pub fn assign_tasks(&mut self) {
        self.roster.assign_tasks();
        tracing::debug!(staff = self.roster.members().len(), "Tasks assigned");
    }

    pub fn roster(&self) -> &StaffRoster {
        &self.roster
    }

    /// Forward one order to the kitchen
    pub fn assign_order_to_kitchen<W: Write>(
        &self,
        kitchen: &KitchenHandler,
        order: &OrderLine,
        out: &mut W,
    ) -> io::Result<()> {
        tracing::info!(
            manager = %self.name,
            item = order.item().name(),
            quantity = order.quantity(),
            "Order dispatched to kitchen"
        );
        writeln!(out, "Manager assigns order to kitchen.")?;
        kitchen.cook_order(order, out)
    }

    /// Write the roster with roles and current tasks
    pub fn display_staff<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Staff in the restaurant:")?;
        for staff in self.roster.members() {
            writeln!(out, "{}", staff)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{MenuItem, StaffRole, DEFAULT_TASK};

    fn manager() -> ManagerConsole {
        let mut manager = ManagerConsole::new("Mr. John");
        manager.add_staff(Staff::new("Alice", StaffRole::Cook));
        manager.add_staff(Staff::new("Bob", StaffRole::Waiter));
        manager.add_staff(Staff::new("Charlie", StaffRole::Sweeper));
        manager.add_staff(Staff::new("Dana", StaffRole::Other("Cashier".into())));
        manager
    }

    fn tasks(manager: &ManagerConsole) -> Vec<String> {
        manager
            .roster()
            .members()
            .iter()
            .map(|s| s.task().to_string())
            .collect()
    }

    #[test]
    fn tasks_follow_role() {
        let mut manager = manager();
        manager.assign_tasks();
        assert_eq!(
            tasks(&manager),
            vec![
                "Prepare food orders",
                "Serve tables to customers",
                "Clean tables and kitchen",
                DEFAULT_TASK,
            ]
        );
    }

    #[test]
    fn assign_tasks_is_idempotent() {
        let mut manager = manager();
        manager.assign_tasks();
        let first = tasks(&manager);
        manager.assign_tasks();
        assert_eq!(tasks(&manager), first);
    }

    #[test]
    fn first_task_holder_skips_unrecognized_roles() {
        let mut roster = StaffRoster::new();
        roster.add(Staff::new("Dana", StaffRole::Other("Cashier".into())));
        roster.add(Staff::new("Bob", StaffRole::Waiter));
        roster.add(Staff::new("Alice", StaffRole::Cook));
        roster.assign_tasks();

        let holder = roster.first_task_holder().unwrap();
        assert_eq!(holder.name, "Bob");
        assert_eq!(holder.task(), "Serve tables to customers");
    }

    #[test]
    fn first_task_holder_not_found() {
        let mut roster = StaffRoster::new();
        roster.add(Staff::new("Dana", StaffRole::Other("Cashier".into())));
        assert_eq!(
            roster.first_task_holder().unwrap_err(),
            DiningError::StaffNotFound
        );
    }

    #[test]
    fn display_keeps_insertion_order() {
        let mut manager = manager();
        manager.assign_tasks();
        let mut out = Vec::new();
        manager.display_staff(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Staff in the restaurant:");
        assert_eq!(
            lines[1],
            "Name: Alice | Role: Cook | Task: Prepare food orders"
        );
        assert_eq!(lines[4], "Name: Dana | Role: Cashier | Task: No task assigned");
    }

    #[test]
    fn dispatch_forwards_to_kitchen() {
        let coffee = MenuItem::beverage("Coffee", Decimal::new(4, 0)).unwrap();
        let line = OrderLine::new(coffee, 2).unwrap();
        let mut out = Vec::new();

        manager()
            .assign_order_to_kitchen(&KitchenHandler::new(), &line, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Manager assigns order to kitchen.\nKitchen is cooking 2 x Coffee\n"
        );
    }
}
