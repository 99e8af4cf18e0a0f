//! Restaurant state owned by one session

use crate::catalog::MenuCatalog;
use crate::kitchen::KitchenHandler;
use crate::payment::PaymentProcessor;
use crate::staff::ManagerConsole;
use crate::tables::TableRegistry;
use rust_decimal::Decimal;
use shared::error::DiningResult;
use shared::models::{DiningTable, MenuItem, Staff, StaffRole};

#[derive(Debug, Clone)]
pub struct Restaurant {
    pub catalog: MenuCatalog,
    pub tables: TableRegistry,
    pub manager: ManagerConsole,
    pub kitchen: KitchenHandler,
    pub payments: PaymentProcessor,
}

impl Restaurant {
    pub fn new(catalog: MenuCatalog, tables: TableRegistry, manager: ManagerConsole) -> Self {
        Self {
            catalog,
            tables,
            manager,
            kitchen: KitchenHandler::new(),
            payments: PaymentProcessor::new(),
        }
    }

    /// The house setup: three tables, five menu items, three staff
    /// members with tasks already assigned
    pub fn house(manager_name: &str) -> DiningResult<Self> {
        let catalog = MenuCatalog::new(vec![
            MenuItem::food("Pizza", Decimal::new(12, 0))?,
            MenuItem::food("Burger", Decimal::new(8, 0))?,
            MenuItem::food("Pasta", Decimal::new(10, 0))?,
            MenuItem::beverage("Coke", Decimal::new(3, 0))?,
            MenuItem::beverage("Coffee", Decimal::new(4, 0))?,
        ]);

        let tables = TableRegistry::new(vec![
            DiningTable::new(1, 4, Decimal::new(50, 0)),
            DiningTable::new(2, 6, Decimal::new(80, 0)),
            DiningTable::new(3, 2, Decimal::new(30, 0)),
        ])?;

        let mut manager = ManagerConsole::new(manager_name);
        manager.add_staff(Staff::new("Alice", StaffRole::Cook));
        manager.add_staff(Staff::new("Bob", StaffRole::Waiter));
        manager.add_staff(Staff::new("Charlie", StaffRole::Sweeper));
        manager.assign_tasks();

        Ok(Self::new(catalog, tables, manager))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_is_seeded() {
        let house = Restaurant::house("Mr. John").unwrap();
        assert_eq!(house.catalog.len(), 5);
        assert_eq!(house.tables.list().len(), 3);
        assert!(house.tables.list().iter().all(|t| !t.is_booked()));
        assert_eq!(house.manager.name(), "Mr. John");
        assert_eq!(
            house.manager.roster().members()[0].task(),
            "Prepare food orders"
        );
    }
}
