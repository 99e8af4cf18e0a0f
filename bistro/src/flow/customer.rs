//! Customer flow
//!
//! Linear: book a table, plan an event, order, dispatch to the kitchen,
//! bill, pay. A bad table choice ends the session; bad order attempts are
//! reported and skipped; a rejected payment is reported and nothing is
//! rolled back.

use super::{EventKind, Role, Session, SessionOutcome};
use crate::audit_log;
use crate::core::FlowResult;
use crate::orders::OrderLedger;
use shared::error::DiningResult;
use shared::order::Bill;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn customer_flow(&mut self) -> FlowResult<SessionOutcome> {
        let table_number = match self.book_table()? {
            Ok(number) => number,
            Err(e) => {
                self.console
                    .say(format!("Invalid or already booked table. {}.", e))?;
                tracing::warn!(code = %e.code(), error = %e, "Table booking failed");
                return Ok(SessionOutcome::Aborted(e));
            }
        };

        let event = self.plan_event()?;

        self.console.say("")?;
        self.console.say("Menu:")?;
        self.restaurant.catalog.display(self.console.out())?;

        let ledger = self.collect_orders()?;
        self.dispatch_orders(&ledger)?;
        let bill = self.print_bill(&ledger, table_number)?;
        self.take_payment(&bill)?;

        self.console.say(format!(
            "Enjoy your {} at Table {}!",
            event.label(),
            table_number
        ))?;
        self.console
            .say("You can go to rear view of restaurant and click photos!")?;

        Ok(SessionOutcome::Completed(Role::Customer))
    }

    fn book_table(&mut self) -> FlowResult<DiningResult<i64>> {
        self.console.say("")?;
        self.console.say("Available Tables:")?;
        self.restaurant.tables.display(self.console.out())?;

        let number = match self.console.prompt_number("Select table number to book: ")? {
            Ok(number) => number,
            Err(e) => return Ok(Err(e)),
        };

        if let Err(e) = self.restaurant.tables.book(number) {
            return Ok(Err(e));
        }

        self.console
            .say(format!("Table {} booked successfully!", number))?;
        audit_log!("customer", "book", format!("table:{}", number));
        Ok(Ok(number))
    }

    fn plan_event(&mut self) -> FlowResult<EventKind> {
        self.console
            .say("Plan Event: 1-Birthday Party, 2-Anniversary, 3-No Event")?;
        let event = EventKind::from_choice(self.console.read_number()?.ok());
        self.console.say(format!("Event Planned: {}", event.label()))?;
        Ok(event)
    }

    /// Collect order attempts until the customer stops or the cap is hit
    fn collect_orders(&mut self) -> FlowResult<OrderLedger> {
        let max_lines = self.config.max_order_lines;
        let mut ledger = OrderLedger::new();

        loop {
            if let Err(e) = self.take_order(&mut ledger)? {
                self.console.say(&e)?;
                tracing::warn!(code = %e.code(), error = %e, "Order attempt skipped");
            }

            if ledger.len() >= max_lines {
                self.console
                    .say(format!("Order limit of {} items reached.", max_lines))?;
                break;
            }

            let more = self.console.prompt("Order more items? (y/n): ")?;
            if !more.starts_with(['y', 'Y']) {
                break;
            }
        }

        tracing::info!(lines = ledger.len(), "Order collection finished");
        Ok(ledger)
    }

    /// One (item number, quantity) attempt
    ///
    /// The item number is checked against the menu before the quantity.
    fn take_order(&mut self, ledger: &mut OrderLedger) -> FlowResult<DiningResult<()>> {
        let position = match self.console.prompt_number("Enter item number: ")? {
            Ok(position) => position,
            Err(e) => return Ok(Err(e)),
        };
        let quantity = self.console.prompt_number("Enter quantity: ")?;

        let result = self.restaurant.catalog.get(position).and_then(|item| {
            let quantity = quantity?;
            ledger.add_order(item, quantity).cloned()
        });

        match result {
            Ok(line) => {
                self.console.say(format!(
                    "Added {} x {}",
                    line.quantity(),
                    line.item().name()
                ))?;
                Ok(Ok(()))
            }
            Err(e) => Ok(Err(e)),
        }
    }

    fn dispatch_orders(&mut self, ledger: &OrderLedger) -> FlowResult<()> {
        if ledger.is_empty() {
            return Ok(());
        }

        let kitchen = self.restaurant.kitchen;
        kitchen.display_info(self.console.out())?;
        for line in ledger.lines() {
            self.restaurant
                .manager
                .assign_order_to_kitchen(&kitchen, line, self.console.out())?;
        }
        Ok(())
    }

    fn print_bill(&mut self, ledger: &OrderLedger, table_number: i64) -> FlowResult<Bill> {
        self.console.say("")?;
        self.console.say("Generating Bill...")?;

        let bill = ledger.generate_bill();
        self.console.say(&bill)?;

        let resource = format!("table:{}", table_number);
        match bill_snapshot(&bill) {
            Some(snapshot) => {
                audit_log!("customer", "bill", resource, snapshot);
            }
            None => {
                audit_log!("customer", "bill", resource);
            }
        }
        Ok(bill)
    }

    fn take_payment(&mut self, bill: &Bill) -> FlowResult<()> {
        let method = self
            .console
            .prompt("Enter payment method (Cash/Card/UPI): ")?;

        match self.restaurant.payments.process_payment(&method, bill.total) {
            Ok(record) => self.console.say(record)?,
            Err(e) => self.console.say(e)?,
        }
        Ok(())
    }
}

/// JSON form of the bill for the audit record
///
/// Serialization failures are logged and yield `None`.
fn bill_snapshot(bill: &Bill) -> Option<String> {
    serde_json::to_string(bill)
        .inspect_err(|e| tracing::warn!(error = %e, "Bill snapshot serialization failed"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::MenuItem;
    use shared::order::OrderLine;

    #[test]
    fn bill_snapshot_carries_lines_and_totals() {
        let pizza = MenuItem::food("Pizza", Decimal::new(12, 0)).unwrap();
        let bill = Bill::from_lines(&[OrderLine::new(pizza, 2).unwrap()]);

        let snapshot = bill_snapshot(&bill).expect("bill serializes");
        let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();

        assert_eq!(value["lines"][0]["name"], "Pizza");
        assert_eq!(value["lines"][0]["quantity"], 2);
        assert!(value.get("subtotal").is_some());
        assert!(value.get("total").is_some());
    }
}
