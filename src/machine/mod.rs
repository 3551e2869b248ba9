//! Action processing.
//!
//! The machine owns the inventory and applies one action at a time: buy,
//! fill, take, remaining or exit. When the same action is submitted twice in
//! a row its previous parameter is reused instead of asking for a new one.
//! Also supports an async stream of scripted requests.

use std::fmt;

use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info};

use crate::Quantity;
use crate::model::{Action, Command, Recipe, Resource, Supplies};

mod state;
pub use state::Inventory;

mod error;
pub use error::MachineError;

/// Source of action parameters, consulted only when an action is not a repeat.
pub trait Supplier {
    /// Recipe to buy, or `None` to go back without buying.
    fn recipe(&mut self) -> Option<&'static Recipe>;

    /// Quantities to fill, or `None` to go back without filling.
    fn supplies(&mut self) -> Option<Supplies>;
}

/// A scripted action with its parameters given up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub action: String,
    pub recipe: Option<&'static Recipe>,
    pub supplies: Supplies,
}

impl Supplier for Request {
    fn recipe(&mut self) -> Option<&'static Recipe> {
        self.recipe
    }

    fn supplies(&mut self) -> Option<Supplies> {
        Some(self.supplies)
    }
}

/// What a successfully processed action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sold(&'static Recipe),
    Filled(Supplies),
    /// Cash handed out; the register is now empty.
    Collected(Quantity),
    Report(Inventory),
    /// The supplier gave no parameter; nothing happened.
    Cancelled(Action),
    Exit,
}

impl Outcome {
    /// `false` once the machine has been told to exit.
    pub fn keeps_running(&self) -> bool {
        !matches!(self, Outcome::Exit)
    }
}

/// Feedback shown to the user.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sold(_) => write!(f, "I have enough resources, making you a coffee!"),
            Outcome::Filled(supplies) => write!(
                f,
                "Added {} ml of water, {} ml of milk, {} g of coffee beans and {} disposable cups",
                supplies.water, supplies.milk, supplies.coffee, supplies.cups
            ),
            Outcome::Collected(cash) => write!(f, "I gave you ${cash}"),
            Outcome::Report(inventory) => write!(f, "\n{inventory}"),
            Outcome::Cancelled(action) => write!(f, "Nothing to {action}, back to main menu"),
            Outcome::Exit => write!(f, "Bye!"),
        }
    }
}

/// The coffee machine.
///
/// Holds the inventory and a memo of the last successful command.
#[derive(Debug)]
pub struct Machine {
    inventory: Inventory,
    last: Option<Command>,
}

/// Public API
impl Machine {
    /// A machine with the [`Inventory::STARTING`] stock.
    pub fn new() -> Self {
        Self::with_inventory(Inventory::STARTING)
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            last: None,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The command a repeated action would reuse.
    pub fn last_command(&self) -> Option<&Command> {
        self.last.as_ref()
    }

    /// Run the machine over a stream of requests until `exit` or the end of the stream.
    pub async fn run(&mut self, mut stream: impl Stream<Item = Request> + Unpin) {
        while let Some(mut request) = stream.next().await {
            let action = std::mem::take(&mut request.action);
            // errors are reported through the log and must not stop the machine
            if let Ok(outcome) = self.process(&action, &mut request) {
                if !outcome.keeps_running() {
                    break;
                }
            }
        }
    }

    /// Process one action by name.
    ///
    /// A repeat of the last successful action reuses its parameter and does
    /// not consult `supplier`.
    pub fn process(
        &mut self,
        name: &str,
        supplier: &mut impl Supplier,
    ) -> Result<Outcome, MachineError> {
        let Some(action) = Action::parse(name) else {
            info!(action = name, "invalid action rejected");
            return Err(MachineError::InvalidAction(name.to_string()));
        };

        let command = match self.last {
            Some(last) if last.action() == action => {
                debug!(action = %action, "repeating last command");
                last
            }
            _ => match Self::ask(action, supplier) {
                Some(command) => command,
                None => {
                    info!(action = %action, "cancelled");
                    return Ok(Outcome::Cancelled(action));
                }
            },
        };

        self.apply(command)
    }

    /// Apply a fully specified command on top of the current state.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, MachineError> {
        let result = match command {
            Command::Buy(recipe) => self.sell(recipe).map(|()| Outcome::Sold(recipe)),
            Command::Fill(supplies) => {
                self.fill(supplies);
                Ok(Outcome::Filled(supplies))
            }
            Command::Take => Ok(Outcome::Collected(self.take())),
            Command::Remaining => Ok(Outcome::Report(self.remaining())),
            Command::Exit => Ok(Outcome::Exit),
        };
        Self::log_result(&command, &result);
        result
    }

    /// Check whether one `recipe` can be made right now.
    ///
    /// Returns the first short resource in the order water, milk, coffee, cups.
    pub fn can_prepare(&self, recipe: &Recipe) -> Result<(), Resource> {
        self.inventory.check(recipe)
    }

    /// Sell one `recipe`: debit its ingredients and a cup, credit its price.
    pub fn sell(&mut self, recipe: &'static Recipe) -> Result<(), MachineError> {
        self.inventory
            .dispense(recipe)
            .map_err(MachineError::InsufficientResource)?;
        self.last = Some(Command::Buy(recipe));
        Ok(())
    }

    /// Add `supplies` to the stock.
    pub fn fill(&mut self, supplies: Supplies) {
        self.inventory.restock(supplies);
        self.last = Some(Command::Fill(supplies));
    }

    /// Empty the cash register, returning what was in it.
    pub fn take(&mut self) -> Quantity {
        let cash = std::mem::take(&mut self.inventory.cash);
        self.last = Some(Command::Take);
        cash
    }

    /// Snapshot of the inventory for a status report.
    pub fn remaining(&mut self) -> Inventory {
        self.last = Some(Command::Remaining);
        self.inventory
    }
}

/// Private API
impl Machine {
    fn ask(action: Action, supplier: &mut impl Supplier) -> Option<Command> {
        match action {
            Action::Buy => supplier.recipe().map(Command::Buy),
            Action::Fill => supplier.supplies().map(Command::Fill),
            Action::Take => Some(Command::Take),
            Action::Remaining => Some(Command::Remaining),
            Action::Exit => Some(Command::Exit),
        }
    }

    /// Small helper to log `apply` results
    fn log_result(command: &Command, result: &Result<Outcome, MachineError>) {
        let action = command.action();
        match (result, command) {
            (Ok(_), Command::Buy(recipe)) => {
                info!(action = %action, recipe = recipe.name, price = %recipe.price, "applied");
            }
            (Ok(_), Command::Fill(supplies)) => {
                info!(action = %action, supplies = %supplies, "applied");
            }
            (Ok(Outcome::Collected(cash)), _) => {
                info!(action = %action, cash = %cash, "applied");
            }
            (Ok(_), _) => {
                info!(action = %action, "applied");
            }
            (Err(e), Command::Buy(recipe)) => {
                info!(action = %action, recipe = recipe.name, reason = %e, "skipped");
            }
            (Err(e), _) => {
                info!(action = %action, reason = %e, "skipped");
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
