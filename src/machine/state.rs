use std::fmt;

use serde::Serialize;

use crate::Quantity;
use crate::model::{Recipe, Resource, Supplies};

/// Everything the machine holds: ingredients, cups and the cash register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Inventory {
    /// Water in ml.
    pub water: Quantity,
    /// Milk in ml.
    pub milk: Quantity,
    /// Coffee beans in g.
    pub coffee: Quantity,
    pub cups: Quantity,
    pub cash: Quantity,
}

impl Inventory {
    /// Stock of a freshly installed machine.
    pub const STARTING: Inventory = Inventory::new(500, 250, 100, 10, 300);

    pub const fn new(water: u64, milk: u64, coffee: u64, cups: u64, cash: u64) -> Self {
        Self {
            water: Quantity::new(water),
            milk: Quantity::new(milk),
            coffee: Quantity::new(coffee),
            cups: Quantity::new(cups),
            cash: Quantity::new(cash),
        }
    }

    /// A machine with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check that one `recipe` can be made, without touching the stock.
    ///
    /// Resources are checked in the order water, milk, coffee, cups and the
    /// first one that falls short is returned.
    pub fn check(&self, recipe: &Recipe) -> Result<(), Resource> {
        let mut probe = *self;
        probe.dispense(recipe)
    }

    /// Debit one `recipe` and one cup, credit its price.
    ///
    /// Either every field is updated or none is.
    pub fn dispense(&mut self, recipe: &Recipe) -> Result<(), Resource> {
        let water = self
            .water
            .checked_sub(recipe.water)
            .ok_or(Resource::Water)?;
        let milk = self.milk.checked_sub(recipe.milk).ok_or(Resource::Milk)?;
        let coffee = self
            .coffee
            .checked_sub(recipe.coffee)
            .ok_or(Resource::Coffee)?;
        let cups = self
            .cups
            .checked_sub(Quantity::new(1))
            .ok_or(Resource::Cups)?;

        *self = Inventory {
            water,
            milk,
            coffee,
            cups,
            cash: self.cash + recipe.price,
        };
        Ok(())
    }

    pub fn restock(&mut self, supplies: Supplies) {
        self.water += supplies.water;
        self.milk += supplies.milk;
        self.coffee += supplies.coffee;
        self.cups += supplies.cups;
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The coffee machine has:")?;
        writeln!(f, "{} ml of water", self.water)?;
        writeln!(f, "{} ml of milk", self.milk)?;
        writeln!(f, "{} g of coffee beans", self.coffee)?;
        writeln!(f, "{} disposable cups", self.cups)?;
        write!(f, "${} of money", self.cash)
    }
}
