//! Core domain types for the coffee machine.

use std::fmt;

use crate::Quantity;

/// A beverage on the menu, with what it consumes and what it costs.
///
/// Every recipe needs some water and some coffee. Recipes without milk
/// carry an explicit zero milk requirement.
#[derive(Debug, PartialEq, Eq)]
pub struct Recipe {
    /// Menu key typed by the user.
    pub id: &'static str,
    pub name: &'static str,
    /// Water in ml.
    pub water: Quantity,
    /// Milk in ml.
    pub milk: Quantity,
    /// Coffee beans in g.
    pub coffee: Quantity,
    pub price: Quantity,
}

/// The fixed menu.
pub static RECIPES: [Recipe; 3] = [
    Recipe {
        id: "1",
        name: "espresso",
        water: Quantity::new(250),
        milk: Quantity::ZERO,
        coffee: Quantity::new(16),
        price: Quantity::new(4),
    },
    Recipe {
        id: "2",
        name: "latte",
        water: Quantity::new(350),
        milk: Quantity::new(75),
        coffee: Quantity::new(20),
        price: Quantity::new(7),
    },
    Recipe {
        id: "3",
        name: "cappuccino",
        water: Quantity::new(200),
        milk: Quantity::new(100),
        coffee: Quantity::new(12),
        price: Quantity::new(6),
    },
];

/// Look up a recipe by its menu key.
pub fn recipe(id: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == id)
}

/// A consumable the machine can run out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Water,
    Milk,
    Coffee,
    Cups,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Coffee => "coffee",
            Resource::Cups => "cups",
        };
        f.write_str(name)
    }
}

/// Quantities added by a `fill`. Anything left out is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Supplies {
    pub water: Quantity,
    pub milk: Quantity,
    pub coffee: Quantity,
    pub cups: Quantity,
}

impl Supplies {
    pub fn new(water: u32, milk: u32, coffee: u32, cups: u32) -> Self {
        Self {
            water: water.into(),
            milk: milk.into(),
            coffee: coffee.into(),
            cups: cups.into(),
        }
    }
}

impl fmt::Display for Supplies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.water, self.milk, self.coffee, self.cups
        )
    }
}

/// The action names accepted by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    Fill,
    Take,
    Remaining,
    Exit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Buy,
        Action::Fill,
        Action::Take,
        Action::Remaining,
        Action::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Buy => "buy",
            Action::Fill => "fill",
            Action::Take => "take",
            Action::Remaining => "remaining",
            Action::Exit => "exit",
        }
    }

    /// Parse an action name. Matching is exact.
    pub fn parse(name: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An action together with its parameter, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Dispense one beverage.
    Buy(&'static Recipe),
    /// Restock.
    Fill(Supplies),
    /// Collect the cash register.
    Take,
    /// Report the inventory.
    Remaining,
    /// Stop the machine.
    Exit,
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Command::Buy(_) => Action::Buy,
            Command::Fill(_) => Action::Fill,
            Command::Take => Action::Take,
            Command::Remaining => Action::Remaining,
            Command::Exit => Action::Exit,
        }
    }
}
