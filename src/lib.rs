pub mod config;
pub mod console;
pub mod csv;
pub mod machine;
pub mod model;
pub mod quantity;

pub use config::Config;
pub use machine::{Inventory, Machine, MachineError, Outcome};
pub use model::{Action, Command, Recipe, Resource, Supplies};
pub use quantity::Quantity;
