use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::machine::{Inventory, Request};
use crate::model::{self, Supplies};

/// Errors that can occur when reading a script or writing the inventory
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open script: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unknown recipe '{recipe}'")]
    UnknownRecipe { line: usize, recipe: String },

    #[error("failed to write inventory: {0}")]
    Write(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct InputRow {
    action: String,
    recipe: Option<String>,
    water: Option<u32>,
    milk: Option<u32>,
    coffee: Option<u32>,
    cups: Option<u32>,
}

/// Read requests from a csv script.
///
/// Expected header: `action,recipe,water,milk,coffee,cups`. Trailing fields
/// may be left out; missing fill quantities are zero.
pub fn read_script(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Request, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            let recipe = match row.recipe {
                Some(id) => Some(
                    model::recipe(&id).ok_or(CsvError::UnknownRecipe { line, recipe: id })?,
                ),
                None => None,
            };
            Ok(Request {
                action: row.action,
                recipe,
                supplies: Supplies::new(
                    row.water.unwrap_or_default(),
                    row.milk.unwrap_or_default(),
                    row.coffee.unwrap_or_default(),
                    row.cups.unwrap_or_default(),
                ),
            })
        }))
}

/// Write the inventory as a single csv row with a header
pub fn write_inventory(writer: impl io::Write, inventory: &Inventory) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.serialize(inventory)?;
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
