//! Interactive read-loop around the machine.
//!
//! Prompts for an action, and for a recipe or fill quantities when the
//! machine needs one, until `exit` or the end of input.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::Quantity;
use crate::machine::{Machine, Outcome, Supplier};
use crate::model::{self, Action, RECIPES, Recipe, Supplies};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

pub struct Console<R, W> {
    input: R,
    output: W,
    show_collected: bool,
    /// I/O error hit while the machine was asking for a parameter.
    failure: Option<io::Error>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_collected: true,
            failure: None,
        }
    }

    /// Whether `take` tells the user how much cash was handed out.
    pub fn show_collected(mut self, show: bool) -> Self {
        self.show_collected = show;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Serve actions until `exit` or the end of input.
    pub fn run(&mut self, machine: &mut Machine) -> Result<(), ConsoleError> {
        let names: Vec<_> = Action::ALL.iter().map(|a| a.name()).collect();
        let prompt = format!("\nWrite action ({}):", names.join(", "));

        loop {
            let Some(name) = self.ask(&prompt)? else {
                return Ok(());
            };

            let result = machine.process(&name, self);
            if let Some(e) = self.failure.take() {
                return Err(e.into());
            }

            match result {
                Ok(outcome) if !outcome.keeps_running() => return Ok(()),
                Ok(outcome) => self.report(&outcome)?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Collected(_) if !self.show_collected => Ok(()),
            _ => writeln!(self.output, "{outcome}"),
        }
    }

    /// Print `prompt` and read one trimmed line, `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_recipe(&mut self) -> io::Result<Option<&'static Recipe>> {
        let mut options: Vec<_> = RECIPES
            .iter()
            .map(|r| format!("{} - {}", r.id, r.name))
            .collect();
        options.push("back - to main menu:".to_string());
        let prompt = format!("\nWhat do you want to buy? {}", options.join(", "));

        loop {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if answer == "back" {
                return Ok(None);
            }
            match model::recipe(&answer) {
                Some(recipe) => return Ok(Some(recipe)),
                None => writeln!(self.output, "Invalid command. Try again.")?,
            }
        }
    }

    fn ask_supplies(&mut self) -> io::Result<Option<Supplies>> {
        let prompts = [
            "\nWrite how many ml of water you want to add:",
            "Write how many ml of milk you want to add:",
            "Write how many grams of coffee you want to add:",
            "Write how many disposable cups of coffee you want to add:",
        ];

        let mut amounts = [Quantity::ZERO; 4];
        for (amount, prompt) in amounts.iter_mut().zip(prompts) {
            match self.ask_quantity(prompt)? {
                Some(q) => *amount = q,
                None => return Ok(None),
            }
        }

        let [water, milk, coffee, cups] = amounts;
        Ok(Some(Supplies {
            water,
            milk,
            coffee,
            cups,
        }))
    }

    /// An empty answer counts as zero.
    fn ask_quantity(&mut self, prompt: &str) -> io::Result<Option<Quantity>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(Quantity::ZERO));
            }
            match answer.parse::<u32>() {
                Ok(n) => return Ok(Some(Quantity::from(n))),
                Err(_) => writeln!(self.output, "Invalid number. Try again.")?,
            }
        }
    }

    fn capture<T>(&mut self, ask: impl FnOnce(&mut Self) -> io::Result<Option<T>>) -> Option<T> {
        match ask(self) {
            Ok(answer) => answer,
            Err(e) => {
                self.failure = Some(e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Supplier for Console<R, W> {
    fn recipe(&mut self) -> Option<&'static Recipe> {
        self.capture(Self::ask_recipe)
    }

    fn supplies(&mut self) -> Option<Supplies> {
        self.capture(Self::ask_supplies)
    }
}
