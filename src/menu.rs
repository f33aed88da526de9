//! Interactive console front-end.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use thiserror::Error;

use crate::config::SimConfig;
use crate::money::{Money, MoneyError};
use crate::simulation::Simulation;

/// Errors of a menu branch.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The input is not a number.
    #[error("Please enter a valid number.")]
    InvalidFormat(#[source] ParseIntError),

    /// The calculator rejected the input.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Menu entry selected by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Denomination calculator.
    Calculator,
    /// Car simulation.
    Simulation,
    /// Quit without doing anything.
    Exit,
    /// Anything else.
    Invalid,
}

impl Choice {
    /// Parses a line entered by the user.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => Choice::Calculator,
            "2" => Choice::Simulation,
            "3" => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

/// Shows the menu, reads one choice and runs the selected branch.
///
/// Calculator errors are printed and end the branch. Only console I/O errors are returned.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, config: &SimConfig) -> io::Result<()> {
    writeln!(out, "Denominations and car life")?;
    writeln!(out, "1. Denomination calculator")?;
    writeln!(out, "2. Car simulation")?;
    writeln!(out, "3. Exit")?;
    let choice = Choice::parse(&prompt(input, out, "Enter your choice: ")?);
    log::debug!("menu choice: {:?}", choice);

    match choice {
        Choice::Calculator => match calculator(input, out) {
            Ok(()) => Ok(()),
            Err(MenuError::Io(e)) => Err(e),
            Err(e) => {
                log::info!("calculator failed: {:?}", e);
                writeln!(out, "{}", e)
            }
        },
        Choice::Simulation => simulation(out, config),
        Choice::Exit => Ok(()),
        Choice::Invalid => writeln!(out, "Invalid choice. Please try again."),
    }
}

fn calculator<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), MenuError> {
    let unit_value = read_number(input, out, "Enter unit value: ")?;
    let count = read_number(input, out, "Enter count: ")?;
    let money = Money::new(unit_value, count)?;
    writeln!(out, "{}", money)?;
    writeln!(out, "Total: {}", money.total())?;

    let price = read_number(input, out, "Enter price to calculate items: ")?;
    let items = money.calculate_items(price)?;
    writeln!(out, "You can buy {} items.", items)?;
    Ok(())
}

fn simulation<W: Write>(out: &mut W, config: &SimConfig) -> io::Result<()> {
    writeln!(out, "Car life simulation")?;
    let mut sim = Simulation::new(config);
    sim.add_default_services();
    sim.run();
    for line in sim.transcript().take() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn read_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<i32, MenuError> {
    let line = prompt(input, out, text)?;
    line.trim().parse().map_err(MenuError::InvalidFormat)
}
