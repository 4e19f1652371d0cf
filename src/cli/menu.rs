use colored::Colorize;
use std::io::{BufRead, Write};

use crate::cli::render;
use crate::domain::slot_allocator::SlotAllocator;
use crate::error::{Error, ParkingError, Result};

const MENU: &str = "\n--- Parking Lot Menu ---
1. Park a vehicle
2. Leave a slot
3. Show status
4. Find slot by registration number
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Park,
    Leave,
    Status,
    Find,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Park),
            2 => Some(MenuChoice::Leave),
            3 => Some(MenuChoice::Status),
            4 => Some(MenuChoice::Find),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Text menu over a [`SlotAllocator`].
///
/// Reads commands line by line from `input` and writes prompts and results
/// to `output`. Bad input is reported and re-prompted, never fatal. Only
/// I/O failures on `input`/`output` end the loop with an error.
pub struct Menu<R, W> {
    input: R,
    output: W,
    use_color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, use_color: bool) -> Self {
        Menu { input, output, use_color }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for the lot capacity until a positive integer is entered.
    ///
    /// # Errors
    /// `Error::InputClosed` if input ends first.
    pub fn prompt_capacity(&mut self) -> Result<usize> {
        loop {
            let Some(line) = self.read_line("Enter parking lot capacity: ")? else {
                return Err(Error::InputClosed);
            };

            match line.parse::<usize>() {
                Ok(capacity) if capacity > 0 => return Ok(capacity),
                _ => {
                    log::debug!("Rejected capacity input {:?}.", line);
                    self.failure("Please enter a positive whole number.")?;
                }
            }
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self, lot: &mut SlotAllocator) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.read_line("Choose an option: ")? else {
                log::info!("Input closed, leaving menu.");
                return Ok(());
            };

            let Ok(number) = line.parse::<i64>() else {
                self.failure("Please enter a valid number.")?;
                continue;
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                self.failure("Invalid choice. Please choose a number between 1 and 5.")?;
                continue;
            };

            log::debug!("Menu choice {:?}.", choice);

            let keep_going = match choice {
                MenuChoice::Park => self.park(lot)?,
                MenuChoice::Leave => self.leave(lot)?,
                MenuChoice::Status => self.status(lot)?,
                MenuChoice::Find => self.find(lot)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting. Thank you!")?;
                    false
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    // The handlers below return `Ok(false)` when input closed mid-command.

    fn park(&mut self, lot: &mut SlotAllocator) -> Result<bool> {
        let Some(registration) = self.read_line("Enter registration number: ")? else {
            return Ok(false);
        };
        let Some(color) = self.read_line("Enter color: ")? else {
            return Ok(false);
        };

        match lot.park(&registration, &color) {
            Ok(slot) => self.success(&format!("Allocated slot number: {}", slot))?,
            Err(e) => self.outcome(&e)?,
        }
        Ok(true)
    }

    fn leave(&mut self, lot: &mut SlotAllocator) -> Result<bool> {
        let Some(line) = self.read_line("Enter slot number to free: ")? else {
            return Ok(false);
        };

        match line.parse::<i64>() {
            Ok(slot_number) => match lot.leave(slot_number) {
                Ok(slot) => self.success(&format!("Slot number {} is now free.", slot))?,
                Err(e) => self.outcome(&e)?,
            },
            Err(_) => self.failure("Please enter a valid slot number.")?,
        }
        Ok(true)
    }

    fn status(&mut self, lot: &SlotAllocator) -> Result<bool> {
        writeln!(self.output, "{}", render::status_table(&lot.status()))?;
        Ok(true)
    }

    fn find(&mut self, lot: &SlotAllocator) -> Result<bool> {
        let Some(registration) = self.read_line("Enter registration number: ")? else {
            return Ok(false);
        };

        match lot.find_by_registration(&registration) {
            Ok(slot) => self.success(&format!("Slot number: {}", slot))?,
            Err(e) => self.outcome(&e)?,
        }
        Ok(true)
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn outcome(&mut self, error: &ParkingError) -> Result<()> {
        self.failure(&error.to_string())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.output, "{}", message.green())?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.output, "{}", message.red())?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }
}
