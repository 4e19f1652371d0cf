use thiserror::Error;

use crate::domain::slot::SlotNumber;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse parking lot config JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Parking lot capacity must be a positive integer, got {0}")]
    InvalidCapacity(usize),

    #[error("Input closed before a parking lot capacity was entered")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a rejected allocator operation.
///
/// None of these are faults: the allocator is unchanged and stays usable.
/// The `Display` text is what the menu shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    #[error("Sorry, parking lot is full.")]
    LotFull,

    #[error("Vehicle is already parked in slot {0}")]
    AlreadyParked(SlotNumber),

    #[error("Invalid slot number! Slot should be between 1 and {capacity}")]
    InvalidSlot { slot: i64, capacity: usize },

    #[error("Slot number {0} is already empty.")]
    AlreadyEmpty(SlotNumber),

    #[error("Not found.")]
    NotFound(String),

    #[error("Registration number must not be empty.")]
    BlankRegistration,
}
