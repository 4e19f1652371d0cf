use crate::domain::id::RegistrationNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub registration: RegistrationNumber,
    pub color: String,
}

impl Vehicle {
    pub fn new(registration: RegistrationNumber, color: impl Into<String>) -> Self {
        Vehicle { registration, color: color.into() }
    }
}
