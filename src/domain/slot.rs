use std::fmt;

/// Identifier of a parking slot, always within `[1, capacity]` of the
/// allocator that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotNumber(usize);

impl SlotNumber {
    pub fn new(number: usize) -> Self {
        SlotNumber(number)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
