use crate::domain::id::RegistrationNumber;
use crate::domain::slot::SlotNumber;

/// One occupied slot as reported by [`LotStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub slot: SlotNumber,
    pub registration: RegistrationNumber,
    pub color: String,
}

/// Snapshot of the lot.
///
/// `Empty` is reported instead of an empty `Occupied` list, so callers can
/// print "nothing parked" without inspecting the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotStatus {
    Empty,

    /// Occupied slots in ascending slot order. Never empty.
    Occupied(Vec<SlotEntry>),
}

impl LotStatus {
    pub fn entries(&self) -> &[SlotEntry] {
        match self {
            LotStatus::Empty => &[],
            LotStatus::Occupied(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LotStatus::Empty)
    }
}
