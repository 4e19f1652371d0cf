use crate::domain::lot_status::{LotStatus, SlotEntry};

pub const STATUS_HEADER: &str = "Slot No.    Registration No    Color";
pub const EMPTY_LOT: &str = "Parking lot is empty.";

pub fn status_row(entry: &SlotEntry) -> String {
    format!("{:<11}{:<18}{}", entry.slot.get(), entry.registration.as_str(), entry.color)
}

/// Renders the status table, one line per occupied slot under
/// [`STATUS_HEADER`], or just [`EMPTY_LOT`].
pub fn status_table(status: &LotStatus) -> String {
    match status {
        LotStatus::Empty => EMPTY_LOT.to_string(),
        LotStatus::Occupied(entries) => {
            let mut lines = Vec::with_capacity(entries.len() + 1);
            lines.push(STATUS_HEADER.to_string());
            lines.extend(entries.iter().map(status_row));
            lines.join("\n")
        }
    }
}
