use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use crate::api::parking_lot_dto::ParkingLotDto;
use crate::domain::id::RegistrationNumber;
use crate::domain::lot_status::{LotStatus, SlotEntry};
use crate::domain::slot::SlotNumber;
use crate::domain::vehicle::Vehicle;
use crate::error::{Error, ParkingError, Result};

/// Fixed-size parking lot that always hands out the lowest free slot.
///
/// Slots are handed out lazily: `1..=issued` have been used at least once,
/// `issued + 1..=capacity` never have. Every used slot is either in
/// `freed_slots` or a key of `occupied`, never both. `registration_index`
/// mirrors `occupied` in the other direction and holds exactly one entry per
/// parked vehicle. Construction does not depend on `capacity`.
#[derive(Debug)]
pub struct SlotAllocator {
    pub(super) capacity: usize,

    /// Number of slots ever handed out. Slots above it are free and unused.
    pub(super) issued: usize,

    /// Min-heap of slots that were used and then freed. All are `<= issued`.
    pub(super) freed_slots: BinaryHeap<Reverse<SlotNumber>>,

    /// Parked vehicles keyed by slot. Ordered, so status listings come out
    /// in ascending slot order without sorting.
    pub(super) occupied: BTreeMap<SlotNumber, Vehicle>,

    /// Reverse lookup registration -> slot.
    pub(super) registration_index: HashMap<RegistrationNumber, SlotNumber>,
}

impl SlotAllocator {
    /// Creates a lot with slots `1..=capacity`, all free.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            log::error!("Refusing to create a parking lot without slots.");
            return Err(Error::InvalidCapacity(capacity));
        }

        log::info!("Created parking lot with {} slots.", capacity);

        Ok(SlotAllocator {
            capacity,
            issued: 0,
            freed_slots: BinaryHeap::new(),
            occupied: BTreeMap::new(),
            registration_index: HashMap::new(),
        })
    }

    pub fn from_dto(dto: ParkingLotDto) -> Result<Self> {
        Self::new(dto.capacity.get())
    }

    /// Parks a vehicle in the lowest-numbered free slot.
    ///
    /// # Returns
    /// The assigned slot, or
    /// - `ParkingError::BlankRegistration` if `registration` is empty after trimming,
    /// - `ParkingError::LotFull` if no slot is free,
    /// - `ParkingError::AlreadyParked` with the current slot if the registration is already parked.
    ///
    /// The lot is unchanged on every error.
    pub fn park(&mut self, registration: &str, color: &str) -> std::result::Result<SlotNumber, ParkingError> {
        let registration = RegistrationNumber::new(registration);
        if registration.is_blank() {
            log::debug!("Rejected park request with blank registration.");
            return Err(ParkingError::BlankRegistration);
        }

        if self.is_full() {
            log::info!("Rejected {:?}: lot is full ({} slots).", registration, self.capacity);
            return Err(ParkingError::LotFull);
        }

        if let Some(&slot) = self.registration_index.get(&registration) {
            log::info!("Rejected {:?}: already parked in slot {}.", registration, slot);
            return Err(ParkingError::AlreadyParked(slot));
        }

        let slot = self.take_lowest_free();

        self.registration_index.insert(registration.clone(), slot);
        self.occupied.insert(slot, Vehicle::new(registration, color));

        log::info!("Allocated slot {} ({} of {} occupied).", slot, self.occupied.len(), self.capacity);

        Ok(slot)
    }

    /// Frees `slot_number` and forgets the vehicle parked there.
    ///
    /// Accepts any integer, since the number usually comes straight from user
    /// input. Returns the freed slot, `ParkingError::InvalidSlot` if the number
    /// is outside `[1, capacity]`, or `ParkingError::AlreadyEmpty` if nothing
    /// is parked there.
    pub fn leave(&mut self, slot_number: i64) -> std::result::Result<SlotNumber, ParkingError> {
        let slot = self.slot_in_range(slot_number).ok_or_else(|| {
            log::info!("Rejected leave for slot {}: outside 1..={}.", slot_number, self.capacity);
            ParkingError::InvalidSlot { slot: slot_number, capacity: self.capacity }
        })?;

        let Some(vehicle) = self.occupied.remove(&slot) else {
            log::info!("Rejected leave for slot {}: already empty.", slot);
            return Err(ParkingError::AlreadyEmpty(slot));
        };

        if self.registration_index.remove(&vehicle.registration).is_none() {
            log::error!(
                "Registration index had no entry for {:?} in slot {} --> Signals an error in the implementation.",
                vehicle.registration,
                slot
            );
        }
        self.freed_slots.push(Reverse(slot));

        log::info!("Slot {} freed, {:?} left.", slot, vehicle.registration);

        Ok(slot)
    }

    /// Lists every occupied slot in ascending order, or `LotStatus::Empty`.
    pub fn status(&self) -> LotStatus {
        if self.occupied.is_empty() {
            return LotStatus::Empty;
        }

        let entries = self
            .occupied
            .iter()
            .map(|(&slot, vehicle)| SlotEntry { slot, registration: vehicle.registration.clone(), color: vehicle.color.clone() })
            .collect();

        LotStatus::Occupied(entries)
    }

    pub fn find_by_registration(&self, registration: &str) -> std::result::Result<SlotNumber, ParkingError> {
        self.registration_index.get(registration).copied().ok_or_else(|| ParkingError::NotFound(registration.to_string()))
    }

    pub fn vehicle_at(&self, slot: SlotNumber) -> Option<&Vehicle> {
        self.occupied.get(&slot)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn free_count(&self) -> usize {
        self.freed_slots.len() + (self.capacity - self.issued)
    }

    pub fn is_full(&self) -> bool {
        self.freed_slots.is_empty() && self.issued == self.capacity
    }

    /// Removes the lowest free slot from the pool. Callers check `is_full` first.
    ///
    /// Freed slots are all `<= issued`, so any of them beats the next unused one.
    fn take_lowest_free(&mut self) -> SlotNumber {
        if let Some(Reverse(slot)) = self.freed_slots.pop() {
            return slot;
        }
        self.issued += 1;
        SlotNumber::new(self.issued)
    }

    fn slot_in_range(&self, slot_number: i64) -> Option<SlotNumber> {
        let number = usize::try_from(slot_number).ok()?;
        (1..=self.capacity).contains(&number).then(|| SlotNumber::new(number))
    }
}
