pub mod id;
pub mod lot_status;
pub mod slot;
pub mod slot_allocator;
pub mod vehicle;
