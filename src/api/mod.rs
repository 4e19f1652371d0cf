pub mod parking_lot_dto;
