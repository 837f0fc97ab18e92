pub mod hours;
pub mod reservations;
pub mod restaurants;
pub mod slots;
pub mod tables;
