pub mod error;
pub mod hours;
pub mod identity;
pub mod reservation;
pub mod response;
pub mod restaurant;
pub mod table;
pub mod user;
