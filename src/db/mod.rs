pub mod postgres_service;

mod hours;
mod reservation;
mod restaurant;
mod slot;
mod table;
mod user;
