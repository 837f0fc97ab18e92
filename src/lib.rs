pub mod config;
pub mod db;
pub mod routes;
pub mod scheduling;
pub mod types;
pub mod utils;
