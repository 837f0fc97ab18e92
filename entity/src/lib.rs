pub mod admin;
pub mod customer;
pub mod dining_table;
pub mod operating_hours;
pub mod reservation;
pub mod reservation_slot;
pub mod restaurant;
pub mod restaurant_manager;
pub mod user;

/*
 Every user row carries a role and exactly one matching role-extension row
 (customer / restaurant_manager / admin), created in the same transaction
 as the user itself.

 Restaurants hang off a restaurant_manager; tables, operating hours and
 reservation slots hang off a restaurant; reservations tie a customer to
 a restaurant + table at a point in time.
 */
