//! SeaORM entities for the class booking schema.

pub mod prelude;

pub mod booking;
pub mod class_schedule;
pub mod user;
