//! Infrastructure - storage, seeding, and clocks behind port traits

pub mod clock;
pub mod ports;
pub mod seed;
pub mod sqlite;
