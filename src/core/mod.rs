pub mod aggregator;
pub mod log;
pub mod menu;
pub mod orders;
pub mod punch;
pub mod staff;
pub mod tables;
