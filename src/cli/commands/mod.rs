pub mod config;
pub mod events;
pub mod export;
pub mod init;
pub mod log;
pub mod menu;
pub mod order;
pub mod punch;
pub mod staff;
pub mod status;
pub mod summary;
pub mod tables;
