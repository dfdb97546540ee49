pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod reset;
pub mod set;
pub mod show;
pub mod target;
