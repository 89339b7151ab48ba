pub mod add;
pub mod backup;
pub mod calendar;
pub mod category;
pub mod config;
pub mod db;
pub mod del;
pub mod done;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod pet;
pub mod remind;
pub mod rules;
pub mod today;
