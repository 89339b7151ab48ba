pub mod add;
pub mod backup;
pub mod calendar;
pub mod categories;
pub mod complete;
pub mod del;
pub mod expand;
pub mod log;
pub mod pets;
pub mod remind;
