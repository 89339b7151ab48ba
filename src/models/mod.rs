pub mod category;
pub mod pet;
pub mod priority;
pub mod recurrence;
pub mod task;
