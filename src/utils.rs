pub mod date;
pub mod logs;
