pub mod create;
pub mod interactive;
pub mod list;
