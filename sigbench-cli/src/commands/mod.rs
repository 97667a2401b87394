pub mod common;
pub mod gen;
pub mod methods;
pub mod show;
pub mod verify;
