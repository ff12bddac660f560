pub mod generator;
pub mod verify;
