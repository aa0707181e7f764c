pub mod generate;
pub mod interactive;
