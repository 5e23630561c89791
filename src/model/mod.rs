pub mod compound;
pub mod definition;
pub mod domain;
pub mod target;
