pub mod animals;
pub mod shapes;
