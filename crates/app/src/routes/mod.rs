pub mod pantry;

pub use pantry::PantryPage;
