pub mod assign;
pub mod collector;
pub mod requester;

pub use assign::AssignOptions;
