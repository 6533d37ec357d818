pub mod catalog;
pub mod ranking;
pub mod recommendations;
pub mod results;
pub mod training_plan;

pub use catalog::Catalog;
pub use results::generate_result;
