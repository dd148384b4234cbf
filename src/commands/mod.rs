pub mod clean;

pub use clean::execute_clean;
