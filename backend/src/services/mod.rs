//! Business logic services
//!
//! Services wrap the calculation engine with request validation and logging.

pub mod calculator;

pub use calculator::CalculatorService;
