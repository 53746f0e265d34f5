#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod config;
mod engine;
mod error;
mod estimator;
pub mod main_lift;
mod numeric;
mod one_rep_max;
mod performance;
pub mod pullup;
mod quantity;
mod service;
mod template;
mod week;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use estimator::*;
pub use numeric::*;
pub use one_rep_max::*;
pub use performance::*;
pub use quantity::*;
pub use service::*;
pub use template::*;
pub use week::*;
