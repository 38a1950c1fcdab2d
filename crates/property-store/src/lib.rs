pub mod db;
pub mod investments;
pub mod models;
pub mod properties;

pub use db::PropertyDb;
pub use investments::InvestmentStore;
pub use models::*;
pub use properties::PropertyStore;
