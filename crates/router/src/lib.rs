//! Client-side route table
//!
//! Holds the application's ordered route definitions together with the
//! history base they are resolved under. The UI layer decides what a
//! route's view is; this crate only answers "which route, if any, does
//! this location match".

pub mod error;
pub mod history;
pub mod table;

pub use error::RouteError;
pub use history::WebHistory;
pub use table::{RouteDefinition, RouteMatch, RouteTable};
