#[macro_use]
extern crate lazy_static;

pub mod error;
pub use error::Error;

mod util;

pub mod app;

pub mod forms;

pub mod models;

pub mod query;

pub mod store;

pub mod views;

pub mod services;
