mod corpus;
pub use self::corpus::*;

mod service;
pub use self::service::*;
