mod article;
mod category;
pub use self::{
  article::*,
  category::*,
};
