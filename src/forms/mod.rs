pub mod article;
pub mod category;
pub mod home;
pub mod navigation;
pub mod search;
