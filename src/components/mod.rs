pub mod banner;
pub mod category;
pub mod event;
pub mod header;
pub mod layout;
pub mod search_bar;
