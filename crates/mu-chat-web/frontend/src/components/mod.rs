pub mod chat_window;
pub mod footer;
pub mod nav_item;
pub mod navigation;
