pub mod chatbot;
pub mod home;
pub mod not_found;
