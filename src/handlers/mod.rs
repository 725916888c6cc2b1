// Handlers module

pub mod about;
pub mod get_message;
pub mod list_messages;
pub mod save_message;

pub use about::about_handler;
pub use get_message::get_message_handler;
pub use list_messages::list_messages_handler;
pub use save_message::save_message_handler;
