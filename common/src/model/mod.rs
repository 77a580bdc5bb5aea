pub mod analytics;
pub mod campaign;
pub mod directory;
pub mod import;
pub mod message;
pub mod raw_row;
pub mod selection;
pub mod supporter;
pub mod template;
