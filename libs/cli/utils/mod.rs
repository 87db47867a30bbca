pub mod command_error;
pub mod display;
pub mod document_ref;
pub mod exit_code;
pub mod prompt;
pub mod time;
