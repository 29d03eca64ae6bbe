pub mod html;
pub mod json;
pub mod terminal;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use terminal::TerminalWriter;
