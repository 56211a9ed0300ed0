pub mod board_view;
pub mod terminal;

pub use terminal::TerminalUi;
