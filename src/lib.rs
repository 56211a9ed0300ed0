pub mod error;
pub mod events;
pub mod game;
pub mod model;
pub mod storage;
pub mod ui;
