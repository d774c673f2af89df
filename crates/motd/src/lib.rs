mod client;
mod config;
mod endpoint;
mod error;
mod presenter;
mod retrieve;
mod types;

pub use client::MotdClient;
pub use config::*;
pub use endpoint::Endpoint;
pub use error::Error;
pub use presenter::{BUTTON_NOT_RECOGNIZED, MotdSink, PICK_A_SOURCE, Presenter, Source};
pub use retrieve::{
    DECODE_FAILED, NO_MESSAGE_FOUND, NO_MESSAGE_RECEIVED, NO_TEXT_RECEIVED, URL_NOT_VALID,
    pick_line,
};
pub use types::MotdResponse;
