//! Inbound adapters: the queue message handler and the command line.

pub mod cli;
pub mod handler;
pub mod message;

pub use handler::{HandlerResponse, QuoteHandler, RESPONSE_BODY};
pub use message::{MessageAttributes, QueueMessage, SparkMessage};
