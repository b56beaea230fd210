//! Post formatted messages to a Slack-style incoming webhook.
//!
//! A [Client] holds the webhook endpoint and the defaults every message starts
//! from. Messages are created from the client, dressed up with text, overrides
//! and [attachments](Attachment), and then handed back to the client to be
//! sent as a single JSON `POST`.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use hookshot::{Attachment, Client, Options};
//! use url::Url;
//!
//! let client = Client::new(
//!     Url::parse("https://hooks.slack.com/services/T000/B000/XXXX")?,
//!     Options {
//!         channel: Some("#deploys".into()),
//!         username: Some("hermes".into()),
//!         ..Options::default()
//!     },
//! );
//!
//! let mut msg = client.create_message();
//! msg.set_text("Deploy finished")
//!     .with_icon(":rocket:")
//!     .attach(Attachment::new("Deploy finished in 42s"));
//!
//! client.send_message(&msg).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is retried. Transport failures come back exactly as the
//! [Transport] produced them.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod attachment;
pub mod client;
mod de;
pub mod error;
pub mod message;
pub mod options;
pub mod payload;
pub mod transport;

pub use attachment::{
    action::{ActionConfirmation, ActionStyle, AttachmentAction},
    field::{AttachmentField, FieldValue},
    Attachment,
};
pub use client::Client;
pub use error::{SendError, ValidationError};
pub use message::{icon::IconType, Message};
pub use options::Options;
pub use payload::Payload;
pub use transport::Transport;
