//! The webhook client, holding the endpoint and the defaults messages start
//! from.

use crate::{
    attachment::Attachment,
    error::SendError,
    message::Message,
    options::Options,
    payload::Payload,
    transport::{self, Transport},
};
use tracing::{debug, warn};
use url::Url;

/// A client for a single incoming webhook.
///
/// The client's configuration is only read while sending, never written, so
/// a client can be shared between concurrent sends. Mutating its defaults
/// while sends are in flight needs synchronising by the caller.
#[derive(Clone, Debug)]
pub struct Client<T = reqwest::Client> {
    endpoint: Url,
    default_channel: Option<String>,
    default_username: Option<String>,
    default_icon: Option<String>,
    link_names: bool,
    unfurl_links: bool,
    unfurl_media: bool,
    allow_markdown: bool,
    markdown_in_attachments: Vec<String>,
    transport: T,
}

impl Client {
    /// Instantiate a new client which posts over the shared HTTP client.
    pub fn new(endpoint: Url, options: Options) -> Self {
        Client::with_transport(endpoint, options, transport::shared())
    }
}

impl<T> Client<T> {
    /// Instantiate a new client which posts via `transport`.
    pub fn with_transport(endpoint: Url, options: Options, transport: T) -> Self {
        let mut client = Client {
            endpoint,
            default_channel: None,
            default_username: None,
            default_icon: None,
            link_names: false,
            unfurl_links: false,
            unfurl_media: true,
            allow_markdown: true,
            markdown_in_attachments: Vec::new(),
            transport,
        };

        client.apply(options);
        client
    }

    /// Apply every option that's been supplied, leaving the rest as they are.
    pub fn apply(&mut self, options: Options) -> &mut Self {
        if options.channel.is_some() {
            self.set_default_channel(options.channel);
        }
        if options.username.is_some() {
            self.set_default_username(options.username);
        }
        if options.icon.is_some() {
            self.set_default_icon(options.icon);
        }
        if let Some(x) = options.link_names {
            self.set_link_names(x);
        }
        if let Some(x) = options.unfurl_links {
            self.set_unfurl_links(x);
        }
        if let Some(x) = options.unfurl_media {
            self.set_unfurl_media(x);
        }
        if let Some(x) = options.allow_markdown {
            self.set_allow_markdown(x);
        }
        if let Some(x) = options.markdown_in_attachments {
            self.set_markdown_in_attachments(x);
        }

        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn set_endpoint(&mut self, endpoint: Url) -> &mut Self {
        self.endpoint = endpoint;
        self
    }

    pub fn default_channel(&self) -> Option<&str> {
        self.default_channel.as_deref()
    }

    pub fn set_default_channel(&mut self, channel: Option<String>) -> &mut Self {
        self.default_channel = channel;
        self
    }

    pub fn default_username(&self) -> Option<&str> {
        self.default_username.as_deref()
    }

    pub fn set_default_username(&mut self, username: Option<String>) -> &mut Self {
        self.default_username = username;
        self
    }

    pub fn default_icon(&self) -> Option<&str> {
        self.default_icon.as_deref()
    }

    pub fn set_default_icon(&mut self, icon: Option<String>) -> &mut Self {
        self.default_icon = icon;
        self
    }

    /// Whether `@user` and `#channel` in plain text are turned into links.
    pub fn link_names(&self) -> bool {
        self.link_names
    }

    pub fn set_link_names(&mut self, x: bool) -> &mut Self {
        self.link_names = x;
        self
    }

    pub fn unfurl_links(&self) -> bool {
        self.unfurl_links
    }

    pub fn set_unfurl_links(&mut self, x: bool) -> &mut Self {
        self.unfurl_links = x;
        self
    }

    pub fn unfurl_media(&self) -> bool {
        self.unfurl_media
    }

    pub fn set_unfurl_media(&mut self, x: bool) -> &mut Self {
        self.unfurl_media = x;
        self
    }

    pub fn allow_markdown(&self) -> bool {
        self.allow_markdown
    }

    pub fn set_allow_markdown(&mut self, x: bool) -> &mut Self {
        self.allow_markdown = x;
        self
    }

    pub fn markdown_in_attachments(&self) -> &[String] {
        &self.markdown_in_attachments
    }

    pub fn set_markdown_in_attachments(&mut self, fields: Vec<String>) -> &mut Self {
        self.markdown_in_attachments = fields;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a message carrying a copy of the current defaults.
    pub fn create_message(&self) -> Message {
        Message::seeded(
            self.default_channel.clone(),
            self.default_username.clone(),
            self.default_icon.clone(),
            self.allow_markdown,
            self.markdown_in_attachments.clone(),
        )
    }

    /// A fresh message sent to `channel` instead of the default.
    pub fn to<S: Into<String>>(&self, channel: S) -> Message {
        let mut msg = self.create_message();
        msg.to(channel);
        msg
    }

    /// A fresh message sent as `username` instead of the default.
    pub fn from<S: Into<String>>(&self, username: S) -> Message {
        let mut msg = self.create_message();
        msg.from(username);
        msg
    }

    /// A fresh message with `icon` instead of the default.
    pub fn with_icon<S: Into<String>>(&self, icon: S) -> Message {
        let mut msg = self.create_message();
        msg.with_icon(icon);
        msg
    }

    /// A fresh message carrying `attachment`.
    pub fn attach(&self, attachment: Attachment) -> Message {
        let mut msg = self.create_message();
        msg.attach(attachment);
        msg
    }

    /// Merge a message with this client's flags into the structure that's
    /// sent over the wire.
    ///
    /// The message's channel, username and icon are taken as-is; defaults
    /// were already copied into it on creation.
    pub fn payload<'a>(&'a self, msg: &'a Message) -> Payload<'a> {
        Payload {
            text: msg.text(),
            channel: msg.channel(),
            username: msg.username(),
            link_names: self.link_names,
            unfurl_links: self.unfurl_links,
            unfurl_media: self.unfurl_media,
            mrkdwn: msg.allow_markdown(),
            icon: msg.icon().map(|x| (msg.icon_type(), x)),
            attachments: msg.attachments(),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Encode a message and `POST` it to the endpoint, once.
    pub async fn send_message(&self, msg: &Message) -> Result<(), SendError<T::Error>> {
        let body = serde_json::to_string(&self.payload(msg)).map_err(SendError::Encode)?;

        debug!(
            endpoint = %self.endpoint,
            attachments = msg.attachments().len(),
            bytes = body.len(),
            "Posting message"
        );

        self.transport
            .post(&self.endpoint, body)
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, "Webhook request failed");
                SendError::Transport(e)
            })
    }

    /// Send a fresh message with the given text.
    pub async fn send<S: Into<String>>(&self, text: S) -> Result<(), SendError<T::Error>> {
        let mut msg = self.create_message();
        msg.set_text(text);

        self.send_message(&msg).await
    }
}
