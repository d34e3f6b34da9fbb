//! Chat messages exchanged with the model service

use std::fmt;

/// Role of a message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Instruction that frames the model's behaviour
    System,

    /// Content supplied on behalf of the user
    User,

    /// Reply produced by the model
    Assistant,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-tagged piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Author role
    pub role: Role,

    /// Message text
    pub content: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One stateless chat completion request: a system instruction and a user
/// message. No history is carried between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// System instruction
    pub system: String,

    /// User message
    pub user: String,

    /// Ask the service to constrain its output to JSON
    pub json_mode: bool,
}

impl ChatRequest {
    /// Create a free-text request
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            json_mode: false,
        }
    }

    /// Request JSON-constrained output
    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }

    /// The messages in the order they are sent
    pub fn messages(&self) -> [Message; 2] {
        [Message::system(self.system.clone()), Message::user(self.user.clone())]
    }
}
