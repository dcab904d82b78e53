//! Attribution records for annotation creators and generators.

use serde::{Deserialize, Serialize};

/// Kind of agent responsible for an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// A human contributor.
    Person,
    /// An organisation.
    Organization,
    /// A software application.
    Software,
}

/// Creator or generator of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    /// IRI identifying the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Agent kind.
    #[serde(rename = "type")]
    pub kind: AgentKind,
    /// Display name.
    pub name: String,
    /// Short name or handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Home page of the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl Agent {
    /// Creates an agent of the given kind.
    #[must_use]
    pub fn new(kind: AgentKind, name: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            name: name.into(),
            nickname: None,
            homepage: None,
        }
    }

    /// Creates a person agent.
    #[must_use]
    pub fn person(name: impl Into<String>) -> Self {
        Self::new(AgentKind::Person, name)
    }

    /// Creates a software agent.
    #[must_use]
    pub fn software(name: impl Into<String>) -> Self {
        Self::new(AgentKind::Software, name)
    }

    /// Sets the agent IRI.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the agent nickname.
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Sets the agent home page.
    #[must_use]
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }
}
