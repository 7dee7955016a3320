use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::Local;
use thiserror::Error;

use crate::chat::intent::{Intent, clean_entity, detect_intent};
use crate::chat::memory::ChatMemory;
use crate::error::Result;

/// Failure of an external lookup, distinct from "looked and found nothing".
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// External factual-search collaborator. Implementations wrap web APIs
/// (Wikipedia and a fallback search engine); this crate ships no HTTP
/// client of its own.
pub trait SearchProvider {
    fn wikipedia(&self, query: &str) -> std::result::Result<Option<String>, SearchError>;
    fn fallback(&self, query: &str) -> std::result::Result<Option<String>, SearchError>;
}

/// External math-solving collaborator; `None` means the query was not a
/// math question it could handle.
pub trait MathDelegate {
    fn solve(&self, query: &str) -> Option<String>;
}

/// External spelling-correction collaborator applied before routing.
pub trait QueryCorrector {
    fn correct(&self, query: &str) -> String;
}

/// Inert provider for offline use: every lookup finds nothing.
pub struct OfflineSearch;

impl SearchProvider for OfflineSearch {
    fn wikipedia(&self, _query: &str) -> std::result::Result<Option<String>, SearchError> {
        Ok(None)
    }

    fn fallback(&self, _query: &str) -> std::result::Result<Option<String>, SearchError> {
        Ok(None)
    }
}

/// Math delegate that handles nothing; routing falls through to search.
pub struct NoMath;

impl MathDelegate for NoMath {
    fn solve(&self, _query: &str) -> Option<String> {
        None
    }
}

/// Identity corrector.
pub struct NoCorrection;

impl QueryCorrector for NoCorrection {
    fn correct(&self, query: &str) -> String {
        query.to_string()
    }
}

/// Per-session routing state. Replaces the reference implementation's
/// process-wide mutable topic.
#[derive(Debug, Default)]
pub struct SessionContext {
    /// Entity of the most recent factual lookup.
    pub last_topic: Option<String>,
}

pub const DEFAULT_REPLY: &str = "I couldn't find a direct answer to that.";
pub const GREETING_REPLY: &str = "Hey. How can I help you?";

/// Keyword-routed chatbot over pluggable external collaborators.
pub struct ChatRouter<'a> {
    search: &'a dyn SearchProvider,
    math: &'a dyn MathDelegate,
    corrector: &'a dyn QueryCorrector,
    tech_answers: HashMap<String, String>,
}

impl<'a> ChatRouter<'a> {
    pub fn new(
        search: &'a dyn SearchProvider,
        math: &'a dyn MathDelegate,
        corrector: &'a dyn QueryCorrector,
    ) -> Self {
        Self {
            search,
            math,
            corrector,
            tech_answers: HashMap::new(),
        }
    }

    /// Load the keyword->answer tech lookup table from a JSON file. A
    /// missing file leaves the table empty.
    pub fn with_tech_answers<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            let content = fs::read_to_string(path)?;
            self.tech_answers = serde_json::from_str(&content)?;
        }
        Ok(self)
    }

    fn tech_answer(&self, msg: &str) -> Option<String> {
        self.tech_answers
            .iter()
            .find(|(key, _)| msg.contains(key.as_str()))
            .map(|(_, value)| value.clone())
    }

    /// Route one message and produce a reply.
    ///
    /// Fixed order: small talk, math, personal-fact save, personal-fact
    /// recall, tech lookup, web search (wikipedia then fallback),
    /// chat-history recall, default. Search failures are logged and routing
    /// continues; answered exchanges are appended to memory.
    pub fn respond(
        &self,
        message: &str,
        memory: &mut ChatMemory,
        ctx: &mut SessionContext,
    ) -> String {
        let corrected = self.corrector.correct(message);
        let msg = corrected.to_lowercase().trim().to_string();

        let intent = detect_intent(&msg);
        tracing::debug!(?intent, msg = %msg, "routing chat message");

        if intent == Intent::SmallTalk {
            return GREETING_REPLY.to_string();
        }

        if intent == Intent::Math {
            if let Some(answer) = self.math.solve(&msg) {
                return answer;
            }
        }

        if let Some(saved) = memory.remember_fact(&msg, Local::now().date_naive()) {
            memory.remember(&corrected, &saved);
            return saved;
        }

        if let Some(recalled) = memory.recall_fact(&msg) {
            return recalled;
        }

        if intent == Intent::Tech {
            if let Some(tech) = self.tech_answer(&msg) {
                memory.remember(&corrected, &tech);
                return tech;
            }
        }

        let entity = clean_entity(&msg);
        ctx.last_topic = Some(entity.clone());

        if let Some(summary) = self.lookup(&entity) {
            memory.remember(&corrected, &summary);
            return summary;
        }

        if let Some(past) = memory.recall_previous(&msg) {
            return past.to_string();
        }

        DEFAULT_REPLY.to_string()
    }

    /// Wikipedia first, then the fallback engine. A failed provider is
    /// logged and skipped rather than aborting the route.
    fn lookup(&self, entity: &str) -> Option<String> {
        match self.search.wikipedia(entity) {
            Ok(Some(summary)) => return Some(summary),
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, entity, "wikipedia lookup failed"),
        }

        match self.search.fallback(entity) {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(%err, entity, "fallback lookup failed");
                None
            }
        }
    }
}
