use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Rolling history cap: only the most recent exchanges are kept.
pub const HISTORY_CAP: usize = 20;

/// Date format accepted for birthdates.
pub const DOB_FORMAT: &str = "%d-%m-%Y";

/// One question/answer exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exchange {
    pub q: String,
    pub a: String,
}

/// Whole-file JSON chat memory: a capped rolling history plus optional
/// personal facts. Read and written as a single document, never
/// incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMemory {
    #[serde(default)]
    pub chat_history: Vec<Exchange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl ChatMemory {
    /// Load memory from a JSON file; a missing file is an empty memory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the whole memory document.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Append an exchange, dropping the oldest beyond [`HISTORY_CAP`].
    pub fn remember(&mut self, question: &str, answer: &str) {
        self.chat_history.push(Exchange {
            q: question.to_string(),
            a: answer.to_string(),
        });
        if self.chat_history.len() > HISTORY_CAP {
            let excess = self.chat_history.len() - HISTORY_CAP;
            self.chat_history.drain(..excess);
        }
    }

    /// Most recent past answer whose question contains the fragment.
    pub fn recall_previous(&self, fragment: &str) -> Option<&str> {
        self.chat_history
            .iter()
            .rev()
            .find(|item| item.q.contains(fragment))
            .map(|item| item.a.as_str())
    }

    /// Store a personal fact stated in the message, if any.
    ///
    /// Returns the confirmation (or correction) reply, or `None` when the
    /// message states no fact. `today` is injected so age computation is
    /// testable.
    pub fn remember_fact(&mut self, msg: &str, today: NaiveDate) -> Option<String> {
        if let Some(rest) = msg.split("my name is").nth(1) {
            let name = title_case(rest.trim());
            if name.is_empty() {
                return None;
            }
            self.user_name = Some(name.clone());
            return Some(format!("Got it. Your name is {}.", name));
        }

        if msg.contains("my birthdate is") || msg.contains("my dob is") {
            let date_str = msg
                .replace("my birthdate is", "")
                .replace("my dob is", "")
                .trim()
                .to_string();

            return Some(match NaiveDate::parse_from_str(&date_str, DOB_FORMAT) {
                Ok(dob) => {
                    self.dob = Some(date_str);
                    self.age = Some(today.year() - dob.year());
                    "Your birthdate is saved.".to_string()
                }
                Err(_) => "Please use DD-MM-YYYY format.".to_string(),
            });
        }

        None
    }

    /// Answer a question about a stored personal fact, if any.
    pub fn recall_fact(&self, msg: &str) -> Option<String> {
        if msg.contains("my name") {
            return self.user_name.clone();
        }
        if msg.contains("my birthdate") {
            return self.dob.clone();
        }
        if msg.contains("my age") {
            return self.age.map(|age| age.to_string());
        }
        None
    }
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
