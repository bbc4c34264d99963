//! Response dispatcher - Routes a question to one canned answer

use crate::domain::entities::{Message, RuleTable};
use crate::domain::traits::Responder;
use crate::infrastructure::knowledge;

/// Outcome of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Name of the matched rule, `None` when the fallback was used
    pub rule: Option<&'a str>,
    pub text: &'a str,
}

impl Selection<'_> {
    pub fn is_fallback(&self) -> bool {
        self.rule.is_none()
    }
}

/// First-match-wins dispatcher over an ordered rule table.
///
/// Rules never consume a question: if a group's keyword is present but none of
/// its specific rules match, evaluation continues with the next group.
#[derive(Debug, Clone)]
pub struct ResponseDispatcher {
    rules: RuleTable,
    fallback: String,
}

impl ResponseDispatcher {
    pub fn new(rules: RuleTable, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Dispatcher over the built-in Minecraft knowledge base
    pub fn minecraft() -> Self {
        Self::new(knowledge::minecraft_rules().clone(), knowledge::FALLBACK)
    }

    pub fn select(&self, question: &str) -> Selection<'_> {
        let lowered = question.to_lowercase();
        match self.rules.first_match(&lowered) {
            Some(rule) => Selection {
                rule: Some(rule.name.as_str()),
                text: rule.response.as_str(),
            },
            None => Selection {
                rule: None,
                text: self.fallback.as_str(),
            },
        }
    }

    /// Answer a question. `history` is accepted for interface compatibility and
    /// does not influence the selection.
    pub fn select_response(&self, question: &str, _history: &[Message]) -> String {
        let selection = self.select(question);
        tracing::debug!(
            rule = selection.rule.unwrap_or("fallback"),
            "Dispatched question"
        );
        selection.text.to_string()
    }
}

impl Responder for ResponseDispatcher {
    fn name(&self) -> &str {
        "minecraft-knowledge"
    }

    fn respond(&self, question: &str, history: &[Message]) -> String {
        self.select_response(question, history)
    }
}
