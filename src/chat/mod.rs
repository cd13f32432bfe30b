pub mod context;
pub mod escalation;
pub mod fallback;
pub mod keywords;

pub use context::ConversationContext;

use std::sync::Arc;

use crate::config::responses::ResponseConfig;

/// Scripted reply engine behind the site's chat widget.
///
/// Matching runs in a fixed precedence order: escalation rules, then
/// exact trigger-phrase containment in table order, then keyword scoring,
/// then the templated fallbacks. The same utterance against the same
/// context always yields the same reply, and there is no failure path.
pub struct Responder {
    config: Arc<ResponseConfig>,
}

impl Responder {
    pub fn new(config: Arc<ResponseConfig>) -> Self {
        Self { config }
    }

    pub fn set_config(&mut self, config: Arc<ResponseConfig>) {
        self.config = config;
    }

    pub fn greeting(&self) -> &str {
        &self.config.greeting
    }

    pub fn quick_replies(&self) -> &[String] {
        &self.config.quick_replies
    }

    /// Produces the reply for one user utterance. The conversation context
    /// is folded forward first, so the fallback branches see the current
    /// message's industry and goal mentions.
    pub fn respond(&self, context: &mut ConversationContext, input: &str) -> String {
        context.absorb(input, &self.config.industries, &self.config.goals);
        let lower = input.to_lowercase();

        if escalation::needs_human(&lower, &self.config.escalation) {
            return self.config.escalation.response.clone();
        }

        for entry in &self.config.canned {
            if lower.contains(entry.trigger.as_str()) {
                return entry.response.clone();
            }
        }

        if let Some(winner) = keywords::best_match(&lower, &self.config.keywords) {
            for trigger in &winner.triggers {
                if let Some(response) = self.config.canned_response(trigger) {
                    return response.to_string();
                }
            }
        }

        fallback::generate(&lower, context, &self.config.templates)
    }
}
