use serde::{ Serialize, Deserialize };

use crate::config::responses::GoalRule;

/// How many raw utterances the context keeps for reference.
pub const PREVIOUS_QUESTION_LIMIT: usize = 5;

/// Shallow per-conversation state. Updated on every user message, before
/// reply selection, so the fallback branches see the current utterance's
/// industry and goal mentions.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ConversationContext {
    pub last_topic: Option<String>,
    pub user_industry: Option<String>,
    pub user_goals: Vec<String>,
    pub previous_questions: Vec<String>,
    pub follow_up_needed: bool,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one utterance into the context: first industry mention sets
    /// the topic, every matched goal tag is appended (repeat mentions
    /// accumulate), the raw utterance joins the bounded history, and the
    /// follow-up flag tracks interrogative markers.
    pub fn absorb(&mut self, input: &str, industries: &[String], goals: &[GoalRule]) {
        let lower = input.to_lowercase();

        for industry in industries {
            if lower.contains(industry.as_str()) {
                self.last_topic = Some(industry.clone());
                self.user_industry = Some(industry.clone());
                break;
            }
        }

        for goal in goals {
            if goal.triggers.iter().any(|trigger| lower.contains(trigger.as_str())) {
                self.user_goals.push(goal.tag.clone());
            }
        }

        self.previous_questions.push(input.to_string());
        if self.previous_questions.len() > PREVIOUS_QUESTION_LIMIT {
            self.previous_questions.remove(0);
        }

        self.follow_up_needed =
            lower.contains('?') ||
            lower.contains("how") ||
            lower.contains("what") ||
            lower.contains("why");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn industries() -> Vec<String> {
        vec![
            "restaurant".to_string(),
            "healthcare".to_string(),
            "ecommerce".to_string(),
            "gym".to_string()
        ]
    }

    fn goals() -> Vec<GoalRule> {
        vec![
            GoalRule {
                tag: "website".to_string(),
                triggers: vec!["website".to_string(), "site".to_string()],
            },
            GoalRule {
                tag: "seo".to_string(),
                triggers: vec!["seo".to_string(), "search".to_string()],
            }
        ]
    }

    #[test]
    fn first_industry_mention_sets_topic_and_industry() {
        let mut context = ConversationContext::new();
        context.absorb("I run a gym and a restaurant", &industries(), &goals());
        // Table order decides, not position in the utterance
        assert_eq!(context.user_industry.as_deref(), Some("restaurant"));
        assert_eq!(context.last_topic.as_deref(), Some("restaurant"));
    }

    #[test]
    fn goal_tags_accumulate_without_dedup() {
        let mut context = ConversationContext::new();
        context.absorb("I want a website", &industries(), &goals());
        context.absorb("the website should rank in search", &industries(), &goals());
        assert_eq!(context.user_goals, vec!["website", "website", "seo"]);
    }

    #[test]
    fn question_history_is_capped_at_five() {
        let mut context = ConversationContext::new();
        for i in 0..7 {
            context.absorb(&format!("message {}", i), &industries(), &goals());
        }
        assert_eq!(context.previous_questions.len(), PREVIOUS_QUESTION_LIMIT);
        assert_eq!(context.previous_questions[0], "message 2");
        assert_eq!(context.previous_questions[4], "message 6");
    }

    #[test]
    fn follow_up_tracks_interrogative_markers() {
        let mut context = ConversationContext::new();

        context.absorb("what do you build", &industries(), &goals());
        assert!(context.follow_up_needed);

        context.absorb("thanks, that helps", &industries(), &goals());
        assert!(!context.follow_up_needed);

        // "when" alone does not flip the flag
        context.absorb("when can we start", &industries(), &goals());
        assert!(!context.follow_up_needed);
    }
}
