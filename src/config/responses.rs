use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use log::info;

use crate::config::ContentError;

#[derive(Deserialize, Debug, Clone)]
pub struct CannedEntry {
    pub trigger: String,
    pub response: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct KeywordEntry {
    pub keyword: String,
    pub triggers: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EscalationRules {
    pub keywords: Vec<String>,
    pub max_question_marks: usize,
    pub max_length: usize,
    pub human_words: Vec<String>,
    pub response: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GoalRule {
    pub tag: String,
    pub triggers: Vec<String>,
}

/// Texts for the generated-reply branches. A missing key is a parse error
/// at load time, so the responder itself never has a failure path.
#[derive(Deserialize, Debug, Clone)]
pub struct FallbackTemplates {
    pub question_restaurant: String,
    pub question_healthcare: String,
    pub question_ecommerce: String,
    pub question_mobile: String,
    pub question_seo: String,
    pub question_business: String,
    pub question_generic: String,
    pub need_website: String,
    pub need_automation: String,
    pub need_help: String,
    pub problem: String,
    pub urgency: String,
    pub synth_opening: String,
    pub synth_industry: String,
    pub synth_goals: String,
    pub synth_both: String,
    pub synth_industry_only: String,
    pub synth_goals_only: String,
    pub synth_generic: String,
    pub contact_suffix: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResponseConfig {
    pub greeting: String,
    pub quick_replies: Vec<String>,
    pub canned: Vec<CannedEntry>,
    pub keywords: Vec<KeywordEntry>,
    pub escalation: EscalationRules,
    pub industries: Vec<String>,
    pub goals: Vec<GoalRule>,
    pub templates: FallbackTemplates,
    #[serde(skip)]
    pub last_loaded: Option<SystemTime>,
}

impl ResponseConfig {
    pub fn canned_response(&self, trigger: &str) -> Option<&str> {
        self.canned
            .iter()
            .find(|entry| entry.trigger == trigger)
            .map(|entry| entry.response.as_str())
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.greeting.trim().is_empty() {
            return Err(ContentError::MissingEntry("greeting".to_string()));
        }
        if self.canned.is_empty() {
            return Err(ContentError::EmptyTable("canned".to_string()));
        }
        if self.industries.is_empty() {
            return Err(ContentError::EmptyTable("industries".to_string()));
        }
        if self.goals.is_empty() {
            return Err(ContentError::EmptyTable("goals".to_string()));
        }
        if self.escalation.response.trim().is_empty() {
            return Err(ContentError::MissingEntry("escalation:response".to_string()));
        }
        for entry in &self.keywords {
            let resolvable = entry.triggers.iter().any(|t| self.canned_response(t).is_some());
            if !resolvable {
                return Err(ContentError::UnknownTrigger(entry.keyword.clone()));
            }
        }
        Ok(())
    }

    // Matching runs against lowercased input, so all matcher strings are
    // lowercased once here instead of per message.
    fn normalize(&mut self) {
        for entry in &mut self.canned {
            entry.trigger = entry.trigger.to_lowercase();
        }
        for entry in &mut self.keywords {
            entry.keyword = entry.keyword.to_lowercase();
            for trigger in &mut entry.triggers {
                *trigger = trigger.to_lowercase();
            }
        }
        for keyword in &mut self.escalation.keywords {
            *keyword = keyword.to_lowercase();
        }
        for word in &mut self.escalation.human_words {
            *word = word.to_lowercase();
        }
        for industry in &mut self.industries {
            *industry = industry.to_lowercase();
        }
        for goal in &mut self.goals {
            for trigger in &mut goal.triggers {
                *trigger = trigger.to_lowercase();
            }
        }
    }
}

pub fn load_responses(path: &str) -> Result<Arc<ResponseConfig>, Box<dyn Error + Send + Sync>> {
    let file_content = fs
        ::read_to_string(path)
        .map_err(|e| format!("Failed to read responses file '{}': {}", path, e))?;
    let mut config: ResponseConfig = serde_json
        ::from_str(&file_content)
        .map_err(|e| format!("Failed to parse responses file '{}': {}", path, e))?;
    config.normalize();
    config.validate()?;
    config.last_loaded = Some(SystemTime::now());
    Ok(Arc::new(config))
}

pub fn reload_responses_if_changed<P: AsRef<Path>>(
    path: P,
    current_config: &Arc<ResponseConfig>
) -> Result<Option<Arc<ResponseConfig>>, ContentError> {
    let metadata = fs::metadata(&path)?;

    if let Ok(modified) = metadata.modified() {
        if let Some(last_loaded) = current_config.last_loaded {
            if modified > last_loaded {
                info!("Responses file changed, reloading...");
                let new_config = load_responses(path.as_ref().to_str().unwrap()).map_err(|e|
                    ContentError::ReloadError(e.to_string())
                )?;
                return Ok(Some(new_config));
            }
        } else {
            info!("No last_loaded timestamp, reloading responses...");
            let new_config = load_responses(path.as_ref().to_str().unwrap()).map_err(|e|
                ContentError::ReloadError(e.to_string())
            )?;
            return Ok(Some(new_config));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    pub(crate) fn sample_value() -> serde_json::Value {
        json!({
            "greeting": "Hi there! What would you like to know?",
            "quick_replies": ["What services do you offer?"],
            "canned": [
                { "trigger": "pricing", "response": "Our pricing is customized." },
                { "trigger": "services", "response": "We build websites." }
            ],
            "keywords": [
                { "keyword": "price", "triggers": ["pricing"] }
            ],
            "escalation": {
                "keywords": ["api"],
                "max_question_marks": 2,
                "max_length": 200,
                "human_words": ["human"],
                "response": "Let me connect you with our team."
            },
            "industries": ["restaurant"],
            "goals": [
                { "tag": "website", "triggers": ["website", "site"] }
            ],
            "templates": {
                "question_restaurant": "q-restaurant",
                "question_healthcare": "q-healthcare",
                "question_ecommerce": "q-ecommerce",
                "question_mobile": "q-mobile",
                "question_seo": "q-seo",
                "question_business": "q-business",
                "question_generic": "q-generic",
                "need_website": "n-website",
                "need_automation": "n-automation",
                "need_help": "n-help",
                "problem": "t-problem",
                "urgency": "t-urgency",
                "synth_opening": "Thank you for your message! ",
                "synth_industry": "I see you're interested in {industry} solutions. ",
                "synth_goals": "Based on your interest in {goals}, ",
                "synth_both": "What challenges are you facing with {goal} in {industry}?",
                "synth_industry_only": "I can help with {industry} solutions.",
                "synth_goals_only": "I can help with {goal} solutions.",
                "synth_generic": "Could you tell me more?",
                "contact_suffix": " You can also contact us."
            }
        })
    }

    fn write_sample(value: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_and_normalizes_sample_config() {
        let mut value = sample_value();
        value["canned"][0]["trigger"] = json!("PRICING");
        let file = write_sample(&value);

        let config = load_responses(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.canned[0].trigger, "pricing");
        assert!(config.last_loaded.is_some());
        assert_eq!(config.canned_response("pricing"), Some("Our pricing is customized."));
    }

    #[test]
    fn rejects_keyword_with_unknown_trigger() {
        let mut value = sample_value();
        value["keywords"][0]["triggers"] = json!(["no-such-trigger"]);
        let file = write_sample(&value);

        let err = load_responses(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn rejects_missing_template_key() {
        let mut value = sample_value();
        value["templates"].as_object_mut().unwrap().remove("synth_generic");
        let file = write_sample(&value);

        assert!(load_responses(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn reload_skips_unchanged_file() {
        let file = write_sample(&sample_value());
        let config = load_responses(file.path().to_str().unwrap()).unwrap();

        let result = reload_responses_if_changed(file.path(), &config).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn reload_picks_up_rewritten_file() {
        let file = write_sample(&sample_value());
        let config = load_responses(file.path().to_str().unwrap()).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(20));
        let mut value = sample_value();
        value["greeting"] = json!("Hello again!");
        std::fs::write(file.path(), value.to_string()).unwrap();

        let reloaded = reload_responses_if_changed(file.path(), &config)
            .unwrap()
            .expect("changed file should reload");
        assert_eq!(reloaded.greeting, "Hello again!");
    }
}
