use crate::config::responses::EscalationRules;

/// Decides whether a message should skip the scripted tables and go to a
/// human instead. `lower` is the already-lowercased utterance.
pub fn needs_human(lower: &str, rules: &EscalationRules) -> bool {
    if rules.keywords.iter().any(|keyword| lower.contains(keyword.as_str())) {
        return true;
    }

    let question_marks = lower.matches('?').count();
    if question_marks > rules.max_question_marks {
        return true;
    }

    if lower.chars().count() > rules.max_length {
        return true;
    }

    rules.human_words.iter().any(|word| lower.contains(word.as_str()))
}
