use crate::chat::context::ConversationContext;
use crate::config::responses::FallbackTemplates;

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}

/// Templated reply for an utterance nothing in the trigger tables matched.
/// Branches are checked in a fixed order; an unrecognized "need" falls
/// through to the later branches rather than answering generically.
pub fn generate(
    lower: &str,
    context: &ConversationContext,
    templates: &FallbackTemplates,
) -> String {
    if contains_any(lower, &["?", "how", "what", "why", "when", "where"]) {
        if contains_any(lower, &["restaurant", "food", "cafe"]) {
            return templates.question_restaurant.clone();
        }
        if contains_any(lower, &["healthcare", "medical", "doctor"]) {
            return templates.question_healthcare.clone();
        }
        if contains_any(lower, &["ecommerce", "shop", "sell"]) {
            return templates.question_ecommerce.clone();
        }
        if contains_any(lower, &["mobile", "phone", "tablet"]) {
            return templates.question_mobile.clone();
        }
        if contains_any(lower, &["seo", "search", "google"]) {
            return templates.question_seo.clone();
        }
        if contains_any(lower, &["business", "company", "startup"]) {
            return templates.question_business.clone();
        }
        return templates.question_generic.clone();
    }

    if contains_any(lower, &["need", "want", "looking for"]) {
        if contains_any(lower, &["website", "site"]) {
            return templates.need_website.clone();
        }
        if contains_any(lower, &["automation", "automate"]) {
            return templates.need_automation.clone();
        }
        if contains_any(lower, &["help", "assistance"]) {
            return templates.need_help.clone();
        }
    }

    if contains_any(lower, &["problem", "issue", "broken", "not working"]) {
        return templates.problem.clone();
    }

    if contains_any(lower, &["urgent", "asap", "quickly", "fast"]) {
        return templates.urgency.clone();
    }

    synthesize(context, templates)
}

/// Assembles the catch-all reply from whatever the conversation has
/// revealed so far: an industry fragment, a goals fragment, then a closing
/// question keyed on the first recorded goal.
fn synthesize(context: &ConversationContext, templates: &FallbackTemplates) -> String {
    let mut reply = templates.synth_opening.clone();

    if let Some(industry) = &context.user_industry {
        reply.push_str(&templates.synth_industry.replace("{industry}", industry));
    }

    if !context.user_goals.is_empty() {
        let goals = context.user_goals.join(", ");
        reply.push_str(&templates.synth_goals.replace("{goals}", &goals));
    }

    let closer = match (&context.user_industry, context.user_goals.first()) {
        (Some(industry), Some(goal)) => templates
            .synth_both
            .replace("{goal}", goal)
            .replace("{industry}", industry),
        (Some(industry), None) => templates.synth_industry_only.replace("{industry}", industry),
        (None, Some(goal)) => templates.synth_goals_only.replace("{goal}", goal),
        (None, None) => templates.synth_generic.clone(),
    };
    reply.push_str(&closer);
    reply.push_str(&templates.contact_suffix);

    reply
}
