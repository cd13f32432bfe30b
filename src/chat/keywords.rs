use crate::config::responses::KeywordEntry;

/// Relevance of one keyword hit: keyword length plus a position bonus that
/// favors earlier occurrences. Longer keywords dominate; the position term
/// only breaks ties between keywords of equal length.
fn score(keyword: &str, input: &str) -> Option<f64> {
    let index = input.find(keyword)?;
    if input.is_empty() {
        return None;
    }
    Some((keyword.len() as f64) + ((input.len() - index) as f64) / (input.len() as f64))
}

/// Picks the highest-scoring keyword present in the input. Equal scores
/// keep the earlier table entry.
pub fn best_match<'a>(input: &str, table: &'a [KeywordEntry]) -> Option<&'a KeywordEntry> {
    let mut best: Option<(&KeywordEntry, f64)> = None;

    for entry in table {
        if let Some(candidate) = score(&entry.keyword, input) {
            match best {
                Some((_, best_score)) if candidate <= best_score => {}
                _ => {
                    best = Some((entry, candidate));
                }
            }
        }
    }

    best.map(|(entry, _)| entry)
}
