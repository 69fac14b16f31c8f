use std::collections::HashMap;

use crate::models::{LanguageShare, Repository};
use crate::stats::round2;

/// Percentage of repositories per primary language, in first-seen order.
///
/// Repositories without a detected language are left out of both the counts
/// and the total. Each share is rounded on its own, so the sum can drift a
/// few hundredths away from 100.
pub fn language_distribution(repos: &[Repository]) -> Vec<LanguageShare> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();

    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        let count = counts.entry(language).or_insert_with(|| {
            order.push(language);
            0
        });
        *count += 1;
    }

    let total: u32 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    order
        .into_iter()
        .map(|language| LanguageShare {
            language: language.to_string(),
            percentage: round2(f64::from(counts[language]) / f64::from(total) * 100.0),
        })
        .collect()
}
