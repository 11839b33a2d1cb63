//! Search-related types and functionality

use rayon::prelude::*;
use std::cmp;

use crate::app_model::AppModel;

/// A scored match from a catalog search
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Position of the entry in the source catalog
    pub index: usize,
    pub model: AppModel,
    /// Weight for sorting search results (lower = better match)
    pub weight: i64,
}

/// Search entries by name, download URL, and icon URL.
///
/// The input is matched case-insensitively as a literal. Name matches rank
/// before URL matches; within a field, a full match ranks before a prefix
/// match, which ranks before an interior match.
pub fn search(apps: &[AppModel], input: &str) -> Vec<SearchResult> {
    let pattern = regex::escape(input);
    let regex = match regex::RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
    {
        Ok(ok) => ok,
        Err(err) => {
            log::warn!("failed to parse regex {:?}: {}", pattern, err);
            return Vec::new();
        }
    };

    let mut results: Vec<SearchResult> = apps
        .par_iter()
        .enumerate()
        .filter_map(|(index, model)| {
            //TODO: fuzzy match (nucleus-matcher?)
            let regex_weight = |string: &str, weight: i64| -> Option<i64> {
                let mat = regex.find(string)?;
                if mat.range().start == 0 {
                    if mat.range().end == string.len() {
                        Some(weight)
                    } else {
                        Some(weight + 1)
                    }
                } else {
                    Some(weight + 2)
                }
            };
            let weight = regex_weight(&model.name, 0)
                .or_else(|| regex_weight(&model.download, 3))
                .or_else(|| regex_weight(&model.icon, 6))?;
            Some(SearchResult {
                index,
                model: model.clone(),
                weight,
            })
        })
        .collect();

    results.par_sort_unstable_by(|a, b| match a.weight.cmp(&b.weight) {
        cmp::Ordering::Equal => a.model.name.cmp(&b.model.name),
        ordering => ordering,
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, download: &str, icon: &str) -> AppModel {
        AppModel {
            name: name.to_string(),
            download: download.to_string(),
            icon: icon.to_string(),
        }
    }

    fn names(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.model.name.as_str()).collect()
    }

    #[test]
    fn name_matches_rank_before_url_matches() {
        let apps = vec![
            model("Files", "https://example.com/weather.ipa", ""),
            model("Weather", "https://example.com/app.ipa", ""),
        ];
        let results = search(&apps, "weather");
        assert_eq!(names(&results), vec!["Weather", "Files"]);
    }

    #[test]
    fn full_match_ranks_before_prefix_and_interior() {
        let apps = vec![
            model("My Notes", "", ""),
            model("Notes", "", ""),
            model("Notes Pro", "", ""),
        ];
        let results = search(&apps, "notes");
        assert_eq!(names(&results), vec!["Notes", "Notes Pro", "My Notes"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let apps = vec![model("Weather", "", "")];
        let results = search(&apps, "WEATHER");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 0);
    }

    #[test]
    fn metacharacters_are_literal() {
        let apps = vec![
            model("C++ IDE", "", ""),
            model("Card", "", ""),
        ];
        let results = search(&apps, "c++");
        assert_eq!(names(&results), vec!["C++ IDE"]);
    }

    #[test]
    fn no_match_is_empty() {
        let apps = vec![model("Weather", "https://example.com/app.ipa", "")];
        assert!(search(&apps, "calculator").is_empty());
    }

    #[test]
    fn ties_break_by_name() {
        let apps = vec![
            model("Beta", "https://example.com/x.ipa", ""),
            model("Alpha", "https://example.com/x.ipa", ""),
        ];
        let results = search(&apps, "x.ipa");
        assert_eq!(names(&results), vec!["Alpha", "Beta"]);
    }
}
