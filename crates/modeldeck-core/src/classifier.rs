//! Keyword classification of model identifiers into vendor groups

use crate::ModelId;
use crate::groups::{GroupDefinition, GroupTable};

/// Return the name of the first group whose keywords occur in `model`
/// (case-insensitively), or `default_name` when nothing matches.
pub fn classify<'a>(model: &str, groups: &'a [GroupDefinition], default_name: &'a str) -> &'a str {
    let model_lower = model.to_lowercase();
    groups
        .iter()
        .find(|group| group.matches(&model_lower))
        .map_or(default_name, |group| group.name.as_str())
}

/// One bucket of classified identifiers, in the order they were seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGroup {
    pub name: String,
    pub models: Vec<ModelId>,
}

/// Identifiers partitioned by group.
///
/// Groups keep first-seen order, which is also the tie-break when sorting
/// by size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedModels {
    groups: Vec<ModelGroup>,
}

impl GroupedModels {
    pub fn from_models(models: &[ModelId], table: &GroupTable) -> Self {
        let mut grouped = Self::default();
        for model in models {
            grouped.push(table.classify(model), model.clone());
        }
        grouped
    }

    fn push(&mut self, group_name: &str, model: ModelId) {
        match self.groups.iter_mut().find(|group| group.name == group_name) {
            Some(group) => group.models.push(model),
            None => self.groups.push(ModelGroup {
                name: group_name.to_string(),
                models: vec![model],
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[ModelId]> {
        self.groups
            .iter()
            .find(|group| group.name == name)
            .map(|group| group.models.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn model_count(&self) -> usize {
        self.groups.iter().map(|group| group.models.len()).sum()
    }

    /// Groups ordered by descending model count. The sort is stable, so
    /// equally sized groups stay in first-seen order.
    pub fn into_sorted(self) -> Vec<ModelGroup> {
        let mut groups = self.groups;
        groups.sort_by(|a, b| b.models.len().cmp(&a.models.len()));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::DEFAULT_GROUP_NAME;

    fn ids(values: &[&str]) -> Vec<ModelId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_classify_basic_vendors() {
        let table = GroupTable::builtin();
        assert_eq!(table.classify("gpt-4o"), "OpenAI");
        assert_eq!(table.classify("claude-3-opus"), "Claude");
        assert_eq!(table.classify("gemini-1.5-pro"), "Gemini");
        assert_eq!(table.classify("deepseek-chat"), "DeepSeek");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let table = GroupTable::builtin();
        assert_eq!(table.classify("GPT-4o"), "OpenAI");
        assert_eq!(table.classify("Claude-3-Haiku"), "Claude");
    }

    #[test]
    fn test_classify_unmatched_goes_to_default() {
        let table = GroupTable::builtin();
        assert_eq!(table.classify("unknown-model-x"), DEFAULT_GROUP_NAME);
    }

    #[test]
    fn test_classify_first_group_wins_on_overlap() {
        let table = GroupTable::builtin();
        // "gpt" (OpenAI) is checked before "qwen" (Qwen).
        assert_eq!(table.classify("qwen-gpt-distill"), "OpenAI");

        let groups = vec![
            GroupDefinition::new("Qwen", "q.png", &["qwen"]),
            GroupDefinition::new("OpenAI", "o.png", &["gpt"]),
        ];
        assert_eq!(classify("qwen-gpt-distill", &groups, "default"), "Qwen");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let table = GroupTable::builtin();
        let first = table.classify("moonshot-v1-8k").to_string();
        for _ in 0..10 {
            assert_eq!(table.classify("moonshot-v1-8k"), first);
        }
        assert_eq!(first, "Kimi");
    }

    #[test]
    fn test_classify_with_empty_group_list() {
        assert_eq!(classify("gpt-4o", &[], "fallback"), "fallback");
    }

    #[test]
    fn test_grouping_example_listing() {
        let table = GroupTable::builtin();
        let models = ids(&["gpt-4o", "claude-3-opus", "unknown-model-x"]);
        let grouped = GroupedModels::from_models(&models, &table);

        assert_eq!(grouped.get("OpenAI"), Some(&ids(&["gpt-4o"])[..]));
        assert_eq!(grouped.get("Claude"), Some(&ids(&["claude-3-opus"])[..]));
        assert_eq!(
            grouped.get(DEFAULT_GROUP_NAME),
            Some(&ids(&["unknown-model-x"])[..])
        );

        let order: Vec<String> = grouped.into_sorted().into_iter().map(|g| g.name).collect();
        assert_eq!(order, vec!["OpenAI", "Claude", DEFAULT_GROUP_NAME]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let table = GroupTable::builtin();
        let models = ids(&[
            "gpt-4o",
            "gpt-4o-mini",
            "claude-3-5-sonnet",
            "glm-4",
            "mystery",
            "qwen-max",
            "dall-e-3",
        ]);
        let grouped = GroupedModels::from_models(&models, &table);
        assert_eq!(grouped.model_count(), models.len());

        let sorted = grouped.into_sorted();
        for model in &models {
            let hits = sorted.iter().filter(|g| g.models.contains(model)).count();
            assert_eq!(hits, 1, "{} should be in exactly one group", model);
        }
    }

    #[test]
    fn test_sorted_by_descending_count_with_stable_ties() {
        let table = GroupTable::builtin();
        let models = ids(&["claude-3", "mystery", "gpt-4o", "gpt-4", "gpt-3.5", "deepseek-r1"]);
        let sorted = GroupedModels::from_models(&models, &table).into_sorted();
        let order: Vec<&str> = sorted.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(order, vec!["OpenAI", "Claude", DEFAULT_GROUP_NAME, "DeepSeek"]);
        assert_eq!(sorted[0].models, ids(&["gpt-4o", "gpt-4", "gpt-3.5"]));
    }

    #[test]
    fn test_empty_listing_has_no_groups() {
        let grouped = GroupedModels::from_models(&[], &GroupTable::builtin());
        assert!(grouped.is_empty());
        assert_eq!(grouped.model_count(), 0);
    }
}
