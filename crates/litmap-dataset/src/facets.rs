//! Facet index: the category options offered by the filter controls.

use std::collections::HashMap;

use crate::dataset::Dataset;

impl Dataset {
    /// Up to `limit` category names at `level`, ordered by descending
    /// frequency of occurrence. Ties keep first-encountered order (the
    /// sort is stable over the encounter-ordered tally).
    pub fn top_categories(&self, level: u8, limit: usize) -> Vec<String> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut tallies: Vec<(&str, usize)> = Vec::new();

        for record in self.records().iter().filter(|r| r.level == level) {
            match positions.get(record.name.as_str()) {
                Some(&i) => tallies[i].1 += 1,
                None => {
                    positions.insert(record.name.as_str(), tallies.len());
                    tallies.push((record.name.as_str(), 1));
                }
            }
        }

        tallies.sort_by(|a, b| b.1.cmp(&a.1));
        tallies
            .into_iter()
            .take(limit)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
