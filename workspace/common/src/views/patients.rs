use crate::prediction::PredictionRecord;

/// A list item whose key stays unique even when labels repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub label: String,
}

/// Concatenate lists in order, keeping duplicates. Keys combine the label
/// with its position in the merged sequence.
pub fn merge_tags<'a, I>(lists: I) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a [String]>,
{
    lists
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(idx, label)| Tag {
            key: format!("{}-{}", label, idx),
            label: label.clone(),
        })
        .collect()
}

/// Expected patient types across pollution, festival and disease.
pub fn patient_mix(record: &PredictionRecord) -> Vec<Tag> {
    merge_tags(
        record
            .impact_factors()
            .into_iter()
            .flatten()
            .map(|factor| factor.expected_patient_types.as_slice()),
    )
}

/// Recommendations across the impact factors, same order as [`patient_mix`].
pub fn recommendations(record: &PredictionRecord) -> Vec<Tag> {
    merge_tags(
        record
            .impact_factors()
            .into_iter()
            .flatten()
            .map(|factor| factor.recommendations.as_slice()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_preserves_order_and_duplicates() {
        let record: PredictionRecord = serde_json::from_value(json!({
            "pollution": {"pollution_impact": {"expected_patient_types": ["A", "B"]}},
            "festival": {"festival_impact": {"expected_patient_types": []}},
            "disease": {"disease_impact": {"expected_patient_types": ["C", "A"]}}
        }))
        .unwrap();

        let tags = patient_mix(&record);
        let labels: Vec<&str> = tags.iter().map(|t| t.label.as_str()).collect();
        let keys: Vec<&str> = tags.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "A"]);
        assert_eq!(keys, vec!["A-0", "B-1", "C-2", "A-3"]);
    }

    #[test]
    fn test_absent_factors_contribute_nothing() {
        let record: PredictionRecord = serde_json::from_value(json!({
            "festival": {"festival_impact": {"expected_patient_types": ["Burns"],
                "recommendations": ["Stock burn dressings"]}}
        }))
        .unwrap();

        assert_eq!(
            patient_mix(&record),
            vec![Tag { key: "Burns-0".to_string(), label: "Burns".to_string() }]
        );
        assert_eq!(recommendations(&record)[0].label, "Stock burn dressings");
        assert!(patient_mix(&PredictionRecord::default()).is_empty());
    }
}
