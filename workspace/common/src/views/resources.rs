use crate::prediction::{CountTable, PredictionRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub key: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyRow {
    pub key: String,
    pub estimate: String,
}

/// Row of a plain string list, keyed by its own value. The backend emits
/// unique values within each list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePlanView {
    pub staff: Vec<CountRow>,
    pub beds: Vec<CountRow>,
    pub supplies: Vec<SupplyRow>,
    pub checklist: Vec<ListRow>,
    pub shift_plan: Vec<ListRow>,
    pub notes: Vec<ListRow>,
}

pub fn resource_plan_view(record: &PredictionRecord) -> Option<ResourcePlanView> {
    let plan = record.resource_plan()?;
    let requirements = &plan.requirements;
    Some(ResourcePlanView {
        staff: count_rows(&requirements.staff),
        beds: count_rows(&requirements.beds),
        supplies: requirements
            .supplies
            .iter()
            .map(|(key, estimate)| SupplyRow {
                key: key.clone(),
                estimate: estimate.to_string(),
            })
            .collect(),
        checklist: list_rows(&plan.checklist),
        shift_plan: list_rows(&plan.shift_plan),
        notes: list_rows(&plan.notes),
    })
}

fn count_rows(table: &CountTable) -> Vec<CountRow> {
    table
        .iter()
        .map(|(key, count)| CountRow {
            key: key.clone(),
            count: *count,
        })
        .collect()
}

fn list_rows(items: &[String]) -> Vec<ListRow> {
    items.iter().map(|item| ListRow { key: item.clone() }).collect()
}
