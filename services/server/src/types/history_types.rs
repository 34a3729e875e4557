use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub proposal_occurrence_id: Option<u64>,
    pub expense_occurrence_id: Option<u64>,
}
