use serde::Serialize;
use ts_rs::TS;

use super::entities::{Observation, ObservationComment, ObservationCriterionEntry};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationDetail {
    pub observation: Observation,
    pub criteria: Vec<ObservationCriterionEntry>,
    pub comments: Vec<ObservationComment>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationListResponse {
    pub planning_id: i64,
    pub items: Vec<Observation>,
}
