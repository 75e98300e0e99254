use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "search.ts")]
pub struct SearchParams {
    pub q: String,
}
