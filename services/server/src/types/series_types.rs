use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
pub struct CreateSeriesRequest {
    #[validate(length(min = 1, message = "Series name is required"))]
    pub name: String,
    pub description: String,
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateOccurrenceRequest {
    #[validate(length(min = 1, message = "Occurrence title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
}
