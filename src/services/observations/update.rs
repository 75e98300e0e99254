use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::{ObservationService, edit_denied, load_observation, permission};
use crate::models::{
    ApiResponse, ErrorCode, observations::requests::UpdateObservationRequest,
};
use crate::services::access::internal_error;

pub async fn update_observation(
    service: &ObservationService,
    observation_id: i64,
    req: UpdateObservationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (observation, access) = match load_observation(&storage, request, observation_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };
    if !permission::can_edit(&observation, access.user.id, access.role) {
        return Ok(edit_denied());
    }

    if let Err(msg) = req.validate_levels() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ObservationInvalid,
            msg,
        )));
    }

    // 评分项必须属于情境的评估表格
    if let Some(items) = &req.criteria {
        let allowed: HashSet<i64> = match access.situation.eval_grid_id {
            Some(grid_id) => match storage.list_grid_criteria(grid_id).await {
                Ok(criteria) => criteria.into_iter().map(|c| c.id).collect(),
                Err(e) => return Ok(internal_error(format!("Failed to list criteria: {e}"))),
            },
            None => HashSet::new(),
        };
        if let Some(item) = items.iter().find(|i| !allowed.contains(&i.criterion_id)) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CriterionNotFound,
                format!(
                    "Criterion {} is not part of the evaluation grid",
                    item.criterion_id
                ),
            )));
        }
    }

    match storage
        .update_observation(observation_id, access.user.id, req)
        .await
    {
        Ok(Some(observation)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            observation,
            "Observation updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ObservationNotFound,
            "Observation not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to update observation: {e}"))),
    }
}
