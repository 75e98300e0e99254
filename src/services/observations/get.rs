use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ObservationService, detail, load_observation};
use crate::models::{
    ApiResponse,
    grids::entities::build_criteria_tree,
    observations::responses::ObservationDetail,
};
use crate::services::access::internal_error;

pub async fn get_observation(
    service: &ObservationService,
    observation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (observation, access) = match load_observation(&storage, request, observation_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };

    let criteria = match access.situation.eval_grid_id {
        Some(grid_id) => match storage.list_grid_criteria(grid_id).await {
            Ok(criteria) => criteria,
            Err(e) => return Ok(internal_error(format!("Failed to list criteria: {e}"))),
        },
        None => Vec::new(),
    };

    let (values, comments) = match storage.get_observation_values(observation_id).await {
        Ok(stored) => stored,
        Err(e) => return Ok(internal_error(format!("Failed to load observation values: {e}"))),
    };

    let viewer_is_observed = access.user.id == observation.student_id;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ObservationDetail {
            criteria: detail::merge_criteria(build_criteria_tree(criteria), &values),
            comments: detail::visible_comments(comments, access.user.id, viewer_is_observed),
            observation,
        },
        "Observation retrieved successfully",
    )))
}
