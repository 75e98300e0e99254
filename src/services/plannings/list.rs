use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::{PlanningService, planning_category};
use crate::models::{
    ApiResponse, ErrorCode,
    plannings::responses::{PlanningListResponse, PlanningWithCategory},
    situations::entities::SituationRole,
};
use crate::services::access::{current_user, internal_error};
use crate::services::situations::situation_role;

pub async fn list_plannings(
    service: &PlanningService,
    situation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    let situation = match storage.get_situation_by_id(situation_id).await {
        Ok(Some(situation)) => situation,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SituationNotFound,
                "Situation not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get situation: {e}"))),
    };

    // 学生只看到自己所在分组的计划
    let group_filter = if situation_role(request) == SituationRole::Student {
        match storage.list_user_group_ids(user.id).await {
            Ok(ids) => Some(ids),
            Err(e) => return Ok(internal_error(format!("Failed to list user groups: {e}"))),
        }
    } else {
        None
    };

    let plannings = match storage
        .list_situation_plannings(situation_id, group_filter)
        .await
    {
        Ok(plannings) => plannings,
        Err(e) => return Ok(internal_error(format!("Failed to list plannings: {e}"))),
    };

    let now = chrono::Utc::now();
    let mut group_names: HashMap<i64, String> = HashMap::new();
    let mut items = Vec::with_capacity(plannings.len());
    for planning in plannings {
        if !group_names.contains_key(&planning.group_id) {
            let name = match storage.get_group_by_id(planning.group_id).await {
                Ok(group) => group.map(|g| g.name).unwrap_or_default(),
                Err(e) => return Ok(internal_error(format!("Failed to load group: {e}"))),
            };
            group_names.insert(planning.group_id, name);
        }

        let category = match planning_category(&storage, &planning, &situation, now).await {
            Ok(category) => category,
            Err(response) => return Ok(response),
        };

        items.push(PlanningWithCategory {
            group_name: group_names
                .get(&planning.group_id)
                .cloned()
                .unwrap_or_default(),
            planning,
            category,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        PlanningListResponse {
            situation_id,
            items,
        },
        "Plannings retrieved successfully",
    )))
}
