use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SituationService, check_settings, situation_role};
use crate::models::{
    ApiResponse, ErrorCode,
    situations::{
        entities::{NewSituation, Situation},
        requests::UpdateSituationRequest,
    },
};
use crate::services::access::{forbidden, internal_error};

/// 将部分更新合并到现有设置上
fn merge_settings(current: Situation, update: UpdateSituationRequest) -> NewSituation {
    NewSituation {
        name: update
            .name
            .map(|n| n.trim().to_string())
            .unwrap_or(current.name),
        shortname: current.shortname,
        intro: update.intro.unwrap_or(current.intro),
        eval_num: update.eval_num.unwrap_or(current.eval_num),
        autoeval_num: update.autoeval_num.unwrap_or(current.autoeval_num),
        cert_percent: update.cert_percent.unwrap_or(current.cert_percent),
        has_eval: update.has_eval.unwrap_or(current.has_eval),
        has_certif: update.has_certif.unwrap_or(current.has_certif),
        has_list: update.has_list.unwrap_or(current.has_list),
        eval_grid_id: update.eval_grid_id.unwrap_or(current.eval_grid_id),
        certif_grid_id: update.certif_grid_id.unwrap_or(current.certif_grid_id),
        list_grid_id: update.list_grid_id.unwrap_or(current.list_grid_id),
        grade_k1: update.grade_k1.unwrap_or(current.grade_k1),
        grade_k2: update.grade_k2.unwrap_or(current.grade_k2),
    }
}

pub async fn update_situation(
    service: &SituationService,
    situation_id: i64,
    req: UpdateSituationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !situation_role(request).is_evaluator() {
        return Ok(forbidden("Only evaluators can change situation settings"));
    }

    let storage = service.get_storage(request);

    let current = match storage.get_situation_by_id(situation_id).await {
        Ok(Some(situation)) => situation,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SituationNotFound,
                "Situation not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get situation: {e}"))),
    };

    let merged = merge_settings(current, req);
    if merged.name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SituationInvalidSettings,
            "Situation name must not be empty",
        )));
    }
    if let Err(response) = check_settings(&storage, &merged).await {
        return Ok(response);
    }

    match storage.update_situation(situation_id, merged).await {
        Ok(Some(situation)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            situation,
            "Situation updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SituationNotFound,
            "Situation not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to update situation: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn situation() -> Situation {
        Situation {
            id: 1,
            name: "Surgery".to_string(),
            shortname: "SURG".to_string(),
            intro: Some("intro".to_string()),
            eval_num: 3,
            autoeval_num: 1,
            cert_percent: 80,
            has_eval: true,
            has_certif: true,
            has_list: false,
            eval_grid_id: Some(1),
            certif_grid_id: Some(2),
            list_grid_id: None,
            grade_k1: 2,
            grade_k2: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let update = UpdateSituationRequest {
            cert_percent: Some(60),
            has_list: Some(true),
            ..Default::default()
        };
        let merged = merge_settings(situation(), update);
        assert_eq!(merged.cert_percent, 60);
        assert!(merged.has_list);
        assert_eq!(merged.name, "Surgery");
        assert_eq!(merged.shortname, "SURG");
        assert_eq!(merged.eval_grid_id, Some(1));
        assert_eq!(merged.grade_k1, 2);
    }

    #[test]
    fn test_merge_clears_nullable_fields() {
        let update = UpdateSituationRequest {
            intro: Some(None),
            certif_grid_id: Some(None),
            list_grid_id: Some(Some(5)),
            ..Default::default()
        };
        let merged = merge_settings(situation(), update);
        assert_eq!(merged.intro, None);
        assert_eq!(merged.certif_grid_id, None);
        assert_eq!(merged.list_grid_id, Some(5));
        assert_eq!(merged.eval_grid_id, Some(1));
    }
}
