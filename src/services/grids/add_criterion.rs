use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GridService;
use crate::models::{
    ApiResponse, ErrorCode,
    grids::{entities::Criterion, requests::CreateCriterionRequest},
};
use crate::services::access::internal_error;

/// 父标准必须是同一表格的根标准，层级最多两层
fn check_parent(grid_id: i64, parent: Option<&Criterion>) -> Result<(), &'static str> {
    match parent {
        None => Err("Parent criterion not found"),
        Some(p) if p.grid_id != grid_id => Err("Parent criterion belongs to another grid"),
        Some(p) if !p.is_root() => Err("Options cannot have sub-options"),
        Some(_) => Ok(()),
    }
}

pub async fn add_criterion(
    service: &GridService,
    grid_id: i64,
    mut req: CreateCriterionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.label = req.label.trim().to_string();
    req.idnumber = req.idnumber.trim().to_string();
    if req.label.is_empty() || req.idnumber.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Criterion label and idnumber are required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_grid_by_id(grid_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GridNotFound,
                "Grid not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get grid: {e}"))),
    }

    if let Some(parent_id) = req.parent_id {
        let parent = match storage.get_criterion_by_id(parent_id).await {
            Ok(parent) => parent,
            Err(e) => return Ok(internal_error(format!("Failed to get criterion: {e}"))),
        };
        if let Err(msg) = check_parent(grid_id, parent.as_ref()) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CriterionInvalidParent,
                msg,
            )));
        }
    }

    match storage.create_criterion(grid_id, req).await {
        Ok(criterion) => Ok(HttpResponse::Created().json(ApiResponse::success(
            criterion,
            "Criterion created",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to create criterion: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(id: i64, grid_id: i64, parent_id: Option<i64>) -> Criterion {
        Criterion {
            id,
            grid_id,
            parent_id,
            label: "Label".to_string(),
            idnumber: format!("C{id}"),
            sort_order: 0,
        }
    }

    #[test]
    fn test_parent_must_be_root_of_same_grid() {
        assert!(check_parent(1, Some(&criterion(10, 1, None))).is_ok());
        assert!(check_parent(1, None).is_err());
        assert!(check_parent(1, Some(&criterion(10, 2, None))).is_err());
        assert!(check_parent(1, Some(&criterion(11, 1, Some(10)))).is_err());
    }
}
