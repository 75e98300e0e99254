use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grids::requests::{CreateCriterionRequest, CreateGridRequest, GridListParams};
use crate::models::users::entities::UserRole;
use crate::services::GridService;
use crate::utils::SafeGridIdI64;

static GRID_SERVICE: Lazy<GridService> = Lazy::new(GridService::new_lazy);

pub async fn list_grids(
    req: HttpRequest,
    query: web::Query<GridListParams>,
) -> ActixResult<HttpResponse> {
    GRID_SERVICE.list_grids(query.into_inner(), &req).await
}

pub async fn create_grid(
    req: HttpRequest,
    grid_data: web::Json<CreateGridRequest>,
) -> ActixResult<HttpResponse> {
    GRID_SERVICE.create_grid(grid_data.into_inner(), &req).await
}

pub async fn get_grid(req: HttpRequest, grid_id: SafeGridIdI64) -> ActixResult<HttpResponse> {
    GRID_SERVICE.get_grid(grid_id.0, &req).await
}

pub async fn delete_grid(req: HttpRequest, grid_id: SafeGridIdI64) -> ActixResult<HttpResponse> {
    GRID_SERVICE.delete_grid(grid_id.0, &req).await
}

pub async fn add_criterion(
    req: HttpRequest,
    grid_id: SafeGridIdI64,
    criterion_data: web::Json<CreateCriterionRequest>,
) -> ActixResult<HttpResponse> {
    GRID_SERVICE
        .add_criterion(grid_id.0, criterion_data.into_inner(), &req)
        .await
}

// 所有登录用户可以查看评分表格，修改需要教师或管理员
pub fn configure_grid_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grids")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_grids))
            .route("/{grid_id}", web::get().to(get_grid))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::post().to(create_grid))
                    .route("/{grid_id}", web::delete().to(delete_grid))
                    .route("/{grid_id}/criteria", web::post().to(add_criterion)),
            ),
    );
}
