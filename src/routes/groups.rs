use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::groups::requests::{AddGroupMemberRequest, CreateGroupRequest, GroupListParams};
use crate::models::users::entities::UserRole;
use crate::services::GroupService;
use crate::utils::{SafeGroupIdI64, SafeUserIdI64};

static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

pub async fn list_groups(
    req: HttpRequest,
    query: web::Query<GroupListParams>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(query.into_inner(), &req).await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.create_group(group_data.into_inner(), &req).await
}

pub async fn list_members(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_members(group_id.0, &req).await
}

pub async fn add_member(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    member_data: web::Json<AddGroupMemberRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .add_member(group_id.0, member_data.into_inner(), &req)
        .await
}

pub async fn remove_member(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    user_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.remove_member(group_id.0, user_id.0, &req).await
}

// 分组由教师和管理员维护
pub fn configure_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::get().to(list_groups))
                    .route("", web::post().to(create_group))
                    .route("/{group_id}/members", web::get().to(list_members))
                    .route("/{group_id}/members", web::post().to(add_member))
                    .route(
                        "/{group_id}/members/{user_id}",
                        web::delete().to(remove_member),
                    ),
            ),
    );
}
