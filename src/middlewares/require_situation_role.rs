/*!
 * 基于情境角色的访问控制中间件
 *
 * 必须在 RequireJWT 之后使用，并且路由中需要包含 `{situation_id}` 参数。
 * 用户在同一情境中可能拥有多个角色，这里按优先级取最高的一个。
 *
 * ```rust,ignore
 * web::scope("/situations/{situation_id}")
 *     .wrap(RequireSituationRole::new_any(&[&SituationRole::Evaluator]))
 *     .wrap(RequireJWT)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};

use crate::{
    cache::{ObjectCache, situation_roles_key},
    errors::CompetVetError,
    models::{
        ErrorCode,
        situations::entities::SituationRole,
        users::entities::User,
    },
    storage::Storage,
};

use super::create_error_response;

/// 计算用户在情境中的最高角色，结果按 (situation, user) 缓存
pub async fn resolve_situation_role(
    storage: &dyn Storage,
    cache: Option<&dyn ObjectCache>,
    user: &User,
    situation_id: i64,
) -> Result<SituationRole, CompetVetError> {
    if user.is_admin() {
        return Ok(SituationRole::Admin);
    }

    let key = situation_roles_key(situation_id, user.id);
    if let Some(cache) = cache
        && let Some(roles) = crate::cache::get_json::<Vec<SituationRole>>(cache, &key).await
    {
        return Ok(SituationRole::top_role(roles.iter()));
    }

    let roles = storage.get_situation_roles(situation_id, user.id).await?;
    if let Some(cache) = cache {
        crate::cache::insert_json(cache, key, &roles, 0).await;
    }
    Ok(SituationRole::top_role(roles.iter()))
}

#[derive(Clone)]
pub struct RequireSituationRole {
    required_roles: Vec<SituationRole>,
}

impl RequireSituationRole {
    /// 情境内任一有效角色，细分权限由业务层判断
    pub fn member() -> Self {
        Self::new_any(&[
            &SituationRole::Student,
            &SituationRole::Observer,
            &SituationRole::Evaluator,
        ])
    }

    pub fn new_any(roles: &[&SituationRole]) -> Self {
        Self {
            required_roles: roles.iter().map(|r| **r).collect(),
        }
    }

    /// 从请求扩展中读取中间件解析出的角色
    pub fn extract_situation_role(req: &actix_web::HttpRequest) -> Option<SituationRole> {
        req.extensions().get::<SituationRole>().copied()
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireSituationRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSituationRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSituationRoleMiddleware {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
        }))
    }
}

pub struct RequireSituationRoleMiddleware<S> {
    service: Rc<S>,
    required_roles: Vec<SituationRole>,
}

impl<S, B> Service<ServiceRequest> for RequireSituationRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let required_roles = self.required_roles.clone();

        Box::pin(async move {
            let Some(user) = req.extensions().get::<User>().cloned() else {
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Unauthorized: missing user claims",
                    )
                    .map_into_right_body(),
                ));
            };

            let Some(situation_id) = req
                .match_info()
                .get("situation_id")
                .and_then(|s| s.parse::<i64>().ok())
            else {
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::BAD_REQUEST,
                        ErrorCode::BadRequest,
                        "Missing or invalid situation_id",
                    )
                    .map_into_right_body(),
                ));
            };

            let Some(storage) = req
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .map(|data| data.get_ref().clone())
            else {
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::InternalServerError,
                        "Storage backend is not configured",
                    )
                    .map_into_right_body(),
                ));
            };
            let cache = req
                .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
                .map(|data| data.get_ref().clone());

            let role = match resolve_situation_role(
                storage.as_ref(),
                cache.as_deref(),
                &user,
                situation_id,
            )
            .await
            {
                Ok(role) => role,
                Err(e) => {
                    tracing::error!("Failed to resolve situation role: {}", e);
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorCode::InternalServerError,
                            "Failed to resolve situation role",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            if role == SituationRole::Admin || required_roles.contains(&role) {
                tracing::debug!(
                    "User {} acts as {} in situation {}",
                    user.id,
                    role,
                    situation_id
                );
                req.extensions_mut().insert(role);
                Ok(srv.call(req).await?.map_into_left_body())
            } else {
                tracing::info!(
                    "Situation access denied for user {} (role: {}). Required roles: {:?}",
                    user.id,
                    role,
                    required_roles
                );
                Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::SituationPermissionDenied,
                        "No permission for this situation",
                    )
                    .map_into_right_body(),
                ))
            }
        })
    }
}
