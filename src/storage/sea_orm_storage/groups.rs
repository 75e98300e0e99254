//! 分组与分组成员存储操作

use super::SeaOrmStorage;
use crate::entity::group_members::{
    ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as GroupMembers,
};
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::entity::users::Entity as Users;
use crate::errors::{CompetVetError, Result};
use crate::models::{
    PaginationInfo,
    groups::{
        entities::{Group, GroupMember, GroupMemberInfo},
        requests::{CreateGroupRequest, GroupListParams},
        responses::GroupListResponse,
    },
};
use crate::utils::sql::lower_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建分组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建分组失败: {e}")))?;

        Ok(result.into_group())
    }

    pub async fn get_group_by_id_impl(&self, group_id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    pub async fn get_group_by_name_impl(&self, name: &str) -> Result<Option<Group>> {
        let result = Groups::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 分页列出分组
    pub async fn list_groups_with_pagination_impl(
        &self,
        params: GroupListParams,
    ) -> Result<GroupListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Groups::find();

        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            select = select.filter(
                Condition::any()
                    .add(lower_contains(Column::Name, search))
                    .add(lower_contains(Column::Description, search)),
            );
        }

        let paginator = select.order_by_asc(Column::Name).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询分组总数失败: {e}")))?;

        let groups = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询分组列表失败: {e}")))?;

        Ok(GroupListResponse {
            items: groups.into_iter().map(|m| m.into_group()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }

    /// 添加分组成员
    pub async fn add_group_member_impl(&self, group_id: i64, user_id: i64) -> Result<GroupMember> {
        let now = chrono::Utc::now().timestamp();

        let model = MemberActiveModel {
            group_id: Set(group_id),
            user_id: Set(user_id),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("添加分组成员失败: {e}")))?;

        Ok(result.into_group_member())
    }

    pub async fn remove_group_member_impl(&self, group_id: i64, user_id: i64) -> Result<bool> {
        let result = GroupMembers::delete_many()
            .filter(
                Condition::all()
                    .add(MemberColumn::GroupId.eq(group_id))
                    .add(MemberColumn::UserId.eq(user_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("移除分组成员失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出分组成员（附带用户名）
    pub async fn list_group_members_impl(&self, group_id: i64) -> Result<Vec<GroupMemberInfo>> {
        let rows = GroupMembers::find()
            .filter(MemberColumn::GroupId.eq(group_id))
            .order_by_asc(MemberColumn::JoinedAt)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询分组成员失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                let user = user?;
                Some(GroupMemberInfo {
                    user_id: member.user_id,
                    username: user.username,
                    profile_name: user.profile_name.unwrap_or_default(),
                    joined_at: crate::entity::from_timestamp(member.joined_at),
                })
            })
            .collect())
    }

    pub async fn is_group_member_impl(&self, group_id: i64, user_id: i64) -> Result<bool> {
        let count = GroupMembers::find()
            .filter(MemberColumn::GroupId.eq(group_id))
            .filter(MemberColumn::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询分组成员失败: {e}")))?;

        Ok(count > 0)
    }

    pub async fn list_user_group_ids_impl(&self, user_id: i64) -> Result<Vec<i64>> {
        let ids = GroupMembers::find()
            .select_only()
            .column(MemberColumn::GroupId)
            .filter(MemberColumn::UserId.eq(user_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询用户分组失败: {e}")))?;

        Ok(ids)
    }
}
