//! 实习情境与情境成员存储操作

use std::collections::BTreeMap;

use super::SeaOrmStorage;
use crate::entity::situation_members::{
    ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as SituationMembers,
};
use crate::entity::situations::{ActiveModel, Column, Entity as Situations};
use crate::entity::users::Entity as Users;
use crate::errors::{CompetVetError, Result};
use crate::models::situations::entities::{
    NewSituation, Situation, SituationMember, SituationRole,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

fn apply_settings(model: &mut ActiveModel, situation: NewSituation) {
    model.name = Set(situation.name);
    model.shortname = Set(situation.shortname);
    model.intro = Set(situation.intro);
    model.eval_num = Set(situation.eval_num);
    model.autoeval_num = Set(situation.autoeval_num);
    model.cert_percent = Set(situation.cert_percent);
    model.has_eval = Set(situation.has_eval);
    model.has_certif = Set(situation.has_certif);
    model.has_list = Set(situation.has_list);
    model.eval_grid_id = Set(situation.eval_grid_id);
    model.certif_grid_id = Set(situation.certif_grid_id);
    model.list_grid_id = Set(situation.list_grid_id);
    model.grade_k1 = Set(situation.grade_k1);
    model.grade_k2 = Set(situation.grade_k2);
}

impl SeaOrmStorage {
    /// 创建情境
    pub async fn create_situation_impl(&self, situation: NewSituation) -> Result<Situation> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_settings(&mut model, situation);

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建情境失败: {e}")))?;

        Ok(result.into_situation())
    }

    pub async fn get_situation_by_id_impl(&self, situation_id: i64) -> Result<Option<Situation>> {
        let result = Situations::find_by_id(situation_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询情境失败: {e}")))?;

        Ok(result.map(|m| m.into_situation()))
    }

    pub async fn get_situation_by_shortname_impl(
        &self,
        shortname: &str,
    ) -> Result<Option<Situation>> {
        let result = Situations::find()
            .filter(Column::Shortname.eq(shortname))
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询情境失败: {e}")))?;

        Ok(result.map(|m| m.into_situation()))
    }

    /// 整体更新情境设置
    pub async fn update_situation_impl(
        &self,
        situation_id: i64,
        situation: NewSituation,
    ) -> Result<Option<Situation>> {
        if self.get_situation_by_id_impl(situation_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(situation_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        apply_settings(&mut model, situation);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("更新情境失败: {e}")))?;

        Ok(Some(result.into_situation()))
    }

    pub async fn list_situations_impl(&self) -> Result<Vec<Situation>> {
        let result = Situations::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询情境列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_situation()).collect())
    }

    /// 列出用户参与的情境，同一情境的多条成员记录合并为角色列表
    pub async fn list_user_situations_impl(
        &self,
        user_id: i64,
    ) -> Result<Vec<(Situation, Vec<SituationRole>)>> {
        let rows = SituationMembers::find()
            .filter(MemberColumn::UserId.eq(user_id))
            .find_also_related(Situations)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetVetError::database_operation(format!("查询用户情境失败: {e}"))
            })?;

        let mut grouped: BTreeMap<i64, (Situation, Vec<SituationRole>)> = BTreeMap::new();
        for (member, situation) in rows {
            let Some(situation) = situation else {
                continue;
            };
            let role = member.situation_role();
            grouped
                .entry(situation.id)
                .or_insert_with(|| (situation.into_situation(), Vec::new()))
                .1
                .push(role);
        }

        Ok(grouped.into_values().collect())
    }

    /// 添加情境成员，同一用户同一角色只能出现一次
    pub async fn add_situation_member_impl(
        &self,
        situation_id: i64,
        user_id: i64,
        role: SituationRole,
    ) -> Result<()> {
        let existing = SituationMembers::find()
            .filter(MemberColumn::SituationId.eq(situation_id))
            .filter(MemberColumn::UserId.eq(user_id))
            .filter(MemberColumn::Role.eq(role.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询情境成员失败: {e}")))?;
        if existing.is_some() {
            return Err(CompetVetError::conflict(format!(
                "User {user_id} already has role {role} in situation {situation_id}"
            )));
        }

        let model = MemberActiveModel {
            situation_id: Set(situation_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("添加情境成员失败: {e}")))?;

        Ok(())
    }

    pub async fn list_situation_members_impl(
        &self,
        situation_id: i64,
        role: Option<SituationRole>,
    ) -> Result<Vec<SituationMember>> {
        let mut select = SituationMembers::find().filter(MemberColumn::SituationId.eq(situation_id));
        if let Some(role) = role {
            select = select.filter(MemberColumn::Role.eq(role.to_string()));
        }

        let rows = select
            .order_by_asc(MemberColumn::Role)
            .order_by_asc(MemberColumn::UserId)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询情境成员失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                let role = member.situation_role();
                Some(SituationMember {
                    user: user?.into_summary(),
                    role,
                })
            })
            .collect())
    }

    pub async fn get_situation_roles_impl(
        &self,
        situation_id: i64,
        user_id: i64,
    ) -> Result<Vec<SituationRole>> {
        let rows = SituationMembers::find()
            .filter(MemberColumn::SituationId.eq(situation_id))
            .filter(MemberColumn::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询情境角色失败: {e}")))?;

        Ok(rows.iter().map(|m| m.situation_role()).collect())
    }
}
