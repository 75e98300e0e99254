//! 情境内搜索

use super::SeaOrmStorage;
use crate::entity::plannings::{Column as PlanningColumn, Entity as Plannings};
use crate::entity::situation_members::{Column as MemberColumn, Entity as SituationMembers};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{CompetVetError, Result};
use crate::models::{search::responses::SearchResponse, situations::entities::SituationRole};
use crate::utils::sql::lower_contains;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 按关键字搜索情境内的学生和实习安排（不区分大小写）
    pub async fn search_situation_impl(
        &self,
        situation_id: i64,
        term: &str,
    ) -> Result<SearchResponse> {
        let students = SituationMembers::find()
            .filter(MemberColumn::SituationId.eq(situation_id))
            .filter(MemberColumn::Role.eq(SituationRole::Student.to_string()))
            .find_also_related(Users)
            .filter(
                Condition::any()
                    .add(lower_contains((Users, UserColumn::Username), term))
                    .add(lower_contains((Users, UserColumn::ProfileName), term)),
            )
            .order_by_asc(UserColumn::Username)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("搜索学生失败: {e}")))?;

        let plannings = Plannings::find()
            .filter(PlanningColumn::SituationId.eq(situation_id))
            .filter(lower_contains((Plannings, PlanningColumn::Session), term))
            .order_by_asc(PlanningColumn::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("搜索实习安排失败: {e}")))?;

        Ok(SearchResponse {
            situation_id,
            students: students
                .into_iter()
                .filter_map(|(_, user)| user.map(|u| u.into_summary()))
                .collect(),
            plannings: plannings.into_iter().map(|m| m.into_planning()).collect(),
        })
    }
}
