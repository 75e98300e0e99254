use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 自增主键列
fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建分组表
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(id_col(Groups::Id))
                    .col(
                        ColumnDef::new(Groups::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Groups::Description).text().null())
                    .col(ColumnDef::new(Groups::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Groups::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建分组成员表
        manager
            .create_table(
                Table::create()
                    .table(GroupMembers::Table)
                    .if_not_exists()
                    .col(id_col(GroupMembers::Id))
                    .col(
                        ColumnDef::new(GroupMembers::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GroupMembers::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GroupMembers::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupMembers::Table, GroupMembers::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupMembers::Table, GroupMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评分表格（grid）表
        manager
            .create_table(
                Table::create()
                    .table(Grids::Table)
                    .if_not_exists()
                    .col(id_col(Grids::Id))
                    .col(ColumnDef::new(Grids::Name).string().not_null())
                    .col(ColumnDef::new(Grids::GridType).string().not_null())
                    .col(
                        ColumnDef::new(Grids::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Grids::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grids::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建评分标准表
        manager
            .create_table(
                Table::create()
                    .table(Criteria::Table)
                    .if_not_exists()
                    .col(id_col(Criteria::Id))
                    .col(ColumnDef::new(Criteria::GridId).big_integer().not_null())
                    .col(ColumnDef::new(Criteria::ParentId).big_integer().null())
                    .col(ColumnDef::new(Criteria::Label).string().not_null())
                    .col(ColumnDef::new(Criteria::Idnumber).string().not_null())
                    .col(
                        ColumnDef::new(Criteria::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Criteria::Table, Criteria::GridId)
                            .to(Grids::Table, Grids::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Criteria::Table, Criteria::ParentId)
                            .to(Criteria::Table, Criteria::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建实习情境（situation）表
        manager
            .create_table(
                Table::create()
                    .table(Situations::Table)
                    .if_not_exists()
                    .col(id_col(Situations::Id))
                    .col(ColumnDef::new(Situations::Name).string().not_null())
                    .col(
                        ColumnDef::new(Situations::Shortname)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Situations::Intro).text().null())
                    .col(ColumnDef::new(Situations::EvalNum).integer().not_null())
                    .col(
                        ColumnDef::new(Situations::AutoevalNum)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Situations::CertPercent)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Situations::HasEval)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Situations::HasCertif)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Situations::HasList)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Situations::EvalGridId).big_integer().null())
                    .col(
                        ColumnDef::new(Situations::CertifGridId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Situations::ListGridId).big_integer().null())
                    .col(ColumnDef::new(Situations::GradeK1).integer().not_null())
                    .col(ColumnDef::new(Situations::GradeK2).integer().not_null())
                    .col(
                        ColumnDef::new(Situations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Situations::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Situations::Table, Situations::EvalGridId)
                            .to(Grids::Table, Grids::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Situations::Table, Situations::CertifGridId)
                            .to(Grids::Table, Grids::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Situations::Table, Situations::ListGridId)
                            .to(Grids::Table, Grids::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建情境成员表
        manager
            .create_table(
                Table::create()
                    .table(SituationMembers::Table)
                    .if_not_exists()
                    .col(id_col(SituationMembers::Id))
                    .col(
                        ColumnDef::new(SituationMembers::SituationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SituationMembers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SituationMembers::Role).string().not_null())
                    .col(
                        ColumnDef::new(SituationMembers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SituationMembers::Table, SituationMembers::SituationId)
                            .to(Situations::Table, Situations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SituationMembers::Table, SituationMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建计划（planning）表
        manager
            .create_table(
                Table::create()
                    .table(Plannings::Table)
                    .if_not_exists()
                    .col(id_col(Plannings::Id))
                    .col(
                        ColumnDef::new(Plannings::SituationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Plannings::GroupId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Plannings::StartTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Plannings::EndTime).big_integer().not_null())
                    .col(ColumnDef::new(Plannings::Session).string().not_null())
                    .col(
                        ColumnDef::new(Plannings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Plannings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Plannings::Table, Plannings::SituationId)
                            .to(Situations::Table, Situations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Plannings::Table, Plannings::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建计划暂停区间表
        manager
            .create_table(
                Table::create()
                    .table(PlanningPauses::Table)
                    .if_not_exists()
                    .col(id_col(PlanningPauses::Id))
                    .col(
                        ColumnDef::new(PlanningPauses::PlanningId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlanningPauses::StartTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlanningPauses::EndTime)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PlanningPauses::Table, PlanningPauses::PlanningId)
                            .to(Plannings::Table, Plannings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建观察（observation）表
        manager
            .create_table(
                Table::create()
                    .table(Observations::Table)
                    .if_not_exists()
                    .col(id_col(Observations::Id))
                    .col(
                        ColumnDef::new(Observations::PlanningId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Observations::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Observations::ObserverId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Observations::Category).string().not_null())
                    .col(ColumnDef::new(Observations::Status).string().not_null())
                    .col(
                        ColumnDef::new(Observations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Observations::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Observations::Table, Observations::PlanningId)
                            .to(Plannings::Table, Plannings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Observations::Table, Observations::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Observations::Table, Observations::ObserverId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建观察评分项表
        manager
            .create_table(
                Table::create()
                    .table(ObservationCriteria::Table)
                    .if_not_exists()
                    .col(id_col(ObservationCriteria::Id))
                    .col(
                        ColumnDef::new(ObservationCriteria::ObservationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ObservationCriteria::CriterionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ObservationCriteria::Level).integer().null())
                    .col(ColumnDef::new(ObservationCriteria::Comment).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ObservationCriteria::Table, ObservationCriteria::ObservationId)
                            .to(Observations::Table, Observations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ObservationCriteria::Table, ObservationCriteria::CriterionId)
                            .to(Criteria::Table, Criteria::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建观察评语表
        manager
            .create_table(
                Table::create()
                    .table(ObservationComments::Table)
                    .if_not_exists()
                    .col(id_col(ObservationComments::Id))
                    .col(
                        ColumnDef::new(ObservationComments::ObservationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ObservationComments::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ObservationComments::CommentType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ObservationComments::Comment)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ObservationComments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ObservationComments::Table, ObservationComments::ObservationId)
                            .to(Observations::Table, Observations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ObservationComments::Table, ObservationComments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建认证声明表
        manager
            .create_table(
                Table::create()
                    .table(CertDecls::Table)
                    .if_not_exists()
                    .col(id_col(CertDecls::Id))
                    .col(ColumnDef::new(CertDecls::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(CertDecls::PlanningId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertDecls::CriterionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CertDecls::Level).integer().not_null())
                    .col(ColumnDef::new(CertDecls::Comment).text().null())
                    .col(ColumnDef::new(CertDecls::Status).string().not_null())
                    .col(ColumnDef::new(CertDecls::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(CertDecls::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CertDecls::Table, CertDecls::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CertDecls::Table, CertDecls::PlanningId)
                            .to(Plannings::Table, Plannings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CertDecls::Table, CertDecls::CriterionId)
                            .to(Criteria::Table, Criteria::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建认证声明与督导关联表
        manager
            .create_table(
                Table::create()
                    .table(CertDeclAssos::Table)
                    .if_not_exists()
                    .col(id_col(CertDeclAssos::Id))
                    .col(
                        ColumnDef::new(CertDeclAssos::DeclarationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertDeclAssos::SupervisorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertDeclAssos::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CertDeclAssos::Table, CertDeclAssos::DeclarationId)
                            .to(CertDecls::Table, CertDecls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CertDeclAssos::Table, CertDeclAssos::SupervisorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建认证验证表
        manager
            .create_table(
                Table::create()
                    .table(CertValids::Table)
                    .if_not_exists()
                    .col(id_col(CertValids::Id))
                    .col(
                        ColumnDef::new(CertValids::DeclarationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertValids::SupervisorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CertValids::Status).string().not_null())
                    .col(ColumnDef::new(CertValids::Comment).text().null())
                    .col(
                        ColumnDef::new(CertValids::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertValids::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CertValids::Table, CertValids::DeclarationId)
                            .to(CertDecls::Table, CertDecls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CertValids::Table, CertValids::SupervisorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩缓存表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(id_col(Grades::Id))
                    .col(ColumnDef::new(Grades::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::PlanningId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::GradeType).string().not_null())
                    .col(ColumnDef::new(Grades::Grade).integer().not_null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::PlanningId)
                            .to(Plannings::Table, Plannings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建病例分类表
        manager
            .create_table(
                Table::create()
                    .table(CaseCats::Table)
                    .if_not_exists()
                    .col(id_col(CaseCats::Id))
                    .col(
                        ColumnDef::new(CaseCats::SituationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CaseCats::Name).string().not_null())
                    .col(
                        ColumnDef::new(CaseCats::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaseCats::Table, CaseCats::SituationId)
                            .to(Situations::Table, Situations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建病例字段表
        manager
            .create_table(
                Table::create()
                    .table(CaseFields::Table)
                    .if_not_exists()
                    .col(id_col(CaseFields::Id))
                    .col(
                        ColumnDef::new(CaseFields::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CaseFields::Idnumber).string().not_null())
                    .col(ColumnDef::new(CaseFields::Name).string().not_null())
                    .col(ColumnDef::new(CaseFields::FieldType).string().not_null())
                    .col(ColumnDef::new(CaseFields::Options).text().null())
                    .col(
                        ColumnDef::new(CaseFields::Required)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CaseFields::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaseFields::Table, CaseFields::CategoryId)
                            .to(CaseCats::Table, CaseCats::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建病例记录表
        manager
            .create_table(
                Table::create()
                    .table(CaseEntries::Table)
                    .if_not_exists()
                    .col(id_col(CaseEntries::Id))
                    .col(
                        ColumnDef::new(CaseEntries::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CaseEntries::PlanningId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CaseEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CaseEntries::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaseEntries::Table, CaseEntries::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaseEntries::Table, CaseEntries::PlanningId)
                            .to(Plannings::Table, Plannings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建病例数据表
        manager
            .create_table(
                Table::create()
                    .table(CaseData::Table)
                    .if_not_exists()
                    .col(id_col(CaseData::Id))
                    .col(ColumnDef::new(CaseData::EntryId).big_integer().not_null())
                    .col(ColumnDef::new(CaseData::FieldId).big_integer().not_null())
                    .col(ColumnDef::new(CaseData::Value).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaseData::Table, CaseData::EntryId)
                            .to(CaseEntries::Table, CaseEntries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaseData::Table, CaseData::FieldId)
                            .to(CaseFields::Table, CaseFields::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建待办表
        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(id_col(Todos::Id))
                    .col(ColumnDef::new(Todos::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Todos::TargetUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Todos::PlanningId).big_integer().not_null())
                    .col(ColumnDef::new(Todos::Action).string().not_null())
                    .col(ColumnDef::new(Todos::Status).string().not_null())
                    .col(ColumnDef::new(Todos::Data).text().not_null())
                    .col(ColumnDef::new(Todos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Todos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Todos::Table, Todos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Todos::Table, Todos::TargetUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Todos::Table, Todos::PlanningId)
                            .to(Plannings::Table, Plannings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一约束索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_group_members_unique")
                    .table(GroupMembers::Table)
                    .col(GroupMembers::GroupId)
                    .col(GroupMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_situation_members_unique")
                    .table(SituationMembers::Table)
                    .col(SituationMembers::SituationId)
                    .col(SituationMembers::UserId)
                    .col(SituationMembers::Role)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_observation_criteria_unique")
                    .table(ObservationCriteria::Table)
                    .col(ObservationCriteria::ObservationId)
                    .col(ObservationCriteria::CriterionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cert_decls_unique")
                    .table(CertDecls::Table)
                    .col(CertDecls::StudentId)
                    .col(CertDecls::PlanningId)
                    .col(CertDecls::CriterionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cert_decl_assos_unique")
                    .table(CertDeclAssos::Table)
                    .col(CertDeclAssos::DeclarationId)
                    .col(CertDeclAssos::SupervisorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cert_valids_unique")
                    .table(CertValids::Table)
                    .col(CertValids::DeclarationId)
                    .col(CertValids::SupervisorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_unique")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .col(Grades::PlanningId)
                    .col(Grades::GradeType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_case_data_unique")
                    .table(CaseData::Table)
                    .col(CaseData::EntryId)
                    .col(CaseData::FieldId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_plannings_situation_id")
                    .table(Plannings::Table)
                    .col(Plannings::SituationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_observations_planning_student")
                    .table(Observations::Table)
                    .col(Observations::PlanningId)
                    .col(Observations::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_todos_user_status")
                    .table(Todos::Table)
                    .col(Todos::UserId)
                    .col(Todos::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Todos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CaseData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CaseEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CaseFields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CaseCats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CertValids::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CertDeclAssos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CertDecls::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ObservationComments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ObservationCriteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Observations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlanningPauses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Plannings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SituationMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Situations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Criteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grids::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroupMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Groups {
    #[sea_orm(iden = "groups")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GroupMembers {
    #[sea_orm(iden = "group_members")]
    Table,
    Id,
    GroupId,
    UserId,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Grids {
    #[sea_orm(iden = "grids")]
    Table,
    Id,
    Name,
    GridType,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Criteria {
    #[sea_orm(iden = "criteria")]
    Table,
    Id,
    GridId,
    ParentId,
    Label,
    Idnumber,
    SortOrder,
}

#[derive(DeriveIden)]
enum Situations {
    #[sea_orm(iden = "situations")]
    Table,
    Id,
    Name,
    Shortname,
    Intro,
    EvalNum,
    AutoevalNum,
    CertPercent,
    HasEval,
    HasCertif,
    HasList,
    EvalGridId,
    CertifGridId,
    ListGridId,
    GradeK1,
    GradeK2,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SituationMembers {
    #[sea_orm(iden = "situation_members")]
    Table,
    Id,
    SituationId,
    UserId,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Plannings {
    #[sea_orm(iden = "plannings")]
    Table,
    Id,
    SituationId,
    GroupId,
    StartTime,
    EndTime,
    Session,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PlanningPauses {
    #[sea_orm(iden = "planning_pauses")]
    Table,
    Id,
    PlanningId,
    StartTime,
    EndTime,
}

#[derive(DeriveIden)]
enum Observations {
    #[sea_orm(iden = "observations")]
    Table,
    Id,
    PlanningId,
    StudentId,
    ObserverId,
    Category,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ObservationCriteria {
    #[sea_orm(iden = "observation_criteria")]
    Table,
    Id,
    ObservationId,
    CriterionId,
    Level,
    Comment,
}

#[derive(DeriveIden)]
enum ObservationComments {
    #[sea_orm(iden = "observation_comments")]
    Table,
    Id,
    ObservationId,
    UserId,
    CommentType,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CertDecls {
    #[sea_orm(iden = "cert_decls")]
    Table,
    Id,
    StudentId,
    PlanningId,
    CriterionId,
    Level,
    Comment,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CertDeclAssos {
    #[sea_orm(iden = "cert_decl_assos")]
    Table,
    Id,
    DeclarationId,
    SupervisorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CertValids {
    #[sea_orm(iden = "cert_valids")]
    Table,
    Id,
    DeclarationId,
    SupervisorId,
    Status,
    Comment,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentId,
    PlanningId,
    GradeType,
    Grade,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CaseCats {
    #[sea_orm(iden = "case_cats")]
    Table,
    Id,
    SituationId,
    Name,
    SortOrder,
}

#[derive(DeriveIden)]
enum CaseFields {
    #[sea_orm(iden = "case_fields")]
    Table,
    Id,
    CategoryId,
    Idnumber,
    Name,
    FieldType,
    Options,
    Required,
    SortOrder,
}

#[derive(DeriveIden)]
enum CaseEntries {
    #[sea_orm(iden = "case_entries")]
    Table,
    Id,
    StudentId,
    PlanningId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CaseData {
    #[sea_orm(iden = "case_data")]
    Table,
    Id,
    EntryId,
    FieldId,
    Value,
}

#[derive(DeriveIden)]
enum Todos {
    #[sea_orm(iden = "todos")]
    Table,
    Id,
    UserId,
    TargetUserId,
    PlanningId,
    Action,
    Status,
    Data,
    CreatedAt,
    UpdatedAt,
}
