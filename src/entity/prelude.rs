//! 预导入模块，方便使用

pub use super::case_cats::{
    ActiveModel as CaseCatActiveModel, Entity as CaseCats, Model as CaseCatModel,
};
pub use super::case_data::{
    ActiveModel as CaseDataActiveModel, Entity as CaseData, Model as CaseDataModel,
};
pub use super::case_entries::{
    ActiveModel as CaseEntryActiveModel, Entity as CaseEntries, Model as CaseEntryModel,
};
pub use super::case_fields::{
    ActiveModel as CaseFieldActiveModel, Entity as CaseFields, Model as CaseFieldModel,
};
pub use super::cert_decl_assos::{
    ActiveModel as CertDeclAssoActiveModel, Entity as CertDeclAssos, Model as CertDeclAssoModel,
};
pub use super::cert_decls::{
    ActiveModel as CertDeclActiveModel, Entity as CertDecls, Model as CertDeclModel,
};
pub use super::cert_valids::{
    ActiveModel as CertValidActiveModel, Entity as CertValids, Model as CertValidModel,
};
pub use super::criteria::{
    ActiveModel as CriterionActiveModel, Entity as Criteria, Model as CriterionModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::grids::{ActiveModel as GridActiveModel, Entity as Grids, Model as GridModel};
pub use super::group_members::{
    ActiveModel as GroupMemberActiveModel, Entity as GroupMembers, Model as GroupMemberModel,
};
pub use super::groups::{ActiveModel as GroupActiveModel, Entity as Groups, Model as GroupModel};
pub use super::observation_comments::{
    ActiveModel as ObservationCommentActiveModel, Entity as ObservationComments,
    Model as ObservationCommentModel,
};
pub use super::observation_criteria::{
    ActiveModel as ObservationCriterionActiveModel, Entity as ObservationCriteria,
    Model as ObservationCriterionModel,
};
pub use super::observations::{
    ActiveModel as ObservationActiveModel, Entity as Observations, Model as ObservationModel,
};
pub use super::planning_pauses::{
    ActiveModel as PlanningPauseActiveModel, Entity as PlanningPauses,
    Model as PlanningPauseModel,
};
pub use super::plannings::{
    ActiveModel as PlanningActiveModel, Entity as Plannings, Model as PlanningModel,
};
pub use super::situation_members::{
    ActiveModel as SituationMemberActiveModel, Entity as SituationMembers,
    Model as SituationMemberModel,
};
pub use super::situations::{
    ActiveModel as SituationActiveModel, Entity as Situations, Model as SituationModel,
};
pub use super::todos::{ActiveModel as TodoActiveModel, Entity as Todos, Model as TodoModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
