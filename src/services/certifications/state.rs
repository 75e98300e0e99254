//! 认证声明的状态与完成度计算

use std::collections::BTreeSet;

use crate::models::certifications::entities::{
    CertState, CertValidStatus, CertificationProgress, DeclarationRecord,
};

/// 单个标准的认证状态
///
/// `none → declared → supervisor_invited → supervisor_responded`
pub fn cert_state(record: Option<&DeclarationRecord>) -> CertState {
    match record {
        None => CertState::None,
        Some(r) if !r.validations.is_empty() => CertState::SupervisorResponded,
        Some(r) if !r.supervisors.is_empty() => CertState::SupervisorInvited,
        Some(_) => CertState::Declared,
    }
}

/// 至少获得一次 confirmed 的不同标准数
pub fn confirmed_criteria(records: &[DeclarationRecord]) -> i64 {
    records
        .iter()
        .filter(|r| {
            r.validations
                .iter()
                .any(|v| v.status == CertValidStatus::Confirmed)
        })
        .map(|r| r.declaration.criterion_id)
        .collect::<BTreeSet<_>>()
        .len() as i64
}

/// 完成度：达到 cert_percent 时建议通过，等于阈值也算达到
pub fn progress(confirmed: i64, total: i64, cert_percent: i32) -> CertificationProgress {
    CertificationProgress {
        confirmed,
        total,
        cert_percent,
        status_proposed: total > 0 && confirmed * 100 >= i64::from(cert_percent) * total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::certifications::entities::{CertDecl, CertDeclStatus, CertValid};

    fn record(criterion_id: i64, supervisors: Vec<i64>, statuses: &[CertValidStatus]) -> DeclarationRecord {
        let now = chrono::Utc::now();
        let declaration = CertDecl {
            id: criterion_id * 10,
            student_id: 1,
            planning_id: 1,
            criterion_id,
            level: 50,
            comment: None,
            status: CertDeclStatus::SeenDone,
            created_at: now,
            updated_at: now,
        };
        let validations = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| CertValid {
                id: i as i64 + 1,
                declaration_id: declaration.id,
                supervisor_id: 100 + i as i64,
                status: *status,
                comment: None,
                created_at: now,
                updated_at: now,
            })
            .collect();
        DeclarationRecord {
            declaration,
            supervisors,
            validations,
        }
    }

    #[test]
    fn test_state_transitions() {
        assert_eq!(cert_state(None), CertState::None);
        assert_eq!(cert_state(Some(&record(1, vec![], &[]))), CertState::Declared);
        assert_eq!(
            cert_state(Some(&record(1, vec![100], &[]))),
            CertState::SupervisorInvited
        );
        assert_eq!(
            cert_state(Some(&record(1, vec![100], &[CertValidStatus::LevelNotReached]))),
            CertState::SupervisorResponded
        );
    }

    #[test]
    fn test_confirmed_counts_each_criterion_once() {
        let records = vec![
            record(1, vec![100, 101], &[CertValidStatus::Confirmed, CertValidStatus::Confirmed]),
            record(2, vec![100], &[CertValidStatus::ObserverNotSeen]),
            record(3, vec![100, 101], &[CertValidStatus::LevelNotReached, CertValidStatus::Confirmed]),
        ];
        assert_eq!(confirmed_criteria(&records), 2);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(progress(3, 4, 75).status_proposed);
        assert!(!progress(2, 4, 75).status_proposed);
        assert!(progress(4, 4, 100).status_proposed);
        assert!(progress(0, 4, 0).status_proposed);
    }

    #[test]
    fn test_empty_grid_never_proposed() {
        let p = progress(0, 0, 0);
        assert!(!p.status_proposed);
        assert_eq!(p.total, 0);
    }
}
