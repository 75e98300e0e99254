use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评分表格类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "grid.ts")]
pub enum GridType {
    Eval,   // 观察评估
    Certif, // 能力认证
    List,   // 清单
}

impl std::fmt::Display for GridType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridType::Eval => write!(f, "eval"),
            GridType::Certif => write!(f, "certif"),
            GridType::List => write!(f, "list"),
        }
    }
}

impl std::str::FromStr for GridType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eval" => Ok(GridType::Eval),
            "certif" => Ok(GridType::Certif),
            "list" => Ok(GridType::List),
            _ => Err(format!("Invalid grid type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct Grid {
    pub id: i64,
    pub name: String,
    pub grid_type: GridType,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct Criterion {
    pub id: i64,
    pub grid_id: i64,
    pub parent_id: Option<i64>,
    pub label: String,
    pub idnumber: String,
    pub sort_order: i32,
}

impl Criterion {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

// 根标准及其子选项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct CriterionNode {
    #[serde(flatten)]
    #[ts(flatten)]
    pub criterion: Criterion,
    pub options: Vec<Criterion>,
}

/// 把扁平的标准列表整理成两层树：根按 sort_order 排序，子选项挂在父标准下
///
/// 父标准不存在的子项被丢弃。
pub fn build_criteria_tree(mut criteria: Vec<Criterion>) -> Vec<CriterionNode> {
    criteria.sort_by_key(|c| (c.sort_order, c.id));

    let (roots, children): (Vec<Criterion>, Vec<Criterion>) =
        criteria.into_iter().partition(Criterion::is_root);

    roots
        .into_iter()
        .map(|root| {
            let options = children
                .iter()
                .filter(|c| c.parent_id == Some(root.id))
                .cloned()
                .collect();
            CriterionNode {
                criterion: root,
                options,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(id: i64, parent_id: Option<i64>, sort_order: i32) -> Criterion {
        Criterion {
            id,
            grid_id: 1,
            parent_id,
            label: format!("C{id}"),
            idnumber: format!("Q{id:03}"),
            sort_order,
        }
    }

    #[test]
    fn test_tree_orders_roots_and_nests_options() {
        let tree = build_criteria_tree(vec![
            criterion(3, Some(1), 2),
            criterion(2, None, 2),
            criterion(1, None, 1),
            criterion(4, Some(1), 1),
            criterion(5, Some(2), 0),
        ]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].criterion.id, 1);
        let option_ids: Vec<i64> = tree[0].options.iter().map(|c| c.id).collect();
        assert_eq!(option_ids, vec![4, 3]);
        assert_eq!(tree[1].criterion.id, 2);
        assert_eq!(tree[1].options.len(), 1);
    }

    #[test]
    fn test_orphan_options_are_dropped() {
        let tree = build_criteria_tree(vec![criterion(1, None, 0), criterion(9, Some(42), 0)]);
        assert_eq!(tree.len(), 1);
        assert!(tree[0].options.is_empty());
    }

    #[test]
    fn test_grid_type_parse() {
        assert_eq!("certif".parse::<GridType>(), Ok(GridType::Certif));
        assert!("exam".parse::<GridType>().is_err());
        assert_eq!(GridType::List.to_string(), "list");
    }
}
