//! 病例字段与字段值校验

use std::collections::{HashMap, HashSet};

use crate::models::cases::{
    entities::{CaseDataValue, CaseField, CaseFieldType},
    requests::CreateCaseFieldRequest,
};
use crate::utils::validate::validate_date;

/// 新字段：名称与 idnumber 必填，select 必须提供选项
pub fn validate_field(req: &CreateCaseFieldRequest) -> Result<(), String> {
    if req.name.trim().is_empty() || req.idnumber.trim().is_empty() {
        return Err("Field name and idnumber are required".to_string());
    }
    if req.field_type == CaseFieldType::Select && req.options.is_empty() {
        return Err("Select fields need at least one option".to_string());
    }
    if req.options.iter().any(|o| o.trim().is_empty()) {
        return Err("Field options must not be empty".to_string());
    }
    Ok(())
}

fn validate_value(field: &CaseField, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    match field.field_type {
        CaseFieldType::Text | CaseFieldType::Textarea => Ok(()),
        CaseFieldType::Date => validate_date(value).map_err(|e| format!("{}: {e}", field.idnumber)),
        CaseFieldType::Select => {
            if field.options.iter().any(|o| o == value) {
                Ok(())
            } else {
                Err(format!("{}: '{value}' is not an allowed option", field.idnumber))
            }
        }
        CaseFieldType::Checkbox => match value {
            "0" | "1" => Ok(()),
            _ => Err(format!("{}: checkbox value must be 0 or 1", field.idnumber)),
        },
    }
}

/// 校验一条病例记录的全部字段值，返回第一条错误
pub fn validate_case_data(fields: &[CaseField], data: &[CaseDataValue]) -> Result<(), String> {
    let by_id: HashMap<i64, &CaseField> = fields.iter().map(|f| (f.id, f)).collect();

    let mut seen = HashSet::new();
    for item in data {
        let field = by_id
            .get(&item.field_id)
            .ok_or_else(|| format!("Unknown case field {}", item.field_id))?;
        if !seen.insert(item.field_id) {
            return Err(format!("Field {} is given more than once", field.idnumber));
        }
        validate_value(field, item.value.trim())?;
    }

    for field in fields.iter().filter(|f| f.required) {
        let filled = data
            .iter()
            .any(|d| d.field_id == field.id && !d.value.trim().is_empty());
        if !filled {
            return Err(format!("{} is required", field.idnumber));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: i64, field_type: CaseFieldType, required: bool, options: &[&str]) -> CaseField {
        CaseField {
            id,
            category_id: 1,
            idnumber: format!("f{id}"),
            name: format!("Field {id}"),
            field_type,
            options: options.iter().map(|s| s.to_string()).collect(),
            required,
            sort_order: 0,
        }
    }

    fn value(field_id: i64, value: &str) -> CaseDataValue {
        CaseDataValue {
            field_id,
            value: value.to_string(),
        }
    }

    fn fields() -> Vec<CaseField> {
        vec![
            field(1, CaseFieldType::Text, true, &[]),
            field(2, CaseFieldType::Date, false, &[]),
            field(3, CaseFieldType::Select, false, &["dog", "cat"]),
            field(4, CaseFieldType::Checkbox, false, &[]),
        ]
    }

    #[test]
    fn test_valid_entry() {
        let data = vec![
            value(1, "Fracture"),
            value(2, "2025-03-14"),
            value(3, "cat"),
            value(4, "1"),
        ];
        assert!(validate_case_data(&fields(), &data).is_ok());
    }

    #[test]
    fn test_type_checks() {
        assert!(validate_case_data(&fields(), &[value(1, "x"), value(2, "14/03/2025")]).is_err());
        assert!(validate_case_data(&fields(), &[value(1, "x"), value(3, "horse")]).is_err());
        assert!(validate_case_data(&fields(), &[value(1, "x"), value(4, "yes")]).is_err());
        // 可选字段留空不校验格式
        assert!(validate_case_data(&fields(), &[value(1, "x"), value(2, "")]).is_ok());
    }

    #[test]
    fn test_required_and_unknown_fields() {
        assert!(validate_case_data(&fields(), &[]).is_err());
        assert!(validate_case_data(&fields(), &[value(1, "   ")]).is_err());
        assert!(validate_case_data(&fields(), &[value(1, "x"), value(42, "y")]).is_err());
        assert!(validate_case_data(&fields(), &[value(1, "x"), value(1, "y")]).is_err());
    }

    #[test]
    fn test_select_field_needs_options() {
        let req: CreateCaseFieldRequest =
            serde_json::from_str(r#"{"idnumber":"species","name":"Species","field_type":"select"}"#)
                .expect("valid");
        assert!(validate_field(&req).is_err());

        let req: CreateCaseFieldRequest = serde_json::from_str(
            r#"{"idnumber":"species","name":"Species","field_type":"select","options":["dog"]}"#,
        )
        .expect("valid");
        assert!(validate_field(&req).is_ok());
    }
}
