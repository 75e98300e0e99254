use sea_orm::{Condition, ExprTrait};
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr};

/// 转义 LIKE 模式中的通配符，转义字符为 `\`
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 构造不区分大小写的 `%term%` 模式（调用方需对列使用 LOWER）
pub fn contains_pattern(term: &str) -> LikeExpr {
    LikeExpr::new(format!(
        "%{}%",
        escape_like_pattern(&term.trim().to_lowercase())
    ))
    .escape('\\')
}

/// `LOWER(col) LIKE '%term%'`，term 中的通配符会被转义
pub fn lower_contains<C: IntoColumnRef>(col: C, term: &str) -> Condition {
    Condition::all().add(Expr::expr(Func::lower(Expr::col(col))).like(contains_pattern(term)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("50%_off"), r"50\%\_off");
        assert_eq!(escape_like_pattern(r"a\b"), r"a\\b");
        assert_eq!(escape_like_pattern("plain"), "plain");
    }

    #[test]
    fn test_lower_contains_renders_escaped_like() {
        use sea_orm::sea_query::{Alias, Query, SqliteQueryBuilder};

        let sql = Query::select()
            .column(Alias::new("id"))
            .from(Alias::new("users"))
            .cond_where(lower_contains(Alias::new("username"), " 50%"))
            .to_string(SqliteQueryBuilder);
        assert!(sql.contains(r#"LOWER("username") LIKE"#), "{sql}");
        assert!(sql.contains("50") && sql.contains(r"\%"), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
    }
}
