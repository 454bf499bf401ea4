use anyhow::{Context, Result};

use super::connection::DbConn;

/// Create missing tables. Existing records are kept.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Database schema ready");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sql_statements_drops_blanks() {
        let statements = split_sql_statements("CREATE TABLE a (x INT);\n\n;CREATE INDEX i ON a(x);\n");
        assert_eq!(statements, vec!["CREATE TABLE a (x INT)", "CREATE INDEX i ON a(x)"]);
    }
}
