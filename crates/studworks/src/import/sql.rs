use super::ImportedWork;

/// Render one classified row as a single-row insert.
///
/// Column order is fixed by the target table; the schema name comes from
/// config and is validated there to be a bare identifier.
pub fn insert_statement(schema: &str, work: &ImportedWork) -> String {
    format!(
        "INSERT INTO {schema}.works (title, work_type, subject, description, composition, universities, price_points, yandex_disk_link) VALUES ('{}', '{}', '{}', '{}', '{}', {}, {}, {});",
        escape_sql(&work.title),
        escape_sql(&work.work_type),
        escape_sql(work.subject.label()),
        escape_sql(&work.description),
        escape_sql(&work.composition),
        optional_literal(work.university.as_deref()),
        work.price_points,
        optional_literal(work.storage_link.as_deref()),
    )
}

/// Render a whole listing as a newline-separated script.
pub fn sql_script(schema: &str, works: &[ImportedWork]) -> String {
    let mut script = String::new();
    for work in works {
        script.push_str(&insert_statement(schema, work));
        script.push('\n');
    }
    script
}

// Backslashes first, then quote doubling, so an escaped backslash never
// re-opens the string.
fn escape_sql(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "''")
}

fn optional_literal(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("'{}'", escape_sql(value)),
        None => "NULL".to_string(),
    }
}
