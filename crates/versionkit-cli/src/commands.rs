use crate::config::{Config, FieldConfig};
use anyhow::Context;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;
use versionkit_core::{BigInt, ScalarKind, SequenceRegistry, TypeDescriptor, VersionGenerator};

pub fn kinds() -> Vec<String> {
    SequenceRegistry::global()
        .kinds()
        .map(|kind| format!("{kind}: {}", kind.aliases().join(", ")))
        .collect()
}

/// Upper bound on `versionkit next --count`.
pub const MAX_COUNT: usize = 10_000;

/// Successive versions for a field of `type_name`, starting after `current`.
pub fn next(type_name: &str, current: Option<&str>, count: usize) -> anyhow::Result<Vec<String>> {
    let kind = SequenceRegistry::global().lookup(&TypeDescriptor::named(type_name))?;
    advance(kind, current, count)
}

/// Successive versions of an already resolved kind.
fn advance(kind: ScalarKind, current: Option<&str>, count: usize) -> anyhow::Result<Vec<String>> {
    if count > MAX_COUNT {
        return Err(anyhow::anyhow!(format!(
            "count {count} exceeds the limit of {MAX_COUNT}"
        )));
    }
    match kind {
        ScalarKind::BigInt => chain::<BigInt>(current, count),
        ScalarKind::Int8 => chain::<i8>(current, count),
        ScalarKind::Int32 => chain::<i32>(current, count),
        ScalarKind::Int64 => chain::<i64>(current, count),
        ScalarKind::Int16 => chain::<i16>(current, count),
    }
}

fn chain<T>(current: Option<&str>, count: usize) -> anyhow::Result<Vec<String>>
where
    T: FromStr + Display + 'static,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let generator = VersionGenerator::<T>::bind()?;
    let mut value = match current {
        Some(raw) => Some(
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid {} value {raw:?}", generator.kind()))?,
        ),
        None => None,
    };
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let generated = generator.generate(value.as_ref());
        out.push(generated.to_string());
        value = Some(generated);
    }
    Ok(out)
}

/// Binds every configured field; the first unsupported one aborts.
pub fn check(config: &Config) -> anyhow::Result<Vec<String>> {
    config
        .fields
        .iter()
        .map(|field| -> anyhow::Result<String> {
            let kind = bind_field(field)?;
            Ok(format!("{}: {kind}", field.qualified_name()))
        })
        .collect()
}

/// Value the next write of each configured field would persist.
pub fn plan(config: &Config) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(config.fields.len());
    for field in &config.fields {
        let kind = bind_field(field)?;
        let values = advance(kind, field.current.as_deref(), 1)
            .with_context(|| format!("field {}", field.qualified_name()))?;
        let previous = field.current.as_deref().unwrap_or("<new>");
        for value in values {
            lines.push(format!("{}: {previous} -> {value}", field.qualified_name()));
        }
    }
    Ok(lines)
}

fn bind_field(field: &FieldConfig) -> anyhow::Result<ScalarKind> {
    let kind = SequenceRegistry::global()
        .lookup(&TypeDescriptor::named(field.type_name.as_str()))
        .with_context(|| format!("field {} cannot hold a version", field.qualified_name()))?;
    info!(field = %field.qualified_name(), %kind, "bound version field");
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::{check, kinds, next, plan, MAX_COUNT};
    use crate::config::Config;

    fn config(fields: &str) -> Config {
        Config::from_toml(fields).expect("config")
    }

    #[test]
    fn kinds_lists_declaration_order() {
        let lines = kinds();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("BigInt:"));
        assert!(lines[1].starts_with("i8:"));
        assert!(lines[4].starts_with("i16:"));
    }

    #[test]
    fn next_starts_new_records_at_one() {
        assert_eq!(next("long", None, 3).expect("next"), vec!["1", "2", "3"]);
    }

    #[test]
    fn next_wraps_byte_at_127() {
        assert_eq!(next("byte", Some("125"), 3).expect("next"), vec!["126", "0", "1"]);
    }

    #[test]
    fn next_wraps_short_to_minimum() {
        assert_eq!(next("smallint", Some("32767"), 1).expect("next"), vec!["-32768"]);
    }

    #[test]
    fn next_handles_big_integers() {
        let out = next("BigInteger", Some("18446744073709551615"), 1).expect("next");
        assert_eq!(out, vec!["18446744073709551616"]);
    }

    #[test]
    fn next_rejects_unsupported_type() {
        let err = next("text", None, 1).expect_err("text");
        assert!(err.to_string().contains("allowed only [BigInt, i8, i32, i64, i16]"));
    }

    #[test]
    fn next_rejects_oversized_count() {
        assert_eq!(next("long", None, MAX_COUNT).expect("next").len(), MAX_COUNT);
        let err = next("long", None, MAX_COUNT + 1).expect_err("too many");
        assert!(err.to_string().contains("exceeds the limit"));
        assert!(next("long", None, usize::MAX).is_err());
    }

    #[test]
    fn plan_rejects_unsupported_field_once() {
        let config = config(
            r#"
            [[fields]]
            record = "orders"
            name = "etag"
            type = "varchar"
            current = "abc"
            "#,
        );
        let err = plan(&config).expect_err("varchar");
        assert_eq!(err.to_string(), "field orders.etag cannot hold a version");
    }

    #[test]
    fn next_rejects_unparsable_current() {
        let err = next("int", Some("forty"), 1).expect_err("parse");
        assert!(err.to_string().contains("invalid i32 value"));
    }

    #[test]
    fn check_names_the_offending_field() {
        let config = config(
            r#"
            [[fields]]
            record = "orders"
            name = "version"
            type = "long"

            [[fields]]
            record = "orders"
            name = "etag"
            type = "varchar"
            "#,
        );
        let err = check(&config).expect_err("varchar");
        assert!(err.to_string().contains("orders.etag"));
    }

    #[test]
    fn plan_reports_next_write() {
        let config = config(
            r#"
            [[fields]]
            record = "orders"
            name = "version"
            type = "long"
            current = "41"

            [[fields]]
            record = "users"
            name = "rev"
            type = "int"
            "#,
        );
        assert_eq!(check(&config).expect("check"), vec!["orders.version: i64", "users.rev: i32"]);
        assert_eq!(
            plan(&config).expect("plan"),
            vec!["orders.version: 41 -> 42", "users.rev: <new> -> 1"]
        );
    }
}
