use insta::assert_snapshot;
use rstest::rstest;
use schemacraft_core::Schema;
use schemacraft_exporter::{ExportFormat, export};

fn blog() -> Schema {
    Schema::from_json(include_str!("fixtures/blog.json")).unwrap()
}

#[rstest]
#[case(ExportFormat::Postgresql, 34)]
#[case(ExportFormat::Mysql, 34)]
#[case(ExportFormat::Prisma, 33)]
#[case(ExportFormat::Drizzle, 40)]
fn blog_schema(#[case] format: ExportFormat, #[case] lines: usize) {
    let output = export(&blog(), format).unwrap();
    assert_eq!(output.line_count, lines);
    assert_snapshot!(format.as_str(), output.text);
}

#[test]
fn blog_schema_canonical_json_round_trips() {
    let schema = blog();
    let output = export(&schema, ExportFormat::Json).unwrap();
    assert_eq!(Schema::from_json(&output.text).unwrap(), schema);
    assert!(output.text.starts_with(
        "{\n  \"name\": \"Blog\",\n  \"description\": \"Authors and their posts\",\n  \"tables\": ["
    ));
    assert!(!output.text.contains("temporal"));
}

#[test]
fn export_is_deterministic() {
    let schema = blog();
    for format in ExportFormat::ALL {
        let first = export(&schema, format).unwrap();
        let second = export(&schema, format).unwrap();
        assert_eq!(first, second, "{format}");
    }
}
