use calamine::{Reader, Xlsx};
use flagsift_core::reader::{read_table, read_table_from_bytes};
use flagsift_core::writer::{write_workbook, write_workbook_file};
use flagsift_core::{CellValue, Extractor, ProjectedTable, RawTable};
use std::io::{Cursor, Read};

/// Build a table `width` columns wide with the given flag values placed at
/// `flag_idx`; every other cell is "r{row}c{col}".
fn wide_table(width: usize, flag_idx: usize, flags: &[&str]) -> RawTable {
    let columns = (0..width).map(|c| format!("col{c}")).collect();
    let rows = flags
        .iter()
        .enumerate()
        .map(|(r, flag)| {
            (0..width)
                .map(|c| {
                    if c == flag_idx {
                        CellValue::Text(flag.to_string())
                    } else {
                        CellValue::Text(format!("r{r}c{c}"))
                    }
                })
                .collect()
        })
        .collect();
    RawTable { columns, rows }
}

fn read_zip_entry(bytes: &[u8], name: &str) -> String {
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = zip.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_empty_sources_still_produce_two_sheets() {
    let extractor = Extractor::new();
    let bytes = extractor.extract(&[None, None]).unwrap();

    let mut zip = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    assert!(zip.by_name("[Content_Types].xml").is_ok());
    assert!(zip.by_name("xl/worksheets/sheet1.xml").is_ok());
    assert!(zip.by_name("xl/worksheets/sheet2.xml").is_ok());
    assert!(zip.by_name("xl/worksheets/sheet3.xml").is_err());

    let workbook_xml = read_zip_entry(&bytes, "xl/workbook.xml");
    assert!(workbook_xml.contains(r#"name="LEX""#));
    assert!(workbook_xml.contains(r#"name="SPX""#));

    // Absent sources get a header row built from the keep labels
    let sheet1 = read_zip_entry(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet1.contains("<t>AV</t>"));
    let sheet2 = read_zip_entry(&bytes, "xl/worksheets/sheet2.xml");
    assert!(sheet2.contains("<t>BV</t>"));
}

#[test]
fn test_write_read_round_trip() {
    let projection = ProjectedTable {
        columns: vec!["id".to_string(), "amount".to_string(), "flag".to_string()],
        rows: vec![
            vec![
                CellValue::Text("a<b&c".to_string()),
                CellValue::Number(42.0),
                CellValue::Boolean(true),
            ],
            vec![
                CellValue::Empty,
                CellValue::Number(2.5),
                CellValue::Boolean(false),
            ],
        ],
    };

    let bytes = write_workbook(&[("LEX".to_string(), projection.clone())]).unwrap();
    let table = read_table_from_bytes(&bytes).unwrap();

    assert_eq!(table.columns, projection.columns);
    assert_eq!(table.rows, projection.rows);
}

#[test]
fn test_on_disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let projection = ProjectedTable {
        columns: vec!["x".to_string(), "y".to_string()],
        rows: vec![vec![
            CellValue::Text("hello".to_string()),
            CellValue::Number(7.0),
        ]],
    };

    write_workbook_file(&path, &[("LEX".to_string(), projection.clone())]).unwrap();
    let table = read_table(&path).unwrap();

    assert_eq!(table.columns, projection.columns);
    assert_eq!(table.rows, projection.rows);
}

#[test]
fn test_end_to_end_extraction() {
    // LEX: flag AS (index 44), keeps 15 columns up to AV (index 47)
    let lex = wide_table(48, 44, &["true", "no", "1"]);
    // SPX: flag BI (index 60), keeps 8 columns up to BV (index 73)
    let spx = wide_table(74, 60, &["yes", "Y", "YES"]);

    let extractor = Extractor::new();
    let bytes = extractor.extract(&[Some(lex), Some(spx)]).unwrap();

    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.as_slice())).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["LEX", "SPX"]);

    // Header row plus rows 0 and 2 (boolean-flag accepts "true" and "1")
    let lex_range = workbook.worksheet_range("LEX").unwrap();
    assert_eq!(lex_range.get_size(), (3, 15));

    // Yes-flag accepts "yes" and "YES" but not "Y"
    let spx_range = workbook.worksheet_range("SPX").unwrap();
    assert_eq!(spx_range.get_size(), (3, 8));
}

#[test]
fn test_extraction_is_deterministic() {
    let lex = wide_table(48, 44, &["true", "no"]);
    let extractor = Extractor::new();

    let first = extractor.extract(&[Some(lex.clone()), None]).unwrap();
    let second = extractor.extract(&[Some(lex), None]).unwrap();

    // Compare the workbook parts, zip metadata may carry timestamps
    for name in [
        "xl/workbook.xml",
        "xl/worksheets/sheet1.xml",
        "xl/worksheets/sheet2.xml",
    ] {
        assert_eq!(read_zip_entry(&first, name), read_zip_entry(&second, name));
    }
}
