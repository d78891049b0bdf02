mod common;

use lifting_warehouse::{CsvDirSink, MemorySink, RelationSink, WarehouseLoader};

use common::relations;

#[test]
fn writes_one_csv_per_relation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("warehouse");
    let mut sink = CsvDirSink::new(&out);

    let report = WarehouseLoader::new()
        .load(&mut sink, &relations())
        .expect("load");
    assert_eq!(report.total_rows(), 7);
    assert_eq!(
        sink.relation_names().unwrap(),
        ["dim_athlete", "dim_competition", "fact_lifting"]
    );

    let athlete = std::fs::read_to_string(out.join("dim_athlete.csv")).expect("read csv");
    let mut lines = athlete.lines();
    assert_eq!(lines.next(), Some("id_athlete,name,country,gender"));
    assert_eq!(lines.next(), Some("1,John Doe,USA,M"));

    let leftovers: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn failed_swap_restores_previous_relations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("warehouse");
    let mut sink = CsvDirSink::new(&out);
    sink.write_all(&relations()).expect("first write");

    let fact_path = out.join("fact_lifting.csv");
    std::fs::remove_file(&fact_path).expect("remove fact csv");
    std::fs::create_dir(&fact_path).expect("block fact path");
    std::fs::write(fact_path.join("keep"), "x").expect("fill blocking dir");

    let mut changed = relations();
    changed[0].rows.truncate(1);
    let err = sink.write_all(&changed).unwrap_err();
    assert!(err.to_string().contains("fact_lifting.csv"));

    assert_eq!(sink.row_count("dim_athlete").unwrap(), Some(2));
    assert_eq!(sink.row_count("dim_competition").unwrap(), Some(2));
    let leftovers: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp") || name.ends_with(".bak"))
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
}

#[test]
fn missing_relation_file_has_no_row_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sink = CsvDirSink::new(dir.path());
    assert_eq!(sink.row_count("fact_lifting").unwrap(), None);
}

#[test]
fn memory_sink_replaces_by_name() {
    let mut sink = MemorySink::new();
    let loader = WarehouseLoader::new();
    loader.load(&mut sink, &relations()).expect("first load");
    loader.load(&mut sink, &relations()).expect("second load");

    assert_eq!(sink.relation_names().unwrap().len(), 3);
    assert_eq!(sink.row_count("dim_competition").unwrap(), Some(2));
    assert_eq!(sink.get("fact_lifting").map(|rel| rel.row_count()), Some(3));
}
