//! End-to-end behaviour of `TabularDataProcessor::process`.

use crate::{TabularDataProcessor, renderers::uppercase};
use model::{
    core::value::Value,
    grid::{
        column::ColumnSpec,
        envelope::ResultEnvelope,
        request::{OrderDirection, PageLength, QueryRequest},
    },
    records::record::Record,
};

fn record(id: i64, name: &str) -> Record {
    Record::new().with("id", id).with("name", name)
}

fn processor_for(records: Vec<Record>) -> TabularDataProcessor {
    let mut processor = TabularDataProcessor::new();
    processor
        .set_records(records)
        .set_columns(vec![ColumnSpec::new("name", "Name")]);
    processor
}

fn seed() -> TabularDataProcessor {
    processor_for(vec![record(1, "Andi"), record(2, "Budi"), record(3, "Siti")])
}

fn ids(envelope: &ResultEnvelope) -> Vec<&str> {
    envelope.data.iter().map(|row| row.row_id.as_str()).collect()
}

#[test]
fn counts_stay_within_bounds() {
    let processor = seed();
    let requests = [
        QueryRequest::default(),
        QueryRequest::new().search("i"),
        QueryRequest::new().search("zzz"),
        QueryRequest::new().page(1, PageLength::Limit(1)),
        QueryRequest::new().page(5, PageLength::Limit(2)),
        QueryRequest::new().search("a").page(0, PageLength::All),
    ];
    for request in &requests {
        let envelope = processor.process(request);
        assert!(envelope.records_filtered <= envelope.records_total);
        assert!(envelope.data.len() <= envelope.records_filtered);
    }
}

#[test]
fn search_is_case_insensitive_substring() {
    let envelope = seed().process(&QueryRequest::new().search("DI"));
    assert_eq!(envelope.records_filtered, 2);
    assert_eq!(ids(&envelope), vec!["1", "2"]);
}

#[test]
fn ordering_is_stable() {
    let processor = processor_for(vec![record(1, "b"), record(2, "a"), record(3, "b")]);
    let envelope = processor.process(&QueryRequest::new().order_by(0, OrderDirection::Asc));
    assert_eq!(ids(&envelope), vec!["2", "1", "3"]);
}

#[test]
fn page_past_the_end_is_empty() {
    let envelope = seed().process(&QueryRequest::new().page(2, PageLength::Limit(10)));
    assert_eq!(envelope.data.len(), 1);

    let envelope = seed().process(&QueryRequest::new().page(3, PageLength::Limit(10)));
    assert!(envelope.data.is_empty());
    assert_eq!(envelope.records_filtered, 3);
}

#[test]
fn all_rows_ignores_start() {
    let envelope = seed().process(&QueryRequest::from_query_string("start=2&length=-1"));
    assert_eq!(ids(&envelope), vec!["1", "2", "3"]);
}

#[test]
fn draw_is_echoed_on_empty_results() {
    let envelope = seed().process(&QueryRequest::new().draw(7).search("nobody"));
    assert_eq!(envelope.draw, 7);
    assert_eq!(envelope.records_filtered, 0);
    assert!(envelope.data.is_empty());
}

#[test]
fn invalid_order_index_keeps_source_order() {
    let processor = processor_for(vec![record(1, "c"), record(2, "a"), record(3, "b")]);
    let envelope = processor.process(&QueryRequest::from_query_string(
        "order[0][column]=9&order[0][dir]=asc",
    ));
    assert_eq!(ids(&envelope), vec!["1", "2", "3"]);
}

#[test]
fn renderer_applies_to_every_row() {
    let mut processor = seed();
    processor.set_columns(vec![
        ColumnSpec::new("name", "Name").with_renderer(uppercase()),
    ]);
    let envelope = processor.process(&QueryRequest::new().page(0, PageLength::All));
    let names: Vec<&Value> = envelope.data.iter().filter_map(|row| row.get("name")).collect();
    assert_eq!(
        names,
        vec![
            &Value::String("ANDI".to_string()),
            &Value::String("BUDI".to_string()),
            &Value::String("SITI".to_string()),
        ]
    );
}

#[test]
fn wire_request_end_to_end() {
    let query = "draw=3&search%5Bvalue%5D=i&order%5B0%5D%5Bcolumn%5D=0&order%5B0%5D%5Bdir%5D=desc&start=0&length=2";
    let envelope = seed().process(&QueryRequest::from_query_string(query));
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["draw"], 3);
    assert_eq!(json["recordsTotal"], 3);
    assert_eq!(json["recordsFiltered"], 3);
    assert_eq!(json["data"][0]["name"], "Siti");
    assert_eq!(json["data"][0]["DT_RowId"], "3");
    assert_eq!(json["data"][1]["name"], "Budi");
}
