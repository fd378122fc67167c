//! End-to-end table behavior over a small fixture set

use grappelli_core::{ColumnDefinition, FilterKind, FilterSpec, FilterValue, SortEntry};
use grappelli_pagination::{PageItem, WindowMode};
use grappelli_table::{Controlled, Table, TableOptions};
use rstest::rstest;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

fn people() -> Vec<Value> {
	vec![
		json!({"firstName": "Joanna", "lastName": "Vola", "age": 34}),
		json!({"firstName": "Pierre", "lastName": "Ferret", "age": 51}),
		json!({"firstName": "Jo", "lastName": "Privat", "age": 28}),
		json!({"firstName": "Marjorie", "lastName": "Crombey", "age": 45}),
		json!({"firstName": "Baro", "lastName": "Ferret", "age": 39}),
	]
}

fn columns() -> Vec<ColumnDefinition<Value>> {
	vec![
		ColumnDefinition::field("firstName", "First name")
			.filter(FilterSpec::new(FilterKind::Text, "firstName")),
		ColumnDefinition::field("lastName", "Last name"),
		ColumnDefinition::field("age", "Age")
			.filter(FilterSpec::new(FilterKind::Range, "age")),
	]
}

#[rstest]
fn test_text_filter_matches_case_insensitive_substring() {
	// Arrange
	let table = Table::new(TableOptions::new(people(), columns())).unwrap();

	// Act
	table
		.set_column_filter("firstName", FilterValue::Text("Jo".to_string()))
		.unwrap();

	// Assert - exactly the rows whose firstName contains "Jo", case-insensitively
	let names: Vec<String> = table
		.row_model()
		.iter()
		.map(|row| row["firstName"].as_str().unwrap().to_string())
		.collect();
	assert_eq!(names.len(), 3);
	assert!(names.contains(&"Joanna".to_string()));
	assert!(names.contains(&"Jo".to_string()));
	assert!(names.contains(&"Marjorie".to_string()));
}

#[rstest]
fn test_range_filter_combines_with_text_filter() {
	// Arrange
	let table = Table::new(TableOptions::new(people(), columns())).unwrap();

	// Act
	table
		.set_column_filter("firstName", FilterValue::Text("jo".to_string()))
		.unwrap();
	table
		.set_column_filter("age", FilterValue::Range(Some(30.0), None))
		.unwrap();

	// Assert
	let names: Vec<String> = table
		.row_model()
		.iter()
		.map(|row| row["firstName"].as_str().unwrap().to_string())
		.collect();
	assert_eq!(names, vec!["Joanna", "Marjorie"]);
}

#[rstest]
fn test_clearing_a_filter_restores_rows() {
	let table = Table::new(TableOptions::new(people(), columns())).unwrap();
	table
		.set_column_filter("firstName", FilterValue::Text("jo".to_string()))
		.unwrap();
	assert_eq!(table.row_model().len(), 3);

	table
		.set_column_filter("firstName", FilterValue::Text(String::new()))
		.unwrap();
	assert!(table.column_filters().is_empty());
	assert_eq!(table.row_model().len(), 5);
}

#[rstest]
fn test_global_filter_ranks_rows() {
	// Arrange
	let table = Table::new(TableOptions::new(people(), columns())).unwrap();

	// Act
	table.set_global_filter("ferret");

	// Assert - both Ferrets match, ranked before nothing else
	let last_names: Vec<String> = table
		.row_model()
		.iter()
		.map(|row| row["lastName"].as_str().unwrap().to_string())
		.collect();
	assert_eq!(last_names, vec!["Ferret", "Ferret"]);
}

#[rstest]
fn test_pagination_slices_the_filtered_set() {
	// Arrange
	let table = Table::new(
		TableOptions::new(people(), columns()).paginated(true),
	)
	.unwrap();
	table.set_sorting(vec![SortEntry::asc("age")]);
	table.set_pagination(1.0, 2.0);

	// Act
	let ages: Vec<i64> = table
		.row_model()
		.iter()
		.map(|row| row["age"].as_i64().unwrap())
		.collect();

	// Assert - second page of two, ascending by age
	assert_eq!(ages, vec![39, 45]);
	assert_eq!(table.paginator().total_pages(), 3);
}

#[rstest]
fn test_page_items_follow_the_window_mode() {
	let mut rows = Vec::new();
	for i in 0..120 {
		rows.push(json!({"firstName": format!("p{i}"), "lastName": "x", "age": i}));
	}
	let table = Table::new(
		TableOptions::new(rows, columns())
			.paginated(true)
			.window_mode(WindowMode::Default)
			.max_visible_pages(5),
	)
	.unwrap();
	table.set_pagination(0.0, 10.0);

	let items = table.page_items();
	assert_eq!(items.len(), 6);
	assert_eq!(items[0], PageItem::Page(0));
	assert_eq!(items[4], PageItem::RightEllipsis);
	assert_eq!(items[5], PageItem::Page(11));
}

#[rstest]
fn test_lazy_mode_renders_rows_as_given() {
	// Arrange - a filter that would hide rows client-side
	let table = Table::new(
		TableOptions::new(people(), columns()).lazy(true),
	)
	.unwrap();
	table
		.set_column_filter("firstName", FilterValue::Text("jo".to_string()))
		.unwrap();

	// Act & Assert - filtering is the server's job in lazy mode
	assert_eq!(table.row_model().len(), 5);
}

#[rstest]
fn test_lazy_events_carry_validated_intent() {
	// Arrange
	let events = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&events);
	let table = Table::new(
		TableOptions::new(people(), columns())
			.lazy(true)
			.paginated(true)
			.on_lazy_load(move |event| sink.borrow_mut().push(event)),
	)
	.unwrap();
	table.set_pagination(2.0, 25.0);
	table.set_global_filter("jo'; --");
	table.set_sorting(vec![SortEntry::asc(""), SortEntry::desc("age")]);

	// Act
	assert!(table.notify_lazy());

	// Assert
	let events = events.borrow();
	assert_eq!(events.len(), 1);
	let event = &events[0];
	assert_eq!(event.first, 50);
	assert_eq!(event.rows, 25);
	assert_eq!(event.page, 2);
	assert_eq!(event.global_filter, "jo --");
	assert_eq!(event.sorting, vec![SortEntry::desc("age")]);
}

#[rstest]
fn test_lazy_events_are_rate_limited() {
	// Arrange
	let delivered = Rc::new(RefCell::new(0usize));
	let sink = Rc::clone(&delivered);
	let table = Table::new(
		TableOptions::new(people(), columns())
			.lazy(true)
			.on_lazy_load(move |_| *sink.borrow_mut() += 1),
	)
	.unwrap();

	// Act - hammer well past the per-second budget
	let mut accepted = 0usize;
	for _ in 0..50 {
		if table.notify_lazy() {
			accepted += 1;
		}
	}

	// Assert - excess events were dropped, delivery count matches admissions
	assert!(accepted < 50);
	assert_eq!(*delivered.borrow(), accepted);
}

#[rstest]
fn test_controlled_global_filter_routes_through_the_caller() {
	// Arrange - caller owns the global filter value
	let written = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&written);
	let table = Table::new(
		TableOptions::new(people(), columns()).controlled_global_filter(Controlled::new(
			"pierre".to_string(),
			move |value| sink.borrow_mut().push(value),
		)),
	)
	.unwrap();

	// Act
	table.set_global_filter("<i>jo</i>");

	// Assert - the setter saw the sanitized value; the exposed value is
	// still the caller's, so the row model reflects "pierre"
	assert_eq!(*written.borrow(), vec!["jo".to_string()]);
	assert_eq!(table.row_model().len(), 1);
	assert_eq!(table.row_model()[0]["firstName"], json!("Pierre"));
}

#[rstest]
fn test_debounced_input_feeds_the_global_filter() {
	// Arrange
	let table = Table::new(TableOptions::new(people(), columns())).unwrap();
	let mut input = table.global_filter_input();

	// Act - type, then settle immediately
	input.input("<b>jo</b>");
	input.flush();

	// Assert
	assert_eq!(table.global_filter(), "jo");
	assert_eq!(table.row_model().len(), 3);
}
