use time::macros::date;

use contacts_config::Postgres;
use contacts_domain::{
	criteria::MatchMode,
	filter::{ContactFilter, NameFilter},
	page::PageRequest,
	sort::{Sort, SortTerm},
};
use contacts_storage::{
	contacts,
	db::Db,
	models::{NewContact, NewContactAddress, NewPreviousName, NewPrisonerContact},
	queries,
};
use contacts_testkit::TestDatabase;

async fn setup(base_dsn: &str) -> (TestDatabase, Db) {
	let test_db = TestDatabase::new(base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	(test_db, db)
}

async fn contact(db: &Db, last_name: &str, first_name: &str) -> i64 {
	queries::insert_contact(
		db,
		&NewContact {
			title_code: None,
			last_name: last_name.to_string(),
			first_name: first_name.to_string(),
			middle_names: None,
			date_of_birth: Some(date!(1980 - 01 - 01)),
			created_by: "TEST".to_string(),
		},
	)
	.await
	.expect("Failed to insert contact.")
}

async fn address(db: &Db, contact_id: i64, primary_address: bool, street: &str) -> i64 {
	queries::insert_contact_address(
		db,
		&NewContactAddress {
			contact_id,
			primary_address,
			street: Some(street.to_string()),
			created_by: "TEST".to_string(),
			..Default::default()
		},
	)
	.await
	.expect("Failed to insert address.")
}

fn name_filter(
	first_name: Option<&str>,
	last_name: Option<&str>,
	mode: MatchMode,
	include_previous_names: bool,
	row_limit: Option<u32>,
) -> ContactFilter {
	ContactFilter {
		contact_id: None,
		date_of_birth: None,
		names: Some(NameFilter {
			first_name: first_name.map(str::to_string),
			middle_names: None,
			last_name: last_name.map(str::to_string),
			mode,
			include_previous_names,
		}),
		row_limit,
	}
}

fn by_last_name(page: u32, size: u32) -> PageRequest {
	PageRequest::new(page, size, Sort::by(vec![SortTerm::asc("lastName")]))
		.expect("Expected valid page request.")
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CONTACTS_PG_DSN to run."]
async fn multiple_addresses_do_not_inflate_identifier_page() {
	let Some(base_dsn) = contacts_testkit::env_dsn() else {
		eprintln!("Skipping multiple_addresses_do_not_inflate_identifier_page; set CONTACTS_PG_DSN.");

		return;
	};
	let (test_db, db) = setup(&base_dsn).await;
	let contact_id = contact(&db, "Addressful", "Anna").await;

	address(&db, contact_id, false, "Old Street").await;

	let primary = address(&db, contact_id, true, "Main Street").await;
	let filter = name_filter(None, Some("Addressful"), MatchMode::Exact, false, None);
	let page = contacts::find_contact_ids(&db, &filter, &by_last_name(0, 10))
		.await
		.expect("Failed to find contact ids.");

	assert_eq!(page.ids, vec![contact_id]);
	assert_eq!(page.total, 1);

	let rows = contacts::fetch_contacts_with_address(&db, &page.ids, page.request.sort())
		.await
		.expect("Failed to fetch contact details.");

	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0].contact_address_id, Some(primary));
	assert_eq!(rows[0].street.as_deref(), Some("Main Street"));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CONTACTS_PG_DSN to run."]
async fn phonetic_scan_matches_sound_alike_names() {
	let Some(base_dsn) = contacts_testkit::env_dsn() else {
		eprintln!("Skipping phonetic_scan_matches_sound_alike_names; set CONTACTS_PG_DSN.");

		return;
	};
	let (test_db, db) = setup(&base_dsn).await;
	let smith = contact(&db, "Smith", "John").await;
	let smithe = contact(&db, "Smithe", "Jon").await;

	contact(&db, "Smyth", "Jonathan").await;

	let filter = name_filter(Some("John"), Some("Smith"), MatchMode::Phonetic, false, Some(2_000));
	let page = contacts::find_contact_ids(&db, &filter, &by_last_name(0, 10))
		.await
		.expect("Failed to find contact ids.");

	assert_eq!(page.ids, vec![smith, smithe]);
	assert_eq!(page.total, 2);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CONTACTS_PG_DSN to run."]
async fn phonetic_scan_total_is_capped_by_row_limit() {
	let Some(base_dsn) = contacts_testkit::env_dsn() else {
		eprintln!("Skipping phonetic_scan_total_is_capped_by_row_limit; set CONTACTS_PG_DSN.");

		return;
	};
	let (test_db, db) = setup(&base_dsn).await;

	for first_name in ["Ann", "Anne", "Anna", "Annie"] {
		contact(&db, "Taylor", first_name).await;
	}

	let filter = name_filter(None, Some("Tailor"), MatchMode::Phonetic, false, Some(3));
	let page = contacts::find_contact_ids(&db, &filter, &by_last_name(0, 10))
		.await
		.expect("Failed to find contact ids.");

	assert_eq!(page.total, 3);
	assert_eq!(page.ids.len(), 3);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CONTACTS_PG_DSN to run."]
async fn previous_names_match_only_with_history_and_without_duplicates() {
	let Some(base_dsn) = contacts_testkit::env_dsn() else {
		eprintln!(
			"Skipping previous_names_match_only_with_history_and_without_duplicates; set CONTACTS_PG_DSN."
		);

		return;
	};
	let (test_db, db) = setup(&base_dsn).await;
	let renamed = contact(&db, "Married", "Mary").await;

	for last_name in ["Maiden", "Maidenly"] {
		queries::insert_previous_name(
			&db,
			&NewPreviousName {
				contact_id: renamed,
				last_name: last_name.to_string(),
				first_name: "Mary".to_string(),
				middle_names: None,
				created_by: "TEST".to_string(),
			},
		)
		.await
		.expect("Failed to insert previous name.");
	}

	let without = name_filter(None, Some("Maiden"), MatchMode::Partial, false, None);
	let page = contacts::find_contact_ids(&db, &without, &by_last_name(0, 10))
		.await
		.expect("Failed to find contact ids.");

	assert!(page.ids.is_empty());
	assert_eq!(page.total, 0);

	let with = name_filter(None, Some("Maiden"), MatchMode::Partial, true, None);
	let page = contacts::find_contact_ids(&db, &with, &by_last_name(0, 10))
		.await
		.expect("Failed to find contact ids.");

	assert_eq!(page.ids, vec![renamed]);
	assert_eq!(page.total, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CONTACTS_PG_DSN to run."]
async fn relationships_are_restricted_to_prisoner_and_contacts() {
	let Some(base_dsn) = contacts_testkit::env_dsn() else {
		eprintln!("Skipping relationships_are_restricted_to_prisoner_and_contacts; set CONTACTS_PG_DSN.");

		return;
	};
	let (test_db, db) = setup(&base_dsn).await;
	let first = contact(&db, "Related", "Rita").await;
	let second = contact(&db, "Unrelated", "Uma").await;

	queries::insert_reference_code(&db, "SOCIAL_RELATIONSHIP", "SIS", "Sister")
		.await
		.expect("Failed to insert reference code.");

	for (contact_id, prisoner_number) in [(first, "A1234BC"), (second, "Z9999ZZ")] {
		queries::insert_prisoner_contact(
			&db,
			&NewPrisonerContact {
				contact_id,
				prisoner_number: prisoner_number.to_string(),
				relationship_type: "S".to_string(),
				relationship_to_prisoner: "SIS".to_string(),
				active: true,
				created_by: "TEST".to_string(),
			},
		)
		.await
		.expect("Failed to insert prisoner contact.");
	}

	let rows = contacts::fetch_relationships(&db, "A1234BC", &[first, second])
		.await
		.expect("Failed to fetch relationships.");

	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0].contact_id, first);
	assert_eq!(rows[0].relationship_description.as_deref(), Some("Sister"));
	assert!(rows[0].active);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
