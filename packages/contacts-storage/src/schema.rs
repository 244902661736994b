pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"00_extensions.sql" => out.push_str(include_str!("../../../sql/00_extensions.sql")),
				"tables/001_contacts.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_contacts.sql")),
				"tables/002_contact_addresses.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_contact_addresses.sql")),
				"tables/003_contact_previous_names.sql" => out
					.push_str(include_str!("../../../sql/tables/003_contact_previous_names.sql")),
				"tables/004_reference_codes.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_reference_codes.sql")),
				"tables/005_prisoner_contacts.sql" =>
					out.push_str(include_str!("../../../sql/tables/005_prisoner_contacts.sql")),
				"views/001_contacts_with_primary_address.sql" => out.push_str(include_str!(
					"../../../sql/views/001_contacts_with_primary_address.sql"
				)),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_include_is_expanded() {
		let sql = render_schema();

		assert!(!sql.contains("\\ir "), "Unexpanded include in rendered schema.");
		assert!(sql.contains("CREATE EXTENSION IF NOT EXISTS fuzzystrmatch"));
		assert!(sql.contains("CREATE OR REPLACE VIEW contacts_with_primary_address"));
	}
}
