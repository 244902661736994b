use crate::{
	Result,
	db::Db,
	models::{NewContact, NewContactAddress, NewPreviousName, NewPrisonerContact},
};

pub async fn insert_contact(db: &Db, contact: &NewContact) -> Result<i64> {
	let contact_id = sqlx::query_scalar(
		"\
INSERT INTO contacts (
	title_code,
	last_name,
	first_name,
	middle_names,
	date_of_birth,
	created_by
)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING contact_id",
	)
	.bind(contact.title_code.as_deref())
	.bind(contact.last_name.as_str())
	.bind(contact.first_name.as_str())
	.bind(contact.middle_names.as_deref())
	.bind(contact.date_of_birth)
	.bind(contact.created_by.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(contact_id)
}

pub async fn insert_contact_address(db: &Db, address: &NewContactAddress) -> Result<i64> {
	let contact_address_id = sqlx::query_scalar(
		"\
INSERT INTO contact_addresses (
	contact_id,
	address_type,
	primary_address,
	flat,
	property,
	street,
	area,
	city_code,
	county_code,
	post_code,
	country_code,
	mail_flag,
	start_date,
	end_date,
	no_fixed_address,
	created_by
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
RETURNING contact_address_id",
	)
	.bind(address.contact_id)
	.bind(address.address_type.as_deref())
	.bind(address.primary_address)
	.bind(address.flat.as_deref())
	.bind(address.property.as_deref())
	.bind(address.street.as_deref())
	.bind(address.area.as_deref())
	.bind(address.city_code.as_deref())
	.bind(address.county_code.as_deref())
	.bind(address.post_code.as_deref())
	.bind(address.country_code.as_deref())
	.bind(address.mail_flag)
	.bind(address.start_date)
	.bind(address.end_date)
	.bind(address.no_fixed_address)
	.bind(address.created_by.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(contact_address_id)
}

pub async fn insert_previous_name(db: &Db, name: &NewPreviousName) -> Result<i64> {
	let previous_name_id = sqlx::query_scalar(
		"\
INSERT INTO contact_previous_names (contact_id, last_name, first_name, middle_names, created_by)
VALUES ($1, $2, $3, $4, $5)
RETURNING contact_previous_name_id",
	)
	.bind(name.contact_id)
	.bind(name.last_name.as_str())
	.bind(name.first_name.as_str())
	.bind(name.middle_names.as_deref())
	.bind(name.created_by.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(previous_name_id)
}

pub async fn insert_prisoner_contact(db: &Db, relationship: &NewPrisonerContact) -> Result<i64> {
	let prisoner_contact_id = sqlx::query_scalar(
		"\
INSERT INTO prisoner_contacts (
	contact_id,
	prisoner_number,
	relationship_type,
	relationship_to_prisoner,
	active,
	created_by
)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING prisoner_contact_id",
	)
	.bind(relationship.contact_id)
	.bind(relationship.prisoner_number.as_str())
	.bind(relationship.relationship_type.as_str())
	.bind(relationship.relationship_to_prisoner.as_str())
	.bind(relationship.active)
	.bind(relationship.created_by.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(prisoner_contact_id)
}

pub async fn insert_reference_code(
	db: &Db,
	group_code: &str,
	code: &str,
	description: &str,
) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO reference_codes (group_code, code, description)
VALUES ($1, $2, $3)
ON CONFLICT (group_code, code) DO UPDATE
SET description = EXCLUDED.description",
	)
	.bind(group_code)
	.bind(code)
	.bind(description)
	.execute(&db.pool)
	.await?;

	Ok(())
}
