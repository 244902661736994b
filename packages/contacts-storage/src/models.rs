use time::{Date, OffsetDateTime};

/// One contact joined to at most one primary address.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactWithAddress {
	pub contact_id: i64,
	pub title_code: Option<String>,
	pub last_name: String,
	pub first_name: String,
	pub middle_names: Option<String>,
	pub date_of_birth: Option<Date>,
	pub deceased_date: Option<Date>,
	pub created_by: String,
	pub created_time: OffsetDateTime,
	pub updated_by: Option<String>,
	pub updated_time: Option<OffsetDateTime>,
	pub contact_address_id: Option<i64>,
	pub flat: Option<String>,
	pub property: Option<String>,
	pub street: Option<String>,
	pub area: Option<String>,
	pub city_code: Option<String>,
	pub county_code: Option<String>,
	pub post_code: Option<String>,
	pub country_code: Option<String>,
	pub mail_flag: Option<bool>,
	pub start_date: Option<Date>,
	pub end_date: Option<Date>,
	pub no_fixed_address: Option<bool>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactRelationship {
	pub contact_id: i64,
	pub prisoner_contact_id: i64,
	pub relationship_type: String,
	pub relationship_to_prisoner: String,
	pub relationship_description: Option<String>,
	pub active: bool,
}

#[derive(Debug, Clone)]
pub struct NewContact {
	pub title_code: Option<String>,
	pub last_name: String,
	pub first_name: String,
	pub middle_names: Option<String>,
	pub date_of_birth: Option<Date>,
	pub created_by: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewContactAddress {
	pub contact_id: i64,
	pub address_type: Option<String>,
	pub primary_address: bool,
	pub flat: Option<String>,
	pub property: Option<String>,
	pub street: Option<String>,
	pub area: Option<String>,
	pub city_code: Option<String>,
	pub county_code: Option<String>,
	pub post_code: Option<String>,
	pub country_code: Option<String>,
	pub mail_flag: bool,
	pub start_date: Option<Date>,
	pub end_date: Option<Date>,
	pub no_fixed_address: bool,
	pub created_by: String,
}

#[derive(Debug, Clone)]
pub struct NewPreviousName {
	pub contact_id: i64,
	pub last_name: String,
	pub first_name: String,
	pub middle_names: Option<String>,
	pub created_by: String,
}

#[derive(Debug, Clone)]
pub struct NewPrisonerContact {
	pub contact_id: i64,
	pub prisoner_number: String,
	/// `S` for social, `O` for official.
	pub relationship_type: String,
	pub relationship_to_prisoner: String,
	pub active: bool,
	pub created_by: String,
}
