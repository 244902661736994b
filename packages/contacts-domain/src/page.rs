use crate::{Error, Result, sort::Sort};

/// Zero-based page request with its sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
	page: u32,
	size: u32,
	sort: Sort,
}
impl PageRequest {
	pub fn new(page: u32, size: u32, sort: Sort) -> Result<Self> {
		if size == 0 {
			return Err(Error::InvalidPage { message: "size must be greater than zero.".to_string() });
		}

		Ok(Self { page, size, sort })
	}

	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn size(&self) -> u32 {
		self.size
	}

	pub fn sort(&self) -> &Sort {
		&self.sort
	}

	pub fn offset(&self) -> i64 {
		i64::from(self.page) * i64::from(self.size)
	}

	pub fn limit(&self) -> i64 {
		i64::from(self.size)
	}
}

/// Identifiers for one page plus the total across all pages, as produced by the identifier
/// phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPage {
	pub ids: Vec<i64>,
	pub total: u64,
	pub request: PageRequest,
}
impl IdentifierPage {
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
	pub content: Vec<T>,
	pub number: u32,
	pub size: u32,
	pub total_elements: u64,
	pub total_pages: u64,
}
impl<T> Page<T> {
	/// Builds a page whose metadata comes from `request` and `total`, never from `content`.
	pub fn new(content: Vec<T>, request: &PageRequest, total: u64) -> Self {
		Self {
			content,
			number: request.page(),
			size: request.size(),
			total_elements: total,
			total_pages: total_pages(total, request.size()),
		}
	}

	pub fn empty(request: &PageRequest, total: u64) -> Self {
		Self::new(Vec::new(), request, total)
	}

	pub fn map<U, F>(self, f: F) -> Page<U>
	where
		F: FnMut(T) -> U,
	{
		Page {
			content: self.content.into_iter().map(f).collect(),
			number: self.number,
			size: self.size,
			total_elements: self.total_elements,
			total_pages: self.total_pages,
		}
	}
}

pub fn total_pages(total: u64, size: u32) -> u64 {
	if size == 0 {
		return 0;
	}

	total.div_ceil(u64::from(size))
}
