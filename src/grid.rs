//! Paging DTOs for the jQuery Bootgrid plugin.
//!
//! Field names follow the plugin's camelCase wire format.

// self
use crate::_prelude::*;

/// Query parameters posted by the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootgridParams {
	/// One-based page number.
	pub current: u32,
	/// Rows per page; `-1` asks for every row.
	pub row_count: i32,
	/// Sort expression, absent when the grid is unsorted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort: Option<String>,
	/// Free-text search.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_phrase: Option<String>,
}
impl BootgridParams {
	/// Whether the grid asked for every row at once.
	pub fn is_unbounded(&self) -> bool {
		self.row_count < 0
	}

	/// Number of rows to skip for the requested page.
	pub fn offset(&self) -> u64 {
		match self.limit() {
			Some(limit) => u64::from(self.current.saturating_sub(1)) * limit,
			None => 0,
		}
	}

	/// Page size, or `None` when every row was requested.
	pub fn limit(&self) -> Option<u64> {
		u64::try_from(self.row_count).ok()
	}

	/// Trimmed search phrase, `None` when blank.
	pub fn search(&self) -> Option<&str> {
		self.search_phrase.as_deref().map(str::trim).filter(|phrase| !phrase.is_empty())
	}
}
impl Default for BootgridParams {
	fn default() -> Self {
		Self { current: 1, row_count: 10, sort: None, search_phrase: None }
	}
}

/// Page of rows returned to the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootgridPage<T> {
	/// One-based page number.
	pub current: u32,
	/// Rows per page as requested.
	pub row_count: i32,
	/// Rows of the page.
	pub rows: Vec<T>,
	/// Rows matching the query across all pages.
	pub total: u64,
}
impl<T> BootgridPage<T> {
	/// Echoes the paging parameters alongside the fetched rows.
	pub fn from_params(params: &BootgridParams, rows: Vec<T>, total: u64) -> Self {
		Self { current: params.current, row_count: params.row_count, rows, total }
	}
}
