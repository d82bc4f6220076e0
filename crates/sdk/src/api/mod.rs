//! API endpoint groups.

mod companies;
mod diagnostics;
mod people;
mod saved_searches;

pub use companies::CompaniesApi;
pub use diagnostics::{DiagnosticsApi, ProbeOutcome, ProbeRecord, PROBE_PATHS};
pub use people::PeopleApi;
pub use saved_searches::SavedSearchesApi;

/// Query parameter carrying the page size.
pub const SIZE_PARAM: &str = "size";

/// Query parameter carrying the pagination cursor.
pub const CURSOR_PARAM: &str = "cursor";

/// Paging options for list-style endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Page size; the client default applies when `None`.
    pub size: Option<u32>,
    /// Opaque cursor from a previous response, sent verbatim.
    pub cursor: Option<String>,
}

impl Page {
    pub fn new(size: Option<u32>, cursor: Option<String>) -> Self {
        Self { size, cursor }
    }

    /// First page with the default size.
    pub fn first() -> Self {
        Self::default()
    }

    pub(crate) fn push_params(&self, default_size: u32, query: &mut Vec<(String, String)>) {
        query.push((
            SIZE_PARAM.to_string(),
            self.size.unwrap_or(default_size).to_string(),
        ));
        if let Some(cursor) = &self.cursor {
            query.push((CURSOR_PARAM.to_string(), cursor.clone()));
        }
    }
}
