use crate::config::DEFAULT_PER_PAGE;
use crate::models::{CatalogStats, FileRecord, PageResult, Pagination};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Filename,
    Size,
    #[default]
    Modified,
}

impl From<&str> for SortField {
    /// Unrecognized names fall back to [`SortField::Modified`].
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "filename" => SortField::Filename,
            "size" => SortField::Size,
            _ => SortField::Modified,
        }
    }
}

impl FromStr for SortField {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortField::from(s))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Filename => "filename",
            SortField::Size => "size",
            SortField::Modified => "modified",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl From<&str> for SortOrder {
    /// Unrecognized names fall back to [`SortOrder::Desc`].
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortOrder::from(s))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Parameters of one paginated listing. Pages are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub per_page: usize,
    pub search: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// Filter, sort and slice one scan's records.
///
/// `per_page` of 0 is treated as 1 and `page` is clamped into
/// `1..=total_pages`, so an out-of-range request returns the nearest page.
pub fn build_page(records: Vec<FileRecord>, query: &ListQuery) -> PageResult {
    let mut files = filter_records(records, query.search.as_deref());
    sort_records(&mut files, query.sort_field, query.sort_order);

    let stats = CatalogStats::collect(&files);

    let per_page = if query.per_page == 0 {
        debug!("per_page of 0 requested, using 1");
        1
    } else {
        query.per_page
    };
    let total_files = files.len();
    let total_pages = total_files.div_ceil(per_page).max(1);
    let page = query.page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_files);
    let page_files = if start < total_files {
        files.drain(start..end).collect()
    } else {
        Vec::new()
    };

    PageResult {
        files: page_files,
        pagination: Pagination {
            current_page: page,
            per_page,
            total_files,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        },
        stats,
    }
}

fn filter_records(records: Vec<FileRecord>, search: Option<&str>) -> Vec<FileRecord> {
    let Some(term) = search.filter(|s| !s.is_empty()) else {
        return records;
    };
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            r.filename.to_lowercase().contains(&needle)
                || r.relative_path.to_lowercase().contains(&needle)
        })
        .collect()
}

// Stable in both directions: equal keys keep walk order.
fn sort_records(records: &mut [FileRecord], field: SortField, order: SortOrder) {
    let compare: fn(&FileRecord, &FileRecord) -> Ordering = match field {
        SortField::Filename => |a, b| a.filename.to_lowercase().cmp(&b.filename.to_lowercase()),
        SortField::Size => |a, b| a.size.cmp(&b.size),
        SortField::Modified => |a, b| a.modified.total_cmp(&b.modified),
    };

    match order {
        SortOrder::Asc => records.sort_by(compare),
        SortOrder::Desc => records.sort_by(|a, b| compare(b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parsing_falls_back_to_modified() {
        assert_eq!(SortField::from("filename"), SortField::Filename);
        assert_eq!(SortField::from("SIZE"), SortField::Size);
        assert_eq!(SortField::from("modified"), SortField::Modified);
        assert_eq!(SortField::from("duration"), SortField::Modified);
        assert_eq!(SortField::from(""), SortField::Modified);
    }

    #[test]
    fn test_sort_order_parsing_falls_back_to_desc() {
        assert_eq!(SortOrder::from("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::from("Desc"), SortOrder::Desc);
        assert_eq!(SortOrder::from("sideways"), SortOrder::Desc);
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 50);
        assert_eq!(query.search, None);
        assert_eq!(query.sort_field, SortField::Modified);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }
}
