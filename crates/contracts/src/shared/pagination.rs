use serde::{Deserialize, Serialize};

use super::query::ListQuery;

/// Pagination block as returned by list endpoints. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page", alias = "currentPage")]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default, alias = "total", alias = "totalItems")]
    pub total_count: usize,
    #[serde(default)]
    pub total_pages: usize,
}

fn first_page() -> usize {
    1
}

/// `data` of a list response: either `{ items, pagination }` or a bare array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paged {
        items: Vec<T>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Plain(Vec<T>),
}

/// One page of a resource, replaced wholesale on every successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResource<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Default for ListResource<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit: 0,
            total_pages: 1,
            total_count: 0,
        }
    }
}

/// `ceil(total_count / limit)`, never less than one page
pub fn total_pages_for(total_count: usize, limit: usize) -> usize {
    if total_count == 0 || limit == 0 {
        1
    } else {
        (total_count + limit - 1) / limit
    }
}

impl<T> ListResource<T> {
    /// Build a page from a decoded payload and the query that requested it.
    ///
    /// A bare array is treated as the whole collection and paged locally.
    pub fn from_payload(payload: ListPayload<T>, query: &ListQuery) -> Self {
        match payload {
            ListPayload::Paged { items, pagination } => {
                let pagination = pagination.unwrap_or(Pagination {
                    page: query.page,
                    limit: query.limit,
                    total_count: items.len(),
                    total_pages: 0,
                });
                let limit = if pagination.limit > 0 {
                    pagination.limit
                } else {
                    query.limit
                };
                Self {
                    items,
                    page: pagination.page.max(1),
                    limit,
                    total_pages: total_pages_for(pagination.total_count, limit),
                    total_count: pagination.total_count,
                }
            }
            ListPayload::Plain(all) => Self::paged_locally(all, query.page, query.limit),
        }
    }

    /// Slice one page out of a complete collection.
    pub fn paged_locally(all: Vec<T>, page: usize, limit: usize) -> Self {
        let total_count = all.len();
        let total_pages = total_pages_for(total_count, limit);
        let page = page.clamp(1, total_pages);
        let items = if limit == 0 {
            all
        } else {
            all.into_iter()
                .skip((page - 1) * limit)
                .take(limit)
                .collect()
        };
        Self {
            items,
            page,
            limit,
            total_pages,
            total_count,
        }
    }

    /// Drop the item matching `pred`, keeping the counters consistent.
    /// Returns `true` when exactly one item was removed.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> bool {
        let before = self.items.len();
        if let Some(pos) = self.items.iter().position(|item| pred(item)) {
            self.items.remove(pos);
        }
        let removed = before != self.items.len();
        if removed {
            self.total_count = self.total_count.saturating_sub(1);
            self.total_pages = total_pages_for(self.total_count, self.limit);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: usize, limit: usize) -> ListQuery {
        ListQuery {
            page,
            limit,
            ..ListQuery::default()
        }
    }

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(0, 10), 1);
        assert_eq!(total_pages_for(10, 10), 1);
        assert_eq!(total_pages_for(11, 10), 2);
        assert_eq!(total_pages_for(95, 10), 10);
        assert_eq!(total_pages_for(5, 0), 1);
    }

    #[test]
    fn test_paged_payload_recomputes_total_pages() {
        let json = r#"{"items":[1,2,3],"pagination":{"page":2,"limit":3,"total":7,"totalPages":9}}"#;
        let payload: ListPayload<u32> = serde_json::from_str(json).unwrap();
        let list = ListResource::from_payload(payload, &query(2, 3));
        assert_eq!(list.items, vec![1, 2, 3]);
        assert_eq!(list.page, 2);
        assert_eq!(list.total_count, 7);
        assert_eq!(list.total_pages, 3);
    }

    #[test]
    fn test_paged_payload_without_pagination() {
        let payload: ListPayload<u32> = serde_json::from_str(r#"{"items":[4,5]}"#).unwrap();
        let list = ListResource::from_payload(payload, &query(1, 10));
        assert_eq!(list.total_count, 2);
        assert_eq!(list.total_pages, 1);
        assert_eq!(list.limit, 10);
    }

    #[test]
    fn test_plain_array_is_paged_locally() {
        let payload: ListPayload<u32> = serde_json::from_str("[1,2,3,4,5,6,7]").unwrap();
        let list = ListResource::from_payload(payload, &query(3, 3));
        assert_eq!(list.items, vec![7]);
        assert_eq!(list.total_pages, 3);
        assert_eq!(list.total_count, 7);
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        let list = ListResource::paged_locally(vec![1, 2, 3], 5, 2);
        assert_eq!(list.page, 2);
        assert_eq!(list.items, vec![3]);
    }

    #[test]
    fn test_remove_where_removes_one() {
        let mut list = ListResource::paged_locally(vec![1, 2, 2, 3], 1, 10);
        assert!(list.remove_where(|v| *v == 2));
        assert_eq!(list.items, vec![1, 2, 3]);
        assert_eq!(list.total_count, 3);
        assert!(!list.remove_where(|v| *v == 9));
        assert_eq!(list.items.len(), 3);
    }
}
