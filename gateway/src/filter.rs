//! Filtered-read query builder.
//!
//! A `TableQuery` names a collection, a column projection, and a set of
//! predicates, and renders to PostgREST-style query parameters. The REST
//! dialect has no distinct modifier, so `distinct()` only marks the query;
//! the client deduplicates decoded rows after the fetch.

#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    /// Exact match: `col=eq.value`.
    Eq(String),
    /// Case-insensitive substring containment: `col=ilike.*value*`.
    Contains(String),
}

#[derive(Debug, Clone)]
pub struct TableQuery {
    table: String,
    columns: String,
    predicates: Vec<(String, Predicate)>,
    limit: Option<usize>,
    distinct: bool,
}

impl TableQuery {
    /// Start a query against `table`, selecting a comma-separated column list.
    pub fn from(table: &str, columns: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: columns.to_string(),
            predicates: Vec::new(),
            limit: None,
            distinct: false,
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.predicates
            .push((column.to_string(), Predicate::Eq(value.to_string())));
        self
    }

    /// Case-insensitive substring match; `term` is the raw user text, the
    /// builder owns the wildcarding.
    pub fn contains(mut self, column: &str, term: &str) -> Self {
        self.predicates
            .push((column.to_string(), Predicate::Contains(term.to_string())));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Render to query parameters. Values are left raw; the HTTP layer
    /// percent-encodes them when the URL is built.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.clone())];

        for (column, predicate) in &self.predicates {
            let rendered = match predicate {
                Predicate::Eq(value) => format!("eq.{value}"),
                Predicate::Contains(term) => format!("ilike.*{term}*"),
            };
            params.push((column.clone(), rendered));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_projection_and_eq() {
        let query = TableQuery::from("race_results", "horse_id,horse_name").eq("horse_id", "42");
        assert_eq!(
            query.to_params(),
            vec![
                ("select".to_string(), "horse_id,horse_name".to_string()),
                ("horse_id".to_string(), "eq.42".to_string()),
            ]
        );
    }

    #[test]
    fn renders_contains_with_wildcards_and_limit() {
        let query = TableQuery::from("race_results", "stable_name")
            .contains("stable_name", "iron")
            .limit(20);
        let params = query.to_params();
        assert!(params.contains(&("stable_name".to_string(), "ilike.*iron*".to_string())));
        assert!(params.contains(&("limit".to_string(), "20".to_string())));
    }

    #[test]
    fn distinct_marks_but_does_not_render() {
        let query = TableQuery::from("race_results", "bloodline").distinct();
        assert!(query.is_distinct());
        assert_eq!(
            query.to_params(),
            vec![("select".to_string(), "bloodline".to_string())]
        );
    }
}
