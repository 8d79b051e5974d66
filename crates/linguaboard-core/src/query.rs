//! Query string parameters.
//!
//! Absent values are never written: an optional parameter set to `None` does
//! not appear in the query string at all. List values are expanded into one
//! pair per item under the same key. Everything else is stringified.

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params
            .push((key.into(), QueryValue::Scalar(value.to_string())));
        self
    }

    /// Adds the parameter only when a value is present.
    #[must_use]
    pub fn with_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn with_list<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        self.params.push((key.into(), QueryValue::List(values)));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }

    /// Expanded `(key, value)` pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(key, value)| {
            let values: Vec<&str> = match value {
                QueryValue::Scalar(v) => vec![v.as_str()],
                QueryValue::List(vs) => vs.iter().map(String::as_str).collect(),
            };
            values.into_iter().map(move |v| (key.as_str(), v))
        })
    }

    /// Value of the first pair with this key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}
