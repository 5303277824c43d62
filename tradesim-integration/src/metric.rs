use serde::Serialize;

/// Generic measurement, eg/ the round trip duration of an Http request.
#[derive(Debug, Clone, PartialOrd, PartialEq, Serialize)]
pub struct Metric {
    /// Metric name.
    pub name: &'static str,

    /// Milliseconds since the Unix epoch.
    pub time: u64,

    /// Key-Value pairs to categorise the Metric.
    pub tags: Vec<Tag>,

    /// Observed measurements.
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Ord, PartialOrd, Eq, PartialEq)]
pub struct Tag {
    pub key: &'static str,
    pub value: String,
}

/// Observed measurement, eg/ a duration in milliseconds.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Serialize)]
pub struct Field {
    pub key: &'static str,
    pub value: u64,
}

impl Metric {
    /// Find the [`Field`] value associated with the provided key, if present.
    pub fn field(&self, key: &str) -> Option<u64> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.value)
    }
}

impl Tag {
    pub fn new<S>(key: &'static str, value: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl Field {
    pub fn new(key: &'static str, value: u64) -> Self {
        Self { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_field() {
        let metric = Metric {
            name: "http_request_duration",
            time: 0,
            tags: vec![Tag::new("http_method", "GET"), Tag::new("path", "/simulate")],
            fields: vec![Field::new("duration", 12)],
        };

        assert_eq!(metric.field("duration"), Some(12));
        assert_eq!(metric.field("bytes"), None);
    }
}
