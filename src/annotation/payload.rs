use serde_json::{Map, Value};

/// One annotation record: field name to JSON value, as returned by the service
pub type AnnotationRecord = Map<String, Value>;

/// The annotation field group of one response.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationPayload {
    Single(AnnotationRecord),
    Many(Vec<AnnotationRecord>),
}

impl AnnotationPayload {
    /// Extract `field_group` from a service response.
    ///
    /// Returns `None` when the response is not an object, lacks the field group,
    /// or holds something other than an object or array under it. Array items
    /// that are not objects are dropped.
    #[must_use]
    pub fn from_response(response: Value, field_group: &str) -> Option<Self> {
        let Value::Object(mut body) = response else {
            return None;
        };

        match body.remove(field_group)? {
            Value::Object(record) => Some(Self::Single(record)),
            Value::Array(items) => Some(Self::Many(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(record) => Some(record),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        }
    }

    /// The records in response order
    #[must_use]
    pub fn into_records(self) -> Vec<AnnotationRecord> {
        match self {
            Self::Single(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}
