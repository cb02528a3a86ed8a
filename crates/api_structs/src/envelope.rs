use serde::{Deserialize, Serialize};

/// Every response body: `{ success, message, data? }`. `data` is left out when there is none.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn success_without_data(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// An empty list is sent without `data`, which callers read as "no data"
    pub fn list(message: impl Into<String>, items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::success_without_data(message)
        } else {
            Self::success(message, items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_omits_empty_data() {
        let envelope = Envelope::<Vec<u32>>::list("Nothing", vec![]);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({ "success": true, "message": "Nothing" })
        );

        let envelope = Envelope::list("Something", vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({ "success": true, "message": "Something", "data": [1, 2] })
        );
    }

    #[test]
    fn it_reads_missing_data_as_none() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{ "success": false, "message": "Oops" }"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }
}
