use serde::{Deserialize, Serialize};

/// Конверт ответа сервиса администрирования:
/// `{ "error": false, "data": ... }` или `{ "error": true, "message": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            error: false,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Успешный конверт без `data` считается ошибкой протокола
    pub fn into_result(self) -> Result<T, String> {
        if self.error {
            return Err(self
                .message
                .unwrap_or_else(|| "Unknown service error".to_string()));
        }
        self.data
            .ok_or_else(|| "Service response has no data".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp: ServiceResponse<Vec<i64>> =
            serde_json::from_str(r#"{ "error": false, "data": [1, 2] }"#).unwrap();
        assert_eq!(resp.into_result(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_error_envelope() {
        let resp: ServiceResponse<Vec<i64>> =
            serde_json::from_str(r#"{ "error": true, "message": "Network unreachable" }"#)
                .unwrap();
        assert_eq!(resp.into_result(), Err("Network unreachable".to_string()));
    }

    #[test]
    fn test_success_without_data_is_error() {
        let resp: ServiceResponse<Vec<i64>> =
            serde_json::from_str(r#"{ "error": false }"#).unwrap();
        assert!(resp.into_result().is_err());
    }
}
