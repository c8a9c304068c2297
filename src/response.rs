use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    /// Meta for a list returned in full, without pagination.
    pub fn single_page(total: i64) -> Self {
        Self::new(1, total.max(1), total)
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

/// Machine-readable error payload carried in the envelope's data slot.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorData {
    pub kind: &'static str,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

impl ApiResponse<ErrorData> {
    pub fn failure(kind: &'static str, message: String) -> Self {
        Self {
            data: Some(ErrorData {
                kind,
                error: message.clone(),
            }),
            message,
            meta: Some(Meta::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_never_reports_zero_per_page() {
        let meta = Meta::single_page(0);
        assert_eq!(meta.per_page, Some(1));
        assert_eq!(meta.total, Some(0));
    }

    #[test]
    fn failure_mirrors_the_message_into_the_payload() {
        let resp = ApiResponse::failure("conflict", "Cart already exists".into());
        assert_eq!(resp.message, "Cart already exists");
        let data = resp.data.unwrap();
        assert_eq!(data.kind, "conflict");
        assert_eq!(data.error, "Cart already exists");
    }
}
