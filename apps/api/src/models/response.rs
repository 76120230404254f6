use serde::Serialize;

/// Success envelope for the generator and profile endpoints: `{success: true, data}`.
/// Failures never use it; they render through `AppError`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
