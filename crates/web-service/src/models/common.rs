use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 成功
pub const SUCCESS_CODE: i32 = 0;

/// 用户参数错误
pub const INVALID_PARAM_CODE: i32 = 1;

/// 服务端内部错误（数据库异常等）
pub const INTERNAL_ERROR_CODE: i32 = 2;

/// 所有接口统一的返回格式
///
/// ```json
/// {"code": 0, "msg": "success", "data": ...}
/// ```
///
/// - `code`: 0 表示成功，非0表示失败
/// - `msg`: 成功时固定为 `success`，失败时为错误描述
/// - `data`: 具体业务数据，没有数据时为 `null`
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    #[schema(example = 0)]
    pub code: i32,

    #[schema(example = "success")]
    pub msg: String,

    pub data: T,
}

impl<T> Reply<T> {
    /// 成功返回
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: "success".to_string(),
            data,
        }
    }
}

impl Reply<()> {
    /// 失败返回，`data` 固定为 `null`
    pub fn failure(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: (),
        }
    }
}
