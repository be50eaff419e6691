//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::comments::__path_add_comment;
use crate::routes::comments::__path_delete_comment;
use crate::routes::comments::__path_get_comments;
use crate::routes::comments::{add_comment, delete_comment, get_comments};
use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod comments;

/// 预检请求的缓存时间：12小时
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// 导出当前App的所有业务路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
///
/// 三个接口的path都不相同，所以每个接口单独调用一次 [`routes!`]。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_comments))
        .routes(routes!(add_comment))
        .routes(routes!(delete_comment))
        .with_state(state)
}

/// 跨域配置
///
/// 前端页面和后端不在一个域，浏览器在发送 `POST` 之前会先发送 `OPTIONS` 预检请求。
/// 允许任意来源，以及常用的方法和请求头。
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式，访问地址 `/docs`
/// - 跨域和请求日志中间件
/// - 关闭axum默认的2MB请求体限制，评论内容不限长度
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "comments", description = "评论的查询、新增和删除")
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routers(shared_state))
        .split_for_parts();

    router
        .merge(Scalar::with_url("/docs", api))
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
