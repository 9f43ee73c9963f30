// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义搜索请求的构造方式、传输接口以及响应的归一化解析
pub mod engine;
pub mod parser;
pub mod query;

pub use engine::{CatalogError, CatalogTransport, TransportResponse};
pub use parser::{parse_results, ParseError};
pub use query::{build_search_url, RESULT_LIMIT};
