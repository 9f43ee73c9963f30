// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索类别（category）：限定搜索范围的封闭枚举
/// - 搜索结果（search_result）：统一格式的商品条目
/// - 搜索状态（search_state）：搜索服务当前所处的状态
pub mod category;
pub mod search_result;
pub mod search_state;

pub use category::Category;
pub use search_result::{display_name, SearchResult};
pub use search_state::SearchState;
