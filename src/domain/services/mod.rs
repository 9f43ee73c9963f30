// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 搜索服务（search_service）：同一时刻最多保持一个进行中的请求，
///   负责取消旧请求、解析响应、排序结果并发布最终状态
pub mod search_service;


pub use search_service::{CompletionReceiver, RequestId, SearchCompletion, SearchService};
