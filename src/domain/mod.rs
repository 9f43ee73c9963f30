// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：搜索结果、类别和搜索状态
/// - 搜索（search）：查询构造、传输接口和结果解析
/// - 服务（services）：单请求搜索状态机
///
/// 领域层不依赖于任何具体的 HTTP 实现，
/// 传输层通过 `CatalogTransport` 接口注入。
pub mod models;
pub mod search;
pub mod services;
