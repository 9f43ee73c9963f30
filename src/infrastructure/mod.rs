// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层抽象接口的具体实现：
/// - 搜索（search）：基于 reqwest 的 iTunes 搜索客户端和封面下载
pub mod search;
