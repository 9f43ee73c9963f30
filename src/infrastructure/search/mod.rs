// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供 iTunes 搜索接口的 HTTP 客户端实现，
/// 以及搜索结果封面图片的下载器
pub mod artwork;
pub mod itunes;

pub use artwork::{ArtworkError, ArtworkLoader};
pub use itunes::ITunesClient;
