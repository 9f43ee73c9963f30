// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 默认的 iTunes 搜索接口地址
pub const DEFAULT_ITUNES_BASE_URL: &str = "https://itunes.apple.com/search";

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// iTunes 搜索接口配置
    pub itunes: ITunesSettings,
}

/// iTunes 搜索接口配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ITunesSettings {
    /// 搜索接口地址（仅用于指向镜像或测试服务器，查询参数固定不变）
    pub base_url: String,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

impl ITunesSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ITunesSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ITUNES_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("storesearch/{}", env!("CARGO_PKG_VERSION"))
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 以及
    /// `STORESEARCH__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("itunes.base_url", DEFAULT_ITUNES_BASE_URL)?
            .set_default("itunes.timeout_secs", 30)?
            .set_default("itunes.user_agent", default_user_agent())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("STORESEARCH").separator("__"));

        builder.build()?.try_deserialize()
    }
}
