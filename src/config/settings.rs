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

/// 应用程序配置设置
///
/// 包含服务器、聚合搜索、内容来源和指标导出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 聚合搜索配置
    pub search: SearchSettings,
    /// 内容来源配置
    pub sources: SourceSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 聚合搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 单个来源的调用预算（毫秒）
    pub timeout_ms: u64,
    /// 每页结果数
    pub results_per_page: u32,
    /// 结果缓存的最大条目数
    pub cache_capacity: usize,
    /// 普通域名保留的结果数上限
    pub default_domain_cap: usize,
    /// 与查询词匹配的域名保留的结果数上限
    pub matched_domain_cap: usize,
    /// 访问来源时使用的 User-Agent
    pub user_agent: String,
    /// 同时保留会话的客户端数上限
    pub max_clients: usize,
}

/// 内容来源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 启用的来源名称 (domain, wikipedia, github, stackexchange, hackernews, openlibrary)
    pub enabled: Vec<String>,
    /// 域名猜测时探测的顶级域名
    pub domain_tlds: Vec<String>,
    /// 单次域名探测超时（毫秒）
    pub check_timeout_ms: u64,
    /// 探测URL模板，`{domain}` 为候选域名
    pub check_url_template: String,
    pub wikipedia_url: String,
    pub github_url: String,
    pub stackexchange_url: String,
    pub hackernews_url: String,
    pub openlibrary_url: String,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `METASEARCH__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("METASEARCH")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("sources.enabled")
                    .with_list_parse_key("sources.domain_tlds")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置（其余项使用默认值）
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }

    /// 仅使用内置默认值的配置
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        let sources: Vec<String> = crate::domain::search::source::SourceKind::ALL
            .iter()
            .map(|kind| kind.to_string())
            .collect();
        let tlds: Vec<String> = crate::infrastructure::search::domain_guess::DEFAULT_TLDS
            .iter()
            .map(|tld| tld.to_string())
            .collect();

        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Aggregation defaults
            .set_default("search.timeout_ms", 800)?
            .set_default("search.results_per_page", 10)?
            .set_default("search.cache_capacity", 20)?
            .set_default("search.default_domain_cap", 1)?
            .set_default("search.matched_domain_cap", 50)?
            .set_default("search.max_clients", 256)?
            .set_default(
                "search.user_agent",
                crate::infrastructure::search::http::DEFAULT_USER_AGENT,
            )?
            // Source defaults
            .set_default("sources.enabled", sources)?
            .set_default("sources.domain_tlds", tlds)?
            .set_default("sources.check_timeout_ms", 1000)?
            .set_default("sources.check_url_template", "https://{domain}")?
            .set_default("sources.wikipedia_url", "https://en.wikipedia.org")?
            .set_default("sources.github_url", "https://api.github.com")?
            .set_default("sources.stackexchange_url", "https://api.stackexchange.com")?
            .set_default("sources.hackernews_url", "https://hn.algolia.com")?
            .set_default("sources.openlibrary_url", "https://openlibrary.org")?
            // Metrics defaults
            .set_default("metrics.enabled", true)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}
