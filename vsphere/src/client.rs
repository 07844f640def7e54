//! vSphere 管理平面客户端核心实现

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::{NetworkApi, TaskApi, VmApi};
use crate::error::{Result, VsphereError};

/// 会话令牌请求头
const SESSION_HEADER: &str = "vmware-api-session-id";

/// vSphere 客户端配置
#[derive(Debug, Clone)]
pub struct VsphereConfig {
    /// 连接超时（秒）
    pub connect_timeout: u64,

    /// 请求超时（秒）
    pub request_timeout: u64,

    /// 是否验证 SSL 证书
    pub verify_ssl: bool,
}

impl Default for VsphereConfig {
    fn default() -> Self {
        Self {
            connect_timeout: 10,
            request_timeout: 30,
            verify_ssl: true,
        }
    }
}

/// vSphere 管理平面客户端
///
/// 负责会话管理和 HTTP 传输；各资源操作通过 [`VmApi`]、
/// [`NetworkApi`]、[`TaskApi`] 访问。
pub struct VsphereClient {
    /// API 基础 URL
    base_url: String,

    /// HTTP 客户端
    http_client: Client,

    /// 会话令牌
    session_token: Arc<RwLock<Option<String>>>,
}

impl VsphereClient {
    /// 创建新的 vSphere 客户端
    pub fn new(base_url: &str, config: VsphereConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| VsphereError::HttpError(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            session_token: Arc::new(RwLock::new(None)),
        })
    }

    /// 会话登录
    ///
    /// # Arguments
    /// * `username` - 用户名
    /// * `password` - 密码（通过 HTTP Basic 提交）
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        info!("vSphere 客户端登录: {}", username);

        let login_url = format!("{}/api/session", self.base_url);
        let credentials = BASE64.encode(format!("{}:{}", username, password));

        let response = self
            .http_client
            .post(&login_url)
            .header("Authorization", format!("Basic {}", credentials))
            .send()
            .await
            .map_err(|e| VsphereError::HttpError(e.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(VsphereError::AuthError(format!(
                "vSphere 登录失败: 用户 {} 认证被拒绝",
                username
            )));
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "无法读取错误响应".to_string());
            return Err(VsphereError::AuthError(format!(
                "vSphere 登录失败 [{}]: {}",
                status, text
            )));
        }

        // 响应体即会话令牌
        let token: String = response
            .json()
            .await
            .map_err(|e| VsphereError::ParseError(e.to_string()))?;

        *self.session_token.write().await = Some(token);

        info!("vSphere 客户端登录成功");
        Ok(())
    }

    /// 会话登出
    pub async fn logout(&self) -> Result<()> {
        info!("vSphere 客户端登出");

        let token = self.session_token.write().await.take();
        if let Some(token) = token {
            let logout_url = format!("{}/api/session", self.base_url);
            let result = self
                .http_client
                .delete(&logout_url)
                .header(SESSION_HEADER, &token)
                .send()
                .await;
            if let Err(e) = result {
                warn!("注销会话请求失败: {}", e);
            }
        }
        Ok(())
    }

    /// 获取虚拟机管理 API
    pub fn vm(&self) -> VmApi<'_> {
        VmApi::new(self)
    }

    /// 获取网络管理 API
    pub fn network(&self) -> NetworkApi<'_> {
        NetworkApi::new(self)
    }

    /// 获取任务管理 API
    pub fn task(&self) -> TaskApi<'_> {
        TaskApi::new(self)
    }

    /// 发送 HTTP 请求
    pub(crate) async fn request<T: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<T>,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);
        debug!("vSphere API 请求: {} {}", method, url);

        let token = self.session_token.read().await;
        let token_str = token
            .as_ref()
            .ok_or_else(|| VsphereError::AuthError("未认证，请先登录".to_string()))?;

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header(SESSION_HEADER, token_str)
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VsphereError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "无法读取错误响应".to_string());
            warn!("API 请求失败: {} - {}", status, error_text);
            return Err(VsphereError::ApiError(status.as_u16(), error_text));
        }

        let result = response
            .json::<R>()
            .await
            .map_err(|e| VsphereError::ParseError(e.to_string()))?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vsphere_client_creation() {
        let client = VsphereClient::new("https://vcenter.lab.local/", VsphereConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = VsphereConfig::default();
        assert_eq!(config.connect_timeout, 10);
        assert_eq!(config.request_timeout, 30);
        assert!(config.verify_ssl);
    }
}
