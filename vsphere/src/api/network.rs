//! 网络管理 API
//!
//! 提供网络查询功能，包括：
//! - 查询网络列表（标准交换机网络与分布式交换机端口组）
//! - 按名称查找网络

use reqwest::Method;
use tracing::info;

use crate::client::VsphereClient;
use crate::error::{Result, VsphereError};
use crate::models::NetworkRef;

/// 网络管理 API
pub struct NetworkApi<'a> {
    client: &'a VsphereClient,
}

impl<'a> NetworkApi<'a> {
    /// 创建新的网络 API 实例
    pub(crate) fn new(client: &'a VsphereClient) -> Self {
        Self { client }
    }

    /// 查询网络列表
    pub async fn list(&self) -> Result<Vec<NetworkRef>> {
        info!("查询网络列表");
        self.client
            .request(Method::GET, "/api/vcenter/network", None::<()>)
            .await
    }

    /// 按名称查找网络
    ///
    /// 同名结果取第一个；查不到时返回 NotFound。
    pub async fn find(&self, name: &str) -> Result<NetworkRef> {
        info!("查找网络: {}", name);
        let networks: Vec<NetworkRef> = self
            .client
            .request(
                Method::GET,
                &format!("/api/vcenter/network?name={}", urlencoding::encode(name)),
                None::<()>,
            )
            .await?;

        networks
            .into_iter()
            .next()
            .ok_or_else(|| VsphereError::NotFound(format!("网络 {} 不存在", name)))
    }
}
