//! 虚拟化平台客户端抽象
//!
//! 引擎通过本模块定义的 trait 访问管理平面，所有权威状态都在平台侧。
//! 测试用内存实现与生产用 [`VsphereClient`] 绑定都实现同一接口。

use async_trait::async_trait;
use vnm_vsphere::{ConfigSpec, NetworkRef, RemoteTask, TaskInfo, VirtualMachine, VsphereClient, VsphereError};

use crate::error::{NetworkConfigError, Result};

/// 虚拟化平台客户端接口
///
/// 每个方法对应一次远程调用；引擎把它们组合成
/// 定位 → 解析 → 构造 → 提交并等待 的操作序列。
#[async_trait]
pub trait HypervisorClient: Send + Sync {
    /// 按 ID 获取虚拟机及其设备清单
    async fn get_virtual_machine(&self, vm_id: &str) -> Result<VirtualMachine>;

    /// 按名称查找网络
    async fn get_network(&self, name: &str) -> Result<NetworkRef>;

    /// 提交设备重配置，返回异步任务句柄
    async fn reconfigure_vm(&self, vm_id: &str, spec: &ConfigSpec) -> Result<RemoteTask>;

    /// 查询任务状态（单次轮询）
    async fn query_task(&self, task: &RemoteTask) -> Result<TaskInfo>;
}

/// [`VsphereClient`] 的绑定实现
///
/// 把客户端的 NotFound 结果翻译为带上下文的引擎错误，
/// 其余传输层错误原样透传。
#[async_trait]
impl HypervisorClient for VsphereClient {
    async fn get_virtual_machine(&self, vm_id: &str) -> Result<VirtualMachine> {
        match self.vm().get(vm_id).await {
            Err(VsphereError::NotFound(_)) => {
                Err(NetworkConfigError::VmNotFound(vm_id.to_string()))
            }
            other => other.map_err(Into::into),
        }
    }

    async fn get_network(&self, name: &str) -> Result<NetworkRef> {
        match self.network().find(name).await {
            Err(VsphereError::NotFound(_)) => {
                Err(NetworkConfigError::NetworkNotFound(name.to_string()))
            }
            other => other.map_err(Into::into),
        }
    }

    async fn reconfigure_vm(&self, vm_id: &str, spec: &ConfigSpec) -> Result<RemoteTask> {
        match self.vm().reconfigure(vm_id, spec).await {
            Err(VsphereError::NotFound(_)) => {
                Err(NetworkConfigError::VmNotFound(vm_id.to_string()))
            }
            other => other.map_err(Into::into),
        }
    }

    async fn query_task(&self, task: &RemoteTask) -> Result<TaskInfo> {
        self.task().get(task).await.map_err(Into::into)
    }
}
