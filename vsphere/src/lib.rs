//! vSphere 管理平面客户端
//!
//! 提供与 vSphere 风格管理端点交互的客户端实现。
//!
//! # 功能
//!
//! - **会话管理** (`VsphereClient`): 登录、登出、会话令牌维护
//! - **虚拟机管理** (`VmApi`): 虚拟机查询、设备清单读取、设备重配置提交
//! - **网络管理** (`NetworkApi`): 标准交换机网络与分布式端口组查询
//! - **任务管理** (`TaskApi`): 异步任务状态跟踪
//! - **数据模型** (`models`): 设备清单、网卡后端、重配置描述、任务状态
//!
//! # 示例
//!
//! ```ignore
//! use vnm_vsphere::{VsphereClient, VsphereConfig};
//!
//! // 创建客户端并登录
//! let client = VsphereClient::new("https://vcenter.lab.local", VsphereConfig::default())?;
//! client.login("administrator@vsphere.local", "password").await?;
//!
//! // 读取虚拟机设备清单
//! let vm = client.vm().get("vm-42").await?;
//! for adapter in vm.network_adapters() {
//!     println!("{}: connected={}", adapter.label, adapter.connected);
//! }
//!
//! // 提交重配置并轮询任务
//! let task = client.vm().reconfigure("vm-42", &spec).await?;
//! let info = client.task().get(&task).await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use client::{VsphereClient, VsphereConfig};
pub use error::{Result, VsphereError};

// 导出 API 模块
pub use api::{NetworkApi, TaskApi, VmApi};

// 导出数据模型
pub use models::{
    // 虚拟机与设备
    AdapterType, DiskInfo, GenericDevice, NetworkAdapter, VirtualDevice, VirtualMachine,
    VmSummary,

    // 网络
    NetworkBacking, NetworkRef,

    // 重配置描述
    ConfigSpec, DeviceChange, DeviceOperation, PENDING_DEVICE_KEY,

    // 异步任务
    RemoteTask, TaskInfo, TaskState,
};
