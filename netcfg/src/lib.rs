//! 虚拟机网卡配置引擎
//!
//! 管理虚拟机网卡的完整生命周期：枚举、添加、移除、连接/断开、
//! 切换网络（VLAN）。所有变更都通过向管理平面提交设备重配置并
//! 等待远端异步任务完成来生效，引擎自身不持有虚拟机状态。
//!
//! # 组件
//!
//! - **配置器** (`NetworkConfigurator`): 公开操作入口
//! - **平台抽象** (`HypervisorClient`): 管理平面客户端接口与 vSphere 绑定
//! - **网卡定位** (`adapter`): 按标签查找、推导下一个编号
//! - **后端解析** (`backing`): 网络名称 → 后端描述
//! - **任务等待** (`task`): 有界轮询到终态
//!
//! # 示例
//!
//! ```ignore
//! use std::sync::Arc;
//! use vnm_netcfg::NetworkConfigurator;
//! use vnm_vsphere::{VsphereClient, VsphereConfig};
//!
//! let client = VsphereClient::new("https://vcenter.lab.local", VsphereConfig::default())?;
//! client.login("administrator@vsphere.local", "password").await?;
//!
//! let configurator = NetworkConfigurator::new(Arc::new(client));
//!
//! // 添加一块 vmxnet3 网卡并查看结果
//! let label = configurator.add_network_adapter("vm-42", "net-A", "vmxnet3").await?;
//! for nic in configurator.list_adapters("vm-42").await? {
//!     println!("{}: {:?} connected={}", nic.label, nic.network, nic.connected);
//! }
//!
//! // 断开再恢复
//! configurator.connect_adapter("vm-42", &label, false).await?;
//! configurator.connect_adapter("vm-42", &label, true).await?;
//! ```

pub mod adapter;
pub mod backing;
pub mod configurator;
pub mod error;
pub mod hypervisor;
pub mod task;

pub use configurator::{AdapterSummary, NetworkConfigurator};
pub use error::{NetworkConfigError, Result};
pub use hypervisor::HypervisorClient;
pub use task::{wait_for_task, WaitConfig};

pub use adapter::{adapter_label, find_by_label, next_adapter_number, ADAPTER_LABEL_PREFIX};
pub use backing::{backing_from_network, resolve_backing};
