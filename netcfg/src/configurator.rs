//! 虚拟机网卡配置器
//!
//! 引擎的公开入口。每个操作都是
//! 定位 → 解析 → 构造 → 提交并等待 → 翻译结果
//! 的线性序列：至多一次远程读取加一次提交等待。
//!
//! 配置器自身不保存任何虚拟机状态，权威状态全部在平台侧；
//! 同一实例可安全地在多个调用方之间共享。对同一虚拟机的并发
//! 重配置由平台串行化，平台拒绝时错误原样上抛。

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use vnm_vsphere::{
    AdapterType, ConfigSpec, DeviceChange, NetworkAdapter, NetworkBacking, VirtualDevice,
};

use crate::adapter::{adapter_label, find_by_label, next_adapter_number};
use crate::backing::resolve_backing;
use crate::error::{NetworkConfigError, Result};
use crate::hypervisor::HypervisorClient;
use crate::task::{wait_for_task, WaitConfig};

/// 网卡清单条目
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterSummary {
    /// 设备标签
    pub label: String,

    /// 网卡型号
    pub adapter_type: AdapterType,

    /// 所在网络：标准交换机为网络名称，分布式交换机为端口组 key，
    /// 未挂接网络时为 None
    pub network: Option<String>,

    /// MAC 地址
    pub mac_address: Option<String>,

    /// 当前连接状态
    pub connected: bool,

    /// 设备 key
    pub key: i32,
}

/// 虚拟机网卡配置器
pub struct NetworkConfigurator {
    /// 平台客户端
    client: Arc<dyn HypervisorClient>,

    /// 任务等待配置
    wait: WaitConfig,
}

impl NetworkConfigurator {
    /// 创建配置器
    pub fn new(client: Arc<dyn HypervisorClient>) -> Self {
        Self {
            client,
            wait: WaitConfig::default(),
        }
    }

    /// 设置任务等待配置
    pub fn with_wait_config(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    /// 切换网卡所在网络 / VLAN
    ///
    /// 指定 `network_name` 时网卡改挂到该网络；省略时按
    /// `VLAN-<vlan_id>` 命名约定查找端口组，此路径要求网卡当前
    /// 已使用分布式端口组后端。
    pub async fn configure_vlan(
        &self,
        vm_id: &str,
        adapter_label: &str,
        vlan_id: u16,
        network_name: Option<&str>,
    ) -> Result<()> {
        info!(
            "切换网卡网络: {} '{}' -> VLAN {}",
            vm_id, adapter_label, vlan_id
        );

        let vm = self.client.get_virtual_machine(vm_id).await?;
        let adapter = self.locate(&vm, vm_id, adapter_label)?;

        let backing = match network_name {
            Some(name) => resolve_backing(self.client.as_ref(), name).await?,
            None => match adapter.backing {
                Some(NetworkBacking::Distributed { .. }) => {
                    resolve_backing(self.client.as_ref(), &format!("VLAN-{}", vlan_id)).await?
                }
                _ => {
                    return Err(NetworkConfigError::VlanRequiresDistributedSwitch {
                        vm: vm_id.to_string(),
                        label: adapter_label.to_string(),
                    })
                }
            },
        };

        let mut device = adapter.clone();
        device.backing = Some(backing);
        self.apply(
            vm_id,
            &ConfigSpec::single(DeviceChange::edit(VirtualDevice::Ethernet(device))),
        )
        .await?;

        info!("✅ {} 网卡 '{}' 已切换网络", vm_id, adapter_label);
        Ok(())
    }

    /// 添加网卡
    ///
    /// 型号校验在任何远程调用之前完成；标签编号取现存最大编号加一。
    /// 成功返回新网卡的标签。
    pub async fn add_network_adapter(
        &self,
        vm_id: &str,
        network_name: &str,
        adapter_type: &str,
    ) -> Result<String> {
        let adapter_type = AdapterType::parse(adapter_type)
            .ok_or_else(|| NetworkConfigError::UnsupportedAdapterType(adapter_type.to_string()))?;

        info!(
            "添加网卡: {} 网络 {} 型号 {}",
            vm_id, network_name, adapter_type
        );

        let vm = self.client.get_virtual_machine(vm_id).await?;
        let label = adapter_label(next_adapter_number(&vm));
        let backing = resolve_backing(self.client.as_ref(), network_name).await?;

        let adapter = NetworkAdapter::new(adapter_type, &label, backing);
        self.apply(
            vm_id,
            &ConfigSpec::single(DeviceChange::add(VirtualDevice::Ethernet(adapter))),
        )
        .await?;

        info!("✅ {} 新增网卡 '{}'", vm_id, label);
        Ok(label)
    }

    /// 移除网卡
    pub async fn remove_network_adapter(&self, vm_id: &str, adapter_label: &str) -> Result<()> {
        info!("移除网卡: {} '{}'", vm_id, adapter_label);

        let vm = self.client.get_virtual_machine(vm_id).await?;
        let adapter = self.locate(&vm, vm_id, adapter_label)?;

        let device = adapter.clone();
        self.apply(
            vm_id,
            &ConfigSpec::single(DeviceChange::remove(VirtualDevice::Ethernet(device))),
        )
        .await?;

        info!("✅ {} 网卡 '{}' 已移除", vm_id, adapter_label);
        Ok(())
    }

    /// 连接 / 断开网卡
    ///
    /// 连接与断开走同一条路径，只差布尔值。
    pub async fn connect_adapter(
        &self,
        vm_id: &str,
        adapter_label: &str,
        connect: bool,
    ) -> Result<()> {
        let action = if connect { "连接" } else { "断开" };
        info!("{}网卡: {} '{}'", action, vm_id, adapter_label);

        let vm = self.client.get_virtual_machine(vm_id).await?;
        let adapter = self.locate(&vm, vm_id, adapter_label)?;

        let mut device = adapter.clone();
        device.connected = connect;
        self.apply(
            vm_id,
            &ConfigSpec::single(DeviceChange::edit(VirtualDevice::Ethernet(device))),
        )
        .await?;

        info!("✅ {} 网卡 '{}' 已{}", vm_id, adapter_label, action);
        Ok(())
    }

    /// 列出网卡
    ///
    /// 只返回设备清单中的网卡条目，磁盘等其他设备静默跳过；
    /// 顺序与设备清单一致，不做排序。
    pub async fn list_adapters(&self, vm_id: &str) -> Result<Vec<AdapterSummary>> {
        debug!("列出网卡: {}", vm_id);

        let vm = self.client.get_virtual_machine(vm_id).await?;
        Ok(vm
            .network_adapters()
            .map(|adapter| {
                let network = adapter.backing.as_ref().map(|backing| match backing {
                    NetworkBacking::Standard { network_name } => network_name.clone(),
                    NetworkBacking::Distributed { portgroup_key, .. } => portgroup_key.clone(),
                });
                AdapterSummary {
                    label: adapter.label.clone(),
                    adapter_type: adapter.adapter_type,
                    network,
                    mac_address: adapter.mac_address.clone(),
                    connected: adapter.connected,
                    key: adapter.key,
                }
            })
            .collect())
    }

    /// 按标签定位网卡，缺失即为错误
    fn locate<'a>(
        &self,
        vm: &'a vnm_vsphere::VirtualMachine,
        vm_id: &str,
        label: &str,
    ) -> Result<&'a NetworkAdapter> {
        find_by_label(vm, label).ok_or_else(|| NetworkConfigError::AdapterNotFound {
            vm: vm_id.to_string(),
            label: label.to_string(),
        })
    }

    /// 提交重配置并等待任务终态
    async fn apply(&self, vm_id: &str, spec: &ConfigSpec) -> Result<()> {
        let task = self.client.reconfigure_vm(vm_id, spec).await?;
        wait_for_task(self.client.as_ref(), vm_id, &task, &self.wait).await?;
        Ok(())
    }
}
