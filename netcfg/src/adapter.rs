//! 网卡定位
//!
//! 按标签在设备清单中定位网卡，以及为新网卡推导下一个编号。
//! 标签编号是推导值：始终取现存最大编号加一，中间被移除的编号不复用。

use vnm_vsphere::{NetworkAdapter, VirtualMachine};

/// 规范标签前缀，编号紧随其后
pub const ADAPTER_LABEL_PREFIX: &str = "Network adapter ";

/// 按标签查找网卡
///
/// 线性扫描设备清单中的网卡条目，标签精确匹配。
/// 找不到返回 None，是否视为错误由调用方决定。
pub fn find_by_label<'a>(vm: &'a VirtualMachine, label: &str) -> Option<&'a NetworkAdapter> {
    vm.network_adapters().find(|adapter| adapter.label == label)
}

/// 推导下一个可用网卡编号
///
/// 只统计形如 "Network adapter <N>" 的标签；不符合该约定的标签
/// 不参与计数，也不会被重新编号。结果为 max(N)+1，无匹配时为 1。
pub fn next_adapter_number(vm: &VirtualMachine) -> u32 {
    vm.network_adapters()
        .filter_map(|adapter| label_number(&adapter.label))
        .max()
        .map_or(1, |max| max + 1)
}

/// 生成规范标签
pub fn adapter_label(number: u32) -> String {
    format!("{}{}", ADAPTER_LABEL_PREFIX, number)
}

/// 提取规范标签的尾部编号，非规范标签返回 None
fn label_number(label: &str) -> Option<u32> {
    label.strip_prefix(ADAPTER_LABEL_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vnm_vsphere::{AdapterType, NetworkBacking, VirtualDevice, VirtualMachine};

    fn vm_with_labels(labels: &[&str]) -> VirtualMachine {
        let devices = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut adapter = vnm_vsphere::NetworkAdapter::new(
                    AdapterType::Vmxnet3,
                    label,
                    NetworkBacking::Standard {
                        network_name: "VM Network".to_string(),
                    },
                );
                adapter.key = 4000 + i as i32;
                VirtualDevice::Ethernet(adapter)
            })
            .collect();

        VirtualMachine {
            id: "vm-1".to_string(),
            name: "test-vm".to_string(),
            devices,
        }
    }

    #[test]
    fn test_label_number() {
        assert_eq!(label_number("Network adapter 1"), Some(1));
        assert_eq!(label_number("Network adapter 12"), Some(12));
        assert_eq!(label_number("Network adapter"), None);
        assert_eq!(label_number("Network adapter x"), None);
        assert_eq!(label_number("Network adapter 1x"), None);
        assert_eq!(label_number("management-nic"), None);
    }

    #[test]
    fn test_next_number_no_adapters() {
        let vm = vm_with_labels(&[]);
        assert_eq!(next_adapter_number(&vm), 1);
    }

    #[test]
    fn test_next_number_contiguous() {
        let vm = vm_with_labels(&["Network adapter 1", "Network adapter 2"]);
        assert_eq!(next_adapter_number(&vm), 3);
    }

    #[test]
    fn test_next_number_with_gaps() {
        // 中间编号被移除后不复用
        let vm = vm_with_labels(&["Network adapter 3", "Network adapter 1"]);
        assert_eq!(next_adapter_number(&vm), 4);
    }

    #[test]
    fn test_next_number_ignores_nonconforming_labels() {
        let vm = vm_with_labels(&["management-nic", "Network adapter 2"]);
        assert_eq!(next_adapter_number(&vm), 3);

        let only_nonconforming = vm_with_labels(&["management-nic"]);
        assert_eq!(next_adapter_number(&only_nonconforming), 1);
    }

    #[test]
    fn test_find_by_label() {
        let vm = vm_with_labels(&["Network adapter 1", "Network adapter 2"]);
        assert!(find_by_label(&vm, "Network adapter 2").is_some());
        assert!(find_by_label(&vm, "Network adapter 3").is_none());
        // 精确匹配，不做前缀匹配
        assert!(find_by_label(&vm, "Network adapter").is_none());
    }

    #[test]
    fn test_adapter_label_format() {
        assert_eq!(adapter_label(7), "Network adapter 7");
    }
}
