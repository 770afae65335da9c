//! 区域规范化
//!
//! 对任意策略输出的原始区域做后处理：
//! - 丢弃顶点少于 3 个的区域（源数据缺少几何属于正常情况，不报错）
//! - 缺失面积时用鞋带公式计算
//! - 总是根据顶点重新计算包围盒

use crate::zone::{ValidatedZone, Zone};

/// 规范化区域列表，保持输入顺序
pub fn normalize(zones: Vec<Zone>) -> Vec<ValidatedZone> {
    let total = zones.len();
    let validated: Vec<ValidatedZone> = zones
        .into_iter()
        .filter_map(|zone| {
            let layer = zone.layer.clone();
            let count = zone.points.len();
            let result = ValidatedZone::from_zone(zone);
            if result.is_none() {
                tracing::debug!("Dropping degenerate zone on layer {} ({} points)", layer, count);
            }
            result
        })
        .collect();

    if validated.len() < total {
        tracing::debug!(
            "Normalized {} of {} zones ({} dropped)",
            validated.len(),
            total,
            total - validated.len()
        );
    }

    validated
}
