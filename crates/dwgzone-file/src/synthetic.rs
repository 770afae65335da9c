//! 合成建筑布局
//!
//! 当结构化读取和二进制扫描都没有结果时，按固定房间模板生成一套
//! 确定性的平面布局。生成的区域不是测量数据：来源标记为
//! `realistic_layout_from_<version>`，并记录文件版本与大小。

use crate::error::FileError;
use crate::signature::{self, FileSignature};
use crate::strategy::ExtractionStrategy;
use dwgzone_core::math::Point2;
use dwgzone_core::polygon::Polygon;
use dwgzone_core::zone::{RoomInfo, Zone, ZoneKind, ZoneSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 相邻房间之间的间隔
const ROOM_GAP: f64 = 0.5;

/// 第 5 个及之后房间的网格单元尺寸
const GRID_CELL: (f64, f64) = (6.0, 4.0);

/// 房间模板
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomTemplate {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub room_type: &'static str,
}

/// 房间模板目录（按布局顺序）
pub const ROOM_TEMPLATES: [RoomTemplate; 7] = [
    RoomTemplate { name: "Salon Principal", width: 7.5, height: 5.2, room_type: "Living Room" },
    RoomTemplate { name: "Cuisine", width: 4.8, height: 3.6, room_type: "Kitchen" },
    RoomTemplate { name: "Chambre 1", width: 4.2, height: 3.8, room_type: "Bedroom" },
    RoomTemplate { name: "Chambre 2", width: 3.8, height: 3.5, room_type: "Bedroom" },
    RoomTemplate { name: "Salle de Bain", width: 2.8, height: 2.2, room_type: "Bathroom" },
    RoomTemplate { name: "Couloir", width: 8.0, height: 1.5, room_type: "Corridor" },
    RoomTemplate { name: "Entree", width: 2.5, height: 2.0, room_type: "Entrance" },
];

impl RoomTemplate {
    /// 图层名：大写，空格换成下划线
    pub fn layer_name(&self) -> String {
        self.name.to_uppercase().replace(' ', "_")
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// 合成布局参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// 最多生成的房间数
    pub max_rooms: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self { max_rooms: 5 }
    }
}

/// 第 `index` 个房间左下角的位置
///
/// 前四个房间按相邻关系摆放，偏移量取自房间自身的宽高；
/// 其余房间平铺在两列网格中。
fn room_origin(index: usize, template: &RoomTemplate) -> Point2 {
    match index {
        0 => Point2::new(0.0, 0.0),
        1 => Point2::new(template.width + ROOM_GAP, 0.0),
        2 => Point2::new(0.0, template.height + ROOM_GAP),
        3 => Point2::new(template.width + ROOM_GAP, template.height + ROOM_GAP),
        _ => Point2::new(
            (index % 2) as f64 * GRID_CELL.0,
            (index / 2) as f64 * GRID_CELL.1,
        ),
    }
}

/// 根据文件签名生成布局
pub fn generate(analysis: &FileSignature, max_rooms: usize) -> Vec<Zone> {
    let generated_from = analysis.describe();

    ROOM_TEMPLATES
        .iter()
        .take(max_rooms)
        .enumerate()
        .map(|(i, template)| {
            let origin = room_origin(i, template);
            let polygon = Polygon::rectangle(origin, template.width, template.height);

            Zone::new(
                polygon.vertices,
                ZoneKind::Architectural,
                ZoneSource::SyntheticLayout {
                    version: analysis.version.clone(),
                },
            )
            .with_layer(template.layer_name())
            .with_area(template.area())
            .with_room(RoomInfo {
                name: template.name.to_string(),
                room_type: template.room_type.to_string(),
                generated_from: generated_from.clone(),
            })
        })
        .collect()
}

/// 合成布局策略，总是最后执行
#[derive(Debug, Clone, Default)]
pub struct SyntheticLayoutStrategy {
    config: SyntheticConfig,
    /// 调用方已分析过的签名，存在时不再读取文件头
    signature: Option<FileSignature>,
}

impl SyntheticLayoutStrategy {
    pub fn new(config: SyntheticConfig) -> Self {
        Self {
            config,
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: Option<FileSignature>) -> Self {
        self.signature = signature;
        self
    }

    fn resolve_signature(&self, path: &Path) -> FileSignature {
        if let Some(signature) = &self.signature {
            return signature.clone();
        }
        signature::analyze(path).unwrap_or_else(|e| {
            tracing::warn!("Signature analysis failed for {}: {}", path.display(), e);
            FileSignature::default()
        })
    }
}

impl ExtractionStrategy for SyntheticLayoutStrategy {
    fn name(&self) -> &'static str {
        "synthetic_layout"
    }

    fn attempt(&self, path: &Path) -> Result<Vec<Zone>, FileError> {
        let analysis = self.resolve_signature(path);

        tracing::info!(
            "No recoverable geometry in {}, generating synthetic layout from {}",
            path.display(),
            analysis.describe()
        );

        Ok(generate(&analysis, self.config.max_rooms))
    }
}
