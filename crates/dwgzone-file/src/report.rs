//! 分析报告
//!
//! 将解析结果整理为面向导出的报告：图层列表、实体统计与房间列表。

use crate::pipeline::ParsedZones;
use crate::signature::FileSignature;
use dwgzone_core::math::Point2;
use dwgzone_core::zone::{Bounds, ValidatedZone};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// 报告中的单个房间
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomRecord {
    pub points: Vec<Point2>,
    pub area: f64,
    pub layer: String,
    pub perimeter: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub bounds: Bounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
}

impl From<&ValidatedZone> for RoomRecord {
    fn from(zone: &ValidatedZone) -> Self {
        Self {
            points: zone.points().to_vec(),
            area: zone.area(),
            layer: zone.layer().to_string(),
            perimeter: zone.perimeter(),
            kind: zone.kind().to_string(),
            source: zone.source().to_string(),
            bounds: zone.bounds(),
            name: zone.room().map(|r| r.name.clone()),
            room_type: zone.room().map(|r| r.room_type.clone()),
        }
    }
}

/// 文件分析报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneReport {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<FileSignature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// 去重并排序的图层名
    pub layers: Vec<String>,
    pub entities: BTreeMap<String, usize>,
    pub rooms: Vec<RoomRecord>,
    pub total_area: f64,
    /// 房间来自合成布局而非测量
    pub synthetic: bool,
}

impl ZoneReport {
    pub fn from_parsed(file: impl Into<String>, parsed: &ParsedZones) -> Self {
        let rooms: Vec<RoomRecord> = parsed.zones.iter().map(RoomRecord::from).collect();

        let layers: Vec<String> = rooms
            .iter()
            .map(|r| r.layer.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut entities = BTreeMap::new();
        entities.insert("ROOMS".to_string(), rooms.len());

        Self {
            file: file.into(),
            signature: parsed.signature.clone(),
            strategy: parsed.strategy.map(str::to_string),
            layers,
            entities,
            total_area: parsed.total_area(),
            synthetic: parsed.is_synthetic(),
            rooms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwgzone_core::normalize::normalize;
    use dwgzone_core::zone::{Zone, ZoneKind, ZoneSource};

    fn sample_parsed() -> ParsedZones {
        let square = |x: f64, layer: &str| {
            Zone::new(
                vec![
                    Point2::new(x, 0.0),
                    Point2::new(x + 2.0, 0.0),
                    Point2::new(x + 2.0, 2.0),
                    Point2::new(x, 2.0),
                ],
                ZoneKind::LwPolyline,
                ZoneSource::Structured,
            )
            .with_layer(layer)
        };

        ParsedZones {
            signature: None,
            strategy: Some("structured"),
            zones: normalize(vec![square(0.0, "B"), square(3.0, "A"), square(6.0, "B")]),
        }
    }

    #[test]
    fn test_layers_and_counts() {
        let report = ZoneReport::from_parsed("plan.dxf", &sample_parsed());
        assert_eq!(report.layers, ["A", "B"]);
        assert_eq!(report.entities["ROOMS"], 3);
        assert_eq!(report.rooms.len(), 3);
        assert!((report.total_area - 12.0).abs() < 1e-9);
        assert_eq!(report.strategy.as_deref(), Some("structured"));
        assert!(!report.synthetic);
    }

    #[test]
    fn test_room_record() {
        let report = ZoneReport::from_parsed("plan.dxf", &sample_parsed());
        let room = &report.rooms[1];
        assert_eq!(room.layer, "A");
        assert_eq!(room.kind, "LWPOLYLINE");
        assert_eq!(room.source, "dxf");
        assert!((room.perimeter - 8.0).abs() < 1e-9);
        assert_eq!(room.bounds.as_tuple(), (3.0, 0.0, 5.0, 2.0));
        assert!(room.name.is_none());
    }
}
