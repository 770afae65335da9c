//! 区域（房间）数据模型
//!
//! - [`Zone`]: 提取策略输出的原始区域
//! - [`ValidatedZone`]: 经过规范化的区域，保证至少 3 个顶点，
//!   包围盒与顶点一致，面积已计算

use crate::math::{BoundingBox2, Point2};
use crate::polygon::Polygon;
use serde::{Serialize, Serializer};
use std::fmt;

/// 未指定图层时使用的默认图层名
pub const DEFAULT_LAYER: &str = "0";

/// 区域类别标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZoneKind {
    /// DXF 轻量多段线
    #[serde(rename = "LWPOLYLINE")]
    LwPolyline,
    /// DXF 旧式多段线
    #[serde(rename = "POLYLINE")]
    Polyline,
    /// 二进制模式扫描得到
    #[serde(rename = "BINARY_EXTRACTED")]
    BinaryExtracted,
    /// 合成布局中的房间
    #[serde(rename = "ARCHITECTURAL")]
    Architectural,
}

impl ZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::LwPolyline => "LWPOLYLINE",
            ZoneKind::Polyline => "POLYLINE",
            ZoneKind::BinaryExtracted => "BINARY_EXTRACTED",
            ZoneKind::Architectural => "ARCHITECTURAL",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 区域来源，每个区域只对应一种提取策略
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ZoneSource {
    /// 结构化读取（DXF）
    Structured,
    /// 二进制启发式扫描
    BinaryAnalysis,
    /// 合成布局，携带检测到的格式版本
    SyntheticLayout { version: String },
}

impl ZoneSource {
    /// 是否为合成（非测量）数据
    pub fn is_synthetic(&self) -> bool {
        matches!(self, ZoneSource::SyntheticLayout { .. })
    }
}

impl fmt::Display for ZoneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSource::Structured => f.write_str("dxf"),
            ZoneSource::BinaryAnalysis => f.write_str("binary_analysis"),
            ZoneSource::SyntheticLayout { version } => {
                write!(f, "realistic_layout_from_{}", version)
            }
        }
    }
}

impl Serialize for ZoneSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 合成房间的附加信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomInfo {
    pub name: String,
    pub room_type: String,
    /// `"<version> (<size> bytes)"`
    pub generated_from: String,
}

/// 原始区域
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    pub points: Vec<Point2>,
    pub layer: String,
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    pub source: ZoneSource,
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomInfo>,
}

impl Zone {
    pub fn new(points: Vec<Point2>, kind: ZoneKind, source: ZoneSource) -> Self {
        Self {
            points,
            layer: DEFAULT_LAYER.to_string(),
            kind,
            source,
            area: None,
            room: None,
        }
    }

    /// 设置图层，空名称回退到默认图层
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        let layer = layer.into();
        self.layer = if layer.is_empty() {
            DEFAULT_LAYER.to_string()
        } else {
            layer
        };
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_room(mut self, room: RoomInfo) -> Self {
        self.room = Some(room);
        self
    }
}

/// 包围盒 (min_x, min_y, max_x, max_y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<BoundingBox2> for Bounds {
    fn from(bbox: BoundingBox2) -> Self {
        Self {
            min_x: bbox.min.x,
            min_y: bbox.min.y,
            max_x: bbox.max.x,
            max_y: bbox.max.y,
        }
    }
}

/// 规范化后的区域
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedZone {
    points: Vec<Point2>,
    layer: String,
    #[serde(rename = "type")]
    kind: ZoneKind,
    source: ZoneSource,
    area: f64,
    perimeter: f64,
    bounds: Bounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    room: Option<RoomInfo>,
}

impl ValidatedZone {
    /// 校验并补全区域，顶点少于 3 个时返回 `None`
    ///
    /// 已有面积保留；包围盒与周长总是根据顶点重新计算。
    pub fn from_zone(zone: Zone) -> Option<Self> {
        let polygon = Polygon {
            vertices: zone.points,
        };
        if polygon.is_degenerate() {
            return None;
        }

        let area = zone.area.unwrap_or_else(|| polygon.area());
        let perimeter = polygon.perimeter();
        let bounds = Bounds::from(polygon.bounding_box());

        Some(Self {
            points: polygon.vertices,
            layer: zone.layer,
            kind: zone.kind,
            source: zone.source,
            area,
            perimeter,
            bounds,
            room: zone.room,
        })
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    pub fn source(&self) -> &ZoneSource {
        &self.source
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn room(&self) -> Option<&RoomInfo> {
        self.room.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    fn square_zone() -> Zone {
        Zone::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(4.0, 4.0),
                Point2::new(0.0, 4.0),
            ],
            ZoneKind::LwPolyline,
            ZoneSource::Structured,
        )
    }

    #[test]
    fn test_source_tags() {
        assert_eq!(ZoneSource::Structured.to_string(), "dxf");
        assert_eq!(ZoneSource::BinaryAnalysis.to_string(), "binary_analysis");
        let synthetic = ZoneSource::SyntheticLayout {
            version: "AutoCAD R14".to_string(),
        };
        assert_eq!(synthetic.to_string(), "realistic_layout_from_AutoCAD R14");
        assert!(synthetic.is_synthetic());
        assert!(!ZoneSource::BinaryAnalysis.is_synthetic());
    }

    #[test]
    fn test_empty_layer_falls_back() {
        let zone = square_zone().with_layer("");
        assert_eq!(zone.layer, DEFAULT_LAYER);
        let zone = square_zone().with_layer("ROOMS");
        assert_eq!(zone.layer, "ROOMS");
    }

    #[test]
    fn test_validated_square() {
        let v = ValidatedZone::from_zone(square_zone()).unwrap();
        assert!((v.area() - 16.0).abs() < EPSILON);
        assert!((v.perimeter() - 16.0).abs() < EPSILON);
        assert_eq!(v.bounds().as_tuple(), (0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn test_validated_keeps_given_area() {
        let v = ValidatedZone::from_zone(square_zone().with_area(99.0)).unwrap();
        assert_eq!(v.area(), 99.0);
    }

    #[test]
    fn test_validated_rejects_two_points() {
        let zone = Zone::new(
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)],
            ZoneKind::BinaryExtracted,
            ZoneSource::BinaryAnalysis,
        );
        assert!(ValidatedZone::from_zone(zone).is_none());
    }

    #[test]
    fn test_serialize_shape() {
        let v = ValidatedZone::from_zone(square_zone()).unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "LWPOLYLINE");
        assert_eq!(json["source"], "dxf");
        assert_eq!(json["layer"], "0");
        assert_eq!(json["bounds"]["max_x"], 4.0);
        assert_eq!(json["points"][1][0], 4.0);
        assert!(json.get("room").is_none());
    }
}
