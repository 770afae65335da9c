//! 结构化读取
//!
//! 通过可注入的 [`StructuredReader`] 直接读取闭合多段线。
//! 读取能力缺失或读取失败时退化为空结果，级联继续尝试后续策略。

use crate::error::FileError;
use crate::strategy::ExtractionStrategy;
use dwgzone_core::math::Point2;
use dwgzone_core::polygon::MIN_POLYGON_VERTICES;
use dwgzone_core::zone::{Zone, ZoneKind, ZoneSource};
use std::path::Path;

/// 读取器输出的原始多段线
#[derive(Debug, Clone, PartialEq)]
pub struct RawPolyline {
    pub points: Vec<Point2>,
    pub layer: String,
    pub closed: bool,
    pub kind: ZoneKind,
}

/// 结构化 CAD 读取能力
pub trait StructuredReader {
    /// 读取模型空间中的多段线
    fn read_polylines(&self, path: &Path) -> Result<Vec<RawPolyline>, FileError>;
}

/// 基于 `dxf` crate 的读取器
#[derive(Debug, Clone, Copy, Default)]
pub struct DxfReader;

impl StructuredReader for DxfReader {
    fn read_polylines(&self, path: &Path) -> Result<Vec<RawPolyline>, FileError> {
        let drawing = dxf::Drawing::load_file(path)
            .map_err(|e| FileError::UnsupportedStructuredRead(e.to_string()))?;

        let polylines = drawing
            .entities()
            .filter(|entity| !entity.common.is_in_paper_space)
            .filter_map(convert_dxf_entity)
            .collect();

        Ok(polylines)
    }
}

/// 将DXF多段线实体转换为原始多段线，其他实体忽略
fn convert_dxf_entity(entity: &dxf::entities::Entity) -> Option<RawPolyline> {
    let (points, closed, kind) = match &entity.specific {
        dxf::entities::EntityType::LwPolyline(lwpoly) => {
            let points = lwpoly
                .vertices
                .iter()
                .map(|v| Point2::new(v.x, v.y))
                .collect();
            (points, lwpoly.is_closed(), ZoneKind::LwPolyline)
        }

        dxf::entities::EntityType::Polyline(poly) => {
            let points = poly
                .vertices()
                .map(|v| Point2::new(v.location.x, v.location.y))
                .collect();
            (points, poly.is_closed(), ZoneKind::Polyline)
        }

        _ => return None,
    };

    Some(RawPolyline {
        points,
        layer: entity.common.layer.clone(),
        closed,
        kind,
    })
}

/// 结构化提取策略
#[derive(Default)]
pub struct StructuredExtractor {
    reader: Option<Box<dyn StructuredReader>>,
}

impl StructuredExtractor {
    pub fn new(reader: Option<Box<dyn StructuredReader>>) -> Self {
        Self { reader }
    }

    /// 使用 DXF 读取器
    pub fn with_dxf() -> Self {
        Self::new(Some(Box::new(DxfReader)))
    }

    pub fn has_reader(&self) -> bool {
        self.reader.is_some()
    }

    /// 提取闭合且至少 3 个顶点的多段线，任何失败都返回空列表
    pub fn extract_zones(&self, path: &Path) -> Vec<Zone> {
        let Some(reader) = &self.reader else {
            tracing::debug!(
                "{}",
                FileError::UnsupportedStructuredRead("no structured reader configured".to_string())
            );
            return Vec::new();
        };

        match reader.read_polylines(path) {
            Ok(polylines) => polylines
                .into_iter()
                .filter(|pl| pl.closed && pl.points.len() >= MIN_POLYGON_VERTICES)
                .map(|pl| Zone::new(pl.points, pl.kind, ZoneSource::Structured).with_layer(pl.layer))
                .collect(),
            Err(e) => {
                tracing::warn!("Structured read failed for {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}

impl ExtractionStrategy for StructuredExtractor {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn attempt(&self, path: &Path) -> Result<Vec<Zone>, FileError> {
        Ok(self.extract_zones(path))
    }
}
