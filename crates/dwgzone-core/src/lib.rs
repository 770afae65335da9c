//! DWGZone 核心几何
//!
//! 提供房间/区域多边形的数据模型与几何计算，不涉及任何文件 I/O。
//!
//! # 示例
//!
//! ```rust
//! use dwgzone_core::prelude::*;
//!
//! let zone = Zone::new(
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(4.0, 0.0),
//!         Point2::new(4.0, 4.0),
//!         Point2::new(0.0, 4.0),
//!     ],
//!     ZoneKind::BinaryExtracted,
//!     ZoneSource::BinaryAnalysis,
//! );
//!
//! let zones = normalize(vec![zone]);
//! assert_eq!(zones[0].area(), 16.0);
//! ```

pub mod math;
pub mod normalize;
pub mod polygon;
pub mod zone;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::math::{BoundingBox2, Point2, EPSILON};
    pub use crate::normalize::normalize;
    pub use crate::polygon::{perimeter, shoelace_area, signed_area, Polygon};
    pub use crate::zone::{Bounds, RoomInfo, ValidatedZone, Zone, ZoneKind, ZoneSource};
}
