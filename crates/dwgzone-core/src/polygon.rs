//! 多边形几何计算
//!
//! 顶点序列按插入顺序构成环，最后一个点隐式连接回第一个点。
//! 提供：
//! - 有向面积 / 面积（鞋带公式）
//! - 周长
//! - 包围盒

use crate::math::{BoundingBox2, Point2};
use serde::{Deserialize, Serialize};

/// 构成有效多边形所需的最少顶点数
pub const MIN_POLYGON_VERTICES: usize = 3;

/// 有向面积（逆时针为正）
///
/// 鞋带公式：`Σ (x_i·y_{i+1} − x_{i+1}·y_i) / 2`，下标在末尾回绕到 0。
/// 少于 3 个顶点时返回 0。
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < MIN_POLYGON_VERTICES {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

/// 面积（与绕向无关）
pub fn shoelace_area(points: &[Point2]) -> f64 {
    signed_area(points).abs()
}

/// 闭合环的周长
pub fn perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// 各轴最小/最大值
pub fn bounds(points: &[Point2]) -> BoundingBox2 {
    BoundingBox2::from_points(points.iter().copied())
}

/// 简单多边形
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    /// 轴对齐矩形，从 `origin` 开始逆时针排列四个角点
    pub fn rectangle(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            vertices: vec![
                origin,
                Point2::new(origin.x + width, origin.y),
                Point2::new(origin.x + width, origin.y + height),
                Point2::new(origin.x, origin.y + height),
            ],
        }
    }

    /// 顶点不足以围成面积
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < MIN_POLYGON_VERTICES
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        shoelace_area(&self.vertices)
    }

    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices)
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        bounds(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    fn polygon(coords: &[(f64, f64)]) -> Polygon {
        Polygon {
            vertices: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    fn square() -> Polygon {
        polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    }

    #[test]
    fn test_square_area() {
        let sq = square();
        assert!((sq.area() - 16.0).abs() < EPSILON);
        assert!((sq.perimeter() - 16.0).abs() < EPSILON);
        assert!(sq.signed_area() > 0.0);
    }

    #[test]
    fn test_square_bounds() {
        let bbox = square().bounding_box();
        assert_eq!(bbox.min, Point2::new(0.0, 0.0));
        assert_eq!(bbox.max, Point2::new(4.0, 4.0));
    }

    #[test]
    fn test_area_invariant_under_rotation() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 1.0),
            Point2::new(5.0, 5.0),
            Point2::new(1.5, 3.5),
            Point2::new(-1.0, 2.0),
        ];
        let expected = shoelace_area(&pts);
        assert!(expected > 0.0);

        for shift in 0..pts.len() {
            let mut rotated = pts.clone();
            rotated.rotate_left(shift);
            assert!((shoelace_area(&rotated) - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_area_invariant_under_reversal() {
        let sq = square();
        let mut reversed = sq.vertices.clone();
        reversed.reverse();

        assert!((shoelace_area(&reversed) - sq.area()).abs() < EPSILON);
        assert!((signed_area(&reversed) + sq.signed_area()).abs() < EPSILON);
    }

    #[test]
    fn test_triangle_area() {
        let tri = polygon(&[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]);
        assert!((tri.area() - 6.0).abs() < EPSILON);
        assert!((tri.perimeter() - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate() {
        let line = polygon(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(line.is_degenerate());
        assert_eq!(line.area(), 0.0);
    }

    #[test]
    fn test_rectangle() {
        let rect = Polygon::rectangle(Point2::new(1.0, 2.0), 3.0, 2.0);
        assert_eq!(rect.vertices.len(), 4);
        assert!(!rect.is_degenerate());
        assert!((rect.area() - 6.0).abs() < EPSILON);
        assert_eq!(rect.vertices[2], Point2::new(4.0, 4.0));
    }
}
