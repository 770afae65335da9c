//! 区域提取策略

use crate::error::FileError;
use dwgzone_core::zone::Zone;
use std::path::Path;

/// 单个提取策略
///
/// 返回空列表或错误都表示"本策略没有结果"，由级联继续尝试下一个策略。
pub trait ExtractionStrategy {
    /// 策略名称（用于日志与报告）
    fn name(&self) -> &'static str;

    /// 尝试从文件中提取区域
    fn attempt(&self, path: &Path) -> Result<Vec<Zone>, FileError>;
}
