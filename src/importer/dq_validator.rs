// ==========================================
// 成衣生产系统 - 疵点数据质量校验器
// ==========================================
// 依据: 四分制验布标准 (扣分固定 1..=4)
// 职责: 行级 DQ 校验; 级别语义: Error 阻断 / Warning 放行 / Info 仅记录
// ==========================================

use crate::domain::inspection::{DqLevel, DqViolation, FabricDefectEntry, RawDefectRecord};

pub struct DefectDqValidator;

impl DefectDqValidator {
    /// 单行校验
    ///
    /// # 规则
    /// - 扣分缺失 → Error (无法计分, 该行阻断)
    /// - 扣分 ∉ 1..=4 → Error (违反四分制, 该行阻断)
    /// - 位置缺失 → Warning (可计分, 放行但提示补录)
    /// - 类别缺失 → Info (仅记录)
    pub fn validate_record(&self, record: &RawDefectRecord) -> Vec<DqViolation> {
        let mut violations = Vec::new();

        match record.points {
            None => {
                violations.push(DqViolation {
                    row_number: record.row_number,
                    level: DqLevel::Error,
                    field: "points".to_string(),
                    message: "扣分缺失".to_string(),
                });
            }
            Some(points) => {
                let min = i32::from(FabricDefectEntry::MIN_POINTS);
                let max = i32::from(FabricDefectEntry::MAX_POINTS);
                if points < min || points > max {
                    violations.push(DqViolation {
                        row_number: record.row_number,
                        level: DqLevel::Error,
                        field: "points".to_string(),
                        message: format!("扣分超出四分制范围 [{}, {}]: {}", min, max, points),
                    });
                }
            }
        }

        if record.location.is_none() {
            violations.push(DqViolation {
                row_number: record.row_number,
                level: DqLevel::Warning,
                field: "location".to_string(),
                message: "疵点位置缺失".to_string(),
            });
        }

        if record.defect_type.is_none() {
            violations.push(DqViolation {
                row_number: record.row_number,
                level: DqLevel::Info,
                field: "defect_type".to_string(),
                message: "疵点类别缺失".to_string(),
            });
        }

        violations
    }

    /// 行是否被阻断 (存在 Error 级违规)
    pub fn is_blocked(violations: &[DqViolation]) -> bool {
        violations.iter().any(|v| v.level == DqLevel::Error)
    }
}
