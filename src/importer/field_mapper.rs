// ==========================================
// 成衣生产系统 - 疵点表字段映射器
// ==========================================
// 职责: 源表头 → 标准字段映射 + 类型转换
// 表头兼容三种语言 (印尼语为现场模板, 中文/英文为兼容别名)
// ==========================================

use std::collections::HashMap;

use crate::domain::inspection::RawDefectRecord;
use crate::importer::error::{ImportError, ImportResult};

pub struct DefectFieldMapper;

impl DefectFieldMapper {
    /// 单行映射: 表头行映射 → RawDefectRecord
    ///
    /// # 说明
    /// - 缺失/空白字段 → None, 由 DQ 校验定级
    /// - 扣分列非数字 → TypeConversionError (行级错误, 调用方阻断该行)
    pub fn map_to_raw_defect(
        &self,
        row: HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<RawDefectRecord> {
        Ok(RawDefectRecord {
            location: self.get_string(&row, "Lokasi"),
            defect_type: self.get_string(&row, "Jenis Cacat"),
            points: self.parse_i32(&row, "Poin", row_number)?,
            row_number,
        })
    }

    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // 定义列名别名映射
        let aliases: Vec<&str> = match key {
            "Lokasi" => vec!["Lokasi", "位置", "Location"],
            "Jenis Cacat" => vec!["Jenis Cacat", "缺陷类型", "Defect Type"],
            "Poin" => vec!["Poin", "扣分", "Points"],
            _ => vec![key],
        };

        // 尝试所有可能的列名
        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// 解析整数
    fn parse_i32(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<i32>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => {
                value
                    .parse::<i32>()
                    .map(Some)
                    .map_err(|_| ImportError::TypeConversionError {
                        row: row_number,
                        field: key.to_string(),
                        message: format!("无法解析为整数: {}", value),
                    })
            }
        }
    }
}
