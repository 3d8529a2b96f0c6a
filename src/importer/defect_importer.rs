// ==========================================
// 成衣生产系统 - 疵点表导入器
// ==========================================
// 职责: 整合导入流程, 从文件到可计分疵点明细
// 流程: 解析 → 映射 → DQ 校验 → 汇总
// 红线: 不落库; 明细与 DQ 报告一并返回, 由调用方决定去向
// ==========================================

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::inspection::{
    DefectImportBatch, DefectImportResult, DqLevel, DqReport, DqSummary, DqViolation,
    FabricDefectEntry,
};
use crate::importer::dq_validator::DefectDqValidator;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::DefectFieldMapper;
use crate::importer::sheet_parser::UniversalSheetParser;

// ==========================================
// DefectSheetImporter - 疵点表导入器
// ==========================================
pub struct DefectSheetImporter {
    parser: UniversalSheetParser,
    mapper: DefectFieldMapper,
    validator: DefectDqValidator,
}

impl DefectSheetImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalSheetParser,
            mapper: DefectFieldMapper,
            validator: DefectDqValidator,
        }
    }

    /// 从疵点表文件导入
    ///
    /// # 参数
    /// - file_path: 疵点表路径 (.csv/.xlsx/.xls)
    ///
    /// # 返回
    /// - Ok(DefectImportResult): 批次信息 + 可用明细 + DQ 报告
    /// - Err: 文件级错误 (不存在/格式不支持/解析失败/无数据行)
    ///
    /// # 说明
    /// - 行级问题不会使导入整体失败: Error 级行被阻断并记入报告,
    ///   Warning/Info 级行照常导入
    #[instrument(skip(self, file_path), fields(batch_id))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<DefectImportResult> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let file_name = file_path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        let file_path_str = file_path.as_ref().display().to_string();
        info!(batch_id = %batch_id, file_path = %file_path_str, "开始导入疵点数据");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let raw_rows = self.parser.parse(file_path.as_ref()).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;

        if raw_rows.is_empty() {
            error!("疵点表无数据行");
            return Err(ImportError::EmptySheet);
        }

        let total_rows = raw_rows.len();
        info!(total_rows, "文件解析完成");

        // === 步骤 2: 字段映射 ===
        debug!("步骤 2: 字段映射");
        let mut records = Vec::new();
        let mut violations: Vec<DqViolation> = Vec::new();
        let mut blocked_rows = 0usize;

        for (idx, row) in raw_rows.into_iter().enumerate() {
            let row_number = idx + 1;
            match self.mapper.map_to_raw_defect(row, row_number) {
                Ok(record) => records.push(record),
                Err(e) => {
                    // 映射失败: 该行阻断, 转为 Error 级违规记入报告
                    warn!(row_number, error = %e, "字段映射失败");
                    let field = match &e {
                        ImportError::TypeConversionError { field, .. } => field.clone(),
                        _ => "row".to_string(),
                    };
                    violations.push(DqViolation {
                        row_number,
                        level: DqLevel::Error,
                        field,
                        message: e.to_string(),
                    });
                    blocked_rows += 1;
                }
            }
        }

        // === 步骤 3: DQ 校验 ===
        debug!("步骤 3: DQ 校验");
        let mut entries = Vec::new();
        let mut warning_rows = 0usize;

        for record in &records {
            let row_violations = self.validator.validate_record(record);
            let blocked = DefectDqValidator::is_blocked(&row_violations);
            let has_warning = row_violations.iter().any(|v| v.level == DqLevel::Warning);

            if blocked {
                blocked_rows += 1;
            } else if let Some(points) = record.points {
                // 扣分越界必已阻断, 此处必在 1..=4
                entries.push(FabricDefectEntry {
                    location: record.location.clone().unwrap_or_default(),
                    defect_type: record.defect_type.clone().unwrap_or_default(),
                    points: points as u8,
                });
                if has_warning {
                    warning_rows += 1;
                }
            }

            violations.extend(row_violations);
        }

        let success_rows = entries.len();

        // === 步骤 4: 汇总 ===
        debug!("步骤 4: 汇总");
        let elapsed_ms = start_time.elapsed().as_millis() as u64;

        let report = DqReport {
            batch_id: batch_id.clone(),
            summary: DqSummary {
                total_rows,
                success: success_rows,
                blocked: blocked_rows,
                warning: warning_rows,
            },
            violations,
        };

        let batch = DefectImportBatch {
            batch_id: batch_id.clone(),
            file_name,
            total_rows,
            success_rows,
            blocked_rows,
            warning_rows,
            imported_at: Utc::now(),
            elapsed_ms,
        };

        info!(
            batch_id = %batch_id,
            total_rows,
            success = success_rows,
            blocked = blocked_rows,
            warning = warning_rows,
            elapsed_ms,
            "疵点数据导入完成"
        );
        if blocked_rows > 0 {
            warn!(blocked = blocked_rows, "存在被阻断的疵点行, 请检查 DQ 报告");
        }

        Ok(DefectImportResult {
            batch,
            entries,
            report,
        })
    }
}

impl Default for DefectSheetImporter {
    fn default() -> Self {
        Self::new()
    }
}
