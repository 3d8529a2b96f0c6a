// ==========================================
// 成衣生产系统 - 疵点表导入模块
// ==========================================
// 职责: 验布疵点表 (CSV/Excel) → 可计分疵点明细 + DQ 报告
// 流程: sheet_parser → field_mapper → dq_validator → defect_importer
// ==========================================

pub mod defect_importer;
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod sheet_parser;

// 重新导出常用类型
pub use defect_importer::DefectSheetImporter;
pub use dq_validator::DefectDqValidator;
pub use error::{ImportError, ImportResult};
pub use field_mapper::DefectFieldMapper;
pub use sheet_parser::{CsvSheetParser, ExcelSheetParser, UniversalSheetParser};
