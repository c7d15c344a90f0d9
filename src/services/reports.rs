//! Report service implementation
//!
//! Text reports for stock lookups and the movement history, plus the
//! spreadsheet export of the full inventory.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use rust_xlsxwriter::Workbook;
use tracing::{info, debug};

use crate::database::DatabaseService;
use crate::models::{StockBox, HistoryEntry};
use crate::utils::errors::Result;
use crate::utils::helpers::format_timestamp;

/// Column headers of the exported sheet
pub const EXPORT_HEADER: [&str; 5] = ["Código", "Marca", "Color", "Cantidad", "Ubicación"];

const LOOKUP_HEADER: &str = "📦 RESULTADO DE BÚSQUEDA\n\n";
const HISTORY_HEADER: &str = "📜 HISTORIAL\n\n";
const BOX_SEPARATOR: &str = "---------------------";
const DEFAULT_EXPORT_NAME: &str = "stock.xlsx";

/// A generated spreadsheet ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Report service for lookups, history and exports
#[derive(Debug, Clone)]
pub struct ReportService {
    database: DatabaseService,
    export_path: PathBuf,
}

impl ReportService {
    /// Create a new ReportService writing exports to `export_path`
    pub fn new(database: DatabaseService, export_path: impl Into<PathBuf>) -> Self {
        Self {
            database,
            export_path: export_path.into(),
        }
    }

    /// Render lookup results as one text block
    pub fn render_boxes(boxes: &[StockBox]) -> String {
        let mut text = String::from(LOOKUP_HEADER);
        for stock_box in boxes {
            let _ = write!(
                text,
                "📦 Código: {}\n🏷 Marca: {}\n🎨 Color: {}\n🔢 Cantidad: {}\n📍 Ubicación: {}\n{}\n",
                stock_box.code,
                stock_box.brand,
                stock_box.color,
                stock_box.quantity,
                stock_box.location,
                BOX_SEPARATOR,
            );
        }
        text
    }

    /// Render history entries, one line per entry in the given order
    pub fn render_history(entries: &[HistoryEntry]) -> String {
        let mut text = String::from(HISTORY_HEADER);
        for entry in entries {
            let _ = writeln!(
                text,
                "{} | {} | {} | {} ({})",
                format_timestamp(entry.created_at),
                entry.user,
                entry.action,
                entry.code,
                entry.quantity,
            );
        }
        text
    }

    /// Full history report, newest first. `None` when nothing was recorded yet.
    pub async fn history_report(&self) -> Result<Option<String>> {
        let entries = self.database.list_history().await?;
        debug!(entries = entries.len(), "Building history report");

        if entries.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::render_history(&entries)))
    }

    /// Write every box to the export file, overwriting any previous export,
    /// and return its contents.
    pub async fn export_spreadsheet(&self) -> Result<ExportFile> {
        let boxes = self.database.list_boxes().await?;
        write_workbook(&self.export_path, &boxes)?;

        let bytes = tokio::fs::read(&self.export_path).await?;
        info!(path = %self.export_path.display(), rows = boxes.len(), size = bytes.len(), "Spreadsheet exported");

        Ok(ExportFile {
            file_name: self.file_name(),
            bytes,
        })
    }

    /// Name the exported file is sent under
    pub fn file_name(&self) -> String {
        self.export_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_EXPORT_NAME.to_string())
    }
}

fn write_workbook(path: &Path, boxes: &[StockBox]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in EXPORT_HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, stock_box) in boxes.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, stock_box.code.as_str())?;
        worksheet.write_string(row, 1, stock_box.brand.as_str())?;
        worksheet.write_string(row, 2, stock_box.color.as_str())?;
        worksheet.write_number(row, 3, stock_box.quantity as f64)?;
        worksheet.write_string(row, 4, stock_box.location.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone, Utc};
    use tempfile::TempDir;
    use calamine::{open_workbook, Reader, Xlsx};
    use crate::database::create_in_memory_pool;
    use crate::models::{NewStockBox, NewHistoryEntry};

    fn stock_box(code: &str, quantity: i64) -> StockBox {
        StockBox {
            id: 1,
            code: code.to_string(),
            brand: "Acme".to_string(),
            color: "AZ".to_string(),
            quantity,
            location: "Entrada 4to Piso".to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_boxes() {
        let text = ReportService::render_boxes(&[stock_box("A1", 12)]);
        assert_eq!(
            text,
            "📦 RESULTADO DE BÚSQUEDA\n\n📦 Código: A1\n🏷 Marca: Acme\n🎨 Color: AZ\n🔢 Cantidad: 12\n📍 Ubicación: Entrada 4to Piso\n---------------------\n"
        );
    }

    #[test]
    fn test_render_history() {
        let entry = HistoryEntry {
            id: 1,
            user: "ana".to_string(),
            action: "➕ Sumar".to_string(),
            code: "A1".to_string(),
            quantity: 5,
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 59).unwrap(),
        };
        let shown = entry.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        assert_eq!(
            ReportService::render_history(&[entry]),
            format!("📜 HISTORIAL\n\n{} | ana | ➕ Sumar | A1 (5)\n", shown)
        );
    }

    #[tokio::test]
    async fn test_history_report_empty() {
        let database = DatabaseService::new(create_in_memory_pool().await.unwrap());
        let reports = ReportService::new(database, "unused.xlsx");
        assert_eq!(reports.history_report().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_history_report_newest_first() {
        let database = DatabaseService::new(create_in_memory_pool().await.unwrap());
        database.register_box(NewStockBox {
            code: "A1".into(),
            brand: "Acme".into(),
            color: "AZ".into(),
            quantity: 10,
            location: "Fondo 4to Piso".into(),
        }).await.unwrap();
        for (action, quantity) in [("➕ Sumar", 5), ("➖ Restar", 3)] {
            let entry = NewHistoryEntry {
                user: "ana".into(),
                action: action.into(),
                code: "A1".into(),
                quantity,
            };
            let delta = if action.contains("Sumar") { quantity } else { -quantity };
            database.adjust_stock(delta, entry).await.unwrap();
        }

        let reports = ReportService::new(database, "unused.xlsx");
        let text = reports.history_report().await.unwrap().unwrap();
        let lines: Vec<_> = text.lines().skip(2).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("| ana | ➖ Restar | A1 (3)"));
        assert!(lines[1].ends_with("| ana | ➕ Sumar | A1 (5)"));
    }

    #[tokio::test]
    async fn test_export_overwrites_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stock.xlsx");
        std::fs::write(&path, b"stale").unwrap();

        let database = DatabaseService::new(create_in_memory_pool().await.unwrap());
        database.register_box(NewStockBox {
            code: "A1".into(),
            brand: "Acme".into(),
            color: "AZ".into(),
            quantity: 10,
            location: "Fondo 4to Piso".into(),
        }).await.unwrap();

        let reports = ReportService::new(database, path.clone());
        let export = reports.export_spreadsheet().await.unwrap();

        assert_eq!(export.file_name, "stock.xlsx");
        assert_eq!(export.bytes, std::fs::read(&path).unwrap());

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        assert_eq!(rows, vec![
            vec!["Código", "Marca", "Color", "Cantidad", "Ubicación"],
            vec!["A1", "Acme", "AZ", "10", "Fondo 4to Piso"],
        ]);
    }

    #[tokio::test]
    async fn test_export_with_no_boxes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        let database = DatabaseService::new(create_in_memory_pool().await.unwrap());
        let reports = ReportService::new(database, path.clone());
        let export = reports.export_spreadsheet().await.unwrap();

        assert_eq!(export.file_name, "empty.xlsx");
        assert!(!export.bytes.is_empty());
        assert!(path.exists());
    }
}
