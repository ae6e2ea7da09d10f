//! Aggregation and CSV report serialization.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::models::record::{GrandTotal, InvoiceRecord, VendorTotal};

/// Report column headers, in the order consumers expect.
const COLUMNS: [&str; 7] = [
    "KID",
    "Mva.Gr.lag",
    "Mva. beløp",
    "Total",
    "Bestillingsnr.",
    "Fakturanr.",
    "Leverandør",
];

/// Aggregated totals for one run.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    /// Per-vendor totals in first-appearance order.
    pub vendor_totals: Vec<VendorTotal>,
    /// Totals over all records.
    pub grand_total: GrandTotal,
}

/// Compute per-vendor and grand totals over the given records.
///
/// Unparsable or absent amounts are excluded from sums, not treated as
/// zero. Each sum is rounded to two decimal places after summation.
pub fn build_summary(records: &[InvoiceRecord]) -> ReportSummary {
    let mut groups: Vec<VendorTotal> = Vec::new();
    let mut grand = GrandTotal::default();

    for record in records {
        let vat_base = record.vat_base_decimal();
        let vat_amount = record.vat_amount_decimal();
        let total = record.total_decimal();

        let group = match groups.iter_mut().find(|g| g.vendor == record.vendor) {
            Some(group) => group,
            None => {
                groups.push(VendorTotal {
                    vendor: record.vendor.clone(),
                    vat_base: Decimal::ZERO,
                    vat_amount: Decimal::ZERO,
                    total: Decimal::ZERO,
                });
                groups.last_mut().unwrap()
            }
        };

        if let Some(v) = vat_base {
            group.vat_base += v;
            grand.vat_base += v;
        }
        if let Some(v) = vat_amount {
            group.vat_amount += v;
            grand.vat_amount += v;
        }
        if let Some(v) = total {
            group.total += v;
            grand.total += v;
        }
    }

    for group in &mut groups {
        group.vat_base = group.vat_base.round_dp(2);
        group.vat_amount = group.vat_amount.round_dp(2);
        group.total = group.total.round_dp(2);
    }

    grand.vat_base = grand.vat_base.round_dp(2);
    grand.vat_amount = grand.vat_amount.round_dp(2);
    grand.total = grand.total.round_dp(2);

    debug!(
        "Aggregated {} records into {} vendor groups",
        records.len(),
        groups.len()
    );

    ReportSummary {
        vendor_totals: groups,
        grand_total: grand,
    }
}

/// File name for a report generated on the given date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("faktura data extraction {}.csv", date.format("%Y-%m-%d"))
}

/// Write the report for the given records into `output_dir`, named with
/// today's date. Returns the report path, or `None` when there are no
/// records to report (no file is written in that case).
pub fn write_report(records: &[InvoiceRecord], output_dir: &Path) -> Result<Option<PathBuf>> {
    write_report_dated(records, output_dir, chrono::Local::now().date_naive())
}

/// Like [`write_report`] but with an explicit report date.
pub fn write_report_dated(
    records: &[InvoiceRecord],
    output_dir: &Path,
    date: NaiveDate,
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        info!("No records extracted, skipping report");
        return Ok(None);
    }

    let summary = build_summary(records);
    let path = output_dir.join(report_file_name(date));

    let mut wtr = WriterBuilder::new()
        .from_path(&path)
        .map_err(ReportError::from)?;

    wtr.write_record(COLUMNS).map_err(ReportError::from)?;

    for record in records {
        wtr.write_record([
            record.kid.clone().unwrap_or_default(),
            format_amount(record.vat_base_decimal()),
            format_amount(record.vat_amount_decimal()),
            format_amount(record.total_decimal()),
            record.order_number.clone().unwrap_or_default(),
            record.invoice_number.clone().unwrap_or_default(),
            record.vendor.clone().unwrap_or_default(),
        ])
        .map_err(ReportError::from)?;
    }

    write_blank_row(&mut wtr)?;
    wtr.write_record(["TOTALS BY VENDOR", "", "", "", "", "", ""])
        .map_err(ReportError::from)?;

    for group in &summary.vendor_totals {
        wtr.write_record([
            String::new(),
            format_amount(Some(group.vat_base)),
            format_amount(Some(group.vat_amount)),
            format_amount(Some(group.total)),
            String::new(),
            String::new(),
            group.vendor.clone().unwrap_or_default(),
        ])
        .map_err(ReportError::from)?;
    }

    write_blank_row(&mut wtr)?;
    wtr.write_record([
        "GRAND TOTAL".to_string(),
        format_amount(Some(summary.grand_total.vat_base)),
        format_amount(Some(summary.grand_total.vat_amount)),
        format_amount(Some(summary.grand_total.total)),
        String::new(),
        String::new(),
        String::new(),
    ])
    .map_err(ReportError::from)?;

    wtr.flush().map_err(|e| ReportError::Write {
        path: path.display().to_string(),
        source: e,
    })?;

    info!("Report written to {}", path.display());
    Ok(Some(path))
}

fn write_blank_row(wtr: &mut csv::Writer<std::fs::File>) -> Result<()> {
    wtr.write_record([""; 7]).map_err(ReportError::from)?;
    Ok(())
}

fn format_amount(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => String::new(),
    }
}
