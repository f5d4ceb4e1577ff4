use crate::domain::Denial;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 13] = [
    "Claim Number",
    "Patient",
    "Patient ID",
    "Insurance",
    "Denial Date",
    "Service Date",
    "Denial Code",
    "Reason",
    "Amount",
    "Status",
    "Priority",
    "Assigned To",
    "Days Open",
];

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// One row per denial, in the order given.
pub fn denials_workbook(denials: &[Denial], today: chrono::NaiveDate) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("$#,##0.00");
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Denials")
        .map_err(xlsx_err("sheet name"))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, d) in denials.iter().enumerate() {
        let r = (i + 1) as u32;
        let service_date = d
            .service_date
            .map(|s| s.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        worksheet
            .write_string(r, 0, &d.claim_number)
            .map_err(xlsx_err("claim number"))?;
        worksheet
            .write_string(r, 1, &d.patient_name)
            .map_err(xlsx_err("patient"))?;
        worksheet
            .write_string(r, 2, &d.patient_id)
            .map_err(xlsx_err("patient id"))?;
        worksheet
            .write_string(r, 3, &d.insurance_company)
            .map_err(xlsx_err("insurance"))?;
        worksheet
            .write_string(r, 4, d.denial_date.format("%Y-%m-%d").to_string())
            .map_err(xlsx_err("denial date"))?;
        worksheet
            .write_string(r, 5, service_date)
            .map_err(xlsx_err("service date"))?;
        worksheet
            .write_string(r, 6, &d.denial_code)
            .map_err(xlsx_err("denial code"))?;
        worksheet
            .write_string(r, 7, &d.denial_reason)
            .map_err(xlsx_err("reason"))?;
        worksheet
            .write_number_with_format(r, 8, d.claim_amount.as_f64(), &money)
            .map_err(xlsx_err("amount"))?;
        worksheet
            .write_string(r, 9, d.status.label())
            .map_err(xlsx_err("status"))?;
        worksheet
            .write_string(r, 10, d.priority.label())
            .map_err(xlsx_err("priority"))?;
        worksheet
            .write_string(r, 11, &d.assigned_to)
            .map_err(xlsx_err("assignee"))?;
        worksheet
            .write_number(r, 12, crate::domain::dates::days_open(d.denial_date, today) as f64)
            .map_err(xlsx_err("days open"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_denials_xlsx(denials: &[Denial], today: chrono::NaiveDate) -> ResultResp {
    let buffer = denials_workbook(denials, today)?;
    xlsx_response(buffer, &format!("denials_{}.xlsx", today.format("%Y-%m-%d")))
}
