// src/forms.rs
//! Request decoding: query strings, urlencoded and multipart form bodies,
//! cookies, and the typed create forms built from them.

use crate::domain::dates::parse_form_date;
use crate::domain::{AppealType, Attachment, Cents, NewAppeal, NewDenial, Priority};
use crate::errors::ServerError;
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Read;

/// Form bodies and uploads above this size are refused.
pub const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

pub type Fields = HashMap<String, String>;

pub fn query_params(req: &Request) -> Fields {
    req.uri()
        .query()
        .map(|q| parse_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

pub fn parse_urlencoded(raw: &[u8]) -> Fields {
    url::form_urlencoded::parse(raw).into_owned().collect()
}

pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

pub fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;
    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}

/// Text fields plus any uploaded files, from either form encoding.
pub fn read_form(req: &mut Request) -> Result<(Fields, Vec<Attachment>), ServerError> {
    let content_type: Option<mime::Mime> = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok());
    let body = read_body(req)?;

    match content_type {
        Some(ct) if ct.type_() == mime::MULTIPART && ct.subtype() == mime::FORM_DATA => {
            let boundary = ct
                .get_param(mime::BOUNDARY)
                .ok_or_else(|| ServerError::BadRequest("multipart body without boundary".into()))?;
            parse_multipart(&body, boundary.as_str())
        }
        _ => Ok((parse_urlencoded(&body), Vec::new())),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// `Content-Disposition: form-data; name="x"; filename="y"` parameters.
fn disposition_param(headers: &str, key: &str) -> Option<String> {
    let line = headers
        .lines()
        .find(|l| l.to_ascii_lowercase().starts_with("content-disposition"))?;
    line.split(';').skip(1).find_map(|part| {
        let (k, v) = part.trim().split_once('=')?;
        (k.eq_ignore_ascii_case(key)).then(|| v.trim_matches('"').to_string())
    })
}

fn part_content_type(headers: &str) -> Option<String> {
    headers.lines().find_map(|l| {
        let (k, v) = l.split_once(':')?;
        k.trim()
            .eq_ignore_ascii_case("content-type")
            .then(|| v.trim().to_string())
    })
}

pub fn parse_multipart(body: &[u8], boundary: &str) -> Result<(Fields, Vec<Attachment>), ServerError> {
    let bad = |msg: &str| ServerError::BadRequest(format!("malformed multipart body: {msg}"));
    let delimiter = format!("--{boundary}");
    let delimiter = delimiter.as_bytes();

    let mut fields = Fields::new();
    let mut files = Vec::new();

    let start = find(body, delimiter).ok_or_else(|| bad("no boundary"))?;
    let mut rest = &body[start + delimiter.len()..];

    loop {
        if rest.starts_with(b"--") {
            break;
        }
        rest = rest.strip_prefix(b"\r\n").ok_or_else(|| bad("missing line break"))?;

        let header_end = find(rest, b"\r\n\r\n").ok_or_else(|| bad("unterminated headers"))?;
        let headers = String::from_utf8_lossy(&rest[..header_end]).into_owned();
        let content = &rest[header_end + 4..];

        let mut closing = b"\r\n".to_vec();
        closing.extend_from_slice(delimiter);
        let end = find(content, &closing).ok_or_else(|| bad("unterminated part"))?;
        let value = &content[..end];
        rest = &content[end + closing.len()..];

        let name = disposition_param(&headers, "name").ok_or_else(|| bad("part without name"))?;
        match disposition_param(&headers, "filename") {
            Some(file_name) if !file_name.is_empty() => files.push(Attachment {
                file_name,
                content_type: part_content_type(&headers)
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
                bytes: value.to_vec(),
            }),
            // Empty file inputs arrive with filename="" and no content.
            Some(_) => {}
            None => {
                fields.insert(name, String::from_utf8_lossy(value).into_owned());
            }
        }
    }

    Ok((fields, files))
}

fn text(fields: &Fields, key: &str) -> String {
    fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn required(fields: &Fields, key: &str, label: &str) -> Result<String, ServerError> {
    let value = text(fields, key);
    if value.is_empty() {
        return Err(ServerError::BadRequest(format!("{label} is required")));
    }
    Ok(value)
}

fn optional_date(fields: &Fields, key: &str, label: &str) -> Result<Option<NaiveDate>, ServerError> {
    let raw = text(fields, key);
    if raw.is_empty() {
        return Ok(None);
    }
    parse_form_date(&raw)
        .map(Some)
        .ok_or_else(|| ServerError::BadRequest(format!("{label} must be a date (YYYY-MM-DD)")))
}

/// A missing denial date means today, like the appeal date below.
pub fn parse_new_denial(fields: &Fields, today: NaiveDate) -> Result<NewDenial, ServerError> {
    let claim_number = required(fields, "claim_number", "Claim number")?;
    let patient_name = required(fields, "patient_name", "Patient name")?;
    let insurance_company = required(fields, "insurance_company", "Insurance company")?;
    let denial_date = optional_date(fields, "denial_date", "Denial date")?.unwrap_or(today);
    let amount_raw = required(fields, "claim_amount", "Claim amount")?;
    let claim_amount = Cents::parse(&amount_raw)
        .ok_or_else(|| ServerError::BadRequest(format!("invalid claim amount: {amount_raw}")))?;
    let denial_reason = required(fields, "denial_reason", "Denial reason")?;

    let priority = match fields.get("priority").map(|p| p.trim()) {
        None | Some("") => Priority::default(),
        Some(raw) => Priority::parse(raw)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown priority: {raw}")))?,
    };

    Ok(NewDenial {
        claim_number,
        patient_name,
        patient_id: text(fields, "patient_id"),
        insurance_company,
        denial_date,
        service_date: optional_date(fields, "service_date", "Service date")?,
        denial_reason,
        denial_code: text(fields, "denial_code"),
        claim_amount,
        priority,
        assigned_to: text(fields, "assigned_to"),
        notes: text(fields, "notes"),
    })
}

/// `today` fills in a missing appeal date.
pub fn parse_new_appeal(fields: &Fields, today: NaiveDate) -> Result<NewAppeal, ServerError> {
    let denial_id = required(fields, "denial_id", "Denial")?;
    let type_raw = required(fields, "appeal_type", "Appeal type")?;
    let appeal_type = AppealType::parse(&type_raw)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown appeal type: {type_raw}")))?;
    let submitted_by = required(fields, "submitted_by", "Submitted by")?;
    let appeal_reason = required(fields, "appeal_reason", "Appeal justification")?;

    Ok(NewAppeal {
        denial_id,
        appeal_type,
        appeal_date: optional_date(fields, "appeal_date", "Appeal date")?.unwrap_or(today),
        deadline_date: optional_date(fields, "deadline_date", "Deadline")?,
        appeal_reason,
        submitted_by,
        supporting_documents: text(fields, "supporting_documents"),
    })
}
