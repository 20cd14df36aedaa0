//! Spreadsheet export of enquiries and student profiles.
//!
//! Each export is one worksheet with a bold header row. Columns match what
//! the admissions team works from: contact details, what was asked about,
//! whether the student was called, and the remark.

use std::path::Path;

use anyhow::Context;
use campus_core::entities::UserProfile;
use campus_core::enums::EnquiryKind;
use campus_core::responses::EnquiryRow;
use rust_xlsxwriter::{Format, Workbook};

const NOT_AVAILABLE: &str = "N/A";

/// A single worksheet ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: &'static str,
    /// Default file name when the caller gives no path.
    pub file_name: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn or_blank(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Enquiry rows for the "Students" or "Certification Students" sheet.
#[must_use]
pub fn enquiry_sheet(kind: EnquiryKind, rows: &[EnquiryRow]) -> Sheet {
    let (name, file_name, headers) = match kind {
        EnquiryKind::Course => (
            "Students",
            "students.xlsx",
            vec![
                "Name",
                "Phone",
                "Email",
                "Current Class",
                "Course",
                "College",
                "Called",
                "Remark",
            ],
        ),
        EnquiryKind::Certification => (
            "Certification Students",
            "certification_students.xlsx",
            vec![
                "Name",
                "Phone",
                "Email",
                "Current Class",
                "Certification Course",
                "Called",
                "Remark",
            ],
        ),
    };

    let rows = rows
        .iter()
        .map(|row| {
            let enquiry = &row.enquiry;
            let mut cells = vec![
                enquiry.name.clone(),
                enquiry.phone.clone(),
                or_blank(enquiry.email.as_deref()),
                or_blank(enquiry.current_class.as_deref()),
                row.course_label.clone(),
            ];
            if kind == EnquiryKind::Course {
                cells.push(or_not_available(row.college_label.as_deref()));
            }
            cells.push(yes_no(enquiry.called).to_string());
            cells.push(enquiry.remark.clone());
            cells
        })
        .collect();

    Sheet {
        name,
        file_name,
        headers,
        rows,
    }
}

/// Every registered profile for the "All Students" sheet.
#[must_use]
pub fn profile_sheet(profiles: &[UserProfile]) -> Sheet {
    let rows = profiles
        .iter()
        .map(|profile| {
            vec![
                or_not_available(Some(profile.name.as_str())),
                or_not_available(profile.phone.as_deref()),
                or_not_available(Some(profile.email.as_str())),
                or_not_available(profile.current_class.as_deref()),
                or_blank(profile.admin_remark.as_deref()),
            ]
        })
        .collect();

    Sheet {
        name: "All Students",
        file_name: "all-students.xlsx",
        headers: vec!["Name", "Phone", "Email", "Current Class", "Remark"],
        rows,
    }
}

/// Write `sheet` as a one-worksheet workbook at `path`.
pub fn write_xlsx(path: &Path, sheet: &Sheet) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet.name)
        .with_context(|| format!("invalid sheet name '{}'", sheet.name))?;

    for (col, header) in (0u16..).zip(&sheet.headers) {
        worksheet.write_string_with_format(0, col, *header, &bold)?;
    }
    for (row, cells) in (1u32..).zip(&sheet.rows) {
        for (col, value) in (0u16..).zip(cells) {
            worksheet.write_string(row, col, value)?;
        }
    }
    worksheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        sheet = sheet.name,
        rows = sheet.rows.len(),
        "exported spreadsheet"
    );
    Ok(())
}
