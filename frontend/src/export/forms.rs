//! Fixed layouts of the three printed forms.

use crate::api::{
    EmployeeRef, HeadPosition, OfficialBusiness, PassSlip, RequestRecord, TravelOrder,
};
use crate::utils::time::{format_clock_time, format_date, to_app_tz};

use super::image::SignatureImage;
use super::sheet::{Sheet, Weight, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};

const TOP: f32 = PAGE_HEIGHT - MARGIN;
const BOTTOM: f32 = MARGIN + 40.0;
const LABEL_WIDTH: f32 = 120.0;
const BODY_SIZE: f32 = 11.0;
const ROW_HEIGHT: f32 = 18.0;

pub struct Signer<'a> {
    pub head: Option<&'a HeadPosition>,
    pub image: Option<&'a SignatureImage>,
}

pub fn draw(sheet: &mut Sheet, record: &RequestRecord, signer: &Signer<'_>) {
    match record {
        RequestRecord::TravelOrder(order) => travel_order(sheet, order, signer),
        RequestRecord::OfficialBusiness(business) => official_business(sheet, business, signer),
        RequestRecord::PassSlip(slip) => pass_slip(sheet, slip, signer),
    }
}

fn letterhead(sheet: &mut Sheet, title: &str, number: &str, filed: &str) -> f32 {
    sheet.centered(TOP, 10.0, Weight::Regular, "Republic of the Philippines");
    sheet.centered(TOP - 14.0, 12.0, Weight::Bold, "REGIONAL OFFICE X");
    sheet.centered(TOP - 28.0, 10.0, Weight::Regular, "Northern Mindanao");
    sheet.rule(MARGIN, TOP - 40.0, PAGE_WIDTH - MARGIN);
    sheet.centered(TOP - 70.0, 16.0, Weight::Bold, title);
    sheet.text(MARGIN, TOP - 100.0, BODY_SIZE, Weight::Regular, &format!("No. {}", number));
    let filed = format!("Date filed: {}", filed);
    let x = PAGE_WIDTH - MARGIN - super::sheet::text_width(&filed, BODY_SIZE);
    sheet.text(x, TOP - 100.0, BODY_SIZE, Weight::Regular, &filed);
    TOP - 130.0
}

/// Label and wrapped value; returns the next baseline.
fn field(sheet: &mut Sheet, y: f32, label: &str, value: &str) -> f32 {
    let y = ensure_room(sheet, y, ROW_HEIGHT);
    sheet.text(MARGIN, y, BODY_SIZE, Weight::Bold, label);
    let value = if value.trim().is_empty() { "-" } else { value };
    let next = sheet.paragraph(
        MARGIN + LABEL_WIDTH,
        y,
        CONTENT_WIDTH - LABEL_WIDTH,
        BODY_SIZE,
        value,
    );
    next - 6.0
}

fn ensure_room(sheet: &mut Sheet, y: f32, needed: f32) -> f32 {
    if y - needed < BOTTOM {
        sheet.new_page();
        TOP
    } else {
        y
    }
}

/// Personnel table; continues on a new page when it runs out of room.
fn personnel(sheet: &mut Sheet, y: f32, employees: &[EmployeeRef]) -> f32 {
    let name_x = MARGIN + 8.0;
    let position_x = MARGIN + CONTENT_WIDTH * 0.55;
    let header = |sheet: &mut Sheet, y: f32| {
        sheet.text(name_x, y, BODY_SIZE, Weight::Bold, "Name");
        sheet.text(position_x, y, BODY_SIZE, Weight::Bold, "Position");
        sheet.rule(MARGIN, y - 6.0, PAGE_WIDTH - MARGIN);
        y - ROW_HEIGHT
    };
    let start = ensure_room(sheet, y, ROW_HEIGHT * 2.0);
    let mut y = header(sheet, start);
    for employee in employees {
        if y - ROW_HEIGHT < BOTTOM {
            sheet.new_page();
            y = header(sheet, TOP);
        }
        sheet.text(name_x, y, BODY_SIZE, Weight::Regular, &employee.name);
        sheet.text(
            position_x,
            y,
            BODY_SIZE,
            Weight::Regular,
            employee.position.as_deref().unwrap_or("-"),
        );
        y -= ROW_HEIGHT;
    }
    y - 8.0
}

fn remarks(sheet: &mut Sheet, y: f32, remarks: Option<&str>) -> f32 {
    match remarks.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => field(sheet, y, "Remarks:", text),
        None => y,
    }
}

/// Approval block with the signature image above the signatory's name.
fn signature_block(sheet: &mut Sheet, y: f32, caption: &str, signer: &Signer<'_>) {
    let block_height = 110.0;
    let y = ensure_room(sheet, y, block_height);
    let width = 220.0;
    let x = PAGE_WIDTH - MARGIN - width;
    sheet.text(x, y - 14.0, BODY_SIZE, Weight::Regular, caption);
    if let Some(image) = signer.image {
        sheet.signature(image, x, y - 70.0, width, 48.0);
    }
    sheet.rule(x, y - 74.0, x + width);
    match signer.head {
        Some(head) => {
            sheet.text(x, y - 88.0, BODY_SIZE, Weight::Bold, &head.name.to_uppercase());
            sheet.text(x, y - 102.0, 10.0, Weight::Regular, &head.title);
        }
        None => sheet.text(x, y - 88.0, 10.0, Weight::Regular, "Authorized signatory"),
    }
}

fn filed_on(record_created: chrono::DateTime<chrono::Utc>) -> String {
    format_date(to_app_tz(record_created).date_naive())
}

fn clock_or_dash(raw: Option<&str>) -> String {
    raw.map(format_clock_time).unwrap_or_else(|| "-".to_string())
}

fn travel_order(sheet: &mut Sheet, order: &TravelOrder, signer: &Signer<'_>) {
    let mut y = letterhead(
        sheet,
        "TRAVEL ORDER",
        &format!("TO-{}", order.id),
        &filed_on(order.created_at),
    );
    y = personnel(sheet, y, &order.employees);
    y = field(sheet, y, "Destination:", &order.destination);
    y = field(sheet, y, "Purpose:", &order.purpose);
    let dates = if order.date_from == order.date_to {
        format_date(order.date_from)
    } else {
        format!("{} to {}", format_date(order.date_from), format_date(order.date_to))
    };
    y = field(sheet, y, "Inclusive dates:", &dates);
    y = field(
        sheet,
        y,
        "Fund source:",
        order.fund_source.as_deref().unwrap_or(""),
    );
    y = remarks(sheet, y, order.review.remarks.as_deref());
    signature_block(sheet, y - 20.0, "Approved:", signer);
}

fn official_business(sheet: &mut Sheet, business: &OfficialBusiness, signer: &Signer<'_>) {
    let mut y = letterhead(
        sheet,
        "AUTHORITY FOR OFFICIAL BUSINESS",
        &format!("OB-{}", business.id),
        &filed_on(business.created_at),
    );
    y = personnel(sheet, y, &business.employees);
    y = field(sheet, y, "Place:", &business.place);
    y = field(sheet, y, "Purpose:", &business.purpose);
    y = field(sheet, y, "Date:", &format_date(business.date));
    y = field(
        sheet,
        y,
        "Departure:",
        &clock_or_dash(business.time_departure.as_deref()),
    );
    y = field(
        sheet,
        y,
        "Expected return:",
        &clock_or_dash(business.time_return.as_deref()),
    );
    y = remarks(sheet, y, business.review.remarks.as_deref());
    signature_block(sheet, y - 20.0, "Approved:", signer);
}

fn pass_slip(sheet: &mut Sheet, slip: &PassSlip, signer: &Signer<'_>) {
    let mut y = letterhead(
        sheet,
        "PASS SLIP",
        &format!("PS-{}", slip.id),
        &filed_on(slip.created_at),
    );
    let names = slip
        .employees
        .iter()
        .map(|employee| employee.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    y = field(sheet, y, "Employee:", &names);
    y = field(sheet, y, "Destination:", &slip.destination);
    y = field(sheet, y, "Reason:", &slip.reason);
    y = field(sheet, y, "Date:", &format_date(slip.date));

    let y_box = ensure_room(sheet, y, 60.0);
    let half = CONTENT_WIDTH / 2.0;
    sheet.frame(MARGIN, y_box - 44.0, half, 44.0);
    sheet.frame(MARGIN + half, y_box - 44.0, half, 44.0);
    sheet.text(MARGIN + 8.0, y_box - 14.0, 10.0, Weight::Bold, "Time out");
    sheet.text(MARGIN + half + 8.0, y_box - 14.0, 10.0, Weight::Bold, "Time in");
    sheet.text(
        MARGIN + 8.0,
        y_box - 34.0,
        BODY_SIZE,
        Weight::Regular,
        &clock_or_dash(slip.time_out.as_deref()),
    );
    sheet.text(
        MARGIN + half + 8.0,
        y_box - 34.0,
        BODY_SIZE,
        Weight::Regular,
        &clock_or_dash(slip.time_in.as_deref()),
    );
    let y = remarks(sheet, y_box - 64.0, slip.review.remarks.as_deref());
    signature_block(sheet, y - 10.0, "Approved:", signer);
}
