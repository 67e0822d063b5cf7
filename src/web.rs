use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use actix_files::Files;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::display::{format_duty_cell, format_volunteers};
use crate::export::schedule_to_csv;
use crate::roster::{
    build_schedule, find_volunteer, DutyRecord, LookupOutcome, Schedule, DEFAULT_VOLUNTEERS,
    MIN_VOLUNTEERS, SHIFT_PATTERN,
};

#[derive(Deserialize)]
pub struct RosterQuery {
    date: Option<String>,
    volunteers: Option<u32>,
}

#[derive(Deserialize)]
pub struct FindQuery {
    q: String,
    date: Option<String>,
    volunteers: Option<u32>,
}

#[derive(Serialize)]
struct ScheduleResponse {
    date: String,
    rotation_cycle: String,
    total_volunteers: u32,
    columns: Vec<String>,
    rows: Vec<ScheduleRow>,
    reserves: Vec<ReserveRow>,
}

#[derive(Serialize)]
struct ScheduleRow {
    counter: String,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct ReserveRow {
    time: String,
    reserves: String,
}

#[derive(Serialize)]
struct FindResponse {
    status: &'static str,
    results: Vec<DutyRecord>,
}

/// Resolves the (date, volunteers) pair every endpoint takes. Missing values
/// fall back to today and the default roster size; the practical staffing
/// floor is enforced here, not in the core.
fn resolve_inputs(
    date: &Option<String>,
    volunteers: Option<u32>,
) -> std::result::Result<(NaiveDate, u32), String> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))?,
        None => Utc::now().date_naive(),
    };

    let volunteers = volunteers.unwrap_or(DEFAULT_VOLUNTEERS);
    if volunteers < MIN_VOLUNTEERS {
        return Err(format!("At least {} volunteers are required", MIN_VOLUNTEERS));
    }

    Ok((date, volunteers))
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({"error": message}))
}

fn schedule_response(date: NaiveDate, schedule: &Schedule) -> ScheduleResponse {
    ScheduleResponse {
        date: date.to_string(),
        rotation_cycle: format!("{}/4", schedule.rotation_index + 1),
        total_volunteers: schedule.total_volunteers,
        columns: SHIFT_PATTERN.iter().map(|e| e.label.to_string()).collect(),
        rows: schedule
            .rows
            .iter()
            .map(|row| ScheduleRow {
                counter: row.counter_label.clone(),
                cells: row.cells.iter().map(|cell| format_duty_cell(cell)).collect(),
            })
            .collect(),
        reserves: schedule
            .reserves
            .iter()
            .map(|entry| ReserveRow {
                time: entry.time_slot.clone(),
                reserves: format_volunteers(&entry.volunteers),
            })
            .collect(),
    }
}

// Schedule endpoint: recomputes the roster from the query parameters on
// every call, nothing is cached or shared between requests
async fn get_schedule(query: web::Query<RosterQuery>) -> Result<HttpResponse> {
    let (date, volunteers) = match resolve_inputs(&query.date, query.volunteers) {
        Ok(inputs) => inputs,
        Err(message) => return Ok(bad_request(message)),
    };

    let schedule = build_schedule(volunteers, date);
    Ok(HttpResponse::Ok().json(schedule_response(date, &schedule)))
}

// CSV download endpoint
async fn download_csv(query: web::Query<RosterQuery>) -> Result<HttpResponse> {
    let (date, volunteers) = match resolve_inputs(&query.date, query.volunteers) {
        Ok(inputs) => inputs,
        Err(message) => return Ok(bad_request(message)),
    };

    let schedule = build_schedule(volunteers, date);
    let csv = schedule_to_csv(&schedule)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("CSV export failed: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"sequential_roster.csv\"",
        ))
        .body(csv))
}

// Volunteer lookup endpoint
async fn find(query: web::Query<FindQuery>) -> Result<HttpResponse> {
    let (date, volunteers) = match resolve_inputs(&query.date, query.volunteers) {
        Ok(inputs) => inputs,
        Err(message) => return Ok(bad_request(message)),
    };

    let schedule = build_schedule(volunteers, date);
    let response = match find_volunteer(&schedule, &query.q) {
        LookupOutcome::NoQuery => FindResponse { status: "no_query", results: Vec::new() },
        LookupOutcome::NoDuty => FindResponse { status: "no_duty", results: Vec::new() },
        LookupOutcome::OnDuty(records) => FindResponse { status: "on_duty", results: records },
    };

    Ok(HttpResponse::Ok().json(response))
}

// HTML page handler
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/api/schedule", web::get().to(get_schedule))
            .route("/api/schedule.csv", web::get().to(download_csv))
            .route("/api/find", web::get().to(find))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
