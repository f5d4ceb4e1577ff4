use crate::auth::SESSION_TTL_SECS;
use crate::data::Owner;
use crate::domain::dates::parse_form_date;
use crate::domain::filters::{AppealFilter, DenialFilter};
use crate::domain::letter::appeal_letter;
use crate::domain::{AppealStatus, Attachment, DenialStatus, DocumentTarget, Priority};
use crate::errors::ServerError;
use crate::forms::{
    cookie, parse_new_appeal, parse_new_denial, query_params, read_body, read_form, Fields,
};
use crate::remote::local_storage::content_type_for;
use crate::remote::RemoteError;
use crate::responses::{
    file_response, html_response, redirect, redirect_with_cookie, text_response, ResultResp,
};
use crate::spreadsheets::export_denials_xlsx;
use crate::state::AppState;
use crate::templates::pages::{self, AppealsVm, DashboardVm, DenialsVm};
use crate::templates::{Chrome, NavItem};
use astra::Request;
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

pub const SESSION_COOKIE: &str = "session";
const STYLESHEET: &str = include_str!("../static/main.css");

/// Who is asking, as far as the pages care.
struct Viewer {
    owner: Owner,
    email: String,
}

impl Viewer {
    fn chrome(&self, active: NavItem, sample_data: bool) -> Chrome<'_> {
        Chrome {
            active,
            email: &self.email,
            sample_data,
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn param<'a>(params: &'a Fields, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    if let Some(files) = state.local_files.as_ref().filter(|f| !f.prefix().is_empty()) {
        if let Some(rest) = path.strip_prefix(files.prefix()) {
            if method == "GET" && rest.starts_with('/') {
                return serve_file(state, rest.trim_start_matches('/'));
            }
        }
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["static", "main.css"]) => {
            file_response(STYLESHEET.as_bytes().to_vec(), "text/css; charset=utf-8")
        }
        ("GET", ["login"]) => html_response(pages::login_page(None)),
        ("POST", ["login"]) => login(&mut req, state),
        ("POST", ["logout"]) => logout(&req, state),
        _ => {
            let Some(viewer) = resolve_viewer(&req, state) else {
                return redirect("/login");
            };
            route_page(&mut req, state, &viewer, &method, &segments)
        }
    }
}

fn route_page(
    req: &mut Request,
    state: &AppState,
    viewer: &Viewer,
    method: &str,
    segments: &[&str],
) -> ResultResp {
    match (method, segments) {
        ("GET", []) => dashboard(state, viewer),

        ("GET", ["denials"]) => denials(req, state, viewer),
        ("GET", ["denials", "new"]) => {
            html_response(pages::denial_form_page(viewer.chrome(NavItem::Denials, false)))
        }
        ("POST", ["denials"]) => create_denial(req, state, viewer),
        ("POST", ["denials", id, "status"]) => {
            let fields = read_form(req)?.0;
            let status = parse_choice(&fields, "status", DenialStatus::parse)?;
            state
                .data
                .update_denial_status(&viewer.owner, id, status)
                .ok_or(ServerError::NotFound)?;
            redirect("/denials")
        }
        ("POST", ["denials", id, "priority"]) => {
            let fields = read_form(req)?.0;
            let priority = parse_choice(&fields, "priority", Priority::parse)?;
            state
                .data
                .update_denial_priority(&viewer.owner, id, priority)
                .ok_or(ServerError::NotFound)?;
            redirect("/denials")
        }
        ("POST", ["denials", id, "delete"]) => {
            if !state.data.delete_denial(&viewer.owner, id) {
                return Err(ServerError::NotFound);
            }
            redirect("/denials")
        }
        ("POST", ["denials", id, "documents"]) => upload_document(req, state, viewer, id),

        ("GET", ["appeals"]) => appeals(req, state, viewer),
        ("GET", ["appeals", "new"]) => new_appeal(req, state, viewer),
        ("GET", ["appeals", "letter"]) => letter(req, state, viewer),
        ("POST", ["appeals"]) => create_appeal(req, state, viewer),
        ("POST", ["appeals", id, "status"]) => {
            let fields = read_form(req)?.0;
            let status = parse_choice(&fields, "status", AppealStatus::parse)?;
            state
                .data
                .update_appeal_status(&viewer.owner, id, status)
                .ok_or(ServerError::NotFound)?;
            redirect("/appeals")
        }
        ("POST", ["appeals", id, "delete"]) => {
            if !state.data.delete_appeal(&viewer.owner, id) {
                return Err(ServerError::NotFound);
            }
            redirect("/appeals")
        }

        ("GET", ["analytics"]) => {
            html_response(pages::analytics_page(viewer.chrome(NavItem::Analytics, false)))
        }
        ("GET", ["analytics", "export"]) => {
            let loaded = state.data.load_denials(&viewer.owner);
            export_denials_xlsx(&loaded.items, today())
        }

        ("GET", ["calendar"]) => coming_soon(viewer, NavItem::Calendar),
        ("GET", ["team"]) => coming_soon(viewer, NavItem::Team),
        ("GET", ["search"]) => coming_soon(viewer, NavItem::Search),
        ("GET", ["settings"]) => coming_soon(viewer, NavItem::Settings),

        _ => Err(ServerError::NotFound),
    }
}

/// `None` means nobody is signed in. A lookup that fails outright still
/// serves the page, against the fallback owner's records.
fn resolve_viewer(req: &Request, state: &AppState) -> Option<Viewer> {
    let token = cookie(req, SESSION_COOKIE);
    match state.auth.current_user(token.as_deref()) {
        Ok(user) => Some(Viewer {
            owner: Owner::User(user.id),
            email: user.email,
        }),
        Err(RemoteError::Unauthenticated) => None,
        Err(e) => {
            warn!(error = %e, "could not resolve user, serving fallback data");
            Some(Viewer {
                owner: Owner::Fallback,
                email: "guest".to_string(),
            })
        }
    }
}

fn parse_choice<T>(fields: &Fields, key: &str, parse: fn(&str) -> Option<T>) -> Result<T, ServerError> {
    let raw = param(fields, key).unwrap_or("").trim();
    parse(raw).ok_or_else(|| ServerError::BadRequest(format!("unknown {key}: {raw}")))
}

fn coming_soon(viewer: &Viewer, item: NavItem) -> ResultResp {
    html_response(pages::coming_soon_page(viewer.chrome(item, false)))
}

// ---- auth ----

fn login(req: &mut Request, state: &AppState) -> ResultResp {
    let fields = read_form(req)?.0;
    let email = param(&fields, "email").unwrap_or("");

    match state.auth.login(email) {
        Ok(session) => {
            let cookie = format!(
                "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}",
                session.token
            );
            redirect_with_cookie("/", &cookie)
        }
        Err(RemoteError::Unauthenticated) => html_response(pages::login_page(Some(
            "Please enter a valid email address.",
        ))),
        Err(e) => Err(e.into()),
    }
}

fn logout(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = cookie(req, SESSION_COOKIE) {
        if let Err(e) = state.auth.logout(&token) {
            warn!(error = %e, "sign out failed");
        }
    }
    redirect_with_cookie(
        "/login",
        &format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
    )
}

fn serve_file(state: &AppState, path: &str) -> ResultResp {
    let files = state.local_files.as_ref().ok_or(ServerError::NotFound)?;
    match files.read(path)? {
        Some((bytes, content_type)) => file_response(bytes, content_type),
        None => Err(ServerError::NotFound),
    }
}

// ---- pages ----

fn dashboard(state: &AppState, viewer: &Viewer) -> ResultResp {
    let stats = state.data.load_stats(&viewer.owner);
    let denials = state.data.load_denials(&viewer.owner);
    let sample = stats.is_fallback() || denials.is_fallback();
    let recent = &denials.items[..denials.items.len().min(5)];
    let vm = DashboardVm {
        stats: stats.items,
        recent,
        today: today(),
    };
    html_response(pages::dashboard_page(viewer.chrome(NavItem::Dashboard, sample), &vm))
}

fn denials(req: &Request, state: &AppState, viewer: &Viewer) -> ResultResp {
    let params = query_params(req);
    let filter = DenialFilter::from_params(
        param(&params, "q"),
        param(&params, "status"),
        param(&params, "priority"),
    );
    let loaded = state.data.load_denials(&viewer.owner);
    let vm = DenialsVm {
        all: &loaded.items,
        shown: filter.apply(&loaded.items),
        filter: &filter,
        today: today(),
        editable: loaded.is_fallback(),
    };
    html_response(pages::denials_page(
        viewer.chrome(NavItem::Denials, loaded.is_fallback()),
        &vm,
    ))
}

fn create_denial(req: &mut Request, state: &AppState, viewer: &Viewer) -> ResultResp {
    let (fields, attachments) = read_form(req)?;
    let new = parse_new_denial(&fields, today())?;
    state.data.create_denial(&viewer.owner, new, attachments);
    redirect("/denials")
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .is_some_and(|m| m.type_() == mime::MULTIPART)
}

/// Accepts either a multipart form with one file, or the raw file as the
/// body with its name in `?name=`.
fn upload_document(req: &mut Request, state: &AppState, viewer: &Viewer, id: &str) -> ResultResp {
    let known = state
        .data
        .load_denials(&viewer.owner)
        .items
        .iter()
        .any(|d| d.id == id);
    if !known {
        return Err(ServerError::NotFound);
    }

    let attachment = if is_multipart(req) {
        read_form(req)?
            .1
            .into_iter()
            .next()
            .ok_or_else(|| ServerError::BadRequest("no file was attached".into()))?
    } else {
        let params = query_params(req);
        let name = param(&params, "name")
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ServerError::BadRequest("name is required".into()))?
            .to_string();
        let content_type = req
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(&name).to_string());
        let bytes = read_body(req)?;
        if bytes.is_empty() {
            return Err(ServerError::BadRequest("empty upload".into()));
        }
        Attachment {
            file_name: name,
            content_type,
            bytes,
        }
    };

    let record = state.data.attach_document(
        &viewer.owner,
        &DocumentTarget::Denial(id.to_string()),
        &attachment,
    )?;
    info!(denial = %id, url = %record.file_url, "document uploaded");
    redirect("/denials")
}

fn appeals(req: &Request, state: &AppState, viewer: &Viewer) -> ResultResp {
    let params = query_params(req);
    let filter = AppealFilter::from_params(
        param(&params, "q"),
        param(&params, "status"),
        param(&params, "type"),
    );
    let loaded = state.data.load_appeal_board(&viewer.owner);
    let board = &loaded.items;
    let vm = AppealsVm {
        board,
        shown: filter.apply(&board.appeals, &board.denials),
        filter: &filter,
        now: Utc::now(),
        editable: loaded.is_fallback(),
    };
    html_response(pages::appeals_page(
        viewer.chrome(NavItem::Appeals, loaded.is_fallback()),
        &vm,
    ))
}

fn new_appeal(req: &Request, state: &AppState, viewer: &Viewer) -> ResultResp {
    let params = query_params(req);
    let loaded = state.data.load_denials(&viewer.owner);
    html_response(pages::appeal_form_page(
        viewer.chrome(NavItem::Appeals, loaded.is_fallback()),
        &loaded.items,
        param(&params, "denial_id"),
        today(),
    ))
}

fn create_appeal(req: &mut Request, state: &AppState, viewer: &Viewer) -> ResultResp {
    let (fields, attachments) = read_form(req)?;
    let new = parse_new_appeal(&fields, today())?;
    state.data.create_appeal(&viewer.owner, new, attachments);
    redirect("/appeals")
}

/// Draft letter for the denial named in `?denial_id=`, filled from the
/// rest of the appeal form's fields.
fn letter(req: &Request, state: &AppState, viewer: &Viewer) -> ResultResp {
    let params = query_params(req);
    let denial_id = param(&params, "denial_id")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Select a denial first".into()))?;

    let loaded = state.data.load_denials(&viewer.owner);
    let denial = loaded
        .items
        .iter()
        .find(|d| d.id == denial_id)
        .ok_or(ServerError::NotFound)?;

    let appeal_date = param(&params, "appeal_date")
        .and_then(parse_form_date)
        .unwrap_or_else(today);

    text_response(appeal_letter(
        denial,
        appeal_date,
        param(&params, "appeal_reason").unwrap_or("").trim(),
        param(&params, "submitted_by").unwrap_or("").trim(),
    ))
}
