use crate::day::today_string;
use crate::errors::AppError;
use crate::models::{ActionRequest, BoardResponse, CreateHabitRequest};
use crate::state::{AppData, AppState};
use crate::stats::build_board;
use crate::storage::persist_storage;
use crate::store::HabitAction;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    data.store.roll_over(&today);
    let page = render_index(&build_board(&data.store, &today)).map_err(AppError::internal)?;
    Ok(Html(page))
}

pub async fn get_board(State(state): State<AppState>) -> Result<Json<BoardResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    data.store.roll_over(&today);
    Ok(Json(build_board(&data.store, &today)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let response = apply_create(&state, &payload).await?;
    Ok(Json(response))
}

pub async fn create_habit_form(
    State(state): State<AppState>,
    Form(payload): Form<CreateHabitRequest>,
) -> Result<Redirect, AppError> {
    apply_create(&state, &payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn habit_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, String)>,
    payload: Option<Json<ActionRequest>>,
) -> Result<Json<BoardResponse>, AppError> {
    let confirmed = payload.map(|Json(request)| request.confirm).unwrap_or_default();
    let action = parse_action(&action, confirmed)?;
    let response = apply_action(&state, &id, action).await?;
    Ok(Json(response))
}

pub async fn habit_action_form(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, String)>,
    payload: Option<Form<ActionRequest>>,
) -> Result<Redirect, AppError> {
    let confirmed = payload.map(|Form(request)| request.confirm).unwrap_or_default();
    let action = parse_action(&action, confirmed)?;
    apply_action(&state, &id, action).await?;
    Ok(Redirect::to("/"))
}

async fn apply_create(
    state: &AppState,
    payload: &CreateHabitRequest,
) -> Result<BoardResponse, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    data.store.roll_over(&today);

    let created = data
        .store
        .create(&payload.name, &payload.frequency)
        .map(|habit| (habit.id.clone(), habit.name.clone()));
    if let Some((id, name)) = created {
        info!(%id, %name, "habit created");
        persist(state, &mut data).await?;
    }

    Ok(build_board(&data.store, &today))
}

async fn apply_action(
    state: &AppState,
    id: &str,
    action: HabitAction,
) -> Result<BoardResponse, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    data.store.roll_over(&today);

    if data.store.dispatch(id, action, &today) {
        info!(%id, ?action, "habit updated");
        persist(state, &mut data).await?;
    }

    Ok(build_board(&data.store, &today))
}

async fn persist(state: &AppState, data: &mut AppData) -> Result<(), AppError> {
    let AppData { storage, store } = data;
    store.save(storage)?;
    persist_storage(&state.data_path, storage).await?;
    Ok(())
}

fn parse_action(name: &str, confirmed: bool) -> Result<HabitAction, AppError> {
    match name.trim() {
        "done" => Ok(HabitAction::MarkDone),
        "delete" => Ok(HabitAction::Delete { confirmed }),
        _ => Err(AppError::bad_request("action must be 'done' or 'delete'")),
    }
}
