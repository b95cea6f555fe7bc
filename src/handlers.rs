use crate::errors::AppError;
use crate::loader::spawn_load;
use crate::models::{
    AddHabitForm, AddHabitRequest, Frequency, HabitsResponse, IndexQuery, StatsResponse,
    SuggestionsQuery, ToggleRequest,
};
use crate::seed::suggestions;
use crate::state::AppState;
use crate::stats::{build_stats_at, snapshot_at, today};
use crate::ui::{render_index, FormView};
use crate::validation::validate_name;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let form = FormView {
        notice: query.added.is_some(),
        ..FormView::default()
    };
    Html(render_page(&state, &form).await)
}

pub async fn submit_habit(State(state): State<AppState>, Form(form): Form<AddHabitForm>) -> Response {
    let name = match validate_name(&form.name).map(str::to_string) {
        Ok(name) => name,
        Err(err) => {
            warn!("rejected habit name: {err}");
            let view = FormView {
                name: form.name,
                frequency: form.frequency,
                error: Some(err.to_string()),
                notice: false,
            };
            let page = render_page(&state, &view).await;
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
        }
    };

    tokio::time::sleep(state.config.submit_delay).await;
    add_habit(&state, name, form.frequency).await;
    Redirect::to("/?added=1").into_response()
}

pub async fn toggle_today(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.store.lock().await.toggle(&id, today());
    Redirect::to("/")
}

pub async fn delete_habit(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    remove_habit(&state, &id).await;
    Redirect::to("/")
}

pub async fn get_habits(State(state): State<AppState>) -> Json<HabitsResponse> {
    let store = state.store.lock().await;
    Json(snapshot_at(today(), &store))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<HabitsResponse>, AppError> {
    let name = validate_name(&payload.name)?.to_string();
    add_habit(&state, name, payload.frequency).await;

    let store = state.store.lock().await;
    Ok(Json(snapshot_at(today(), &store)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Json<HabitsResponse> {
    let today = today();
    let date = payload.date.unwrap_or(today);

    let mut store = state.store.lock().await;
    if store.toggle(&id, date).is_none() {
        info!(%id, "toggle ignored for unknown habit");
    }
    Json(snapshot_at(today, &store))
}

pub async fn remove_habit_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<HabitsResponse> {
    remove_habit(&state, &id).await;
    let store = state.store.lock().await;
    Json(snapshot_at(today(), &store))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    Json(build_stats_at(today(), store.habits()))
}

pub async fn reload(State(state): State<AppState>) -> StatusCode {
    spawn_load(&state);
    StatusCode::ACCEPTED
}

pub async fn get_suggestions(Query(query): Query<SuggestionsQuery>) -> Json<&'static [&'static str]> {
    Json(suggestions(query.frequency))
}

async fn add_habit(state: &AppState, name: String, frequency: Frequency) {
    let mut store = state.store.lock().await;
    let habit = store.add(name, frequency);
    info!(id = %habit.id, name = %habit.name, %frequency, "habit added");
}

async fn remove_habit(state: &AppState, id: &str) {
    if let Some(habit) = state.store.lock().await.remove(id) {
        info!(id = %habit.id, name = %habit.name, "habit removed");
    }
}

async fn render_page(state: &AppState, form: &FormView) -> String {
    let today = today();
    let store = state.store.lock().await;
    let snapshot = snapshot_at(today, &store);
    let stats = build_stats_at(today, store.habits());
    drop(store);

    render_index(today, &snapshot, &stats, form, state.config.notice_duration)
}
