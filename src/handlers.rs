use crate::errors::AppError;
use crate::models::{
    AppData, CompletionResponse, HabitListResponse, HabitPayload, HabitRecord, HabitResponse,
    MarkOutcome, UnmarkOutcome,
};
use crate::state::AppState;
use crate::stats::{fourteen_day_overview_at, habit_stats, today};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{NaiveDate, Utc};

pub async fn index() -> Html<String> {
    Html(render_index(&today().to_string()))
}

pub async fn list_habits(
    State(state): State<AppState>,
) -> Result<Json<HabitListResponse>, AppError> {
    let data = state.data.lock().await;
    let today = today();

    let habits = data
        .habits
        .iter()
        .map(|(&id, habit)| habit_response(id, habit, today))
        .collect();
    let overview = fourteen_day_overview_at(today, &data.all_completions());

    Ok(Json(HabitListResponse {
        habits,
        fourteen_day_overview: overview,
    }))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitPayload>,
) -> Result<(StatusCode, Json<HabitResponse>), AppError> {
    let (title, description) = payload.validate().map_err(AppError::validation)?;

    let mut data = state.data.lock().await;
    let id = data.create_habit(title, description, Utc::now());
    persist_data(&state.data_path, &data).await?;

    let habit = find_habit(&data, id)?;
    Ok((
        StatusCode::CREATED,
        Json(habit_response(id, habit, today())),
    ))
}

pub async fn show_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HabitResponse>, AppError> {
    let data = state.data.lock().await;
    let habit = find_habit(&data, id)?;
    Ok(Json(habit_response(id, habit, today())))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<HabitPayload>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.habit(id).is_none() {
        return Err(AppError::not_found("habit not found"));
    }
    let (title, description) = payload.validate().map_err(AppError::validation)?;

    let habit = data
        .habit_mut(id)
        .ok_or_else(|| AppError::not_found("habit not found"))?;
    habit.title = title;
    habit.description = description;
    habit.updated_at = Utc::now();
    persist_data(&state.data_path, &data).await?;

    let habit = find_habit(&data, id)?;
    Ok(Json(habit_response(id, habit, today())))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if !data.delete_habit(id) {
        return Err(AppError::not_found("habit not found"));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn complete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CompletionResponse>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let habit = data
        .habit_mut(id)
        .ok_or_else(|| AppError::not_found("habit not found"))?;

    let outcome = habit.mark_completed(today, Utc::now());
    if outcome == MarkOutcome::Marked {
        persist_data(&state.data_path, &data).await?;
    }

    let habit = find_habit(&data, id)?;
    Ok(Json(CompletionResponse {
        habit: habit_response(id, habit, today),
        outcome: outcome.as_str(),
    }))
}

pub async fn uncomplete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CompletionResponse>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let habit = data
        .habit_mut(id)
        .ok_or_else(|| AppError::not_found("habit not found"))?;

    let outcome = habit.unmark_completed(today);
    if outcome == UnmarkOutcome::Unmarked {
        persist_data(&state.data_path, &data).await?;
    }

    let habit = find_habit(&data, id)?;
    Ok(Json(CompletionResponse {
        habit: habit_response(id, habit, today),
        outcome: outcome.as_str(),
    }))
}

fn find_habit(data: &AppData, id: u64) -> Result<&HabitRecord, AppError> {
    data.habit(id)
        .ok_or_else(|| AppError::not_found("habit not found"))
}

fn habit_response(id: u64, habit: &HabitRecord, today: NaiveDate) -> HabitResponse {
    let stats = habit_stats(habit, today);
    HabitResponse {
        id,
        title: habit.title.clone(),
        description: habit.description.clone(),
        completed_today: stats.completed_today,
        current_streak: stats.current_streak,
        longest_streak: stats.longest_streak,
        total_completions: stats.total_completions,
        created_at: habit.created_at,
        updated_at: habit.updated_at,
    }
}
