//! Browser pages: the exercise table and the create/edit forms.
//!
//! Pages are rendered server-side; their scripts talk to the JSON API in
//! [`super::exercises`] rather than posting forms back here.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::models::Exercise;
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct PagesState {
    pub exercise_repo: ExerciseRepository,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    exercises: Vec<Exercise>,
}

#[derive(Template)]
#[template(path = "exercise_form.html")]
struct ExerciseFormTemplate {
    heading: &'static str,
    submit_label: &'static str,
    method: &'static str,
    action: String,
    success_status: u16,
    success_message: &'static str,
    failure_message: &'static str,
    name: String,
    reps: String,
    weight: String,
    unit: String,
    date: String,
}

fn render(template: impl Template) -> Result<Response> {
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn home(State(state): State<PagesState>) -> Result<Response> {
    let exercises = state.exercise_repo.find_all().await?;
    render(HomeTemplate { exercises })
}

pub async fn create_page() -> Result<Response> {
    render(ExerciseFormTemplate {
        heading: "Create Exercise",
        submit_label: "Add",
        method: "POST",
        action: "/exercises".to_string(),
        success_status: 201,
        success_message: "New exercise added!",
        failure_message: "Exercise not added.",
        name: String::new(),
        reps: String::new(),
        weight: String::new(),
        unit: String::new(),
        date: String::new(),
    })
}

pub async fn edit_page(
    State(state): State<PagesState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let exercise = state
        .exercise_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("exercise {id}")))?;

    render(ExerciseFormTemplate {
        heading: "Edit Exercise",
        submit_label: "Save",
        method: "PUT",
        action: format!("/exercises/{}", exercise.id),
        success_status: 200,
        success_message: "Exercise updated!",
        failure_message: "Exercise not updated.",
        name: exercise.name,
        reps: exercise.reps.to_string(),
        weight: exercise.weight.to_string(),
        unit: exercise.unit.to_string(),
        date: exercise.date,
    })
}
