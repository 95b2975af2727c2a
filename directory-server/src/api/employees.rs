//! Employee CRUD handlers
//!
//! Each request runs: parse → validate id/shape → business checks →
//! repository call → map outcome to status + JSON.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use shared::error::AppError;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::validation::{parse_employee_id, validate_employee_create, validate_employee_update};

use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

type ApiResult<T> = Result<T, AppError>;

const LIST_FAILED: &str = "Failed to fetch employees";
const GET_FAILED: &str = "Failed to fetch employee";
const CREATE_FAILED: &str = "Failed to create employee";
const UPDATE_FAILED: &str = "Failed to update employee";
const DELETE_FAILED: &str = "Failed to delete employee";

/// Any path that fails to decode or parse is an invalid id
fn parse_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i64> {
    let Path(raw) = path.map_err(|_| AppError::invalid_id())?;
    parse_employee_id(&raw).ok_or_else(AppError::invalid_id)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_request(rejection.body_text()))
}

/// Reject the write when another employee already uses `email`
async fn ensure_email_available(
    state: &AppState,
    email: &str,
    exclude_id: Option<i64>,
) -> ServiceResult<()> {
    if state.employees.count_by_email(email, exclude_id).await? > 0 {
        return Err(AppError::email_taken().into());
    }
    Ok(())
}

pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state
        .employees
        .list()
        .await
        .map_err(|e| ServiceError::from(e).into_app_error(LIST_FAILED))?;
    Ok(Json(employees))
}

pub async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Employee>> {
    let id = parse_id(id)?;
    state
        .employees
        .find_by_id(id)
        .await
        .map_err(|e| ServiceError::from(e).into_app_error(GET_FAILED))?
        .map(Json)
        .ok_or_else(AppError::employee_not_found)
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let data = body(payload)?.normalized();
    let employee = create(&state, data)
        .await
        .map_err(|e| e.into_app_error(CREATE_FAILED))?;
    tracing::info!(employee_id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn create(state: &AppState, data: EmployeeCreate) -> ServiceResult<Employee> {
    let errors = validate_employee_create(&data);
    if !errors.is_empty() {
        return Err(AppError::from(errors).into());
    }
    ensure_email_available(state, &data.email, None).await?;
    Ok(state.employees.create(&data).await?)
}

pub async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let id = parse_id(id)?;
    let data = body(payload)?.normalized();
    let employee = update(&state, id, data)
        .await
        .map_err(|e| e.into_app_error(UPDATE_FAILED))?;
    tracing::info!(employee_id = employee.id, "Employee updated");
    Ok(Json(employee))
}

async fn update(state: &AppState, id: i64, data: EmployeeUpdate) -> ServiceResult<Employee> {
    if data.is_empty() {
        return Err(AppError::empty_update().into());
    }
    let errors = validate_employee_update(&data);
    if !errors.is_empty() {
        return Err(AppError::from(errors).into());
    }
    if let Some(email) = &data.email {
        // A missing record is a 404 even when the email is taken
        if state.employees.find_by_id(id).await?.is_none() {
            return Err(AppError::employee_not_found().into());
        }
        ensure_email_available(state, email, Some(id)).await?;
    }
    state
        .employees
        .update(id, &data)
        .await?
        .ok_or_else(|| AppError::employee_not_found().into())
}

pub async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(id)?;
    let deleted = state
        .employees
        .delete(id)
        .await
        .map_err(|e| ServiceError::from(e).into_app_error(DELETE_FAILED))?;
    if !deleted {
        return Err(AppError::employee_not_found());
    }
    tracing::info!(employee_id = id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
