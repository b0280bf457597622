use actix_web::{web, HttpResponse};

use super::dto::{self, TaskResponse};
use crate::error::AppError;
use crate::extractors::{FilterQuery, JsonBody, RequestContext, TaskId};
use crate::http::envelope;
use crate::services::tasks::{self, NewTaskInput, StatusInput, TaskUpdateInput};
use crate::state::app_state::AppState;

async fn create_task(
    ctx: RequestContext,
    body: JsonBody<NewTaskInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let task = tasks::create_task(&app_state, ctx.subject_id, body.into_inner()).await?;
    Ok(envelope::created("Task created", TaskResponse::from(task)))
}

/// `GET /tasks?status=&priority=&dueDate=&fromDate=&toDate=&beforeDate=&afterDate=`
async fn list_tasks(
    ctx: RequestContext,
    query: FilterQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tasks = tasks::list_tasks(&app_state, ctx.subject_id, &query.0).await?;
    Ok(envelope::ok(
        "Tasks retrieved",
        dto::all::<_, TaskResponse>(tasks),
    ))
}

async fn get_task(
    ctx: RequestContext,
    task_id: TaskId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let task = tasks::get_task(&app_state, ctx.subject_id, task_id.0).await?;
    Ok(envelope::ok(
        "Task retrieved successfully",
        TaskResponse::from(task),
    ))
}

async fn update_task(
    ctx: RequestContext,
    task_id: TaskId,
    body: JsonBody<TaskUpdateInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let task =
        tasks::update_task(&app_state, ctx.subject_id, task_id.0, body.into_inner()).await?;
    Ok(envelope::ok("Task updated successfully", TaskResponse::from(task)))
}

async fn delete_task(
    ctx: RequestContext,
    task_id: TaskId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    tasks::delete_task(&app_state, ctx.subject_id, task_id.0).await?;
    Ok(envelope::message("Task deleted successfully"))
}

async fn change_status(
    ctx: RequestContext,
    task_id: TaskId,
    body: JsonBody<StatusInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let task =
        tasks::change_status(&app_state, ctx.subject_id, task_id.0, body.into_inner()).await?;
    Ok(envelope::ok(
        "Task status updated successfully",
        TaskResponse::from(task),
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tasks")
            .route(web::post().to(create_task))
            .route(web::get().to(list_tasks)),
    )
    .service(
        web::resource("/tasks/{taskId}")
            .route(web::get().to(get_task))
            .route(web::put().to(update_task))
            .route(web::delete().to(delete_task)),
    )
    .service(web::resource("/tasks/{taskId}/status").route(web::patch().to(change_status)));
}
