use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::dto::{self, CategoryResponse, LinkResponse};
use crate::error::AppError;
use crate::extractors::{CategoryId, JsonBody, LinkId, RequestContext, TaskId};
use crate::http::envelope;
use crate::services::task_categories::{self as links, LinkInput};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskOverview {
    task_title: String,
    categories: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskCategories {
    task_id: i64,
    task_name: String,
    categories: Vec<CategoryResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryTask {
    task_id: i64,
    title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryTasks {
    category_id: i64,
    tasks: Vec<CategoryTask>,
}

async fn overview(
    ctx: RequestContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = links::overview(&app_state, ctx.subject_id).await?;
    let data: Vec<TaskOverview> = rows
        .into_iter()
        .map(|(task, categories)| TaskOverview {
            task_title: task.title,
            categories: categories.into_iter().map(|c| c.name).collect(),
        })
        .collect();
    Ok(envelope::ok("request success", data))
}

async fn link(
    ctx: RequestContext,
    body: JsonBody<LinkInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let link = links::link(&app_state, ctx.subject_id, body.into_inner()).await?;
    Ok(envelope::created(
        "TaskCategory created successfully",
        LinkResponse::from(link),
    ))
}

async fn relink(
    ctx: RequestContext,
    link_id: LinkId,
    body: JsonBody<LinkInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let link = links::relink(&app_state, ctx.subject_id, link_id.0, body.into_inner()).await?;
    Ok(envelope::ok(
        "TaskCategory updated successfully",
        LinkResponse::from(link),
    ))
}

async fn unlink(
    ctx: RequestContext,
    link_id: LinkId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    links::unlink(&app_state, ctx.subject_id, link_id.0).await?;
    Ok(envelope::message("TaskCategory deleted successfully"))
}

async fn categories_of_task(
    ctx: RequestContext,
    task_id: TaskId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (task, categories) = links::categories_of_task(&app_state, ctx.subject_id, task_id.0).await?;
    Ok(envelope::ok(
        "Categories retrieved successfully",
        TaskCategories {
            task_id: task.id,
            task_name: task.title,
            categories: dto::all(categories),
        },
    ))
}

async fn tasks_of_category(
    ctx: RequestContext,
    category_id: CategoryId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tasks = links::tasks_of_category(&app_state, ctx.subject_id, category_id.0).await?;
    Ok(envelope::ok(
        "Tasks retrieved successfully",
        CategoryTasks {
            category_id: category_id.0,
            tasks: tasks
                .into_iter()
                .map(|t| CategoryTask {
                    task_id: t.id,
                    title: t.title,
                })
                .collect(),
        },
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/task-categories")
            .route(web::get().to(overview))
            .route(web::post().to(link)),
    )
    .service(
        web::resource("/task-categories/{id}")
            .route(web::put().to(relink))
            .route(web::delete().to(unlink)),
    )
    .service(web::resource("/{taskId}/categories").route(web::get().to(categories_of_task)))
    .service(web::resource("/{categoryId}/tasks").route(web::get().to(tasks_of_category)));
}
