//! Blog CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{BlogPatch, BlogPost};
use quill_shared::MessageResponse;
use quill_shared::dto::{BlogResponse, CreateBlogRequest, UpdateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogResponse {
    BlogResponse {
        id: post.id.to_string(),
        title: post.title,
        body: post.body,
        author: post.author,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input - missing and empty are both rejected
    let (title, body) = match (
        req.title.filter(|t| !t.is_empty()),
        req.body.filter(|b| !b.is_empty()),
    ) {
        (Some(title), Some(body)) => (title, body),
        _ => {
            return Err(AppError::BadRequest(
                "Title and body are required".to_string(),
            ));
        }
    };

    let post = BlogPost::new(title, body, req.author);
    let saved = state
        .blogs
        .create(post)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// GET /blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .blogs
        .find_all()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let records: Vec<BlogResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(records))
}

/// GET /blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path.into_inner()).map_err(|_| AppError::InvalidId)?;

    // store failures collapse into the same 400 as a malformed id
    let post = state
        .blogs
        .find_by_id(id)
        .await
        .map_err(|_| AppError::InvalidId)?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let id =
        Uuid::parse_str(&path.into_inner()).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let patch = BlogPatch {
        title: req.title,
        body: req.body,
        author: req.author,
    };

    // validation and store failures both surface as 400 with the raw detail
    let updated = state
        .blogs
        .update_by_id(id, patch)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(to_response(updated)))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path.into_inner()).map_err(|_| AppError::InvalidId)?;

    state
        .blogs
        .delete_by_id(id)
        .await
        .map_err(|_| AppError::InvalidId)?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted successfully")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;

    use quill_core::domain::BlogPost;
    use quill_core::ports::BlogRepository;
    use quill_infra::InMemoryBlogRepository;
    use quill_shared::MessageResponse;
    use quill_shared::dto::BlogResponse;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            blogs: Arc::new(InMemoryBlogRepository::new()),
        }
    }

    /// Seed a post directly through the repository handle.
    async fn seed_post(state: &AppState, title: &str, body: &str, author: Option<&str>) -> BlogPost {
        let post = BlogPost::new(
            title.to_string(),
            body.to_string(),
            author.map(str::to_string),
        );
        state.blogs.create(post).await.unwrap()
    }

    #[actix_web::test]
    async fn create_with_title_and_body_returns_201() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({"title": "Hi", "body": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: BlogResponse = test::read_body_json(resp).await;
        assert!(!created.id.is_empty());
        assert_eq!(created.title, "Hi");
        assert_eq!(created.body, "World");
        assert_eq!(created.author, None);
    }

    #[actix_web::test]
    async fn create_missing_or_empty_fields_returns_400() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        for body in [
            json!({"body": "World"}),
            json!({"title": "Hi"}),
            json!({}),
            json!({"title": "", "body": "World"}),
            json!({"title": "Hi", "body": ""}),
        ] {
            let req = test::TestRequest::post()
                .uri("/blogs")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let err: MessageResponse = test::read_body_json(resp).await;
            assert_eq!(err.message, "Title and body are required");
        }

        // nothing was persisted
        assert!(state.blogs.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn list_returns_every_created_record() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let mut ids = Vec::new();
        for i in 0..3 {
            let post = seed_post(&state, &format!("Post {i}"), "Body", None).await;
            ids.push(post.id);
        }

        let req = test::TestRequest::get().uri("/blogs").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let records: Vec<BlogResponse> = test::read_body_json(resp).await;
        assert_eq!(records.len(), 3);

        // every listed record round-trips by id
        for id in ids {
            let req = test::TestRequest::get()
                .uri(&format!("/blogs/{id}"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[actix_web::test]
    async fn get_unknown_id_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/blogs/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let err: MessageResponse = test::read_body_json(resp).await;
        assert_eq!(err.message, "Blog not found");
    }

    #[actix_web::test]
    async fn get_malformed_id_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/blogs/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let err: MessageResponse = test::read_body_json(resp).await;
        assert_eq!(err.message, "Invalid ID");
    }

    #[actix_web::test]
    async fn update_title_only_preserves_other_fields() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let post = seed_post(&state, "Original", "Body", Some("alice")).await;

        let req = test::TestRequest::put()
            .uri(&format!("/blogs/{}", post.id))
            .set_json(json!({"title": "Renamed"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: BlogResponse = test::read_body_json(resp).await;
        assert_eq!(updated.id, post.id.to_string());
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.body, "Body");
        assert_eq!(updated.author.as_deref(), Some("alice"));
    }

    #[actix_web::test]
    async fn update_with_empty_required_field_returns_400() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let post = seed_post(&state, "Hi", "World", None).await;

        let req = test::TestRequest::put()
            .uri(&format!("/blogs/{}", post.id))
            .set_json(json!({"title": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let err: MessageResponse = test::read_body_json(resp).await;
        assert!(err.message.contains("title"));
    }

    #[actix_web::test]
    async fn update_unknown_id_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/blogs/{}", uuid::Uuid::new_v4()))
            .set_json(json!({"title": "Renamed"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let err: MessageResponse = test::read_body_json(resp).await;
        assert_eq!(err.message, "Blog not found");
    }

    #[actix_web::test]
    async fn delete_then_get_returns_404() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let post = seed_post(&state, "Hi", "World", None).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/blogs/{}", post.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let confirmation: MessageResponse = test::read_body_json(resp).await;
        assert_eq!(confirmation.message, "Blog deleted successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/blogs/{}", post.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_unknown_or_malformed_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/blogs/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let err: MessageResponse = test::read_body_json(resp).await;
        assert_eq!(err.message, "Blog not found");

        let req = test::TestRequest::delete()
            .uri("/blogs/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let err: MessageResponse = test::read_body_json(resp).await;
        assert_eq!(err.message, "Invalid ID");
    }
}
