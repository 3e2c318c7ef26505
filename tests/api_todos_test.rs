//! Integration tests for the todo API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    use dayplan::views::ViewMode;

    use crate::test_utils::{body_to_json, test_app};

    fn todo_list() -> String {
        json!([
            {"id": 1, "title": "Buy milk", "completed": false},
            {"id": 2, "title": "Stretch", "completed": true}
        ])
        .to_string()
    }

    async fn mock_list(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server
            .mock("GET", "/todos/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(todo_list())
            .create_async()
            .await
    }

    /// Tests listing todos from the backend
    #[tokio::test]
    async fn it_lists_todos() {
        let mut server = mockito::Server::new_async().await;
        let _list = mock_list(&mut server).await;
        let app = test_app(&server.url(), ViewMode::Events, "");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[1]["completed"], true);
    }

    /// Tests adding a todo answers with the fresh list
    #[tokio::test]
    async fn it_adds_a_todo() {
        let mut server = mockito::Server::new_async().await;
        let _list = mock_list(&mut server).await;
        let create = server
            .mock("POST", "/todos/")
            .match_body(mockito::Matcher::Json(json!({"title": "Buy milk"})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 1, "title": "Buy milk", "completed": false}"#)
            .create_async()
            .await;
        let app = test_app(&server.url(), ViewMode::Events, "");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todos")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"title": "Buy milk"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        create.assert_async().await;
    }

    /// Tests a blank title is ignored
    #[tokio::test]
    async fn it_ignores_blank_titles() {
        let mut server = mockito::Server::new_async().await;
        let _list = mock_list(&mut server).await;
        let create = server
            .mock("POST", "/todos/")
            .expect(0)
            .create_async()
            .await;
        let app = test_app(&server.url(), ViewMode::Events, "");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todos")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"title": "   "}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        create.assert_async().await;
    }

    /// Tests toggling flips the completed flag
    #[tokio::test]
    async fn it_toggles_a_todo() {
        let mut server = mockito::Server::new_async().await;
        let _list = mock_list(&mut server).await;
        let update = server
            .mock("PUT", "/todos/2/")
            .match_body(mockito::Matcher::Json(
                json!({"id": 2, "title": "Stretch", "completed": false}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 2, "title": "Stretch", "completed": false}"#)
            .create_async()
            .await;
        let app = test_app(&server.url(), ViewMode::Events, "");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todos/2/toggle")
                    .method("POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        update.assert_async().await;
    }

    /// Tests toggling a todo the backend does not know
    #[tokio::test]
    async fn it_returns_500_for_an_unknown_todo() {
        let mut server = mockito::Server::new_async().await;
        let _list = mock_list(&mut server).await;
        let app = test_app(&server.url(), ViewMode::Events, "");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todos/99/toggle")
                    .method("POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Tests deleting a todo
    #[tokio::test]
    async fn it_deletes_a_todo() {
        let mut server = mockito::Server::new_async().await;
        let _list = mock_list(&mut server).await;
        let delete = server
            .mock("DELETE", "/todos/1/")
            .with_status(204)
            .create_async()
            .await;
        let app = test_app(&server.url(), ViewMode::Events, "");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todos/1")
                    .method("DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        delete.assert_async().await;
    }
}
