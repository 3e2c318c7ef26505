//! Client for the todo collection
use anyhow::{Result, bail};

use super::public::{NewTodo, Todo};

pub const TODOS_PATH: &str = "todos/";

#[derive(Clone, Debug)]
pub struct TodoClient {
    http: reqwest::Client,
    collection_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            collection_url: format!("{}/{}", base_url.trim_end_matches('/'), TODOS_PATH),
        }
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}/", self.collection_url, id)
    }

    pub async fn list(&self) -> Result<Vec<Todo>> {
        let todos = self
            .http
            .get(&self.collection_url)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(todos)
    }

    pub async fn create(&self, title: &str) -> Result<Todo> {
        let title = title.trim();
        if title.is_empty() {
            bail!("Todo title must not be empty");
        }
        let todo = self
            .http
            .post(&self.collection_url)
            .json(&NewTodo { title })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(todo)
    }

    pub async fn update(&self, todo: &Todo) -> Result<Todo> {
        let updated = self
            .http
            .put(self.item_url(todo.id))
            .json(todo)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(updated)
    }

    /// Flip the completed flag of `todo`.
    pub async fn toggle(&self, todo: &Todo) -> Result<Todo> {
        let toggled = Todo {
            completed: !todo.completed,
            ..todo.clone()
        };
        self.update(&toggled).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.http
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Look a todo up by id from a fresh listing.
    pub async fn find(&self, id: i64) -> Result<Todo> {
        match self.list().await?.into_iter().find(|t| t.id == id) {
            Some(todo) => Ok(todo),
            None => bail!("No todo with id {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[tokio::test]
    async fn it_lists_todos() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/todos/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"id": 1, "title": "Buy milk", "completed": false},
                    {"id": 2, "title": "Call mom", "completed": true}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let client = TodoClient::new(&server.url());
        let todos = client.list().await?;
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].title, "Call mom");
        assert!(todos[1].completed);
        Ok(())
    }

    #[tokio::test]
    async fn it_creates_a_todo_with_a_trimmed_title() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/todos/")
            .match_body(mockito::Matcher::Json(json!({"title": "Water plants"})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 7, "title": "Water plants", "completed": false}"#)
            .create_async()
            .await;

        let client = TodoClient::new(&server.url());
        let todo = client.create("  Water plants ").await?;
        assert_eq!(todo.id, 7);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn it_refuses_blank_titles_without_calling_the_backend() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/todos/").expect(0).create_async().await;

        let client = TodoClient::new(&server.url());
        assert!(client.create("   ").await.is_err());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_toggles_a_todo() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/todos/3/")
            .match_body(mockito::Matcher::Json(
                json!({"id": 3, "title": "Stretch", "completed": true}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 3, "title": "Stretch", "completed": true}"#)
            .create_async()
            .await;

        let client = TodoClient::new(&server.url());
        let todo = Todo {
            id: 3,
            title: "Stretch".to_string(),
            completed: false,
        };
        let toggled = client.toggle(&todo).await?;
        assert!(toggled.completed);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn it_deletes_a_todo() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/todos/3/")
            .with_status(204)
            .create_async()
            .await;

        let client = TodoClient::new(&server.url());
        client.delete(3).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn it_reports_a_missing_todo() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/todos/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = TodoClient::new(&server.url());
        assert!(client.find(42).await.is_err());
    }
}
