use anyhow::Result;
use clap::Subcommand;

use crate::backend::{Todo, TodoClient};
use crate::core::AppConfig;

#[derive(Subcommand)]
pub enum TodoCommand {
    /// List all todos
    List,
    /// Add a todo
    Add { title: Vec<String> },
    /// Mark a todo done, or not done
    Toggle { id: i64 },
    /// Delete a todo
    Rm { id: i64 },
}

pub fn render_todos(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "Nothing to do".to_string();
    }
    todos
        .iter()
        .map(|t| {
            let mark = if t.completed { "x" } else { " " };
            format!("[{}] {:>3} {}", mark, t.id, t.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn run(config: &AppConfig, command: TodoCommand) -> Result<()> {
    let client = TodoClient::new(&config.api_base_url);

    match command {
        TodoCommand::List => {}
        TodoCommand::Add { title } => {
            let title = title.join(" ");
            if title.trim().is_empty() {
                tracing::warn!("Not adding a todo without a title");
            } else {
                client.create(&title).await?;
            }
        }
        TodoCommand::Toggle { id } => {
            let todo = client.find(id).await?;
            client.toggle(&todo).await?;
        }
        TodoCommand::Rm { id } => {
            client.delete(id).await?;
        }
    }

    // Always show the list as the backend has it now
    println!("{}", render_todos(&client.list().await?));
    Ok(())
}
