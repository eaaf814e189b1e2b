//! Todo Operations
//!
//! One async function per GraphQL operation, typed results.

use serde::Deserialize;
use serde_json::json;

use super::{post, ApiError};
use crate::models::{Todo, TodoInput};

const LIST_TODOS_QUERY: &str = "
query todos {
  todos {
    data {
      _id
      _ts
      body
      done
    }
  }
}
";

const CREATE_TODO_MUTATION: &str = "
mutation createTodo($data: TodoInput!) {
  createTodo(data: $data) {
    _id
    _ts
    body
    done
  }
}
";

const UPDATE_TODO_MUTATION: &str = "
mutation updateTodo($id: ID!, $data: TodoInput!) {
  updateTodo(id: $id, data: $data) {
    _id
    _ts
    body
    done
  }
}
";

const DELETE_TODO_MUTATION: &str = "
mutation deleteTodo($id: ID!) {
  deleteTodo(id: $id) {
    _id
  }
}
";

#[derive(Debug, Deserialize)]
struct TodosData {
    todos: TodoPage,
}

#[derive(Debug, Deserialize)]
struct TodoPage {
    data: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct CreateTodoData {
    #[serde(rename = "createTodo")]
    create_todo: Todo,
}

#[derive(Debug, Deserialize)]
struct UpdateTodoData {
    #[serde(rename = "updateTodo")]
    update_todo: Todo,
}

#[derive(Debug, Deserialize)]
struct DeleteTodoData {
    #[serde(rename = "deleteTodo")]
    delete_todo: DeletedTodo,
}

/// The delete mutation only returns the id of the removed record.
#[derive(Debug, Deserialize)]
pub struct DeletedTodo {
    #[serde(rename = "_id")]
    pub id: String,
}

pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    let data: TodosData = post(LIST_TODOS_QUERY, json!({})).await?;
    Ok(data.todos.data)
}

pub async fn create_todo(input: &TodoInput) -> Result<Todo, ApiError> {
    let data: CreateTodoData = post(CREATE_TODO_MUTATION, json!({ "data": input })).await?;
    Ok(data.create_todo)
}

pub async fn update_todo(id: &str, input: &TodoInput) -> Result<Todo, ApiError> {
    let data: UpdateTodoData =
        post(UPDATE_TODO_MUTATION, json!({ "id": id, "data": input })).await?;
    Ok(data.update_todo)
}

pub async fn delete_todo(id: &str) -> Result<DeletedTodo, ApiError> {
    let data: DeleteTodoData = post(DELETE_TODO_MUTATION, json!({ "id": id })).await?;
    Ok(data.delete_todo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_response_unwraps_the_page_wrapper() {
        let data: TodosData = serde_json::from_value(json!({
            "todos": {
                "data": [
                    { "_id": "1", "_ts": 10, "body": "buy milk", "done": false },
                    { "_id": "2", "_ts": 11, "body": "water plants", "done": true },
                ],
            },
        }))
        .unwrap();
        assert_eq!(data.todos.data.len(), 2);
        assert_eq!(data.todos.data[0].id, "1");
        assert!(data.todos.data[1].done);
    }

    #[test]
    fn delete_response_carries_only_the_id() {
        let data: DeleteTodoData =
            serde_json::from_value(json!({ "deleteTodo": { "_id": "1" } })).unwrap();
        assert_eq!(data.delete_todo.id, "1");
    }
}
