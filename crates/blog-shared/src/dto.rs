//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a new author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Public view of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// Request to create a new post for an existing author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: i64,
}

/// Post as returned by list and create endpoints. Never carries comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    /// Post id rendered as text.
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: AuthorResponse,
}

/// Post with its comments, returned by `GET /api/posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

/// Request to add a comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Public view of a comment. No back-reference to the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_request_uses_camel_case() {
        let req: CreateAuthorRequest = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "Lovelace");
    }

    #[test]
    fn post_request_reads_author_id() {
        let req: CreatePostRequest = serde_json::from_value(json!({
            "title": "t",
            "content": "c",
            "excerpt": "e",
            "authorId": 7
        }))
        .unwrap();
        assert_eq!(req.author_id, 7);
    }

    #[test]
    fn detail_flattens_post_fields() {
        let detail = PostDetailResponse {
            post: PostResponse {
                id: "3".to_string(),
                title: "Title".to_string(),
                content: "Body".to_string(),
                excerpt: "Short".to_string(),
                author: AuthorResponse {
                    id: 1,
                    full_name: "Ada Lovelace".to_string(),
                    email: "ada@example.com".to_string(),
                },
            },
            comments: vec![CommentResponse {
                id: 9,
                text: "Nice".to_string(),
            }],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], "3");
        assert_eq!(value["author"]["fullName"], "Ada Lovelace");
        assert_eq!(value["comments"][0]["text"], "Nice");
        assert!(value.get("post").is_none());
    }
}
