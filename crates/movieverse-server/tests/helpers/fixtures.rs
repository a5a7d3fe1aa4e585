//! Upstream payloads shaped like real catalog and backend responses

use serde_json::{json, Value};
use uuid::Uuid;

pub fn movie(id: i64, title: &str, poster_path: Option<&str>, vote_average: f64) -> Value {
    json!({
        "adult": false,
        "id": id,
        "title": title,
        "original_title": title,
        "poster_path": poster_path,
        "vote_average": vote_average,
        "vote_count": 1200,
        "release_date": "1999-03-30",
        "overview": format!("{} overview", title),
        "genre_ids": [28, 878]
    })
}

pub fn page(results: Vec<Value>) -> Value {
    json!({
        "page": 1,
        "results": results,
        "total_pages": 500,
        "total_results": 10000
    })
}

/// Even ids have a profile photo, odd ids do not.
pub fn cast_member(id: i64, order: u32) -> Value {
    let profile_path = (id % 2 == 0).then(|| format!("/p{}.jpg", id));
    json!({
        "id": id,
        "name": format!("Actor {}", id),
        "character": format!("Role {}", id),
        "profile_path": profile_path,
        "order": order
    })
}

pub fn movie_details(id: i64, cast: Vec<Value>, videos: Vec<Value>) -> Value {
    json!({
        "id": id,
        "title": "The Matrix",
        "poster_path": "/matrix.jpg",
        "overview": "A hacker learns the truth about his reality.",
        "vote_average": 8.217,
        "release_date": "1999-03-30",
        "runtime": 136,
        "videos": { "results": videos },
        "credits": { "cast": cast, "crew": [] }
    })
}

pub fn video(key: &str, site: &str, kind: &str) -> Value {
    json!({
        "iso_639_1": "en",
        "key": key,
        "name": format!("{} {}", kind, key),
        "site": site,
        "type": kind,
        "official": true
    })
}

pub fn user(id: Uuid, email: &str, name: Option<&str>) -> Value {
    let metadata = match name {
        Some(name) => json!({ "name": name }),
        None => json!({}),
    };
    json!({
        "id": id,
        "aud": "authenticated",
        "role": "authenticated",
        "email": email,
        "user_metadata": metadata,
        "created_at": "2026-10-01T10:00:00Z"
    })
}

pub fn session(access_token: &str, user: Value) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_760_000_000,
        "refresh_token": format!("refresh-{}", access_token),
        "user": user
    })
}

pub fn review_row(
    id: i64,
    movie_id: i64,
    author: Option<&str>,
    rating: Option<i64>,
    created_at: &str,
) -> Value {
    json!({
        "id": id,
        "movie_id": movie_id,
        "user_id": null,
        "author": author,
        "content": format!("Review {}", id),
        "rating": rating,
        "created_at": created_at
    })
}
