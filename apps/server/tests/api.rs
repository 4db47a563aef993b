//! End-to-end API tests over an in-memory database.
//!
//! Each test boots the full router with `axum_test::TestServer` so the
//! assertions cover routing, status codes, JSON shapes, and the error
//! translation layer, not just the service.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use biblio_core::{Author, Book, Loan};
use biblio_db::{Database, DbConfig};
use biblio_server::{create_router, CatalogService};

async fn test_server() -> TestServer {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    TestServer::new(create_router(CatalogService::new(db))).unwrap()
}

/// Creates an author and returns its id.
async fn seed_author(server: &TestServer) -> i64 {
    let res = server
        .post("/authors")
        .json(&json!({ "name": "Isabel Allende", "nationality": "chilean" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    res.json::<Author>().id
}

/// Creates a book for the given author and returns its id.
async fn seed_book(server: &TestServer, author_id: i64, isbn: &str) -> i64 {
    let res = server
        .post("/books")
        .json(&json!({ "title": "la casa de los espíritus", "isbn": isbn, "author_id": author_id }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    res.json::<Book>().id
}

#[tokio::test]
async fn root_returns_banner() {
    let server = test_server().await;

    let res = server.get("/").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert!(res.json::<Value>()["message"].as_str().unwrap().contains("Biblio"));
}

// =============================================================================
// Authors
// =============================================================================

#[tokio::test]
async fn author_create_normalizes_and_lists() {
    let server = test_server().await;

    let res = server
        .post("/authors")
        .json(&json!({ "name": "  jorge luis borges ", "nationality": "ARGENTINE" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let author: Author = res.json();
    assert_eq!(author.name, "Jorge Luis Borges");
    assert_eq!(author.nationality, "Argentine");

    let listed: Vec<Author> = server.get("/authors").await.json();
    assert_eq!(listed, vec![author]);
}

#[tokio::test]
async fn author_create_with_blank_field_is_400() {
    let server = test_server().await;

    let res = server
        .post("/authors")
        .json(&json!({ "name": "   ", "nationality": "Chilean" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = res.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn author_get_and_delete_missing_are_404() {
    let server = test_server().await;

    let res = server.get("/authors/999").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["code"], "NOT_FOUND");

    let res = server.delete("/authors/999").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn author_delete_removes_record() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;

    let res = server.delete(&format!("/authors/{author_id}")).await;
    assert_eq!(res.status_code(), StatusCode::NO_CONTENT);

    let res = server.get(&format!("/authors/{author_id}")).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn author_delete_with_books_is_rejected() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;
    seed_book(&server, author_id, "111").await;

    let res = server.delete(&format!("/authors/{author_id}")).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    // The author survives.
    let res = server.get(&format!("/authors/{author_id}")).await;
    assert_eq!(res.status_code(), StatusCode::OK);
}

// =============================================================================
// Books
// =============================================================================

#[tokio::test]
async fn book_create_applies_transform() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;

    let res = server
        .post("/books")
        .json(&json!({ "title": "  cien años  ", "isbn": "  123  ", "author_id": author_id }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let book: Book = res.json();
    assert_eq!(book.title, "CIEN AÑOS");
    assert_eq!(book.isbn, "ISBN-123");
    assert_eq!(book.author_id, author_id);
    assert!(book.available);
}

#[tokio::test]
async fn book_create_with_unknown_author_is_400_and_persists_nothing() {
    let server = test_server().await;

    let res = server
        .post("/books")
        .json(&json!({ "title": "Orphan", "isbn": "123", "author_id": 999 }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>()["code"], "VALIDATION_ERROR");

    let books: Vec<Book> = server.get("/books").await.json();
    assert!(books.is_empty());
}

#[tokio::test]
async fn book_duplicate_isbn_is_400() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;
    seed_book(&server, author_id, "123").await;

    let res = server
        .post("/books")
        .json(&json!({ "title": "Copycat", "isbn": "123", "author_id": author_id }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn book_availability_endpoint() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;
    let book_id = seed_book(&server, author_id, "123").await;

    let res = server.get(&format!("/books/{book_id}/availability")).await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: Value = res.json();
    assert_eq!(body["book_id"], book_id);
    assert_eq!(body["available"], true);

    let res = server.get("/books/999/availability").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Loans
// =============================================================================

#[tokio::test]
async fn loan_round_trip_flips_availability() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;
    let book_id = seed_book(&server, author_id, "123").await;

    // Create: book becomes unavailable.
    let res = server
        .post("/loans")
        .json(&json!({ "book_id": book_id, "user_name": "ada lovelace" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let loan: Loan = res.json();
    assert_eq!(loan.book_id, book_id);
    assert_eq!(loan.user_name, "Ada Lovelace");
    assert!(!loan.returned);

    let availability: Value = server
        .get(&format!("/books/{book_id}/availability"))
        .await
        .json();
    assert_eq!(availability["available"], false);

    // Delete (return): book becomes available again.
    let res = server.delete(&format!("/loans/{}", loan.id)).await;
    assert_eq!(res.status_code(), StatusCode::NO_CONTENT);

    let availability: Value = server
        .get(&format!("/books/{book_id}/availability"))
        .await
        .json();
    assert_eq!(availability["available"], true);

    // The deleted loan is gone.
    let res = server.get(&format!("/loans/{}", loan.id)).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    let loans: Vec<Loan> = server.get("/loans").await.json();
    assert!(loans.iter().all(|l| l.id != loan.id));
}

#[tokio::test]
async fn loan_against_lent_book_is_400() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;
    let book_id = seed_book(&server, author_id, "123").await;

    let body = json!({ "book_id": book_id, "user_name": "Reader" });

    let res = server.post("/loans").json(&body).await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let res = server.post("/loans").json(&body).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert!(res.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .contains("not available"));
}

#[tokio::test]
async fn loan_against_unknown_book_is_400() {
    let server = test_server().await;

    let res = server
        .post("/loans")
        .json(&json!({ "book_id": 999, "user_name": "Reader" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn loan_delete_missing_is_404() {
    let server = test_server().await;

    let res = server.delete("/loans/999").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_loans_yield_one_success() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;
    let book_id = seed_book(&server, author_id, "123").await;

    let body = json!({ "book_id": book_id, "user_name": "Racer" });

    let (a, b) = tokio::join!(
        server.post("/loans").json(&body),
        server.post("/loans").json(&body),
    );

    let statuses = [a.status_code(), b.status_code()];
    assert!(
        statuses.contains(&StatusCode::CREATED),
        "one request must win"
    );
    assert!(
        statuses.contains(&StatusCode::BAD_REQUEST),
        "one request must lose"
    );
}

#[tokio::test]
async fn book_delete_with_open_loan_is_rejected() {
    let server = test_server().await;
    let author_id = seed_author(&server).await;
    let book_id = seed_book(&server, author_id, "123").await;

    server
        .post("/loans")
        .json(&json!({ "book_id": book_id, "user_name": "Reader" }))
        .await
        .assert_status(StatusCode::CREATED);

    let res = server.delete(&format!("/books/{book_id}")).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Statistics
// =============================================================================

#[tokio::test]
async fn statistics_track_live_loans() {
    let server = test_server().await;

    let empty: Value = server.get("/statistics").await.json();
    assert_eq!(empty, json!({ "total": 0, "returned": 0, "pending": 0 }));

    let author_id = seed_author(&server).await;
    let book_a = seed_book(&server, author_id, "123").await;
    let book_b = seed_book(&server, author_id, "456").await;

    for book_id in [book_a, book_b] {
        server
            .post("/loans")
            .json(&json!({ "book_id": book_id, "user_name": "Reader" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let stats: Value = server.get("/statistics").await.json();
    assert_eq!(stats, json!({ "total": 2, "returned": 0, "pending": 2 }));
}
