//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Flag Submission Tests
// ============================================================================

#[tokio::test]
async fn test_create_flag() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let flagger = seed_profile(&pool, "member", 5, false).await.unwrap();
    let question = seed_question(&pool, author).await.unwrap();

    let token = server.token_for(flagger).unwrap();
    let request = FlagRequest::new(question, "question", "spam");

    let response = server.post_auth("/api/v1/flags", &token, &request).await.unwrap();
    let flag: FlagBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(flag.flagger_id, flagger.to_string());
    assert_eq!(flag.resource_id, question.to_string());
    assert_eq!(flag.resource_type, "question");
    assert_eq!(flag.status, "pending");

    // Single flag from a low-level member does not escalate
    assert_eq!(question_status(&pool, question).await.unwrap(), "published");
}

#[tokio::test]
async fn test_create_flag_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = FlagRequest::new(Uuid::new_v4(), "question", "spam");

    let response = server.post("/api/v1/flags", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_flag_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let flagger = seed_profile(&pool, "member", 5, false).await.unwrap();
    let question = seed_question(&pool, author).await.unwrap();

    let token = server.token_for(flagger).unwrap();
    let request = FlagRequest::new(question, "question", "spam");

    let response = server.post_auth("/api/v1/flags", &token, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth("/api/v1/flags", &token, &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_flag_unknown_resource_type() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let flagger = seed_profile(&pool, "member", 5, false).await.unwrap();
    let token = server.token_for(flagger).unwrap();
    let request = FlagRequest::new(Uuid::new_v4(), "job_listing", "spam");

    let response = server.post_auth("/api/v1/flags", &token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_flag_missing_content() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let flagger = seed_profile(&pool, "member", 5, false).await.unwrap();
    let token = server.token_for(flagger).unwrap();
    let request = FlagRequest::new(Uuid::new_v4(), "chat", "spam");

    let response = server.post_auth("/api/v1/flags", &token, &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_trusted_flagger_escalates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let trusted = seed_profile(&pool, "member", 20, false).await.unwrap();
    let question = seed_question(&pool, author).await.unwrap();

    let token = server.token_for(trusted).unwrap();
    let request = FlagRequest::new(question, "question", "abuse");

    let response = server.post_auth("/api/v1/flags", &token, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(question_status(&pool, question).await.unwrap(), "under_review");
}

#[tokio::test]
async fn test_third_flag_escalates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let question = seed_question(&pool, author).await.unwrap();

    for i in 0..3 {
        let flagger = seed_profile(&pool, "member", 2, false).await.unwrap();
        let token = server.token_for(flagger).unwrap();
        let request = FlagRequest::new(question, "question", "spam");

        let response = server.post_auth("/api/v1/flags", &token, &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();

        let expected = if i < 2 { "published" } else { "under_review" };
        assert_eq!(question_status(&pool, question).await.unwrap(), expected);
    }
}

// ============================================================================
// Moderation Queue Tests
// ============================================================================

#[tokio::test]
async fn test_pending_flags_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let member = seed_profile(&pool, "member", 5, false).await.unwrap();
    let token = server.token_for(member).unwrap();

    let response = server.get_auth("/api/v1/moderation/flags", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_pending_flags_without_profile_forbidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Valid token, but no profile row backs the subject
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let response = server.get_auth("/api/v1/moderation/flags", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_pending_flags_lists_submissions() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let admin = seed_profile(&pool, "admin", 50, false).await.unwrap();
    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let flagger = seed_profile(&pool, "member", 5, false).await.unwrap();
    let message = seed_chat_message(&pool, author).await.unwrap();

    let flagger_token = server.token_for(flagger).unwrap();
    let request = FlagRequest::new(message, "chat", "harassment");
    let response = server.post_auth("/api/v1/flags", &flagger_token, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let admin_token = server.token_for(admin).unwrap();
    let response = server
        .get_auth("/api/v1/moderation/flags?limit=100", &admin_token)
        .await
        .unwrap();
    let queue: PendingFlagsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(queue
        .flags
        .iter()
        .any(|f| f.resource_id == message.to_string() && f.status == "pending"));
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[tokio::test]
async fn test_resolve_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let member = seed_profile(&pool, "member", 5, false).await.unwrap();
    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let question = seed_question(&pool, author).await.unwrap();

    let token = server.token_for(member).unwrap();
    let request = ResolveRequest::new(question, "question", "delete");

    let response = server
        .post_auth("/api/v1/moderation/resolutions", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Content untouched
    assert_eq!(question_status(&pool, question).await.unwrap(), "published");
}

#[tokio::test]
async fn test_resolve_keep_restores_published() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let admin = seed_profile(&pool, "admin", 50, false).await.unwrap();
    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let trusted = seed_profile(&pool, "member", 30, false).await.unwrap();
    let question = seed_question(&pool, author).await.unwrap();

    // Trusted flag puts the question under review
    let flagger_token = server.token_for(trusted).unwrap();
    let flag_req = FlagRequest::new(question, "question", "looks off");
    server.post_auth("/api/v1/flags", &flagger_token, &flag_req).await.unwrap();
    assert_eq!(question_status(&pool, question).await.unwrap(), "under_review");

    let admin_token = server.token_for(admin).unwrap();
    let request = ResolveRequest::new(question, "question", "keep");
    let response = server
        .post_auth("/api/v1/moderation/resolutions", &admin_token, &request)
        .await
        .unwrap();
    let body: ResolutionBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.action, "keep");
    assert_eq!(body.moderation_status, "published");
    assert_eq!(body.resolved_flags, 1);
    assert_eq!(question_status(&pool, question).await.unwrap(), "published");
}

#[tokio::test]
async fn test_resolve_ban_deletes_and_bans_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let admin = seed_profile(&pool, "admin", 50, false).await.unwrap();
    let author = seed_profile(&pool, "member", 1, false).await.unwrap();
    let flagger = seed_profile(&pool, "member", 5, false).await.unwrap();
    let question = seed_question(&pool, author).await.unwrap();

    let flagger_token = server.token_for(flagger).unwrap();
    let flag_req = FlagRequest::new(question, "question", "abuse");
    server.post_auth("/api/v1/flags", &flagger_token, &flag_req).await.unwrap();

    let admin_token = server.token_for(admin).unwrap();
    let request = ResolveRequest::new(question, "question", "ban");
    let response = server
        .post_auth("/api/v1/moderation/resolutions", &admin_token, &request)
        .await
        .unwrap();
    let body: ResolutionBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.moderation_status, "deleted");
    assert_eq!(question_status(&pool, question).await.unwrap(), "deleted");
    assert!(profile_banned(&pool, author).await.unwrap());
}

#[tokio::test]
async fn test_resolve_missing_content() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();

    let admin = seed_profile(&pool, "admin", 50, false).await.unwrap();
    let token = server.token_for(admin).unwrap();
    let request = ResolveRequest::new(Uuid::new_v4(), "chat", "keep");

    let response = server
        .post_auth("/api/v1/moderation/resolutions", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
