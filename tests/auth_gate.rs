//! Integration tests for the hardcoded-credential login gate.

mod common;

use common::setup_db;
use ssp_admin_lib::auth;

#[tokio::test]
async fn wrong_credentials_are_rejected_without_error() {
    let db = setup_db().await;

    assert!(!auth::login(&db, "iaoht.dev", "wrong", false).await.expect("login call"));
    assert!(!auth::login(&db, "someone", "123123", false).await.expect("login call"));
    assert!(
        auth::remembered_user(&db)
            .await
            .expect("remembered lookup")
            .is_none()
    );
}

#[tokio::test]
async fn remember_me_persists_the_username() {
    let db = setup_db().await;

    assert!(auth::login(&db, "iaoht.dev", "123123", true).await.expect("login"));
    assert_eq!(
        auth::remembered_user(&db).await.expect("remembered lookup"),
        Some("iaoht.dev".to_string())
    );

    auth::logout(&db).await.expect("logout");
    assert!(
        auth::remembered_user(&db)
            .await
            .expect("remembered lookup")
            .is_none()
    );
}

#[tokio::test]
async fn login_without_remember_clears_previous_flag() {
    let db = setup_db().await;

    assert!(auth::login(&db, "iaoht.dev", "123123", true).await.expect("login"));
    assert!(auth::login(&db, "iaoht.dev", "123123", false).await.expect("second login"));
    assert!(
        auth::remembered_user(&db)
            .await
            .expect("remembered lookup")
            .is_none()
    );
}
