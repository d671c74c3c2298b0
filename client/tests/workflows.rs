//! Workflow behaviour of the client against a mocked gateway

mod common;

use client::{ActiveView, ClientError, EligibilityResult, UploadStage, UploadStatus};
use common::{ClientBuilder, TestFixtures};
use shared::{EntityCategory, StatsResponse};

#[tokio::test]
async fn test_upload_without_selection_makes_no_call() {
    // No expectations: any gateway call panics
    let client = ClientBuilder::new().build();

    let err = client.submit_upload().await.unwrap_err();

    assert!(err.is_missing_input());
    assert_eq!(err.to_string(), "Please select a file");
    assert_eq!(client.upload_status(), UploadStatus::Idle);
}

#[tokio::test]
async fn test_upload_then_process_success() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_upload_file()
                .withf(|selection| selection.file_name == "airlines.csv")
                .times(1)
                .returning(|_| Ok(TestFixtures::receipt()));
            gateway
                .expect_process_file()
                .withf(|path: &str| path == TestFixtures::STORED_PATH)
                .times(1)
                .returning(|_| Ok(TestFixtures::report(42, 3)));
        })
        .build();

    client.select_file(TestFixtures::airlines_selection()).await;
    let status = client.submit_upload().await.unwrap();

    let expected = UploadStatus::Succeeded { clean_rows: 42, dirty_rows: 3 };
    assert_eq!(status, expected);
    assert_eq!(client.upload_status(), expected);
    assert_eq!(
        client.upload_status().to_string(),
        "✅ Success! 42 clean rows processed, 3 moved to DirtyData"
    );
}

#[tokio::test]
async fn test_intake_failure_skips_processing() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_upload_file()
                .times(1)
                .returning(|_| Err(TestFixtures::server_error("/upload")));
            gateway.expect_process_file().times(0);
        })
        .build();

    client.select_file(TestFixtures::airlines_selection()).await;
    let status = client.submit_upload().await.unwrap();

    assert_eq!(status.failed_stage(), Some(UploadStage::Upload));
    assert_eq!(status.to_string(), "❌ Upload failed");
    assert_eq!(client.upload_status(), status);
}

#[tokio::test]
async fn test_processing_failure_is_reported_for_process_stage() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_upload_file()
                .times(1)
                .returning(|_| Ok(TestFixtures::receipt()));
            gateway
                .expect_process_file()
                .times(1)
                .returning(|_| Err(TestFixtures::server_error("/process")));
        })
        .build();

    client.select_file(TestFixtures::airlines_selection()).await;
    let status = client.submit_upload().await.unwrap();

    assert_eq!(status.failed_stage(), Some(UploadStage::Process));
    assert_eq!(status.to_string(), "❌ Processing failed");
}

#[tokio::test]
async fn test_upload_status_is_observable() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_upload_file()
                .returning(|_| Ok(TestFixtures::receipt()));
            gateway
                .expect_process_file()
                .returning(|_| Ok(TestFixtures::report(7, 0)));
        })
        .build();

    let mut updates = client.subscribe_upload();
    client.select_file(TestFixtures::airlines_selection()).await;
    client.submit_upload().await.unwrap();

    assert!(updates.has_changed().unwrap());
    assert_eq!(
        *updates.borrow_and_update(),
        UploadStatus::Succeeded { clean_rows: 7, dirty_rows: 0 }
    );
}

#[tokio::test]
async fn test_incomplete_form_makes_no_call() {
    let client = ClientBuilder::new().build();

    client
        .edit_form(|form| {
            form.set_name("Jane Doe");
            form.set_flight_id("   ");
            form.set_date(TestFixtures::date());
        })
        .await;

    let err = client.submit_query().await.unwrap_err();
    assert!(matches!(err, ClientError::MissingInput { .. }));
    assert_eq!(client.eligibility_result().await, None);
}

#[tokio::test]
async fn test_eligible_result_with_reason() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_check_eligibility()
                .withf(|query| *query == TestFixtures::jane_doe_query())
                .times(1)
                .returning(|_| Ok(TestFixtures::baggage_lost()));
        })
        .build();

    client.edit_form(|form| *form = TestFixtures::jane_doe_form()).await;
    let result = client.submit_query().await.unwrap();

    assert!(result.eligible());
    assert_eq!(result.reason(), Some("Baggage lost"));
    assert_eq!(client.eligibility_result().await, Some(result));
}

#[tokio::test]
async fn test_transport_failure_becomes_search_failed() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_check_eligibility()
                .times(1)
                .returning(|_| Err(TestFixtures::server_error("/check-eligibility")));
        })
        .build();

    client.edit_form(|form| *form = TestFixtures::jane_doe_form()).await;
    let result = client.submit_query().await.unwrap();

    assert_eq!(result, EligibilityResult::search_failed());
    assert!(!result.eligible());
    assert_eq!(result.error(), Some("Search failed"));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({"eligible": false, "error": "Search failed"})
    );
}

#[tokio::test]
async fn test_form_survives_submission() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_check_eligibility()
                .returning(|_| Ok(TestFixtures::baggage_lost()));
        })
        .build();

    client.edit_form(|form| *form = TestFixtures::jane_doe_form()).await;
    client.submit_query().await.unwrap();

    assert_eq!(client.form().await, TestFixtures::jane_doe_form());
}

#[tokio::test]
async fn test_missing_stats_keys_default_to_zero() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway.expect_fetch_statistics().times(1).returning(|| {
                Ok(StatsResponse {
                    dim_airlines: 5,
                    ..StatsResponse::default()
                })
            });
        })
        .build();

    let snapshot = client.refresh_statistics().await.unwrap();

    assert_eq!(snapshot.count(EntityCategory::Airlines), 5);
    for category in EntityCategory::ALL.into_iter().skip(1) {
        assert_eq!(snapshot.count(category), 0);
    }
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            let mut calls = 0;
            gateway.expect_fetch_statistics().times(2).returning(move || {
                calls += 1;
                if calls == 1 {
                    Ok(TestFixtures::stats(9))
                } else {
                    Err(TestFixtures::server_error("/stats"))
                }
            });
        })
        .build();

    let first = client.refresh_statistics().await;
    let second = client.refresh_statistics().await;

    assert!(first.is_some());
    assert_eq!(second, first);
    assert_eq!(client.statistics().await.unwrap().count(EntityCategory::Airlines), 9);
}

#[tokio::test]
async fn test_first_failed_refresh_leaves_placeholder() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_fetch_statistics()
                .times(1)
                .returning(|| Err(TestFixtures::server_error("/stats")));
        })
        .build();

    assert_eq!(client.refresh_statistics().await, None);
}

#[tokio::test]
async fn test_statistics_activation_refreshes_once() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            // One manual refresh plus exactly one for the activation
            gateway
                .expect_fetch_statistics()
                .times(2)
                .returning(|| Ok(TestFixtures::stats(3)));
        })
        .build();

    client.refresh_statistics().await;
    let transition = client.activate(ActiveView::Statistics).await;

    assert_eq!(transition.from, ActiveView::Upload);
    assert_eq!(transition.effects.len(), 1);
    assert_eq!(client.active_view().await, ActiveView::Statistics);
}

#[tokio::test]
async fn test_other_views_do_not_touch_the_gateway() {
    let client = ClientBuilder::new().build();

    client.activate(ActiveView::Eligibility).await;
    client.activate(ActiveView::Upload).await;

    assert_eq!(client.active_view().await, ActiveView::Upload);
    assert_eq!(client.statistics().await, None);
}

#[tokio::test]
async fn test_view_switch_keeps_workflow_state() {
    let client = ClientBuilder::new()
        .with_gateway(|gateway| {
            gateway
                .expect_check_eligibility()
                .returning(|_| Ok(TestFixtures::baggage_lost()));
        })
        .build();

    client.activate(ActiveView::Eligibility).await;
    client.edit_form(|form| *form = TestFixtures::jane_doe_form()).await;
    client.submit_query().await.unwrap();
    client.activate(ActiveView::Upload).await;

    let model = client.view_model().await;
    assert_eq!(model.active, ActiveView::Upload);
    assert_eq!(model.form, TestFixtures::jane_doe_form());
    assert!(model.eligibility.unwrap().eligible());
}
