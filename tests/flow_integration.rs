//! End-to-end scenarios for the application flow.
//!
//! These drive the flow controller through the mock identity provider and
//! an in-memory flag store, the same way the app shell would: resolve
//! identity at startup, forward provider notifications, and feed the
//! questionnaire engine's completion back into the controller.

use std::sync::Arc;

use secrecy::SecretString;

use vitalpal_core::adapters::identity::MockIdentityProvider;
use vitalpal_core::adapters::storage::InMemoryFlagStore;
use vitalpal_core::application::FlowController;
use vitalpal_core::domain::flow::{FlowScreen, VisibleState};
use vitalpal_core::domain::onboarding::{Answer, EngineOutcome, QuestionnaireEngine, UserAnswers};
use vitalpal_core::ports::{FlagStore, IdentityProvider};

fn qid(s: &str) -> vitalpal_core::domain::foundation::QuestionId {
    vitalpal_core::domain::foundation::QuestionId::new(s).unwrap()
}

async fn sign_in(provider: &MockIdentityProvider, email: &str) {
    provider
        .sign_in(vitalpal_core::domain::identity::Credentials::EmailPassword {
            email: email.to_string(),
            password: SecretString::new("hunter2x".to_string()),
        })
        .await
        .unwrap();
}

fn provider_u1() -> Arc<MockIdentityProvider> {
    Arc::new(MockIdentityProvider::new().with_account_id("u1", "u1@example.com", "hunter2x"))
}

/// Drives the questionnaire engine to completion, picking the given
/// option for `activity` and the first option everywhere else.
fn fill_questionnaire(activity_choice: &str) -> UserAnswers {
    let mut engine = QuestionnaireEngine::new();
    loop {
        let question = engine.current_question().expect("engine not completed yet");
        let id = question.id().clone();
        let option = if id.as_str() == "activity" {
            activity_choice.to_string()
        } else {
            question.options()[0].clone()
        };
        engine.select_option(&id, &option).unwrap();
        match engine.advance().unwrap() {
            EngineOutcome::InProgress => continue,
            EngineOutcome::Completed(answers) => return answers,
        }
    }
}

#[tokio::test]
async fn fresh_user_skips_onboarding() {
    let provider = provider_u1();
    sign_in(&provider, "u1@example.com").await;
    let store = InMemoryFlagStore::new();
    let mut controller =
        FlowController::new(provider, Arc::new(store.clone())).skip_enabled(true);

    controller.initialize().await;
    assert_eq!(controller.screen(), FlowScreen::OnboardingIntro);

    controller.skip_onboarding().await;
    assert_eq!(controller.screen(), FlowScreen::Main);
    assert_eq!(
        store.get("hasCompletedOnboarding_u1").await.unwrap(),
        Some("true".to_string())
    );
}

#[tokio::test]
async fn fresh_user_completes_the_questionnaire() {
    let provider = provider_u1();
    sign_in(&provider, "u1@example.com").await;
    let store = InMemoryFlagStore::new();
    let mut controller = FlowController::new(provider, Arc::new(store.clone()));

    controller.initialize().await;
    assert_eq!(controller.screen(), FlowScreen::OnboardingIntro);

    controller.continue_onboarding();
    assert_eq!(controller.screen(), FlowScreen::Questionnaire);

    let answers = fill_questionnaire("Moderately Active");
    assert_eq!(answers.len(), 5);
    assert_eq!(
        answers.get(&qid("activity")),
        Some(&Answer::Single("Moderately Active".to_string()))
    );

    controller.complete_questionnaire(answers.clone()).await;
    assert_eq!(controller.screen(), FlowScreen::Main);
    assert_eq!(controller.answers(), Some(&answers));
    assert_eq!(
        store.get("hasCompletedOnboarding_u1").await.unwrap(),
        Some("true".to_string())
    );
    assert_eq!(
        store.get("userAnswers_u1").await.unwrap(),
        Some(answers.to_json().unwrap())
    );
}

#[tokio::test]
async fn second_launch_restores_main_with_saved_answers() {
    let provider = provider_u1();
    sign_in(&provider, "u1@example.com").await;
    let store = Arc::new(InMemoryFlagStore::new());

    // First session: complete onboarding.
    let mut first = FlowController::new(provider.clone(), store.clone());
    first.initialize().await;
    first.continue_onboarding();
    let answers = fill_questionnaire("Very Active");
    first.complete_questionnaire(answers.clone()).await;

    // Second session: a fresh controller over the same store.
    let mut second = FlowController::new(provider, store);
    assert_eq!(second.visible_state(), VisibleState::Loading);
    second.initialize().await;
    assert_eq!(second.screen(), FlowScreen::Main);
    assert_eq!(second.answers(), Some(&answers));
}

#[tokio::test]
async fn skip_survives_a_failing_store() {
    let provider = provider_u1();
    sign_in(&provider, "u1@example.com").await;
    let store = InMemoryFlagStore::new();
    store.fail_writes(true);
    let mut controller =
        FlowController::new(provider, Arc::new(store)).skip_enabled(true);

    controller.initialize().await;
    controller.skip_onboarding().await;
    assert_eq!(controller.screen(), FlowScreen::Main);
}

#[tokio::test]
async fn provider_sign_out_notification_returns_to_auth() {
    let provider = provider_u1();
    sign_in(&provider, "u1@example.com").await;
    let mut rx = provider.subscribe();
    let mut controller =
        FlowController::new(provider.clone(), Arc::new(InMemoryFlagStore::new()));

    controller.initialize().await;
    controller.continue_onboarding();
    controller
        .complete_questionnaire(fill_questionnaire("Sedentary"))
        .await;
    assert_eq!(controller.screen(), FlowScreen::Main);

    provider.sign_out().await.unwrap();
    rx.changed().await.unwrap();
    let identity = rx.borrow_and_update().clone();
    controller.on_identity_changed(identity).await;

    assert_eq!(controller.screen(), FlowScreen::Auth);
    assert_eq!(controller.answers(), None);
}

#[tokio::test]
async fn signing_back_in_lands_on_main_for_onboarded_account() {
    let provider = provider_u1();
    let store = Arc::new(InMemoryFlagStore::new());
    store
        .set("hasCompletedOnboarding_u1", "true")
        .await
        .unwrap();
    let mut rx = provider.subscribe();
    let mut controller = FlowController::new(provider.clone(), store);

    controller.initialize().await;
    assert_eq!(controller.screen(), FlowScreen::Auth);

    sign_in(&provider, "u1@example.com").await;
    rx.changed().await.unwrap();
    let identity = rx.borrow_and_update().clone();
    controller.on_identity_changed(identity).await;

    assert_eq!(controller.screen(), FlowScreen::Main);
}
