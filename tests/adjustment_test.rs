//! Stock adjustment flow tests

mod helpers;

use helpers::*;
use stock_bot::handlers::flows::adjust::{DIRECTION_PROMPT, UPDATED};
use stock_bot::handlers::flows::register::{CODE_PROMPT, QUANTITY_PROMPT, INVALID_QUANTITY};
use stock_bot::handlers::menus::{main_menu, direction_menu, MenuAction};
use stock_bot::handlers::messages::BOX_NOT_FOUND;
use stock_bot::middleware::Role;
use stock_bot::state::scenarios::{ADD_LABEL, SUBTRACT_LABEL};

#[tokio::test]
async fn test_add_then_subtract() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.register_box("A1", "Acme", "RJ", 10, "Fondo 4to Piso").await;
    let operator = operator();

    let replies = ctx.say(&operator, MenuAction::Adjust.label()).await;
    assert_eq!(replies[0].text(), Some(CODE_PROMPT));

    let replies = ctx.say(&operator, "A1").await;
    assert_eq!(replies[0].text(), Some(format!("📦 Stock actual: 10\n{}", DIRECTION_PROMPT).as_str()));
    assert_eq!(replies[0].menu(), Some(&direction_menu()));

    let replies = ctx.say(&operator, ADD_LABEL).await;
    assert_eq!(replies[0].text(), Some(QUANTITY_PROMPT));

    let replies = ctx.say(&operator, "5").await;
    assert_eq!(replies[0].text(), Some(format!("{}\n🔢 Nuevo stock: 15", UPDATED).as_str()));
    assert_eq!(replies[0].menu(), Some(&main_menu(Role::Operator)));
    assert!(ctx.is_idle(&operator).await);

    ctx.say_all(&operator, &[MenuAction::Adjust.label(), "A1", SUBTRACT_LABEL, "3"]).await;
    assert_eq!(ctx.stored_box("A1").await.map(|b| b.quantity), Some(12));

    let history = ctx.app.database.list_history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, SUBTRACT_LABEL);
    assert_eq!(history[0].quantity, 3);
    assert_eq!(history[1].action, ADD_LABEL);
    assert_eq!(history[1].quantity, 5);
    assert!(history.iter().all(|entry| entry.user == "operario" && entry.code == "A1"));
}

#[tokio::test]
async fn test_unknown_code_aborts_without_history() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let operator = operator();

    let replies = ctx.say_all(&operator, &[MenuAction::Adjust.label(), "ZZ"]).await;

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text(), Some(BOX_NOT_FOUND));
    assert_eq!(replies[0].menu(), Some(&main_menu(Role::Operator)));
    assert!(ctx.is_idle(&operator).await);
    assert!(ctx.app.database.list_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_subtract_below_zero_is_kept() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.register_box("A1", "Acme", "RJ", 2, "Fondo 4to Piso").await;

    ctx.say_all(&admin(), &[MenuAction::Adjust.label(), "A1", SUBTRACT_LABEL, "5"]).await;

    assert_eq!(ctx.stored_box("A1").await.map(|b| b.quantity), Some(-3));
}

#[tokio::test]
async fn test_unrecognized_direction_subtracts() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.register_box("A1", "Acme", "RJ", 10, "Fondo 4to Piso").await;

    ctx.say_all(&admin(), &[MenuAction::Adjust.label(), "A1", "quitar", "4"]).await;

    assert_eq!(ctx.stored_box("A1").await.map(|b| b.quantity), Some(6));
    let history = ctx.app.database.list_history().await.unwrap();
    assert_eq!(history[0].action, "quitar");
}

#[tokio::test]
async fn test_invalid_amount_reprompts() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.register_box("A1", "Acme", "RJ", 10, "Fondo 4to Piso").await;
    let operator = operator();

    let replies = ctx.say_all(&operator, &[MenuAction::Adjust.label(), "A1", ADD_LABEL, "cinco"]).await;
    assert_eq!(replies[0].text(), Some(INVALID_QUANTITY));
    assert!(!ctx.is_idle(&operator).await);

    ctx.say(&operator, "5").await;
    assert_eq!(ctx.stored_box("A1").await.map(|b| b.quantity), Some(15));
}

#[tokio::test]
async fn test_history_user_falls_back_to_id() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.register_box("A1", "Acme", "RJ", 10, "Fondo 4to Piso").await;

    ctx.say_all(&operator_without_username(), &[MenuAction::Adjust.label(), "A1", ADD_LABEL, "1"]).await;

    let history = ctx.app.database.list_history().await.unwrap();
    assert_eq!(history[0].user, OPERATOR_ID.to_string());
}

#[tokio::test]
async fn test_plain_user_cannot_adjust() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let user = plain_user();

    let replies = ctx.say(&user, MenuAction::Adjust.label()).await;

    assert!(replies.is_empty());
    assert!(ctx.is_idle(&user).await);
}
