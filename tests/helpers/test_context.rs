//! Test context for unified test setup
//!
//! Builds an application context over an in-memory database and a temporary
//! export directory, and drives it through the same entry points the bot uses.

use std::path::PathBuf;
use tempfile::TempDir;
use stock_bot::config::{Settings, BotConfig, DatabaseConfig, ExportConfig, LoggingConfig};
use stock_bot::database::{DatabaseService, create_in_memory_pool};
use stock_bot::handlers::{Command, handle_text, run_command, MenuAction};
use stock_bot::models::{Caller, StockBox};
use stock_bot::state::AppContext;

use super::recording_responder::{RecordingResponder, Sent};
use super::test_data::{admin, ADMIN_ID, OPERATOR_ID};

pub struct TestContext {
    pub app: AppContext,
    pub out: RecordingResponder,
    pub temp_dir: TempDir,
    export_path: PathBuf,
}

impl TestContext {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::with_export_file("stock.xlsx").await
    }

    /// Create a test context exporting to `relative` inside the temp directory
    pub async fn with_export_file(relative: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = tempfile::tempdir()?;
        let export_path = temp_dir.path().join(relative);
        let settings = Self::create_test_settings(export_path.clone());
        let database = DatabaseService::new(create_in_memory_pool().await?);

        Ok(Self {
            app: AppContext::new(settings, database),
            out: RecordingResponder::new(),
            temp_dir,
            export_path,
        })
    }

    fn create_test_settings(export_path: PathBuf) -> Settings {
        Settings {
            bot: BotConfig {
                token: "12345:test_token".to_string(),
                admin_ids: vec![ADMIN_ID],
                operator_ids: vec![OPERATOR_ID],
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                min_connections: 1,
            },
            export: ExportConfig {
                file_path: export_path.to_string_lossy().into_owned(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                directory: "logs".to_string(),
            },
        }
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_path.clone()
    }

    /// Deliver a text message and return every reply it produced
    pub async fn say(&self, caller: &Caller, text: &str) -> Vec<Sent> {
        handle_text(&self.app, caller, text, &self.out)
            .await
            .expect("message handling should not fail");
        self.out.take()
    }

    /// Deliver a sequence of messages, returning the replies to the last one
    pub async fn say_all(&self, caller: &Caller, texts: &[&str]) -> Vec<Sent> {
        let mut replies = Vec::new();
        for text in texts {
            replies = self.say(caller, text).await;
        }
        replies
    }

    pub async fn command(&self, caller: &Caller, cmd: Command) -> Vec<Sent> {
        run_command(&self.app, caller, cmd, &self.out)
            .await
            .expect("command handling should not fail");
        self.out.take()
    }

    /// Register a box through the admin registration flow
    pub async fn register_box(&self, code: &str, brand: &str, color: &str, quantity: i64, location: &str) -> Vec<Sent> {
        let quantity = quantity.to_string();
        self.say_all(&admin(), &[
            MenuAction::Register.label(),
            code,
            brand,
            color,
            quantity.as_str(),
            location,
        ]).await
    }

    pub async fn stored_box(&self, code: &str) -> Option<StockBox> {
        self.app.database.find_box(code).await.expect("lookup should succeed")
    }

    pub async fn is_idle(&self, caller: &Caller) -> bool {
        self.app.state_storage.load_context(caller.id).await.is_none()
    }
}
