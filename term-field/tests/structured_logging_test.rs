//! Integration tests for structured logging of trigger dispatch and field
//! access.

use std::sync::{Arc, Mutex};
use term_field::prelude::*;

/// Test helper to capture structured logs
struct LogCapture {
    logs: Arc<Mutex<Vec<String>>>,
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let s = String::from_utf8_lossy(buf).to_string();
        self.logs.lock().unwrap().push(s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture(filter: &str) -> (Arc<Mutex<Vec<String>>>, tracing::subscriber::DefaultGuard) {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let writer_logs = Arc::clone(&logs);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(move || LogCapture {
            logs: Arc::clone(&writer_logs),
        })
        .with_env_filter(filter)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

fn parsed(logs: &Arc<Mutex<Vec<String>>>) -> Vec<serde_json::Value> {
    logs.lock()
        .unwrap()
        .iter()
        .flat_map(|chunk| chunk.lines().map(str::to_string).collect::<Vec<_>>())
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(&line).expect("log line is JSON"))
        .collect()
}

fn with_message<'a>(entries: &'a [serde_json::Value], message: &str) -> Vec<&'a serde_json::Value> {
    entries
        .iter()
        .filter(|entry| entry["fields"]["message"] == message)
        .collect()
}

#[derive(Debug)]
struct InventoryPage {
    page: ComponentCore,
    stock: InputField<u32, InventoryPage>,
}

impl PageObject for InventoryPage {
    fn declare() -> PageDeclaration {
        PageDeclaration::new("InventoryPage")
            .with_trigger(VerifyContentContainsAll::new(["Inventory", "Stock"]))
            .with_component(
                ComponentDeclaration::new("stock")
                    .with_locator("#stock")
                    .with_trigger(term_field::triggers::LogInfo::new(
                        "stock was read",
                        TriggerEvents::AFTER_GET,
                    )),
            )
    }

    fn build(scope: &PageScope<'_, Self>) -> Self {
        Self {
            page: scope.page_core(),
            stock: scope.input_field("stock"),
        }
    }

    fn page(&self) -> &ComponentCore {
        &self.page
    }
}

fn context(body: &str, log: LogConfig) -> PageContext {
    let document = InMemoryDocument::new()
        .with_body(body)
        .with_input("#stock", "12");
    PageContext::new(Arc::new(document)).with_config(FieldConfig::default().with_log_config(log))
}

#[test]
fn test_page_initialization_is_logged() {
    let (logs, _guard) = capture("info,term_field=debug");

    context("Inventory / Stock", LogConfig::default())
        .go_to::<InventoryPage>()
        .unwrap();

    let entries = parsed(&logs);
    let started = with_message(&entries, "Initializing page object");
    assert_eq!(started.len(), 1);
    assert_eq!(started[0]["fields"]["page"], "InventoryPage");
    assert_eq!(started[0]["level"], "INFO");
    assert_eq!(with_message(&entries, "Page object initialized").len(), 1);
}

#[test]
fn test_trigger_details_are_gated_by_log_config() {
    let (logs, _guard) = capture("term_field=debug");
    let page = context("Inventory / Stock", LogConfig::default())
        .go_to::<InventoryPage>()
        .unwrap();
    page.stock.get().unwrap();
    assert!(with_message(&parsed(&logs), "Executing trigger").is_empty());
    drop(_guard);

    let (logs, _guard) = capture("term_field=debug");
    let page = context("Inventory / Stock", LogConfig::verbose())
        .go_to::<InventoryPage>()
        .unwrap();
    page.stock.get().unwrap();

    let entries = parsed(&logs);
    let executed = with_message(&entries, "Executing trigger");
    assert!(executed
        .iter()
        .any(|entry| entry["fields"]["trigger.name"] == "log_info"
            && entry["fields"]["trigger.event"] == "AfterGet"));
    assert_eq!(with_message(&entries, "stock was read").len(), 1);
}

#[test]
fn test_field_values_are_logged() {
    let (logs, _guard) = capture("term_field=debug");
    let page = context("Inventory / Stock", LogConfig::default())
        .go_to::<InventoryPage>()
        .unwrap();
    page.stock.set(&40).unwrap();
    page.stock.get().unwrap();

    let entries = parsed(&logs);
    let set = with_message(&entries, "Set field value");
    assert_eq!(set.len(), 1);
    assert_eq!(set[0]["fields"]["value"], "40");
    assert_eq!(set[0]["fields"]["component.id"], "InventoryPage.stock");

    let read = with_message(&entries, "Read field value");
    assert_eq!(read[0]["fields"]["value"], "40");
}

#[test]
fn test_failing_trigger_is_warned() {
    let (logs, _guard) = capture("warn");
    let err = context("Inventory only", LogConfig::production())
        .go_to::<InventoryPage>()
        .unwrap_err();
    assert_eq!(err.missing_values(), Some(&["Stock".to_string()][..]));

    let entries = parsed(&logs);
    let failed = with_message(&entries, "Trigger failed");
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["level"], "WARN");
    assert_eq!(failed[0]["fields"]["trigger.name"], "verify_content_contains_all");
    assert_eq!(failed[0]["fields"]["component.id"], "InventoryPage");
}
