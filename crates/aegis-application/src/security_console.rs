//! The application state container for the security console.
//!
//! `SecurityConsole` owns the only shared mutable state in the system: the
//! in-flight scan flag, the current finding batch, and the chat transcript.
//! All mutation goes through `start_scan` and `send_message`; consumers read
//! snapshots through the accessor methods and never touch fields directly.

use crate::simulation;
use aegis_core::auth::{AuthGateway, Credentials, Session};
use aegis_core::chat::{ChatMessage, ChatRecord};
use aegis_core::delay::Delay;
use aegis_core::error::{AegisError, Result};
use aegis_core::scan::{FindingRecord, ScanFinding};
use aegis_core::store::{RecordStore, collections};
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_millis(2000);
const DEFAULT_REPLY_INTERVAL: Duration = Duration::from_millis(1000);

/// Coordinates the simulated scan and chat operations against shared state.
///
/// # Concurrency
///
/// Operations interleave only at their suspension points (gateway calls, the
/// simulated delay, the store call). The scan flag is an atomic flipped
/// before the first suspension, so a caller checking `is_scanning` right
/// after invoking `start_scan` observes the in-flight state. Collection
/// locks are never held across an `.await`. The two operations are not
/// mutually exclusive with each other; each only guards its own writes.
pub struct SecurityConsole {
    /// Gateway for session management.
    auth: Arc<dyn AuthGateway>,
    /// Fire-and-forget mirror for scan and chat records.
    store: Arc<dyn RecordStore>,
    /// Simulated processing delay.
    delay: Arc<dyn Delay>,
    /// Configured sign-in credentials. Absent means operations fail closed
    /// when no session exists.
    credentials: Option<Credentials>,
    scan_interval: Duration,
    reply_interval: Duration,
    /// True while a scan is in flight. At most one scan runs at a time.
    scanning: AtomicBool,
    /// Current finding batch; replaced wholesale by each completed scan.
    scan_results: RwLock<Vec<ScanFinding>>,
    /// Conversation transcript; append-only.
    chat_messages: RwLock<Vec<ChatMessage>>,
}

impl SecurityConsole {
    /// Creates a console with default intervals and no configured
    /// credentials.
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        store: Arc<dyn RecordStore>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            auth,
            store,
            delay,
            credentials: None,
            scan_interval: DEFAULT_SCAN_INTERVAL,
            reply_interval: DEFAULT_REPLY_INTERVAL,
            scanning: AtomicBool::new(false),
            scan_results: RwLock::new(Vec::new()),
            chat_messages: RwLock::new(Vec::new()),
        }
    }

    /// Sets the credentials used to sign in when no session exists.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overrides the simulated processing intervals.
    pub fn with_intervals(mut self, scan_interval: Duration, reply_interval: Duration) -> Self {
        self.scan_interval = scan_interval;
        self.reply_interval = reply_interval;
        self
    }

    /// Returns whether a scan is currently in flight.
    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of the current finding batch.
    pub fn scan_results(&self) -> Vec<ScanFinding> {
        self.scan_results.read().unwrap().clone()
    }

    /// Returns a snapshot of the conversation transcript.
    pub fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat_messages.read().unwrap().clone()
    }

    /// Runs one simulated security scan.
    ///
    /// Ensures a session, waits the simulated processing interval, persists
    /// one row per finding, then replaces the stored batch. Persistence and
    /// the in-memory commit form a single logical unit: if any row fails to
    /// persist, the batch is not committed.
    ///
    /// # Errors
    ///
    /// - `AegisError::ScanInProgress` when a scan is already running; the
    ///   stored batch is untouched and no rows are written.
    /// - `AegisError::Auth` / `AegisError::Store` from the collaborators; the
    ///   stored batch is untouched and the flag is reset.
    pub async fn start_scan(&self) -> Result<()> {
        // Flipped before the first suspension so concurrent callers observe
        // the in-flight state immediately.
        if self
            .scanning
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AegisError::ScanInProgress);
        }

        let outcome = self.run_scan().await;
        self.scanning.store(false, Ordering::SeqCst);

        if let Err(error) = &outcome {
            tracing::warn!("security scan failed: {}", error);
        }
        outcome
    }

    async fn run_scan(&self) -> Result<()> {
        self.ensure_session().await?;
        self.delay.sleep(self.scan_interval).await;

        let findings = simulation::scan_findings();
        let timestamp = chrono::Utc::now().to_rfc3339();
        for finding in &findings {
            let record = FindingRecord::new(finding, timestamp.clone());
            self.store
                .insert(collections::SCAN_RESULTS, serde_json::to_value(&record)?)
                .await?;
        }

        let count = findings.len();
        *self.scan_results.write().unwrap() = findings;
        tracing::info!("security scan completed with {} findings", count);
        Ok(())
    }

    /// Sends one message to the simulated assistant.
    ///
    /// The user message is appended before the first suspension, so it is
    /// visible to observers while the reply is pending. The assistant reply
    /// is appended only after the exchange has been persisted; on failure the
    /// user message stays (it represents a real user action) and no reply is
    /// added.
    ///
    /// Callers are expected to skip input that is empty after trimming.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        self.chat_messages
            .write()
            .unwrap()
            .push(ChatMessage::user(text));

        let outcome = self.deliver_reply(text).await;
        if let Err(error) = &outcome {
            tracing::warn!("assistant exchange failed: {}", error);
        }
        outcome
    }

    async fn deliver_reply(&self, text: &str) -> Result<()> {
        self.ensure_session().await?;
        self.delay.sleep(self.reply_interval).await;

        let reply = simulation::assistant_reply(text);
        let record = ChatRecord::new(text, &reply, chrono::Utc::now().to_rfc3339());
        self.store
            .insert(collections::CHAT_HISTORY, serde_json::to_value(&record)?)
            .await?;

        // Appended to the live transcript rather than a snapshot taken at
        // call start, so overlapping calls never lose each other's entries.
        self.chat_messages
            .write()
            .unwrap()
            .push(ChatMessage::assistant(reply));
        Ok(())
    }

    /// Returns the current session, signing in with the configured
    /// credentials when none exists. Fails closed when no credentials are
    /// configured.
    async fn ensure_session(&self) -> Result<Session> {
        if let Some(session) = self.auth.current_session().await? {
            return Ok(session);
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| AegisError::auth("no active session and no credentials configured"))?;

        tracing::debug!("no active session, signing in as {}", credentials.identifier);
        self.auth
            .sign_in(&credentials.identifier, &credentials.secret)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_core::chat::MessageRole;
    use aegis_core::scan::FindingKind;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    // Auth gateway double: optionally pre-seeded with a session, optionally
    // failing every sign-in, counting sign-in attempts.
    struct StubAuthGateway {
        session: Mutex<Option<Session>>,
        fail_sign_in: bool,
        sign_ins: AtomicUsize,
    }

    impl StubAuthGateway {
        fn signed_out() -> Self {
            Self {
                session: Mutex::new(None),
                fail_sign_in: false,
                sign_ins: AtomicUsize::new(0),
            }
        }

        fn signed_in() -> Self {
            Self {
                session: Mutex::new(Some(Session::new("cached-token"))),
                fail_sign_in: false,
                sign_ins: AtomicUsize::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                fail_sign_in: true,
                ..Self::signed_out()
            }
        }

        fn sign_in_count(&self) -> usize {
            self.sign_ins.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthGateway for StubAuthGateway {
        async fn current_session(&self) -> Result<Option<Session>> {
            Ok(self.session.lock().unwrap().clone())
        }

        async fn sign_in(&self, identifier: &str, _secret: &str) -> Result<Session> {
            self.sign_ins.fetch_add(1, Ordering::SeqCst);
            if self.fail_sign_in {
                return Err(AegisError::auth("invalid identifier or secret"));
            }
            let session = Session::new(format!("token-{}", identifier));
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(session)
        }
    }

    // Record store double: keeps every inserted row, optionally failing.
    #[derive(Default)]
    struct RecordingStore {
        records: Mutex<HashMap<String, Vec<serde_json::Value>>>,
        fail: AtomicBool,
    }

    impl RecordingStore {
        fn set_failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        fn count(&self, collection: &str) -> usize {
            self.records
                .lock()
                .unwrap()
                .get(collection)
                .map(Vec::len)
                .unwrap_or(0)
        }

        fn rows(&self, collection: &str) -> Vec<serde_json::Value> {
            self.records
                .lock()
                .unwrap()
                .get(collection)
                .cloned()
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl RecordStore for RecordingStore {
        async fn insert(&self, collection: &str, record: serde_json::Value) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(AegisError::store(collection, "injected failure"));
            }
            self.records
                .lock()
                .unwrap()
                .entry(collection.to_string())
                .or_default()
                .push(record);
            Ok(())
        }
    }

    // Completes immediately; the operations still suspend at the call.
    struct InstantDelay;

    #[async_trait]
    impl Delay for InstantDelay {
        async fn sleep(&self, _duration: Duration) {}
    }

    // Parks the operation until the test releases the gate, so mid-flight
    // state can be observed.
    struct GatedDelay {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl Delay for GatedDelay {
        async fn sleep(&self, _duration: Duration) {
            self.gate.notified().await;
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("operator@example.com", "correct horse battery staple")
    }

    fn console_with(
        auth: Arc<StubAuthGateway>,
        store: Arc<RecordingStore>,
        delay: Arc<dyn Delay>,
    ) -> SecurityConsole {
        SecurityConsole::new(auth, store, delay).with_credentials(credentials())
    }

    #[tokio::test]
    async fn test_scan_flag_true_only_while_in_flight() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        let gate = Arc::new(Notify::new());
        let delay = Arc::new(GatedDelay { gate: gate.clone() });
        let console = Arc::new(console_with(auth, store, delay));

        assert!(!console.is_scanning());

        let task = tokio::spawn({
            let console = console.clone();
            async move { console.start_scan().await }
        });

        // Let the scan run up to the gated delay.
        tokio::task::yield_now().await;
        assert!(console.is_scanning());

        gate.notify_one();
        task.await.unwrap().unwrap();
        assert!(!console.is_scanning());
    }

    #[tokio::test]
    async fn test_second_scan_rejected_without_side_effects() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        let gate = Arc::new(Notify::new());
        let delay = Arc::new(GatedDelay { gate: gate.clone() });
        let console = Arc::new(console_with(auth, store.clone(), delay));

        let task = tokio::spawn({
            let console = console.clone();
            async move { console.start_scan().await }
        });
        tokio::task::yield_now().await;
        assert!(console.is_scanning());

        let rejected = console.start_scan().await;
        assert!(matches!(rejected, Err(AegisError::ScanInProgress)));
        assert!(console.scan_results().is_empty());

        gate.notify_one();
        task.await.unwrap().unwrap();

        // Only the first scan persisted a batch.
        assert_eq!(store.count(collections::SCAN_RESULTS), 3);
    }

    #[tokio::test]
    async fn test_successful_scan_replaces_batch() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        let console = console_with(auth, store.clone(), Arc::new(InstantDelay));

        console.start_scan().await.unwrap();
        let first = console.scan_results();
        assert_eq!(first.len(), 3);
        for kind in [FindingKind::Warning, FindingKind::Error, FindingKind::Info] {
            assert_eq!(first.iter().filter(|f| f.kind == kind).count(), 1);
        }

        console.start_scan().await.unwrap();
        // Replaced, not appended.
        assert_eq!(console.scan_results().len(), 3);
        // But both batches were mirrored to the store.
        assert_eq!(store.count(collections::SCAN_RESULTS), 6);

        let rows = store.rows(collections::SCAN_RESULTS);
        assert!(rows.iter().all(|row| row.get("timestamp").is_some()));
    }

    #[tokio::test]
    async fn test_scan_signs_in_when_no_session() {
        let auth = Arc::new(StubAuthGateway::signed_out());
        let store = Arc::new(RecordingStore::default());
        let console = console_with(auth.clone(), store, Arc::new(InstantDelay));

        console.start_scan().await.unwrap();
        assert_eq!(auth.sign_in_count(), 1);

        // The session is now cached; a second scan does not sign in again.
        console.start_scan().await.unwrap();
        assert_eq!(auth.sign_in_count(), 1);
    }

    #[tokio::test]
    async fn test_scan_auth_failure_resets_flag_and_keeps_results() {
        let auth = Arc::new(StubAuthGateway::rejecting());
        let store = Arc::new(RecordingStore::default());
        let console = console_with(auth, store.clone(), Arc::new(InstantDelay));

        let outcome = console.start_scan().await;
        assert!(matches!(outcome, Err(AegisError::Auth(_))));
        assert!(!console.is_scanning());
        assert!(console.scan_results().is_empty());
        assert_eq!(store.count(collections::SCAN_RESULTS), 0);
    }

    #[tokio::test]
    async fn test_scan_fails_closed_without_credentials() {
        let auth = Arc::new(StubAuthGateway::signed_out());
        let store = Arc::new(RecordingStore::default());
        let console = SecurityConsole::new(auth.clone(), store, Arc::new(InstantDelay));

        let outcome = console.start_scan().await;
        assert!(matches!(outcome, Err(AegisError::Auth(_))));
        // Fail closed: sign-in is never even attempted.
        assert_eq!(auth.sign_in_count(), 0);
        assert!(!console.is_scanning());
    }

    #[tokio::test]
    async fn test_scan_store_failure_keeps_previous_batch() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        let console = console_with(auth, store.clone(), Arc::new(InstantDelay));

        console.start_scan().await.unwrap();
        let committed = console.scan_results();

        store.set_failing(true);
        let outcome = console.start_scan().await;
        assert!(matches!(outcome, Err(AegisError::Store { .. })));
        assert!(!console.is_scanning());
        assert_eq!(console.scan_results(), committed);
    }

    #[tokio::test]
    async fn test_send_message_appends_user_then_assistant() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        let console = console_with(auth, store.clone(), Arc::new(InstantDelay));

        console.send_message("is my firewall okay?").await.unwrap();

        let transcript = console.chat_messages();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, MessageRole::User);
        assert_eq!(transcript[0].content, "is my firewall okay?");
        assert_eq!(transcript[1].role, MessageRole::Assistant);
        assert!(transcript[1].content.contains("is my firewall okay?"));

        let rows = store.rows(collections::CHAT_HISTORY);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["user_message"], "is my firewall okay?");
        assert!(rows[0].get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_user_message_visible_before_reply_resolves() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        let gate = Arc::new(Notify::new());
        let delay = Arc::new(GatedDelay { gate: gate.clone() });
        let console = Arc::new(console_with(auth, store, delay));

        let task = tokio::spawn({
            let console = console.clone();
            async move { console.send_message("ping").await }
        });
        tokio::task::yield_now().await;

        // The user entry is committed while the reply is still pending.
        let transcript = console.chat_messages();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::User);

        gate.notify_one();
        task.await.unwrap().unwrap();
        assert_eq!(console.chat_messages().len(), 2);
    }

    #[tokio::test]
    async fn test_send_message_store_failure_keeps_user_entry_only() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        store.set_failing(true);
        let console = console_with(auth, store, Arc::new(InstantDelay));

        let outcome = console.send_message("hello?").await;
        assert!(matches!(outcome, Err(AegisError::Store { .. })));

        let transcript = console.chat_messages();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::User);
        assert_eq!(transcript[0].content, "hello?");
    }

    #[tokio::test]
    async fn test_send_message_auth_failure_keeps_user_entry_only() {
        let auth = Arc::new(StubAuthGateway::rejecting());
        let store = Arc::new(RecordingStore::default());
        let console = console_with(auth, store.clone(), Arc::new(InstantDelay));

        let outcome = console.send_message("hello?").await;
        assert!(matches!(outcome, Err(AegisError::Auth(_))));
        assert_eq!(console.chat_messages().len(), 1);
        assert_eq!(store.count(collections::CHAT_HISTORY), 0);
    }

    #[tokio::test]
    async fn test_transcript_grows_across_exchanges() {
        let auth = Arc::new(StubAuthGateway::signed_in());
        let store = Arc::new(RecordingStore::default());
        let console = console_with(auth, store, Arc::new(InstantDelay));

        console.send_message("first").await.unwrap();
        console.send_message("second").await.unwrap();

        let transcript = console.chat_messages();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].content, "first");
        assert!(transcript[1].content.contains("first"));
        assert_eq!(transcript[2].content, "second");
        assert!(transcript[3].content.contains("second"));
    }
}
