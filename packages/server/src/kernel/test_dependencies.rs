// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{BaseCareStore, BaseMailService, BaseSmsService, MailReceipt, ServerDeps, SmsReceipt};
use crate::domains::scheduling::models::{Party, Visit};

// =============================================================================
// Mock SMS Service
// =============================================================================

/// Arguments captured from a send_message call
#[derive(Debug, Clone)]
pub struct SentSms {
    pub to: String,
    pub body: String,
}

pub struct MockSmsService {
    sent: Arc<Mutex<Vec<SentSms>>>,
    failing: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    /// A transport that rejects every send
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: true,
        }
    }

    /// Get all messages that were sent
    pub fn sent(&self) -> Vec<SentSms> {
        self.sent.lock().unwrap().clone()
    }

    /// Check if a message was sent to the given number
    pub fn was_sent_to(&self, to: &str) -> bool {
        self.sent.lock().unwrap().iter().any(|m| m.to == to)
    }
}

#[async_trait]
impl BaseSmsService for MockSmsService {
    async fn send_message(&self, to: &str, body: &str) -> Result<SmsReceipt> {
        if self.failing {
            anyhow::bail!("simulated SMS transport failure");
        }

        self.sent.lock().unwrap().push(SentSms {
            to: to.to_string(),
            body: body.to_string(),
        });

        Ok(SmsReceipt {
            sid: format!("SM{}", Uuid::new_v4().simple()),
        })
    }
}

// =============================================================================
// Mock Mail Service
// =============================================================================

/// Arguments captured from a send_email call
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

pub struct MockMailService {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failing: bool,
}

impl MockMailService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    /// A provider that rejects every send
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: true,
        }
    }

    /// Get all emails that were sent
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Check if an email was sent to the given address
    pub fn was_sent_to(&self, to: &str) -> bool {
        self.sent.lock().unwrap().iter().any(|m| m.to == to)
    }
}

#[async_trait]
impl BaseMailService for MockMailService {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<MailReceipt> {
        if self.failing {
            anyhow::bail!("simulated mail provider failure");
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });

        Ok(MailReceipt {
            message_id: format!("mail_{}", Uuid::new_v4().simple()),
        })
    }
}

// =============================================================================
// In-Memory Care Store
// =============================================================================

pub struct InMemoryCareStore {
    visits: Mutex<HashMap<String, Visit>>,
    clients: Mutex<HashMap<String, Party>>,
    caregivers: Mutex<HashMap<String, Party>>,
}

impl InMemoryCareStore {
    pub fn new() -> Self {
        Self {
            visits: Mutex::new(HashMap::new()),
            clients: Mutex::new(HashMap::new()),
            caregivers: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_visit(self, visit: Visit) -> Self {
        self.visits.lock().unwrap().insert(visit.id.clone(), visit);
        self
    }

    pub fn with_client(self, client: Party) -> Self {
        self.clients
            .lock()
            .unwrap()
            .insert(client.id.clone(), client);
        self
    }

    pub fn with_caregiver(self, caregiver: Party) -> Self {
        self.caregivers
            .lock()
            .unwrap()
            .insert(caregiver.id.clone(), caregiver);
        self
    }
}

#[async_trait]
impl BaseCareStore for InMemoryCareStore {
    async fn get_visit(&self, id: &str) -> Result<Option<Visit>> {
        Ok(self.visits.lock().unwrap().get(id).cloned())
    }

    async fn get_client(&self, id: &str) -> Result<Option<Party>> {
        Ok(self.clients.lock().unwrap().get(id).cloned())
    }

    async fn get_caregiver(&self, id: &str) -> Result<Option<Party>> {
        Ok(self.caregivers.lock().unwrap().get(id).cloned())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub store: Arc<InMemoryCareStore>,
    pub sms: Arc<MockSmsService>,
    pub mailer: Arc<MockMailService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryCareStore::new()),
            sms: Arc::new(MockSmsService::new()),
            mailer: Arc::new(MockMailService::new()),
        }
    }

    /// Set a mock care store
    pub fn mock_store(mut self, store: InMemoryCareStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// Set a mock SMS service
    pub fn mock_sms(mut self, sms: MockSmsService) -> Self {
        self.sms = Arc::new(sms);
        self
    }

    /// Set a mock mail service
    pub fn mock_mailer(mut self, mailer: MockMailService) -> Self {
        self.mailer = Arc::new(mailer);
        self
    }

    /// Convert into ServerDeps with the SMS channel configured
    pub fn into_deps(self) -> ServerDeps {
        let sms: Arc<dyn BaseSmsService> = self.sms;
        ServerDeps::new(self.store, Some(sms), self.mailer)
    }

    /// Convert into ServerDeps with no SMS transport configured
    pub fn into_deps_without_sms(self) -> ServerDeps {
        ServerDeps::new(self.store, None, self.mailer)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
