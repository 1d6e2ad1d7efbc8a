#![allow(dead_code)]

use async_trait::async_trait;
use shared::{
    abstract_trait::{
        corebanking::CoreBankingGatewayTrait,
        notification::{DynNotifier, NotifierTrait, ReceiptMailerTrait},
        sequence::SequenceGeneratorTrait,
        transfer::repository::{
            command::TransferCommandRepositoryTrait, query::TransferQueryRepositoryTrait,
        },
    },
    domain::{
        requests::{
            corebanking::OverbookingRequest,
            notification::{PushNotificationRequest, SendReceiptRequest},
            session::{CallerContext, SessionUser},
            transfer::{CreateTransactionRequest, InquiryRequest, PaymentRequest},
        },
        responses::OverbookingResponse,
    },
    errors::{GatewayError, NotificationError, RepositoryError},
    model::{
        account::{Account, AccountStatus},
        core_status::CoreStatus,
        limits::Limits,
        money::Money,
        sequence::{SequenceModel, SequenceStatus},
        transaction::TransactionModel,
    },
    service::transfer::{
        command::{TransferCommandService, TransferCommandServiceDeps},
        reconciliation::ReconciliationQueue,
    },
};
use std::{
    collections::{HashMap, VecDeque},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
    },
};
use tokio::sync::{Notify, mpsc};

pub const SOURCE: &str = "001001234567891";
pub const DESTINATION: &str = "001001234567892";

pub fn money(value: i64) -> Money {
    Money::new(value).unwrap()
}

pub fn limits(min: i64, max: i64, daily: i64) -> Limits {
    Limits::new(money(min), money(max), money(daily)).unwrap()
}

pub fn account(number: &str, name: &str, status: &str) -> Account {
    Account {
        account_number: number.to_string(),
        name: name.to_string(),
        status: AccountStatus::from_code(status),
        balance: money(10_000_000),
        min_balance: money(50_000),
        available_balance: money(9_950_000),
        cif: format!("CIF-{number}"),
        currency: "IDR".to_string(),
        branch_code: "001".to_string(),
    }
}

pub fn user() -> SessionUser {
    SessionUser {
        user_id: 7,
        name: "Olivia Rodrigo".to_string(),
        email: "olivia@example.com".to_string(),
    }
}

pub fn caller() -> CallerContext {
    CallerContext::authenticated(user())
}

pub fn inquiry_request(amount: i64) -> InquiryRequest {
    InquiryRequest {
        amount: money(amount),
        source_account: SOURCE.to_string(),
        destination_account: DESTINATION.to_string(),
        transaction_type: None,
    }
}

pub fn payment_request(sequence_number: &str) -> PaymentRequest {
    PaymentRequest {
        sequence_number: sequence_number.to_string(),
    }
}

pub struct MockCoreBanking {
    pub status: Mutex<CoreStatus>,
    pub accounts: Mutex<HashMap<String, Account>>,
    pub ledger: Mutex<OverbookingResponse>,
    pub fail_accounts: AtomicBool,
    pub fail_overbooking: AtomicBool,
    pub status_calls: AtomicUsize,
    pub account_calls: AtomicUsize,
    pub overbooking_calls: AtomicUsize,
    pub overbookings: Mutex<Vec<OverbookingRequest>>,
    /// When set, overbooking signals `started` and waits for `release`.
    pub hold_overbooking: AtomicBool,
    pub started: Notify,
    pub release: Notify,
}

impl MockCoreBanking {
    pub fn new() -> Self {
        let accounts = HashMap::from([
            (SOURCE.to_string(), account(SOURCE, "Olivia Rodrigo", "1")),
            (
                DESTINATION.to_string(),
                account(DESTINATION, "Destination Account", "1"),
            ),
        ]);

        Self {
            status: Mutex::new(CoreStatus {
                system_date: "2026-10-16".to_string(),
                status: "FINISHED".to_string(),
                stand_in_status: "N".to_string(),
            }),
            accounts: Mutex::new(accounts),
            ledger: Mutex::new(OverbookingResponse {
                journal_sequence: "111111".to_string(),
                transaction_reference: "222222".to_string(),
                ab_msg: String::new(),
            }),
            fail_accounts: AtomicBool::new(false),
            fail_overbooking: AtomicBool::new(false),
            status_calls: AtomicUsize::new(0),
            account_calls: AtomicUsize::new(0),
            overbooking_calls: AtomicUsize::new(0),
            overbookings: Mutex::new(Vec::new()),
            hold_overbooking: AtomicBool::new(false),
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn set_status(&self, status: &str, stand_in: &str) {
        let mut core = self.status.lock().unwrap();
        core.status = status.to_string();
        core.stand_in_status = stand_in.to_string();
    }

    pub fn set_account_status(&self, number: &str, status: &str) {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.get_mut(number) {
            account.status = AccountStatus::from_code(status);
        }
    }

    pub fn set_ledger(&self, journal: &str, reference: &str) {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.journal_sequence = journal.to_string();
        ledger.transaction_reference = reference.to_string();
    }
}

#[async_trait]
impl CoreBankingGatewayTrait for MockCoreBanking {
    async fn get_core_status(&self) -> Result<CoreStatus, GatewayError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status.lock().unwrap().clone())
    }

    async fn get_account_details(&self, account_number: &str) -> Result<Account, GatewayError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_accounts.load(Ordering::SeqCst) {
            return Err(GatewayError::Rejected {
                code: "91".to_string(),
                message: "issuer inoperative".to_string(),
            });
        }

        self.accounts
            .lock()
            .unwrap()
            .get(account_number)
            .cloned()
            .ok_or_else(|| GatewayError::Rejected {
                code: "14".to_string(),
                message: "account not found".to_string(),
            })
    }

    async fn perform_overbooking(
        &self,
        req: &OverbookingRequest,
    ) -> Result<OverbookingResponse, GatewayError> {
        self.overbooking_calls.fetch_add(1, Ordering::SeqCst);
        self.overbookings.lock().unwrap().push(req.clone());

        if self.hold_overbooking.load(Ordering::SeqCst) {
            self.started.notify_one();
            self.release.notified().await;
        }

        if self.fail_overbooking.load(Ordering::SeqCst) {
            return Err(GatewayError::Rejected {
                code: "51".to_string(),
                message: "insufficient funds".to_string(),
            });
        }

        Ok(self.ledger.lock().unwrap().clone())
    }
}

pub struct MockSequenceGenerator {
    pub fixed: Mutex<VecDeque<String>>,
    pub next: AtomicU64,
    pub calls: AtomicUsize,
}

impl MockSequenceGenerator {
    pub fn new(fixed: &[&str]) -> Self {
        Self {
            fixed: Mutex::new(fixed.iter().map(|s| s.to_string()).collect()),
            next: AtomicU64::new(900_000),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SequenceGeneratorTrait for MockSequenceGenerator {
    async fn generate(&self) -> Result<String, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(fixed) = self.fixed.lock().unwrap().pop_front() {
            return Ok(fixed);
        }

        Ok(self.next.fetch_add(1, Ordering::SeqCst).to_string())
    }
}

pub struct InMemoryTransferRepository {
    pub limits: Mutex<Limits>,
    pub sequences: Mutex<HashMap<String, SequenceModel>>,
    pub transactions: Mutex<Vec<TransactionModel>>,
    /// Served by `get_sequence` instead of the real row when set.
    pub sequence_override: Mutex<Option<SequenceModel>>,
    /// Behaves like an empty `transaction_limits` table when set.
    pub missing_limits: AtomicBool,
    /// Number of upcoming `insert_transaction` calls that fail.
    pub failing_inserts: AtomicUsize,
    pub limit_calls: AtomicUsize,
    pub insert_sequence_calls: AtomicUsize,
    pub insert_transaction_calls: AtomicUsize,
}

impl InMemoryTransferRepository {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits: Mutex::new(limits),
            sequences: Mutex::new(HashMap::new()),
            transactions: Mutex::new(Vec::new()),
            sequence_override: Mutex::new(None),
            missing_limits: AtomicBool::new(false),
            failing_inserts: AtomicUsize::new(0),
            limit_calls: AtomicUsize::new(0),
            insert_sequence_calls: AtomicUsize::new(0),
            insert_transaction_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_limits(&self, limits: Limits) {
        *self.limits.lock().unwrap() = limits;
    }

    pub fn sequence_status(&self, sequence_number: &str) -> Option<SequenceStatus> {
        self.sequences
            .lock()
            .unwrap()
            .get(sequence_number)
            .and_then(|s| s.status())
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }

    pub fn transaction(&self, sequence_number: &str) -> Option<TransactionModel> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.sequence_number == sequence_number)
            .cloned()
    }

    fn move_status(&self, sequence_number: &str, from: SequenceStatus, to: SequenceStatus) -> bool {
        let mut sequences = self.sequences.lock().unwrap();
        match sequences.get_mut(sequence_number) {
            Some(seq) if seq.status() == Some(from) => {
                seq.status = to.as_str().to_string();
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl TransferQueryRepositoryTrait for InMemoryTransferRepository {
    async fn get_transaction_limit(&self) -> Result<Limits, RepositoryError> {
        self.limit_calls.fetch_add(1, Ordering::SeqCst);
        if self.missing_limits.load(Ordering::SeqCst) {
            return Err(RepositoryError::from(sqlx::Error::RowNotFound));
        }
        Ok(*self.limits.lock().unwrap())
    }

    async fn get_sequence(&self, sequence_number: &str) -> Result<SequenceModel, RepositoryError> {
        if let Some(seq) = self.sequence_override.lock().unwrap().clone() {
            return Ok(seq);
        }

        self.sequences
            .lock()
            .unwrap()
            .get(sequence_number)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_transaction_by_sequence(
        &self,
        sequence_number: &str,
    ) -> Result<TransactionModel, RepositoryError> {
        self.transaction(sequence_number)
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl TransferCommandRepositoryTrait for InMemoryTransferRepository {
    async fn insert_sequence(&self, seq: &SequenceModel) -> Result<SequenceModel, RepositoryError> {
        self.insert_sequence_calls.fetch_add(1, Ordering::SeqCst);

        let mut sequences = self.sequences.lock().unwrap();
        if sequences.contains_key(&seq.sequence_number) {
            return Err(RepositoryError::Conflict(format!(
                "sequence {} exists",
                seq.sequence_number
            )));
        }
        sequences.insert(seq.sequence_number.clone(), seq.clone());
        Ok(seq.clone())
    }

    async fn claim_sequence(&self, sequence_number: &str) -> Result<bool, RepositoryError> {
        Ok(self.move_status(
            sequence_number,
            SequenceStatus::Reserved,
            SequenceStatus::Processing,
        ))
    }

    async fn release_sequence(&self, sequence_number: &str) -> Result<(), RepositoryError> {
        self.move_status(
            sequence_number,
            SequenceStatus::Processing,
            SequenceStatus::Reserved,
        );
        Ok(())
    }

    async fn insert_transaction(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        self.insert_transaction_calls.fetch_add(1, Ordering::SeqCst);

        let failing = self.failing_inserts.load(Ordering::SeqCst);
        if failing > 0 {
            self.failing_inserts.store(failing - 1, Ordering::SeqCst);
            return Err(RepositoryError::Custom("database unavailable".to_string()));
        }

        let mut transactions = self.transactions.lock().unwrap();

        if let Some(existing) = transactions
            .iter()
            .find(|t| t.transaction_reference == req.transaction_reference)
        {
            return Ok(existing.clone());
        }

        if transactions
            .iter()
            .any(|t| t.sequence_number == req.sequence_number)
        {
            return Err(RepositoryError::Conflict(format!(
                "sequence {} already recorded under another reference",
                req.sequence_number
            )));
        }

        let stored = TransactionModel {
            transaction_id: transactions.len() as i32 + 1,
            sequence_number: req.sequence_number.clone(),
            sequence_journal: req.sequence_journal.clone(),
            transaction_reference: req.transaction_reference.clone(),
            source_account: req.source_account.clone(),
            destination: req.destination.clone(),
            amount: req.amount,
            fee: req.fee.clone(),
            remarks: req.remarks.clone(),
            status: req.status.clone(),
            destination_name: req.destination_name.clone(),
            user_id: req.user_id,
            created_at: None,
        };
        transactions.push(stored.clone());

        if let Some(seq) = self.sequences.lock().unwrap().get_mut(&req.sequence_number) {
            seq.status = SequenceStatus::Consumed.as_str().to_string();
        }

        Ok(stored)
    }
}

#[derive(Default)]
pub struct MockMailer {
    pub sent: Mutex<Vec<SendReceiptRequest>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl ReceiptMailerTrait for MockMailer {
    async fn send_receipt(&self, req: &SendReceiptRequest) -> Result<(), NotificationError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotificationError::Rejected {
                status: 503,
                body: "mail relay down".to_string(),
            });
        }
        self.sent.lock().unwrap().push(req.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockNotifier {
    pub sent: Mutex<Vec<PushNotificationRequest>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn notify(&self, req: &PushNotificationRequest) -> Result<(), NotificationError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotificationError::Rejected {
                status: 502,
                body: "push gateway down".to_string(),
            });
        }
        self.sent.lock().unwrap().push(req.clone());
        Ok(())
    }
}

pub struct Harness {
    pub core: Arc<MockCoreBanking>,
    pub repo: Arc<InMemoryTransferRepository>,
    pub generator: Arc<MockSequenceGenerator>,
    pub mailer: Arc<MockMailer>,
    pub notifier: Arc<MockNotifier>,
    pub service: Arc<TransferCommandService>,
    pub reconciliation_rx: mpsc::Receiver<CreateTransactionRequest>,
}

impl Harness {
    /// Core banking open, both accounts active, limits `{1, 50_000_000,
    /// 200_000_000}` and the generator handing out `"123456"` first.
    pub fn new() -> Self {
        let core = Arc::new(MockCoreBanking::new());
        let repo = Arc::new(InMemoryTransferRepository::new(limits(
            1,
            50_000_000,
            200_000_000,
        )));
        let generator = Arc::new(MockSequenceGenerator::new(&["123456"]));
        let mailer = Arc::new(MockMailer::default());
        let notifier = Arc::new(MockNotifier::default());
        let (reconciliation, reconciliation_rx) = ReconciliationQueue::channel(16);

        let service = Arc::new(TransferCommandService::new(TransferCommandServiceDeps {
            core_banking: core.clone(),
            sequence_generator: generator.clone(),
            query: repo.clone(),
            command: repo.clone(),
            mailer: mailer.clone(),
            notifier: Some(notifier.clone() as DynNotifier),
            reconciliation,
        }));

        Self {
            core,
            repo,
            generator,
            mailer,
            notifier,
            service,
            reconciliation_rx,
        }
    }
}
