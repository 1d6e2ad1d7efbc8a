use prometheus_client::{
    encoding::text::encode,
    metrics::{counter::Counter, family::Family},
    registry::Registry,
};
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use shared::errors::ServiceError;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Operation {
    Inquiry,
    Payment,
    Lookup,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Outcome {
    Success,
    /// Money moved but a follow-up step (recording, receipt, push) did not complete.
    Committed,
    Rejected,
    Unavailable,
    Failed,
}

impl Outcome {
    pub fn of<T>(result: &Result<T, ServiceError>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(e) if e.ledger_committed() => Outcome::Committed,
            Err(ServiceError::EodInProgress) => Outcome::Unavailable,
            Err(e) if e.is_retryable() => Outcome::Failed,
            Err(ServiceError::Internal(_)) => Outcome::Failed,
            Err(_) => Outcome::Rejected,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub operation: Operation,
    pub outcome: Outcome,
}

#[derive(Debug)]
pub struct Metrics {
    registry: Registry,
    requests: Family<RequestLabels, Counter>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let mut registry = Registry::default();
        let requests = Family::<RequestLabels, Counter>::default();

        registry.register(
            "transfer_requests",
            "Transfer operations by outcome",
            requests.clone(),
        );

        Self { registry, requests }
    }

    pub fn observe<T>(&self, operation: Operation, result: &Result<T, ServiceError>) {
        self.requests
            .get_or_create(&RequestLabels {
                operation,
                outcome: Outcome::of(result),
            })
            .inc();
    }

    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use shared::errors::RepositoryError;

    #[rstest]
    #[case::eod(ServiceError::EodInProgress, Outcome::Unavailable)]
    #[case::unauthenticated(ServiceError::Unauthenticated, Outcome::Rejected)]
    #[case::repo(ServiceError::Repo(RepositoryError::NotFound), Outcome::Failed)]
    #[case::ledger_task_died(ServiceError::Internal("join".into()), Outcome::Failed)]
    #[case::lookup_miss(ServiceError::TransactionNotFound("123456".into()), Outcome::Rejected)]
    #[case::unrecorded(
        ServiceError::LedgerCommittedUnrecorded {
            transaction_reference: "222222".into(),
            source: RepositoryError::Custom("down".into()),
        },
        Outcome::Committed
    )]
    fn test_outcome_of_error(#[case] error: ServiceError, #[case] expected: Outcome) {
        assert_eq!(Outcome::of::<()>(&Err(error)), expected);
    }

    #[test]
    fn test_render_counts_requests() {
        let metrics = Metrics::new();
        metrics.observe(Operation::Inquiry, &Ok::<(), ServiceError>(()));
        metrics.observe(Operation::Inquiry, &Ok::<(), ServiceError>(()));

        let text = metrics.render().unwrap();
        assert!(text.contains("transfer_requests_total"));
        assert!(text.contains(r#"operation="Inquiry",outcome="Success"} 2"#));
    }
}
