//! Защита от гонки повторных загрузок списка.
//!
//! Каждая загрузка получает номер (`FetchTicket`). Ответ принимается,
//! только если его номер последний выданный; более ранние ответы отбрасываются.

use contracts::shared::ServiceResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// Ответ на последнюю загрузку: заменяет снимок
    Fresh(T),
    /// Ошибка последней загрузки: снимок не меняется
    Failed(String),
    /// Ответ на устаревшую загрузку (успех или ошибка)
    Stale,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchGuard {
    issued: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выдать номер новой загрузке
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    pub fn resolve<T>(&self, ticket: FetchTicket, response: ServiceResponse<T>) -> FetchOutcome<T> {
        if !self.is_current(ticket) {
            return FetchOutcome::Stale;
        }
        match response.into_result() {
            Ok(data) => FetchOutcome::Fresh(data),
            Err(message) => FetchOutcome::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fetch_is_fresh() {
        let mut guard = FetchGuard::new();
        let ticket = guard.begin();
        assert_eq!(
            guard.resolve(ticket, ServiceResponse::ok(vec![1])),
            FetchOutcome::Fresh(vec![1])
        );
    }

    #[test]
    fn test_earlier_fetch_resolving_last_is_discarded() {
        let mut guard = FetchGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        assert_eq!(
            guard.resolve(second, ServiceResponse::ok(vec![2])),
            FetchOutcome::Fresh(vec![2])
        );
        assert_eq!(
            guard.resolve(first, ServiceResponse::ok(vec![1])),
            FetchOutcome::Stale
        );
    }

    #[test]
    fn test_error_is_reported_only_for_current_ticket() {
        let mut guard = FetchGuard::new();
        let first = guard.begin();
        assert_eq!(
            guard.resolve::<Vec<i64>>(first, ServiceResponse::failure("Network unreachable")),
            FetchOutcome::Failed("Network unreachable".to_string())
        );

        let _second = guard.begin();
        assert_eq!(
            guard.resolve::<Vec<i64>>(first, ServiceResponse::failure("late")),
            FetchOutcome::Stale
        );
    }
}
