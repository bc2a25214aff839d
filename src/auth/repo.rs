use tokio::sync::RwLock;

use super::repo_types::Account;

/// In-memory account list, keyed by normalized email.
#[derive(Default)]
pub struct AccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|a| a.email == email)
            .cloned()
    }

    /// Inserts unless the email is taken; returns `None` on conflict.
    pub async fn insert(&self, account: Account) -> Option<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email == account.email) {
            return None;
        }
        accounts.push(account.clone());
        Some(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn account(email: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            name: "John".into(),
            email: email.into(),
            password_hash: "x".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_refused() {
        let store = AccountStore::new();
        assert!(store.insert(account("john@example.com")).await.is_some());
        assert!(store.insert(account("john@example.com")).await.is_none());
        assert!(store.find_by_email("john@example.com").await.is_some());
        assert!(store.find_by_email("jane@example.com").await.is_none());
    }
}
