use tokio::sync::RwLock;

use super::repo_types::Profile;

/// Holds the one profile the service knows about.
pub struct ProfileStore {
    profile: RwLock<Profile>,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }

    pub async fn get(&self) -> Profile {
        self.profile.read().await.clone()
    }

    /// Runs `f` on a copy of the profile and stores the copy only if `f` succeeds.
    pub async fn update<E>(
        &self,
        f: impl FnOnce(&mut Profile) -> Result<(), E>,
    ) -> Result<Profile, E> {
        let mut guard = self.profile.write().await;
        let mut next = guard.clone();
        f(&mut next)?;
        *guard = next.clone();
        Ok(next)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
