use crate::models::{Crate, Team, User};
use crate::util::dasherize;

use super::{DEFAULT_AVATAR, FixtureStore};

/// Builder for user records. The login defaults to the dasherized display
/// name (`John Doe` → `john-doe`) and the profile URL is derived from it.
#[derive(Debug, Default)]
pub struct UserBuilder {
    login: Option<String>,
    name: Option<String>,
    avatar: Option<String>,
    url: Option<String>,
    followed_crate_ids: Vec<i32>,
}

impl UserBuilder {
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn followed_crate(mut self, krate: &Crate) -> Self {
        self.followed_crate_ids.push(krate.id);
        self
    }

    pub fn build(self, store: &mut FixtureStore) -> User {
        let id = store.users.len() as i32 + 1;
        let name = self.name.unwrap_or_else(|| format!("User {id}"));
        let login = self.login.unwrap_or_else(|| dasherize(&name));
        let url = self
            .url
            .unwrap_or_else(|| format!("https://github.com/{login}"));

        let user = User {
            id,
            login,
            name,
            avatar: self.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            url,
            followed_crate_ids: self.followed_crate_ids,
        };
        store.users.push(user.clone());
        user
    }
}

/// Builder for team records. Logins are namespaced GitHub-style:
/// `github:rust-lang:{name}`.
#[derive(Debug, Default)]
pub struct TeamBuilder {
    login: Option<String>,
    name: Option<String>,
    avatar: Option<String>,
    url: Option<String>,
}

impl TeamBuilder {
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn build(self, store: &mut FixtureStore) -> Team {
        let id = store.teams.len() as i32 + 1;
        let name = self.name.unwrap_or_else(|| format!("team-{id}"));
        let login = self
            .login
            .unwrap_or_else(|| format!("github:rust-lang:{name}"));

        let team = Team {
            id,
            login,
            name,
            avatar: self.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            url: self
                .url
                .unwrap_or_else(|| "https://github.com/rust-lang".to_string()),
        };
        store.teams.push(team.clone());
        team
    }
}
