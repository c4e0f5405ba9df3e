use crate::models::{
    Category, Crate, CrateOwnership, Dependency, Keyword, Team, User, Version, VersionDownload,
};

use super::{CrateBuilder, DependencyBuilder, VersionBuilder};

/// All fixture collections, in insertion order.
///
/// The store is scoped to one test or server session: construct it fresh,
/// seed it, drop it. There is no global registry.
#[derive(Debug, Default)]
pub struct FixtureStore {
    pub(super) crates: Vec<Crate>,
    pub(super) versions: Vec<Version>,
    pub(super) dependencies: Vec<Dependency>,
    pub(super) version_downloads: Vec<VersionDownload>,
    pub(super) users: Vec<User>,
    pub(super) teams: Vec<Team>,
    pub(super) ownerships: Vec<CrateOwnership>,
    pub(super) categories: Vec<Category>,
    pub(super) keywords: Vec<Keyword>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    // full collections, insertion order

    pub fn crates(&self) -> &[Crate] {
        &self.crates
    }

    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn version_downloads(&self) -> &[VersionDownload] {
        &self.version_downloads
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn ownerships(&self) -> &[CrateOwnership] {
        &self.ownerships
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    // id lookups
    //
    // Re-fetching a record through these after a mutation is the "reload"
    // operation: the returned reference always reflects current state.

    pub fn krate(&self, id: i32) -> Option<&Crate> {
        self.crates.iter().find(|k| k.id == id)
    }

    pub fn crate_by_name(&self, name: &str) -> Option<&Crate> {
        self.crates.iter().find(|k| k.name == name)
    }

    pub fn version(&self, id: i32) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == id)
    }

    pub fn user(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn team(&self, id: i32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn category(&self, id: i32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn keyword(&self, id: i32) -> Option<&Keyword> {
        self.keywords.iter().find(|k| k.id == id)
    }

    // relations

    pub fn versions_of(&self, crate_id: i32) -> Vec<&Version> {
        self.versions
            .iter()
            .filter(|v| v.crate_id == crate_id)
            .collect()
    }

    pub fn version_by_num(&self, crate_id: i32, num: &str) -> Option<&Version> {
        self.versions
            .iter()
            .find(|v| v.crate_id == crate_id && v.num == num)
    }

    pub fn dependencies_of(&self, version_id: i32) -> Vec<&Dependency> {
        self.dependencies
            .iter()
            .filter(|d| d.version_id == version_id)
            .collect()
    }

    /// Dependencies declared (by versions of other crates) on the named
    /// crate, in insertion order.
    pub fn reverse_dependencies(&self, crate_name: &str) -> Vec<&Dependency> {
        self.dependencies
            .iter()
            .filter(|d| d.crate_name == crate_name)
            .collect()
    }

    pub fn downloads_of_version(&self, version_id: i32) -> Vec<&VersionDownload> {
        self.version_downloads
            .iter()
            .filter(|d| d.version_id == version_id)
            .collect()
    }

    /// Union of download rows across all of the crate's versions, in
    /// insertion order of the download records themselves.
    pub fn downloads_of_crate(&self, crate_id: i32) -> Vec<&VersionDownload> {
        self.version_downloads
            .iter()
            .filter(|d| {
                self.version(d.version_id)
                    .is_some_and(|v| v.crate_id == crate_id)
            })
            .collect()
    }

    pub fn owners(&self, crate_id: i32) -> Vec<&CrateOwnership> {
        self.ownerships
            .iter()
            .filter(|o| o.crate_id == crate_id)
            .collect()
    }

    /// Number of crates linked to the given category.
    pub fn category_crates_cnt(&self, category_id: i32) -> i32 {
        self.crates
            .iter()
            .filter(|k| k.category_ids.contains(&category_id))
            .count() as i32
    }

    /// Number of crates linked to the given keyword.
    pub fn keyword_crates_cnt(&self, keyword_id: i32) -> i32 {
        self.crates
            .iter()
            .filter(|k| k.keyword_ids.contains(&keyword_id))
            .count() as i32
    }

    // mutation: the follow toggle is the only write the API exposes

    /// Adds the crate to the user's follow set. Idempotent.
    pub fn follow(&mut self, user_id: i32, crate_id: i32) {
        let user = self.user_mut(user_id);
        if !user.followed_crate_ids.contains(&crate_id) {
            user.followed_crate_ids.push(crate_id);
        }
    }

    /// Removes the crate from the user's follow set. Idempotent.
    pub fn unfollow(&mut self, user_id: i32, crate_id: i32) {
        let user = self.user_mut(user_id);
        user.followed_crate_ids.retain(|id| *id != crate_id);
    }

    fn user_mut(&mut self, id: i32) -> &mut User {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .unwrap_or_else(|| panic!("no fixture user with id {id}"))
    }

    // ownership creation

    pub fn add_user_owner(&mut self, krate: &Crate, user: &User) -> CrateOwnership {
        self.add_owner(krate.id, Some(user.id), None)
    }

    pub fn add_team_owner(&mut self, krate: &Crate, team: &Team) -> CrateOwnership {
        self.add_owner(krate.id, None, Some(team.id))
    }

    fn add_owner(
        &mut self,
        crate_id: i32,
        user_id: Option<i32>,
        team_id: Option<i32>,
    ) -> CrateOwnership {
        let ownership = CrateOwnership {
            id: self.ownerships.len() as i32 + 1,
            crate_id,
            user_id,
            team_id,
        };
        self.ownerships.push(ownership.clone());
        ownership
    }

    // batch creation with a per-index builder factory

    pub fn create_crates(
        &mut self,
        count: usize,
        mut f: impl FnMut(usize) -> CrateBuilder,
    ) -> Vec<Crate> {
        (0..count).map(|i| f(i).build(self)).collect()
    }

    pub fn create_versions(
        &mut self,
        count: usize,
        mut f: impl FnMut(usize) -> VersionBuilder,
    ) -> Vec<Version> {
        (0..count).map(|i| f(i).build(self)).collect()
    }

    pub fn create_dependencies(
        &mut self,
        count: usize,
        mut f: impl FnMut(usize) -> DependencyBuilder,
    ) -> Vec<Dependency> {
        (0..count).map(|i| f(i).build(self)).collect()
    }
}
