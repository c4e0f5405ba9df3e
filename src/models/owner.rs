/// A maintainer relation between a crate and either a user or a team.
/// Exactly one of `user_id` / `team_id` is set; the fixture builder
/// enforces this at creation.
#[derive(Debug, Clone)]
pub struct CrateOwnership {
    pub id: i32,
    pub crate_id: i32,
    pub user_id: Option<i32>,
    pub team_id: Option<i32>,
}
