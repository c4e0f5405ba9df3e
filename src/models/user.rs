/// A registered user. The follow set is the only mutable piece of state in
/// the whole store and is independent of crate ownership.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub name: String,
    pub avatar: String,
    pub url: String,
    pub followed_crate_ids: Vec<i32>,
}

impl User {
    pub fn is_following(&self, crate_id: i32) -> bool {
        self.followed_crate_ids.contains(&crate_id)
    }
}
