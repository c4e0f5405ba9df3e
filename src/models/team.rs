/// A team owner, with a namespaced login such as `github:rust-lang:core`.
#[derive(Debug, Clone)]
pub struct Team {
    pub id: i32,
    pub login: String,
    pub name: String,
    pub avatar: String,
    pub url: String,
}
