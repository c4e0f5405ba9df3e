#[derive(Debug, Clone)]
pub struct Keyword {
    pub id: i32,
    pub keyword: String,
}
