//! Identity of the person sending a message

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: i64,
    pub username: Option<String>,
}

impl Caller {
    pub fn new(id: i64, username: Option<String>) -> Self {
        Self { id, username }
    }

    /// Name recorded in the history log: the username, or the numeric id when there is none
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(username) if !username.is_empty() => username.clone(),
            _ => self.id.to_string(),
        }
    }
}
