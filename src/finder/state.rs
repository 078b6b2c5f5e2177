use crate::mvu::Model;

/// Model for the finder screen.
///
/// `input` mirrors what is currently typed; `name` is the last value the
/// search actually ran on. Count shortcuts also route through `name`, so it
/// doubles as the last-action label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinderModel {
    pub count: i64,
    pub input: String,
    pub name: String,
    pub name_found: bool,
    /// Name the lookup matches against, case-insensitive.
    pub target: String,
}

impl FinderModel {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            count: 0,
            input: String::new(),
            name: String::new(),
            name_found: false,
            target: target.into(),
        }
    }

    pub fn click_line(&self) -> String {
        format!("You clicked {} times", self.count)
    }

    pub fn action_line(&self) -> String {
        format!("Action Performed: {}", self.name)
    }
}

impl Default for FinderModel {
    fn default() -> Self {
        Self::new("peter")
    }
}

impl Model for FinderModel {}
