use crate::mvu::Model;

/// Model for the counter screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterModel {
    pub count: i64,
    pub label: String,
}

impl CounterModel {
    pub fn new(initial_count: i64) -> Self {
        Self {
            count: initial_count,
            label: String::from("Type Something :)"),
        }
    }

    /// Text line derived from the click count.
    pub fn click_line(&self) -> String {
        format!("You clicked {} times", self.count)
    }

    pub fn reached_milestone(&self) -> bool {
        self.count == 20
    }

    /// Milestone text swapped in once the count hits 20.
    pub fn milestone_line(&self) -> &'static str {
        if self.reached_milestone() {
            "You have reached 20!"
        } else {
            "Not reached 20 yet!"
        }
    }
}

impl Default for CounterModel {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Model for CounterModel {}
