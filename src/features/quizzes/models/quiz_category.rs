/// Which questions a quiz round may draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    AllCategories,
    SpecificCategory(i32),
}

impl QuizCategory {
    /// Category filter for a store query; `None` means every category
    pub fn category_id(self) -> Option<i32> {
        match self {
            QuizCategory::AllCategories => None,
            QuizCategory::SpecificCategory(id) => Some(id),
        }
    }
}
