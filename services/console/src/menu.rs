/// Entries of the main menu, selected by their digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Add,
    View,
    Use,
    Search,
    Exit,
}

impl MenuChoice {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Use),
            "4" => Some(Self::Search),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub(crate) const CHOICE_PROMPT: &str = "Choose an option (1-5): ";
pub(crate) const CHOICE_HINT: &str = "Please choose 1–5.";

pub(crate) fn render(heading: &str) -> String {
    format!(
        "\n{heading}\n\
         1) Add new ingredient\n\
         2) View all ingredients\n\
         3) Use ingredient (update quantity)\n\
         4) Search ingredient\n\
         5) Exit\n"
    )
}
