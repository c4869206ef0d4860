use std::fmt;
use std::fmt::{Display, Formatter};

/// Display category of an indicator tag. Purely presentational: it selects the
/// tag colour and carries no business meaning.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Category {
    Blue,
    GeekBlue,
    Purple,
    Cyan,
    Magenta,
    Red,
    Orange,
    Lime
}

/// Category given to indicator keys the catalog has never heard of.
pub const DEFAULT_CATEGORY: Category = Category::Red;

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Blue => "blue",
            Category::GeekBlue => "geekblue",
            Category::Purple => "purple",
            Category::Cyan => "cyan",
            Category::Magenta => "magenta",
            Category::Red => "red",
            Category::Orange => "orange",
            Category::Lime => "lime"
        }
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
