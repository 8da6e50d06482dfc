// Which of the two box offices a remote call was made against

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    Source,
    Target,
}

impl Account {
    pub fn as_str(&self) -> &'static str {
        match self {
            Account::Source => "source",
            Account::Target => "target",
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
