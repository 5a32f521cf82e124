use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in an entity's persistence lifecycle at which listeners run.
///
/// "Pre" stages run before the datastore operation (and before field
/// serialization); "post" stages run after it. `PostLoad` runs after an
/// entity has been read back and its fields deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    PreInsert,
    PreUpdate,
    PreUpsert,
    PreDelete,
    PostInsert,
    PostUpdate,
    PostUpsert,
    PostDelete,
    PostLoad,
}

impl LifecycleStage {
    /// The stage name as it appears in logs and audit markers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PreInsert => "PreInsert",
            Self::PreUpdate => "PreUpdate",
            Self::PreUpsert => "PreUpsert",
            Self::PreDelete => "PreDelete",
            Self::PostInsert => "PostInsert",
            Self::PostUpdate => "PostUpdate",
            Self::PostUpsert => "PostUpsert",
            Self::PostDelete => "PostDelete",
            Self::PostLoad => "PostLoad",
        }
    }

    /// Returns true for stages that run before the datastore operation.
    #[must_use]
    pub const fn is_pre(&self) -> bool {
        matches!(
            self,
            Self::PreInsert | Self::PreUpdate | Self::PreUpsert | Self::PreDelete
        )
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
